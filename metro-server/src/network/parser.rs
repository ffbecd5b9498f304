//! Network description parser.
//!
//! The description is line oriented:
//!
//! ```text
//! V <id> <name> ;<line> ;<True|False> <branches>
//! E <id1> <id2> <seconds>
//! ```
//!
//! Parsing is lenient. A line that does not fit its record pattern is
//! skipped and reported, and the rest of the file still loads.

use tracing::{debug, warn};

use crate::domain::{DomainError, LineId, Station, StationId};

use super::graph::{Network, NetworkBuilder};

/// Why a line of the description was skipped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseIssue {
    /// Vertex record does not match its pattern
    #[error("malformed vertex record: {0}")]
    MalformedVertex(&'static str),

    /// Edge record does not have four fields
    #[error("malformed edge record: expected 4 fields, found {0}")]
    EdgeFieldCount(usize),

    /// A field failed validation
    #[error("invalid field: {0}")]
    InvalidField(#[from] DomainError),

    /// Edge names a station that was not declared before it
    #[error("edge references undeclared station {0}")]
    UndeclaredStation(StationId),
}

/// A skipped line and the reason it was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number
    pub line_no: usize,
    pub issue: ParseIssue,
}

/// Summary of a parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Vertex records accepted (including re-declarations)
    pub vertex_records: usize,
    /// Edge records accepted
    pub edge_records: usize,
    /// Lines that were skipped, in file order
    pub skipped: Vec<SkippedLine>,
}

/// A parsed record.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Record {
    Vertex(Station),
    Edge(StationId, StationId, u32),
}

/// Parse a network description.
///
/// Never fails: malformed lines are logged at `warn` and collected in the
/// returned [`ParseReport`].
pub fn parse_network(input: &str) -> (Network, ParseReport) {
    let mut builder = NetworkBuilder::new();
    let mut report = ParseReport::default();

    for (i, raw) in input.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.trim();

        let parsed = if line.starts_with('V') {
            parse_vertex(line).map(Record::Vertex)
        } else if line.starts_with('E') {
            parse_edge(line).map(|(a, b, w)| Record::Edge(a, b, w))
        } else {
            continue;
        };

        let outcome = parsed.and_then(|record| match record {
            Record::Vertex(station) => {
                builder.add_station(station);
                report.vertex_records += 1;
                Ok(())
            }
            Record::Edge(a, b, weight) => {
                if builder.add_edge(a, b, weight) {
                    report.edge_records += 1;
                    Ok(())
                } else {
                    let missing = if builder.contains(a) { b } else { a };
                    Err(ParseIssue::UndeclaredStation(missing))
                }
            }
        });

        if let Err(issue) = outcome {
            warn!(line = line_no, error = %issue, "skipping network line");
            report.skipped.push(SkippedLine { line_no, issue });
        }
    }

    let network = builder.build();
    debug!(
        stations = network.station_count(),
        edges = network.edge_count(),
        skipped = report.skipped.len(),
        "parsed network"
    );
    (network, report)
}

/// Parse `V <id> <name> ;<line> ;<True|False> <branches>`.
///
/// The name may itself contain `" ;"`, so the record tail is matched from
/// the right: the last `" ;"` that starts a valid tail ends the name.
/// Anything after the branch count is ignored.
fn parse_vertex(line: &str) -> Result<Station, ParseIssue> {
    let rest = line
        .strip_prefix("V ")
        .ok_or(ParseIssue::MalformedVertex("missing 'V ' prefix"))?;
    let (id_str, rest) = rest
        .split_once(' ')
        .ok_or(ParseIssue::MalformedVertex("missing name"))?;
    let id = StationId::parse(id_str)?;

    let (name, tail) = rest
        .rmatch_indices(" ;")
        .filter(|(pos, _)| *pos > 0)
        .find_map(|(pos, _)| {
            parse_vertex_tail(&rest[pos + 2..]).map(|tail| (&rest[..pos], tail))
        })
        .ok_or(ParseIssue::MalformedVertex(
            "expected ' ;<line> ;<True|False> <branches>' after the name",
        ))?;

    let (line_token, terminus, branches_str) = tail;
    let line_id = LineId::parse(line_token)?;
    let branches = branches_str
        .parse::<u32>()
        .map_err(|_| ParseIssue::MalformedVertex("branch count out of range"))?;

    Ok(Station {
        id,
        name: name.replace(" - ", ", "),
        line: line_id,
        terminus,
        branches,
    })
}

/// Match `<line> ;<True|False>\s*<digits>` at the start of `s`.
fn parse_vertex_tail(s: &str) -> Option<(&str, bool, &str)> {
    let word_end = s
        .find(|c: char| !(c.is_alphanumeric() || c == '_'))
        .unwrap_or(s.len());
    if word_end == 0 {
        return None;
    }
    let line_token = &s[..word_end];
    let s = s[word_end..].strip_prefix(" ;")?;

    let (terminus, s) = if let Some(r) = s.strip_prefix("True") {
        (true, r)
    } else if let Some(r) = s.strip_prefix("False") {
        (false, r)
    } else {
        return None;
    };

    let s = s.trim_start();
    let digits_end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    if digits_end == 0 {
        return None;
    }
    Some((line_token, terminus, &s[..digits_end]))
}

/// Parse `E <id1> <id2> <seconds>`, fields separated by single spaces.
fn parse_edge(line: &str) -> Result<(StationId, StationId, u32), ParseIssue> {
    let parts: Vec<&str> = line.split(' ').collect();
    if parts.len() != 4 || parts[0] != "E" {
        return Err(ParseIssue::EdgeFieldCount(parts.len()));
    }
    let a = StationId::parse(parts[1])?;
    let b = StationId::parse(parts[2])?;
    let weight = parts[3]
        .parse::<u32>()
        .ok()
        .filter(|w| *w > 0)
        .ok_or_else(|| DomainError::InvalidWeight(parts[3].to_string()))?;
    Ok((a, b, weight))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u32) -> StationId {
        StationId::new(n)
    }

    const SAMPLE: &str = "\
V 0000 Abbesses ;12 ;False 0
V 0001 Alexandre Dumas ;2 ;False 0
V 0002 Alma - Marceau ;9 ;False 0
V 0003 Anatole France ;3 ;False 0
V 0003 Anatole France ;3bis ;True 1

E 0 1 120
E 1 2 45
E 2 3 60
";

    #[test]
    fn parses_sample() {
        let (net, report) = parse_network(SAMPLE);

        assert_eq!(net.station_count(), 4);
        assert_eq!(net.edge_count(), 3);
        assert_eq!(report.vertex_records, 5);
        assert_eq!(report.edge_records, 3);
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn normalises_name_separator() {
        let (net, _) = parse_network(SAMPLE);
        assert_eq!(net.name_of(id(2)), Some("Alma, Marceau"));
        assert_eq!(net.find_by_name("alma, marceau"), Some(id(2)));
    }

    #[test]
    fn redeclared_vertex_accumulates_lines() {
        let (net, _) = parse_network(SAMPLE);
        let station = net.station(id(3)).unwrap();

        assert!(station.terminus);
        assert_eq!(station.branches, 1);
        assert_eq!(station.line.as_str(), "3bis");
        let lines: Vec<_> = net.lines_of(id(3)).iter().map(|l| l.as_str()).collect();
        assert_eq!(lines, vec!["3", "3bis"]);
    }

    #[test]
    fn vertex_fields() {
        let station = parse_vertex("V 12 Porte de Clignancourt ;4 ;True 2").unwrap();
        assert_eq!(station.id, id(12));
        assert_eq!(station.name, "Porte de Clignancourt");
        assert_eq!(station.line.as_str(), "4");
        assert!(station.terminus);
        assert_eq!(station.branches, 2);
    }

    #[test]
    fn vertex_without_space_before_branches() {
        let station = parse_vertex("V 5 Bastille ;1 ;False0").unwrap();
        assert_eq!(station.branches, 0);
        assert!(!station.terminus);
    }

    #[test]
    fn vertex_name_may_contain_separator() {
        let station = parse_vertex("V 7 Odd ;Name ;1 ;False 0").unwrap();
        assert_eq!(station.name, "Odd ;Name");
        assert_eq!(station.line.as_str(), "1");
    }

    #[test]
    fn vertex_trailing_text_is_ignored() {
        let station = parse_vertex("V 8 Nation ;6 ;True 3 extra").unwrap();
        assert_eq!(station.branches, 3);
    }

    #[test]
    fn malformed_vertices() {
        assert!(parse_vertex("V x Nation ;6 ;True 3").is_err());
        assert!(parse_vertex("V 8 Nation ;6 ;Maybe 3").is_err());
        assert!(parse_vertex("V 8 Nation ;6 ;True").is_err());
        assert!(parse_vertex("V 8 Nation 6 True 3").is_err());
        assert!(parse_vertex("V 8 ;6 ;True 3").is_err());
        assert!(parse_vertex("V8 Nation ;6 ;True 3").is_err());
    }

    #[test]
    fn edge_fields() {
        assert_eq!(parse_edge("E 0003 12 90").unwrap(), (id(3), id(12), 90));
    }

    #[test]
    fn malformed_edges() {
        assert_eq!(
            parse_edge("E 1 2").unwrap_err(),
            ParseIssue::EdgeFieldCount(3)
        );
        assert_eq!(
            parse_edge("E 1  2 3").unwrap_err(),
            ParseIssue::EdgeFieldCount(5)
        );
        assert!(parse_edge("E 1 2 x").is_err());
        assert!(parse_edge("E 1 2 0").is_err());
        assert!(parse_edge("E 1 2 -4").is_err());
        assert!(parse_edge("E a 2 4").is_err());
    }

    #[test]
    fn skips_bad_lines_and_keeps_going() {
        let input = "\
V 1 A ;1 ;False 0
V oops
V 2 B ;1 ;False 0
E 1 2
E 1 2 60
E 1 9 60
# comment
";
        let (net, report) = parse_network(input);

        assert_eq!(net.station_count(), 2);
        assert_eq!(net.edge_count(), 1);
        let skipped: Vec<_> = report.skipped.iter().map(|s| s.line_no).collect();
        assert_eq!(skipped, vec![2, 4, 6]);
        assert_eq!(
            report.skipped[2].issue,
            ParseIssue::UndeclaredStation(id(9))
        );
    }

    #[test]
    fn edge_before_vertex_is_dropped() {
        let input = "E 1 2 60\nV 1 A ;1 ;False 0\nV 2 B ;1 ;False 0\n";
        let (net, report) = parse_network(input);
        assert_eq!(net.edge_count(), 0);
        assert_eq!(report.skipped.len(), 1);
    }

    #[test]
    fn empty_input() {
        let (net, report) = parse_network("");
        assert!(net.is_empty());
        assert_eq!(report, ParseReport::default());
    }
}
