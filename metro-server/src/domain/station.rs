//! Station and line identifier types.

use std::fmt;

use super::DomainError;

/// Numeric identifier of a station in the network description.
///
/// Identifiers are non-negative integers. Leading zeros are not significant,
/// so `"007"` and `"7"` name the same station.
///
/// # Examples
///
/// ```
/// use metro_server::domain::StationId;
///
/// let id = StationId::parse("007").unwrap();
/// assert_eq!(id, StationId::parse("7").unwrap());
/// assert_eq!(id.to_string(), "7");
///
/// assert!(StationId::parse("-1").is_err());
/// assert!(StationId::parse("abc").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(u32);

impl StationId {
    /// Create an identifier from its numeric value.
    pub fn new(value: u32) -> Self {
        StationId(value)
    }

    /// Parse an identifier from its textual form.
    ///
    /// The input must be a non-empty run of ASCII digits that fits in a `u32`.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidStationId(s.to_string()));
        }
        s.parse::<u32>()
            .map(StationId)
            .map_err(|_| DomainError::InvalidStationId(s.to_string()))
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a transit line (e.g. `1`, `7bis`, `A`).
///
/// Line identifiers are non-empty tokens of letters, digits and underscores.
/// Ordering is lexicographic on the token, which is what itinerary building
/// uses to break ties between lines.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(String);

impl LineId {
    /// Parse a line identifier.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        if s.is_empty() || !s.chars().all(|c| c.is_alphanumeric() || c == '_') {
            return Err(DomainError::InvalidLineId(s.to_string()));
        }
        Ok(LineId(s.to_string()))
    }

    /// Returns the line identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A station as declared by the most recent vertex record for its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    /// Station identifier
    pub id: StationId,
    /// Display name, with `" - "` already normalised to `", "`
    pub name: String,
    /// Line named on the most recent vertex record
    pub line: LineId,
    /// Whether the station is the end of a line
    pub terminus: bool,
    /// Number of divergent track segments at the station
    pub branches: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_station_ids() {
        assert_eq!(StationId::parse("0").unwrap().value(), 0);
        assert_eq!(StationId::parse("42").unwrap().value(), 42);
        assert_eq!(StationId::parse("0042").unwrap().value(), 42);
    }

    #[test]
    fn reject_invalid_station_ids() {
        assert!(StationId::parse("").is_err());
        assert!(StationId::parse("-3").is_err());
        assert!(StationId::parse("+3").is_err());
        assert!(StationId::parse("3a").is_err());
        assert!(StationId::parse(" 3").is_err());
        assert!(StationId::parse("99999999999").is_err());
    }

    #[test]
    fn station_id_display_and_debug() {
        let id = StationId::new(12);
        assert_eq!(id.to_string(), "12");
        assert_eq!(format!("{:?}", id), "StationId(12)");
    }

    #[test]
    fn parse_valid_line_ids() {
        assert_eq!(LineId::parse("1").unwrap().as_str(), "1");
        assert_eq!(LineId::parse("7bis").unwrap().as_str(), "7bis");
        assert_eq!(LineId::parse("RER_A").unwrap().as_str(), "RER_A");
    }

    #[test]
    fn reject_invalid_line_ids() {
        assert!(LineId::parse("").is_err());
        assert!(LineId::parse("7 bis").is_err());
        assert!(LineId::parse("7-bis").is_err());
    }

    #[test]
    fn line_ids_order_lexicographically() {
        let mut lines = vec![
            LineId::parse("7bis").unwrap(),
            LineId::parse("10").unwrap(),
            LineId::parse("7").unwrap(),
        ];
        lines.sort();
        let names: Vec<_> = lines.iter().map(|l| l.as_str()).collect();
        assert_eq!(names, vec!["10", "7", "7bis"]);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any u32 survives a display then parse roundtrip
        #[test]
        fn station_id_roundtrip(n in any::<u32>()) {
            let id = StationId::new(n);
            prop_assert_eq!(StationId::parse(&id.to_string()).unwrap(), id);
        }

        /// Leading zeros never change the identifier
        #[test]
        fn leading_zeros_ignored(n in 0u32..100_000, zeros in 0usize..4) {
            let padded = format!("{}{}", "0".repeat(zeros), n);
            prop_assert_eq!(StationId::parse(&padded).unwrap(), StationId::new(n));
        }

        /// Tokens of word characters are always valid lines
        #[test]
        fn word_tokens_are_lines(s in "[A-Za-z0-9_]{1,8}") {
            prop_assert!(LineId::parse(&s).is_ok());
        }
    }
}
