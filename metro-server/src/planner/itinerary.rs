//! Ride and line-change instructions for a path.
//!
//! Each hop of the path rides a line the two stations have in common. The
//! line stays the same as long as it is shared; otherwise the smallest
//! common line id is taken, and a change of line ends the current ride.
//! Hops with no common line (walking transfers between platforms) keep the
//! current ride open.

use std::collections::BTreeSet;

use crate::domain::{Itinerary, LineId, Path, Ride, StationId};

/// Build the itinerary for `path`.
///
/// `lines_of` gives the lines serving a station. A path of fewer than two
/// stations, or one where no hop shares a line, has an empty itinerary.
pub fn build_itinerary<'a, F>(path: &Path, lines_of: F) -> Itinerary
where
    F: Fn(StationId) -> &'a [LineId],
{
    let mut rides = Vec::new();
    let mut active: Option<&LineId> = None;
    let mut boarded_at = path.source();

    for (from, to) in path.hops() {
        let here: BTreeSet<&LineId> = lines_of(from).iter().collect();
        let common: BTreeSet<&LineId> = lines_of(to)
            .iter()
            .filter(|line| here.contains(line))
            .collect();

        let Some(&first) = common.iter().next() else {
            continue;
        };

        match active {
            None => active = Some(first),
            Some(current) if common.contains(&current) => {}
            Some(current) => {
                rides.push(Ride {
                    line: current.clone(),
                    board: boarded_at,
                    alight: from,
                });
                boarded_at = from;
                active = Some(first);
            }
        }
    }

    if let Some(line) = active {
        rides.push(Ride {
            line: line.clone(),
            board: boarded_at,
            alight: path.target(),
        });
    }

    Itinerary::new(rides)
}
