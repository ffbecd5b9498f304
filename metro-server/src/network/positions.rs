//! Station plot positions.
//!
//! An optional side file gives each station a position on the network map,
//! one `x;y;label` record per line. Labels use `@` for spaces. The same
//! point can be listed several times; the first occurrence fixes its place
//! in the list and the last one its label.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

/// A labelled point on the network map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationPosition {
    pub x: i64,
    pub y: i64,
    pub label: String,
}

/// Station positions, deduplicated by coordinates.
#[derive(Debug, Clone, Default)]
pub struct StationPositions {
    points: Vec<StationPosition>,
    /// Lower-cased label to plot coordinates, last point per label wins.
    by_label: HashMap<String, (i64, i64)>,
}

impl StationPositions {
    /// Parse a position file. Malformed lines are skipped.
    pub fn parse(input: &str) -> Self {
        let mut points: Vec<StationPosition> = Vec::new();
        let mut slot: HashMap<(i64, i64), usize> = HashMap::new();
        let mut skipped = 0usize;

        for line in input.lines() {
            let Some(point) = parse_point(line.trim()) else {
                skipped += 1;
                continue;
            };
            match slot.get(&(point.x, point.y)) {
                Some(&i) => points[i].label = point.label,
                None => {
                    slot.insert((point.x, point.y), points.len());
                    points.push(point);
                }
            }
        }

        let mut by_label = HashMap::with_capacity(points.len());
        for p in &points {
            by_label.insert(p.label.to_lowercase(), (p.x, -p.y));
        }

        debug!(points = points.len(), skipped, "parsed station positions");
        Self { points, by_label }
    }

    /// Returns all points in file order, in file coordinates.
    pub fn points(&self) -> &[StationPosition] {
        &self.points
    }

    /// Returns the plot coordinates of a station by name.
    ///
    /// Plot coordinates flip the y axis of the file, which grows downward.
    pub fn plot_coords(&self, name: &str) -> Option<(i64, i64)> {
        self.by_label.get(&name.to_lowercase()).copied()
    }

    /// Returns the number of distinct points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if there are no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

fn parse_point(line: &str) -> Option<StationPosition> {
    let mut fields = line.split(';');
    let x = fields.next()?.parse().ok()?;
    let y = fields.next()?.parse().ok()?;
    let label = fields.next()?;
    if fields.next().is_some() {
        return None;
    }
    Some(StationPosition {
        x,
        y,
        label: label.replace('@', " "),
    })
}
