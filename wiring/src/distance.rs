use crate::error::{Error, Result};
use crate::intersect::Intersection;
use crate::path::{Path, Point};
use crate::Wire;
use log::trace;

/// How far along `path` you have to walk before first reaching `point`.
///
/// Segments are walked in order from the origin and the first one that
/// contains `point` wins, even if the wire comes back closer later.
pub fn steps_to(point: Point, path: &Path) -> Option<usize> {
    let mut steps = 0;
    for segment in path.segments() {
        if segment.contains(point) {
            return Some(steps + segment.start.manhattan_to(point));
        }
        steps += segment.len();
    }
    None
}

/// Keeps track of how many steps it took each wire to reach a crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crossing {
    pub point: Point,
    steps: [usize; 2],
}

impl Crossing {
    pub fn new(point: Point, path_a: &Path, path_b: &Path) -> Option<Crossing> {
        let mut steps = [0; 2];
        steps[Wire::WIRE1.index()] = steps_to(point, path_a)?;
        steps[Wire::WIRE2.index()] = steps_to(point, path_b)?;
        Some(Crossing { point, steps })
    }

    pub fn steps(&self, wire: Wire) -> usize {
        self.steps[wire.index()]
    }

    /// The combined length of both wires up to this crossing.
    pub fn total_length(&self) -> usize {
        self.steps.iter().sum()
    }
}

pub fn closest_manhattan(intersections: &[Intersection]) -> Result<usize> {
    intersections
        .iter()
        .map(|found| found.point.manhattan())
        .min()
        .ok_or(Error::NoIntersections)
}

pub fn fewest_steps(
    intersections: &[Intersection],
    path_a: &Path,
    path_b: &Path,
) -> Result<usize> {
    intersections
        .iter()
        .filter_map(|found| Crossing::new(found.point, path_a, path_b))
        .map(|crossing| {
            let length = crossing.total_length();
            trace!("{:?} takes {} steps", crossing.point, length);
            length
        })
        .min()
        .ok_or(Error::NoIntersections)
}
