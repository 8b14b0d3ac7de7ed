#[macro_use]
extern crate bitflags;

pub mod distance;
pub mod error;
pub mod intersect;
pub mod movement;
pub mod path;

pub use distance::{closest_manhattan, fewest_steps, steps_to, Crossing};
pub use error::{Error, Result};
pub use intersect::{crossing, find_intersections, Intersection};
pub use movement::{parse, parse_wire, Direction, Move};
pub use path::{trace, Path, Point, Segment};

use log::debug;

bitflags! {
    pub struct Wire: u8 {
        const WIRE1 = 0b01;
        const WIRE2 = 0b10;
    }
}

impl Wire {
    /// Slot of a single wire in per-wire arrays.
    pub fn index(&self) -> usize {
        (self.bits() - 1) as usize
    }
}

/// Both traced wires and every place they cross.
pub struct Wiring {
    pub path_a: Path,
    pub path_b: Path,
    pub intersections: Vec<Intersection>,
}

impl Wiring {
    pub fn new(moves_a: &[Move], moves_b: &[Move]) -> Result<Wiring> {
        let path_a = trace(moves_a)?;
        let path_b = trace(moves_b)?;
        debug!(
            "Traced wires with {} and {} corners",
            path_a.len(),
            path_b.len()
        );

        let intersections = find_intersections(&path_a, &path_b);

        Ok(Wiring {
            path_a,
            path_b,
            intersections,
        })
    }

    pub fn closest_manhattan(&self) -> Result<usize> {
        closest_manhattan(&self.intersections)
    }

    pub fn fewest_steps(&self) -> Result<usize> {
        fewest_steps(&self.intersections, &self.path_a, &self.path_b)
    }
}

fn wiring_from_tokens<S: AsRef<str>>(moves_a: &[S], moves_b: &[S]) -> Result<Wiring> {
    let moves_a = movement::parse_tokens(moves_a)?;
    let moves_b = movement::parse_tokens(moves_b)?;
    Wiring::new(&moves_a, &moves_b)
}

/// Manhattan distance from the origin to the nearest crossing.
pub fn closest_intersection_manhattan<S: AsRef<str>>(
    moves_a: &[S],
    moves_b: &[S],
) -> Result<usize> {
    wiring_from_tokens(moves_a, moves_b)?.closest_manhattan()
}

/// Fewest combined steps both wires walk to reach a crossing.
pub fn closest_intersection_steps<S: AsRef<str>>(
    moves_a: &[S],
    moves_b: &[S],
) -> Result<usize> {
    wiring_from_tokens(moves_a, moves_b)?.fewest_steps()
}
