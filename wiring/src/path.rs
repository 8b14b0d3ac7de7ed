use crate::error::{Error, Result};
use crate::movement::Move;
use std::ops::{Add, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: isize,
    pub y: isize,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub fn new(x: isize, y: isize) -> Point {
        Point { x, y }
    }

    /// Manhattan distance from the origin.
    pub fn manhattan(self) -> usize {
        self.x.abs() as usize + self.y.abs() as usize
    }

    pub fn manhattan_to(self, other: Point) -> usize {
        (other - self).manhattan()
    }

    /// The point reached by applying `mv` from here.
    /// `mv.distance` must be no more than [`Path::MAX_LENGTH`].
    pub fn next(self, mv: Move) -> Point {
        let (dx, dy) = mv.direction.unit();
        let distance = mv.distance as isize;
        self + Point::new(dx * distance, dy * distance)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

/// One straight span of a wire. Always axis-aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn delta(&self) -> Point {
        self.end - self.start
    }

    pub fn len(&self) -> usize {
        self.start.manhattan_to(self.end)
    }

    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Whether `point` lies on this segment, endpoints included.
    pub fn contains(&self, point: Point) -> bool {
        let (lo_x, hi_x) = ordered(self.start.x, self.end.x);
        let (lo_y, hi_y) = ordered(self.start.y, self.end.y);
        (lo_x..=hi_x).contains(&point.x) && (lo_y..=hi_y).contains(&point.y)
    }
}

fn ordered(a: isize, b: isize) -> (isize, isize) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// The corners a wire passes through, excluding the origin it starts from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    points: Vec<Point>,
}

impl Path {
    /// Longest total wire `trace` accepts. Keeps every coordinate, coordinate
    /// difference and step count of both wires inside `isize`.
    pub const MAX_LENGTH: usize = (isize::MAX / 4) as usize;

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Every segment of the wire, starting with the one leaving the origin.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        std::iter::once(Point::ORIGIN)
            .chain(self.points.iter().copied())
            .zip(self.points.iter().copied())
            .map(|(start, end)| Segment { start, end })
    }
}

/// Walks `moves` from the origin, one point per move.
///
/// Fails if the wire's total length goes over [`Path::MAX_LENGTH`].
pub fn trace<'a>(moves: impl IntoIterator<Item = &'a Move>) -> Result<Path> {
    let points = moves
        .into_iter()
        .enumerate()
        .scan((0usize, Point::ORIGIN), |(walked, current), (index, mv)| {
            let total = walked
                .checked_add(mv.distance)
                .filter(|&total| total <= Path::MAX_LENGTH);
            Some(match total {
                Some(total) => {
                    *walked = total;
                    *current = current.next(*mv);
                    Ok(*current)
                }
                None => Err(Error::WireTooLong { index }),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Path { points })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movement::{parse_wire, Direction, Move};
    use proptest::prelude::*;

    #[test]
    fn traces_corners() {
        let path = trace(&parse_wire("R8,U5,L5,D3").unwrap()).unwrap();
        assert_eq!(
            path.points(),
            &[
                Point::new(8, 0),
                Point::new(8, 5),
                Point::new(3, 5),
                Point::new(3, 2)
            ]
        );
    }

    #[test]
    fn zero_distance_repeats_point() {
        let path = trace(&parse_wire("U3,R0,R2").unwrap()).unwrap();
        assert_eq!(
            path.points(),
            &[Point::new(0, 3), Point::new(0, 3), Point::new(2, 3)]
        );

        let degenerate = path.segments().filter(Segment::is_degenerate).count();
        assert_eq!(degenerate, 1);
    }

    #[test]
    fn segments_start_at_origin() {
        let path = trace(&parse_wire("L4,D2").unwrap()).unwrap();
        let segments = path.segments().collect::<Vec<_>>();
        assert_eq!(
            segments,
            vec![
                Segment {
                    start: Point::ORIGIN,
                    end: Point::new(-4, 0)
                },
                Segment {
                    start: Point::new(-4, 0),
                    end: Point::new(-4, -2)
                },
            ]
        );
    }

    #[test]
    fn empty_wire() {
        let path = trace(&Vec::<Move>::new()).unwrap();
        assert!(path.is_empty());
        assert_eq!(path.segments().count(), 0);
    }

    #[test]
    fn segment_contains_either_orientation() {
        let seg = Segment {
            start: Point::new(5, 2),
            end: Point::new(-1, 2),
        };
        assert!(seg.contains(Point::new(0, 2)));
        assert!(seg.contains(Point::new(5, 2)));
        assert!(!seg.contains(Point::new(6, 2)));
        assert!(!seg.contains(Point::new(0, 3)));
        assert_eq!(seg.len(), 6);
    }

    #[test]
    fn too_long_in_one_move() {
        let moves = [Move::new(Direction::Right, Path::MAX_LENGTH + 1)];
        assert_eq!(trace(&moves), Err(Error::WireTooLong { index: 0 }));
    }

    #[test]
    fn too_long_overall() {
        let moves = [
            Move::new(Direction::Up, 3),
            Move::new(Direction::Right, isize::MAX as usize),
            Move::new(Direction::Right, 1),
        ];
        assert_eq!(trace(&moves), Err(Error::WireTooLong { index: 1 }));

        let moves = [
            Move::new(Direction::Left, Path::MAX_LENGTH),
            Move::new(Direction::Down, 1),
        ];
        assert_eq!(trace(&moves), Err(Error::WireTooLong { index: 1 }));
    }

    #[test]
    fn longest_wire_fits() {
        let moves = [
            Move::new(Direction::Left, Path::MAX_LENGTH - 1),
            Move::new(Direction::Down, 1),
        ];
        let path = trace(&moves).unwrap();
        let far = -(Path::MAX_LENGTH as isize);
        assert_eq!(path.points()[1], Point::new(far + 1, -1));
        assert_eq!(path.segments().map(|s| s.len()).sum::<usize>(), Path::MAX_LENGTH);
    }

    fn arb_move() -> impl Strategy<Value = Move> {
        let direction = prop_oneof![
            Just(Direction::Up),
            Just(Direction::Down),
            Just(Direction::Left),
            Just(Direction::Right),
        ];
        (direction, 0usize..200).prop_map(|(direction, distance)| Move::new(direction, distance))
    }

    proptest! {
        #[test]
        fn one_point_per_move(moves in prop::collection::vec(arb_move(), 0..40)) {
            let path = trace(&moves).unwrap();
            prop_assert_eq!(path.len(), moves.len());
            prop_assert_eq!(path.segments().count(), moves.len());

            for (segment, mv) in path.segments().zip(&moves) {
                let (dx, dy) = mv.direction.unit();
                let delta = segment.delta();
                prop_assert_eq!(segment.len(), mv.distance);
                prop_assert_eq!(delta, Point::new(dx * mv.distance as isize, dy * mv.distance as isize));
            }
        }
    }
}
