use crate::path::{Path, Point, Segment};
use log::{debug, trace};

/// A point where the two wires cross, along with the index of the
/// segment of each wire it was found on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intersection {
    pub point: Point,
    pub segment_a: usize,
    pub segment_b: usize,
}

fn cross(a: Point, b: Point) -> i128 {
    a.x as i128 * b.y as i128 - b.x as i128 * a.y as i128
}

/// Where `a` and `b` cross strictly inside both segments, if they do.
///
/// Parallel and colinear pairs never cross, even when they overlap, and
/// touching at an endpoint doesn't count. The parameters along each segment
/// are kept as exact fractions over the determinant, and each axis of the
/// crossing takes the integer part of `a.start + t * a.delta()`.
pub fn crossing(a: Segment, b: Segment) -> Option<Point> {
    if a.is_degenerate() || b.is_degenerate() {
        return None;
    }

    let d1 = a.delta();
    let d2 = b.delta();

    let det = cross(d1, d2);
    if det == 0 {
        return None;
    }

    let offset = a.start - b.start;
    let t = offset.y as i128 * d2.x as i128 - offset.x as i128 * d2.y as i128;
    let u = offset.y as i128 * d1.x as i128 - offset.x as i128 * d1.y as i128;

    // Make the denominator positive so the bounds checks stay simple.
    let (det, t, u) = if det < 0 { (-det, -t, -u) } else { (det, t, u) };

    if t <= 0 || t >= det || u <= 0 || u >= det {
        return None;
    }

    let x = (a.start.x as i128 * det + t * d1.x as i128) / det;
    let y = (a.start.y as i128 * det + t * d1.y as i128) / det;

    Some(Point::new(x as isize, y as isize))
}

/// Tests every segment of `a` against every segment of `b`.
///
/// The origin is never reported. Otherwise the same coordinate shows up once
/// per segment pair that crosses there; nothing is deduplicated.
pub fn find_intersections(a: &Path, b: &Path) -> Vec<Intersection> {
    let mut intersections = Vec::new();

    for (segment_a, seg_a) in a.segments().enumerate() {
        for (segment_b, seg_b) in b.segments().enumerate() {
            if let Some(point) = crossing(seg_a, seg_b).filter(|&p| p != Point::ORIGIN) {
                trace!(
                    "Crossing at {:?} (segment {} of wire 1, segment {} of wire 2)",
                    point,
                    segment_a,
                    segment_b
                );
                intersections.push(Intersection {
                    point,
                    segment_a,
                    segment_b,
                });
            }
        }
    }

    debug!(
        "{} x {} segments, {} crossings",
        a.len(),
        b.len(),
        intersections.len()
    );

    intersections
}
