use anyhow::{self, format_err, Context, Result};
use log::{debug, info};
use std::fs::read_to_string;
use std::io::{self, Read};
use wiring::{parse_wire, Move, Wire, Wiring};

/// Reads the puzzle input from the file named by the first argument,
/// falling back to stdin.
fn read_input() -> Result<String> {
    match std::env::args().nth(1) {
        Some(path) => read_to_string(&path).with_context(|| format!("Couldn't read {}", path)),
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

fn next_wire<'a>(lines: &mut impl Iterator<Item = &'a str>, wire: Wire) -> Result<Vec<Move>> {
    let line = lines
        .next()
        .ok_or_else(|| format_err!("Missing line for {:?}", wire))?;
    parse_wire(line).with_context(|| format!("Couldn't parse {:?}", wire))
}

fn main() -> Result<()> {
    env_logger::init();

    let input = read_input()?;
    let mut lines = input.lines().filter(|line| !line.trim().is_empty());

    let one = next_wire(&mut lines, Wire::WIRE1)?;
    let two = next_wire(&mut lines, Wire::WIRE2)?;

    let wiring = Wiring::new(&one, &two)?;

    info!("Found {} crossings", wiring.intersections.len());
    for found in &wiring.intersections {
        debug!(
            "{:?}: segment {} of {:?}, segment {} of {:?}",
            found.point,
            found.segment_a,
            Wire::WIRE1,
            found.segment_b,
            Wire::WIRE2
        );
    }

    if cfg!(feature = "part2") {
        println!("Length: {}", wiring.fewest_steps()?);
    } else {
        println!("Distance: {}", wiring.closest_manhattan()?);
    }

    Ok(())
}
