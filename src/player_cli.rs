use std::io::{self, BufRead, Write};

use anyhow::bail;
use rand::rngs::SmallRng;

use crate::common::Coordinate;
use crate::player::Player;

/// Interactive player reading targets from standard input.
pub struct CliPlayer;

impl CliPlayer {
    pub fn new() -> Self {
        Self
    }
}

/// Parse a target line: exactly two 1-indexed integers, row then column.
///
/// Returns the 0-indexed coordinate, or the message to show the player.
/// Range checking is not done here; out-of-range targets (including the
/// `0 0` that parses to `(-1, -1)`) are rejected when fired.
pub fn parse_target(line: &str) -> Result<Coordinate, &'static str> {
    let mut tokens = line.split_whitespace();
    let (row, col) = match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(row), Some(col), None) => (row, col),
        _ => return Err("Enter two coordinates."),
    };
    match (row.parse::<u32>(), col.parse::<u32>()) {
        (Ok(row), Ok(col)) => Ok(Coordinate::new(row as i32 - 1, col as i32 - 1)),
        _ => Err("Enter numbers."),
    }
}

impl Player for CliPlayer {
    fn select_target(&mut self, _rng: &mut SmallRng) -> anyhow::Result<Coordinate> {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        loop {
            print!("Enter target (row column): ");
            io::stdout().flush()?;
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                bail!("input stream closed");
            }
            match parse_target(&line) {
                Ok(target) => return Ok(target),
                Err(msg) => println!("{}", msg),
            }
        }
    }
}
