//! Console rendering: board frames, captions and the greeting.

use std::fmt::Write as _;

use crate::board::Board;
use crate::config::BOARD_SIZE;

const RULE: &str = "--------------------";

/// Render one board as a fixed-width text grid.
///
/// Symbols: `O` empty, `■` ship, `X` hit, `.` miss or revealed margin.
/// With `hidden` set (the computer's board), un-hit ship cells render as
/// empty water.
pub fn render_board(board: &Board, hidden: bool) -> String {
    let mut out = String::from("   ");
    for col in 0..BOARD_SIZE {
        let _ = write!(out, "| {} ", col + 1);
    }
    out.push_str("|\n");
    for row in 0..BOARD_SIZE {
        let _ = write!(out, " {} ", row + 1);
        for col in 0..BOARD_SIZE {
            let cell = if board.hits().contains(row, col) {
                'X'
            } else if board.used().contains(row, col) {
                '.'
            } else if !hidden && board.ship_map().contains(row, col) {
                '■'
            } else {
                'O'
            };
            let _ = write!(out, "| {} ", cell);
        }
        out.push_str("|\n");
    }
    out
}

/// Print both boards: the player's in full, the computer's hidden.
pub fn show_boards(player: &Board, computer: &Board) {
    println!("{}", RULE);
    println!("Your board:");
    print!("{}", render_board(player, false));
    println!("{}", RULE);
    println!("Computer's board:");
    print!("{}", render_board(computer, true));
    println!("{}", RULE);
}

/// Print the greeting banner and the input-format help.
pub fn greet() {
    println!("-------------------");
    println!("    Welcome to     ");
    println!("    Sea Battle     ");
    println!("-------------------");
    println!(" input format: x y ");
    println!(" x - row number    ");
    println!(" y - column number ");
}
