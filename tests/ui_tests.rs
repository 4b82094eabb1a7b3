use seabattle::ui::render_board;
use seabattle::{Board, Coordinate, Orientation, Ship};

fn sample_board() -> Board {
    let mut board = Board::new();
    board
        .place_ship(Ship::new(3, Coordinate::new(0, 0), Orientation::Horizontal))
        .unwrap();
    board.reset_used();
    board
}

#[test]
fn test_frame_layout() {
    let board = Board::new();
    let rendered = render_board(&board, false);
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "   | 1 | 2 | 3 | 4 | 5 | 6 |");
    assert_eq!(lines[1], " 1 | O | O | O | O | O | O |");
    assert_eq!(lines[6], " 6 | O | O | O | O | O | O |");
}

#[test]
fn test_own_board_shows_ships() {
    let rendered = render_board(&sample_board(), false);
    assert_eq!(rendered.matches('■').count(), 3);
}

#[test]
fn test_hidden_board_masks_unhit_ships() {
    let board = sample_board();
    let rendered = render_board(&board, true);
    assert!(!rendered.contains('■'));
    // ship cells render as plain water
    assert!(rendered.lines().nth(1).unwrap().starts_with(" 1 | O | O | O "));
}

#[test]
fn test_hits_and_misses_are_marked() {
    let mut board = sample_board();
    board.fire(Coordinate::new(0, 0)).unwrap();
    board.fire(Coordinate::new(5, 5)).unwrap();

    let rendered = render_board(&board, true);
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[1], " 1 | X | O | O | O | O | O |");
    assert_eq!(lines[6], " 6 | O | O | O | O | O | . |");
}

#[test]
fn test_sunk_ship_reveals_its_margin() {
    let mut board = Board::new();
    board
        .place_ship(Ship::new(1, Coordinate::new(0, 0), Orientation::Horizontal))
        .unwrap();
    board.reset_used();
    board.fire(Coordinate::new(0, 0)).unwrap();

    let rendered = render_board(&board, true);
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[1], " 1 | X | . | O | O | O | O |");
    assert_eq!(lines[2], " 2 | . | . | O | O | O | O |");
}
