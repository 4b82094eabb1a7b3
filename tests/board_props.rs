use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{Board, BoardError, Coordinate, BOARD_SIZE, FLEET, NUM_SHIPS};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generated_fleet_is_complete(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = Board::random(&mut rng);

        prop_assert_eq!(board.ships().len(), NUM_SHIPS);
        prop_assert_eq!(board.ship_map().count_ones(), FLEET.iter().sum::<usize>());

        let mut lengths: Vec<usize> = board.ships().iter().map(|s| s.length()).collect();
        lengths.sort_unstable_by(|a, b| b.cmp(a));
        prop_assert_eq!(lengths, FLEET.to_vec());

        // placement reservations must not survive generation
        prop_assert!(board.used().is_empty());
    }

    #[test]
    fn placed_ships_never_touch(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = Board::random(&mut rng);

        for (i, a) in board.ships().iter().enumerate() {
            for b in board.ships().iter().skip(i + 1) {
                for cell in a.cells() {
                    for near in cell.neighborhood() {
                        prop_assert!(
                            !b.covers(near),
                            "ships touch at {:?}", near
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn fire_twice_is_rejected(
        seed in any::<u64>(),
        row in 0..BOARD_SIZE,
        col in 0..BOARD_SIZE,
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::random(&mut rng);
        let target = Coordinate::new(row as i32, col as i32);

        board.fire(target).unwrap();
        prop_assert_eq!(board.fire(target).unwrap_err(), BoardError::AlreadyShot);
    }

    #[test]
    fn sinking_every_ship_counts_each_once(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::random(&mut rng);

        let cells: Vec<(usize, usize)> = board.ship_map().cells().collect();
        for &(r, c) in &cells {
            board.fire(Coordinate::new(r as i32, c as i32)).unwrap();
        }
        prop_assert_eq!(board.sunk_count(), NUM_SHIPS);
        prop_assert_eq!(board.hits().count_ones(), cells.len());
    }
}
