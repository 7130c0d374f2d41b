use broadside::{
    random_layout, Board, Cell, Orientation, ShotOutcome, BOARD_SIZE, SHIPS, TOTAL_SHIP_CELLS,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

const N: usize = BOARD_SIZE as usize;

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new();
    random_layout(&mut board, &mut rng, None).unwrap();
    let shots = rng.random_range(0..N * N / 2);
    for _ in 0..shots {
        let r = rng.random_range(0..N);
        let c = rng.random_range(0..N);
        board.resolve_shot(r, c).unwrap();
    }
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn placement_covers_exactly_the_fleet(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        let layout = random_layout(&mut board, &mut rng, None).unwrap();

        prop_assert_eq!(board.ship_cell_count(), TOTAL_SHIP_CELLS);
        let mut covered = 0;
        for (placement, def) in layout.iter().zip(SHIPS.iter()) {
            prop_assert_eq!(placement.ship, *def);
            covered += placement.cells().count();
        }
        // no cell counted twice
        prop_assert_eq!(covered, board.ship_cell_count());
    }

    #[test]
    fn every_ship_is_a_straight_in_bounds_run(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        let layout = random_layout(&mut board, &mut rng, None).unwrap();

        for placement in layout.iter() {
            let cells: Vec<_> = placement.cells().collect();
            prop_assert_eq!(cells.len(), placement.ship.length());
            for (i, &(r, c)) in cells.iter().enumerate() {
                prop_assert!(r < N && c < N);
                prop_assert_eq!(board.cell(r, c).unwrap(), Cell::ShipPresent);
                let expected = match placement.orientation {
                    Orientation::Horizontal => (placement.row, placement.col + i),
                    Orientation::Vertical => (placement.row + i, placement.col),
                };
                prop_assert_eq!((r, c), expected);
            }
        }
    }

    #[test]
    fn resolve_shot_is_idempotent(
        seed in any::<u64>(),
        row in 0..N,
        col in 0..N,
    ) {
        let mut board = random_board(seed);
        let first = board.resolve_shot(row, col).unwrap();
        let after_first = board;
        let second = board.resolve_shot(row, col).unwrap();

        prop_assert_eq!(second, ShotOutcome::AlreadyTaken);
        prop_assert_eq!(board, after_first);
        prop_assert!(board.cell(row, col).unwrap().is_resolved());
        if first != ShotOutcome::AlreadyTaken {
            prop_assert_eq!(
                board.cell(row, col).unwrap(),
                if first == ShotOutcome::Hit { Cell::Hit } else { Cell::Miss }
            );
        }
    }

    #[test]
    fn hits_stay_on_ships(seed in any::<u64>()) {
        let board = random_board(seed);
        prop_assert!(board.misses().is_disjoint(&board.ship_map()));
        prop_assert_eq!(board.hits() & board.ship_map(), board.hits());
        prop_assert_eq!(
            board.unresolved_count() + board.hits().count_ones() + board.misses().count_ones(),
            N * N
        );
    }
}
