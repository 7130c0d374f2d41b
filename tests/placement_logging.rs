use std::sync::{Mutex, Once};

use broadside::{
    random_layout, random_placement, Board, BoardError, Orientation, ShipType, BOARD_SIZE,
};
use log::{LevelFilter, Log, Metadata, Record};
use rand::rngs::SmallRng;
use rand::SeedableRng;

const N: usize = BOARD_SIZE as usize;

/// Keeps every formatted log line in memory.
struct CaptureLogger {
    lines: Mutex<Vec<String>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.lines
            .lock()
            .unwrap()
            .push(format!("{} {}", record.level(), record.args()));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    lines: Mutex::new(Vec::new()),
};
static INIT: Once = Once::new();

fn take_lines() -> Vec<String> {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
    std::mem::take(&mut *LOGGER.lines.lock().unwrap())
}

// One test per process: the logger is global.
#[test]
fn test_placement_logging() {
    take_lines();

    // the layout summary never draws the fleet
    let mut board = Board::new();
    random_layout(&mut board, &mut SmallRng::seed_from_u64(21), None).unwrap();
    let lines = take_lines();
    assert!(lines
        .iter()
        .any(|l| l.starts_with("DEBUG") && l.contains("fleet placed: 17 ship cells")));
    assert!(lines.iter().all(|l| !l.contains('\n')));
    assert!(lines.iter().all(|l| !l.contains("S S")));

    // every rejected sample is traced
    let mut crowded = Board::new();
    for r in 0..N {
        for c in 0..N {
            if (r + c) % 4 == 0 {
                crowded.place_ship(r, c, 1, Orientation::Horizontal).unwrap();
            }
        }
    }
    take_lines();
    let carrier = ShipType::new("Carrier", 5);
    assert_eq!(
        random_placement(&crowded, &mut SmallRng::seed_from_u64(4), carrier, Some(40)),
        Err(BoardError::PlacementExhausted { ship: "Carrier" })
    );
    let lines = take_lines();
    let rejected = lines
        .iter()
        .filter(|l| l.starts_with("TRACE") && l.contains("Carrier rejected at"))
        .count();
    assert_eq!(rejected, 40);
    assert!(lines
        .iter()
        .any(|l| l.starts_with("WARN") && l.contains("giving up on Carrier after 40")));
}
