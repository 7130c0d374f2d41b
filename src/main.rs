#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{init_logging, GameConfig, GameController, StdinInput, TerminalPresenter};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use std::time::Duration;

/// Battleship against the computer in your terminal.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = 500, help = "Pause before the computer fires, in milliseconds")]
    delay_ms: u64,
    #[arg(long, help = "Give up placing a ship after this many rejected positions")]
    max_placement_attempts: Option<u32>,
}

#[cfg(feature = "std")]
impl Cli {
    fn config(&self) -> GameConfig {
        let mut config = GameConfig::default().with_delay(Duration::from_millis(self.delay_ms));
        if let Some(s) = self.seed {
            config = config.with_seed(s);
        }
        if let Some(n) = self.max_placement_attempts {
            config = config.with_max_placement_attempts(n);
        }
        config
    }
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = cli.config();

    println!("Starting a game against the computer...");
    if let Some(s) = config.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }

    let mut controller = GameController::new(config, TerminalPresenter::new())?;
    let mut input = StdinInput::new();
    controller.run(&mut input).await?;
    println!("Thanks for playing.");
    Ok(())
}
