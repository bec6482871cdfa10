use log::{debug, error, info};
use std::io;

use rps_cli::CliConfig;

mod error;
mod game;
mod log_init;
mod util;

fn main() {
    let config = CliConfig::new();
    if let Err(e) = log_init::init(config.verbose) {
        eprintln!("{}", e);
    }
    info!("Starting Rock Paper Scissors...");
    config.log();

    // Picked before the player is prompted
    let computer = match config.computer {
        Some(computer) => computer,
        None => util::computer_move(config.seed),
    };
    debug!("Computer picked {}", computer);

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = game::play_round(&mut stdin.lock(), &mut stdout.lock(), computer) {
        error!("Round aborted: {}", e);
    }
}
