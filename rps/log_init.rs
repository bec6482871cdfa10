use crate::error::RpsError;
use simplelog::*;

pub fn init(verbose: bool) -> Result<(), RpsError> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    // Stdout belongs to the game, logs go to stderr
    CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )])
    .map_err(|e| RpsError::with(&format!("failed to init logger: {}", e)))
}
