use clap::{App, Arg};
use log::info;
use rps_game::Move;
use std::default;
use std::ffi::OsString;

#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    pub verbose: bool,
    pub seed: Option<u64>,
    pub computer: Option<Move>,
}

impl CliConfig {
    pub fn new() -> Self {
        Self::from_args(std::env::args_os()).unwrap_or_else(|e| e.exit())
    }

    pub fn from_args<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let version = env!("CARGO_PKG_VERSION");
        let authors = env!("CARGO_PKG_AUTHORS");
        let move_names: Vec<&str> = Move::ALL.iter().map(|x| x.name()).collect();

        let args = App::new("Rock Paper Scissors")
            .version(version)
            .author(authors)
            .arg(
                Arg::with_name("VERBOSE")
                    .short("v")
                    .long("verbose")
                    .help("If specified, debug logs are written to stderr"),
            )
            .arg(
                Arg::with_name("SEED")
                    .short("s")
                    .long("seed")
                    .takes_value(true)
                    .validator(|s| s.parse::<u64>().map(|_| ()).map_err(|e| e.to_string()))
                    .help("Seed for the computer's pick, making it reproducible"),
            )
            .arg(
                Arg::with_name("COMPUTER")
                    .short("c")
                    .long("computer")
                    .takes_value(true)
                    .possible_values(&move_names)
                    .help("If specified, the computer always plays this move"),
            )
            // Stray positionals are accepted and ignored
            .arg(Arg::with_name("IGNORED").multiple(true).hidden(true))
            .get_matches_from_safe(itr)?;

        let verbose = args.is_present("VERBOSE");
        let seed = args.value_of("SEED").and_then(|s| s.parse().ok());
        let computer = args.value_of("COMPUTER").and_then(Move::from_name);

        Ok(Self {
            verbose,
            seed,
            computer,
        })
    }

    pub fn log(&self) {
        info!("[Config]");

        let default = self == &CliConfig::default();

        info!("Default: {}", default);
        info!("| VERBOSE: {}", self.verbose);
        info!("| SEED: {:?}", self.seed);
        info!("| COMPUTER: {:?}", self.computer);
    }
}

impl default::Default for CliConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            seed: None,
            computer: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliConfig, clap::Error> {
        CliConfig::from_args(std::iter::once("rps").chain(args.iter().copied()))
    }

    #[test]
    fn no_flags() {
        assert_eq!(parse(&[]).unwrap(), CliConfig::default());
    }

    #[test]
    fn flags() {
        let config = parse(&["-v", "--seed", "42", "-c", "Paper"]).unwrap();
        assert!(config.verbose);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.computer, Some(Move::Paper));

        let config = parse(&["--computer", "Scissors"]).unwrap();
        assert!(!config.verbose);
        assert_eq!(config.seed, None);
        assert_eq!(config.computer, Some(Move::Scissors));
    }

    #[test]
    fn ignores_positionals() {
        assert_eq!(parse(&["foo"]).unwrap(), CliConfig::default());

        let config = parse(&["-s", "7", "foo", "bar"]).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.computer, None);
    }

    #[test]
    fn rejects_bad_values() {
        let tests: Vec<Vec<&str>> = vec![
            vec!["--seed", "abc"],
            vec!["--seed", "-1"],
            vec!["-c", "rock"],
            vec!["-c", "Lizard"],
            vec!["--rounds", "3"],
        ];
        for test in tests {
            assert!(parse(&test).is_err(), "{:?} should be rejected", test);
        }
    }
}
