use log::debug;
use std::io::{BufRead, Write};

use crate::error::RpsError;
use rps_game::{Move, Outcome, Round};

pub const PROMPT: &str = "enter your choice (Rock , Paper , Scissors)";

/// Plays a single round: prompt once, read one line, print both choices
/// and the result. No re-prompt on invalid input.
pub fn play_round<R, W>(input: &mut R, output: &mut W, computer: Move) -> Result<Outcome, RpsError>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    let round = Round::new(read_choice(input)?, computer);

    writeln!(output, "Player : {}", round.player)?;
    writeln!(output, "Computer : {}", round.computer)?;

    let outcome = round.outcome();
    debug!("{:?} vs {:?} => {:?}", round.player, round.computer, outcome);

    writeln!(output, "{}", outcome)?;
    output.flush()?;

    Ok(outcome)
}

/// Reads one line with its terminator removed. EOF reads as empty and bytes
/// that are not UTF-8 are replaced, so any input still resolves.
fn read_choice<R: BufRead>(input: &mut R) -> Result<String, RpsError> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        debug!("Reached end of input before a choice was entered");
    }

    if buf.ends_with(b"\n") {
        buf.pop();
        if buf.ends_with(b"\r") {
            buf.pop();
        }
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
