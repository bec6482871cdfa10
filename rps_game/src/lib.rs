mod moves;
mod outcome;

pub use moves::Move;
pub use outcome::Outcome;

/// Resolves one round. The rules are checked in order: an exact name match
/// ties, a winning pair wins, unknown text is invalid, anything else loses.
pub fn resolve(player_input: &str, computer: Move) -> Outcome {
    if player_input == computer.name() {
        return Outcome::Tie;
    }

    match Move::from_name(player_input) {
        Some(player) if player.beats(computer) => Outcome::PlayerWins,
        Some(_) => Outcome::ComputerWins,
        None => Outcome::InvalidInput,
    }
}

#[derive(Debug, Clone)]
pub struct Round {
    pub player: String,
    pub computer: Move,
}

impl Round {
    pub fn new(player: impl Into<String>, computer: Move) -> Self {
        Self {
            player: player.into(),
            computer,
        }
    }

    pub fn outcome(&self) -> Outcome {
        resolve(&self.player, self.computer)
    }
}
