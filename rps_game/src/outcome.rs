use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Outcome {
    PlayerWins,
    ComputerWins,
    Tie,
    InvalidInput,
}

impl Outcome {
    pub fn message(&self) -> &'static str {
        match self {
            Self::PlayerWins => "You win",
            Self::ComputerWins => "You lose",
            Self::Tie => "It's a tie",
            Self::InvalidInput => "Invalid input entered by player",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.message())
    }
}
