use std::fmt;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Move {
    Rock = 0,
    Paper = 1,
    Scissors = 2,
}

impl Move {
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Exact, case-sensitive parse of a move name.
    pub fn from_name(name: &str) -> Option<Move> {
        match name {
            "Rock" => Some(Move::Rock),
            "Paper" => Some(Move::Paper),
            "Scissors" => Some(Move::Scissors),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissors => "Scissors",
        }
    }

    /// The move this one defeats.
    pub fn victim(&self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }

    pub fn beats(&self, other: Move) -> bool {
        self.victim() == other
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        for mv in Move::ALL.iter() {
            assert_eq!(Move::from_name(mv.name()), Some(*mv));
            assert_eq!(mv.to_string(), mv.name());
        }
    }

    #[test]
    fn names_are_exact() {
        let tests = vec!["rock", "PAPER", "scissors", " Rock", "Rock ", "Scissor", ""];
        for test in tests {
            assert_eq!(Move::from_name(test), None, "{:?} should not parse", test);
        }
    }

    #[test]
    fn each_move_beats_exactly_one() {
        for me in Move::ALL.iter() {
            let beaten: Vec<&Move> = Move::ALL.iter().filter(|x| me.beats(**x)).collect();
            assert_eq!(beaten, vec![&me.victim()]);
            assert!(!me.beats(*me));
            assert!(!me.victim().beats(*me));
        }
    }
}
