use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};
use rps_game::Move;

/// Uniform pick over the three moves.
pub fn random_move<R: Rng + ?Sized>(rng: &mut R) -> Move {
    Move::ALL[rng.gen_range(0..Move::ALL.len())]
}

pub fn computer_move(seed: Option<u64>) -> Move {
    match seed {
        Some(seed) => random_move(&mut StdRng::seed_from_u64(seed)),
        None => random_move(&mut thread_rng()),
    }
}
