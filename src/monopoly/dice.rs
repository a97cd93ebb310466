use rand::rngs::ThreadRng;
use rand::Rng;
use serde::Serialize;

/// Source of single die rolls. Tests substitute a deterministic source.
pub trait DiceRng {
    fn roll_die(&mut self) -> u8;
}

#[derive(Debug, Default)]
pub struct GameRng {
    rng: ThreadRng,
}

impl DiceRng for GameRng {
    fn roll_die(&mut self) -> u8 {
        self.rng.gen_range(1..=6)
    }
}

/// The outcome of one roll of both dice.
#[derive(Serialize, Copy, Clone, Debug, PartialEq, Eq)]
pub struct DiceRoll {
    pub die1: u8,
    pub die2: u8,
}

impl DiceRoll {
    pub fn total(&self) -> u8 {
        self.die1 + self.die2
    }
}
