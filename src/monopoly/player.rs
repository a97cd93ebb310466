use crate::monopoly::board::SquareIndex;
use serde::Serialize;
use std::ops::{Index, IndexMut};

pub const STARTING_MONEY: i32 = 1500;

#[derive(Serialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlayerNum {
    P1,
    P2,
}

impl PlayerNum {
    pub fn idx(&self) -> usize {
        match self {
            PlayerNum::P1 => 0,
            PlayerNum::P2 => 1,
        }
    }

    /// The opposing player.
    pub fn other(&self) -> PlayerNum {
        match self {
            PlayerNum::P1 => PlayerNum::P2,
            PlayerNum::P2 => PlayerNum::P1,
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Players([Player; 2]);

impl Index<PlayerNum> for Players {
    type Output = Player;
    fn index(&self, index: PlayerNum) -> &Self::Output {
        &self.0[index.idx()]
    }
}

impl IndexMut<PlayerNum> for Players {
    fn index_mut(&mut self, index: PlayerNum) -> &mut Self::Output {
        &mut self.0[index.idx()]
    }
}

impl Players {
    pub fn new(players: [Player; 2]) -> Self {
        Players(players)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.0.iter()
    }
}

impl Default for Players {
    fn default() -> Self {
        Players([
            Player::new("Player 1", "#ff0000"),
            Player::new("Player 2", "#0000ff"),
        ])
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Player {
    name: String,
    pub money: i32,
    position: SquareIndex,
    color: String,
}

impl Player {
    /// A new player on GO with the starting balance.
    pub fn new(name: &str, color: &str) -> Self {
        Player {
            name: name.to_string(),
            money: STARTING_MONEY,
            position: SquareIndex::GO,
            color: color.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn position(&self) -> SquareIndex {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: SquareIndex) {
        self.position = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player() {
        let player = Player::new("Player 1", "#ff0000");
        assert_eq!(player.money, STARTING_MONEY);
        assert_eq!(player.position(), SquareIndex::GO);
        assert_eq!(player.name(), "Player 1");
        assert_eq!(player.color(), "#ff0000");
    }

    #[test]
    fn test_index_players_by_num() {
        let mut players = Players::default();
        players[PlayerNum::P2].money = 1200;

        assert_eq!(players[PlayerNum::P1].money, STARTING_MONEY);
        assert_eq!(players[PlayerNum::P2].money, 1200);
        assert_eq!(players[PlayerNum::P1].name(), "Player 1");
        assert_eq!(players[PlayerNum::P2].name(), "Player 2");
    }

    #[test]
    fn test_other_player() {
        assert_eq!(PlayerNum::P1.other(), PlayerNum::P2);
        assert_eq!(PlayerNum::P2.other(), PlayerNum::P1);
    }
}
