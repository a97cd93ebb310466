use crate::monopoly::{DiceRoll, PlayerNum};
use serde::{Deserialize, Serialize};

/// Actions the view can ask the engine to perform.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub enum Command {
    Roll,
    Buy,
    EndTurn,
}

/// One row of the player list.
#[derive(Serialize, Debug, PartialEq)]
pub struct PlayerSummary {
    pub name: String,
    pub money: i32,
    pub square: String,
    pub color: String,
}

/// State-change notifications pushed to the view.
#[derive(Serialize, Debug)]
pub enum Notice {
    DiceRolled {
        roll: DiceRoll,
    },
    /// The view should reposition the player's token.
    PlayerMoved {
        player: PlayerNum,
        position: usize,
        square: String,
    },
    /// Money or ownership changed; the view should re-render the player list.
    PlayersChanged {
        players: Vec<PlayerSummary>,
    },
    /// The view should update the current-player indicator and withdraw the
    /// purchase affordance.
    TurnEnded {
        current_player: PlayerNum,
    },
}
