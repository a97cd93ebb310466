use crate::messages::{Command, Notice, PlayerSummary};
use crate::monopoly::{DiceRng, GameState, PlayerNum};
use crate::util;
use crate::view::SendMsg;
use serde::Serialize;
use serde_json::from_str;
use std::fmt::Debug;
use tracing::{info, warn};

/// One two-player session: decodes commands from the view, drives the game
/// state, and pushes notifications back through the view's channel.
#[derive(Debug)]
pub struct Game<R: DiceRng + Default + Debug> {
    state: GameState<R>,
}

impl<R: DiceRng + Default + Debug> Game<R> {
    pub fn new(state: GameState<R>) -> Self {
        Game { state }
    }

    pub fn state(&self) -> &GameState<R> {
        &self.state
    }

    /// Handle one raw command from the view. Garbage input is logged and
    /// dropped, leaving the game state untouched.
    pub fn handle_message(&mut self, msg: &str, view: &impl SendMsg) {
        let command: Command = match from_str(msg) {
            Ok(command) => command,
            Err(err) => {
                warn!("Failed to deserialize input into command: {}", err);
                return;
            }
        };
        self.handle_command(command, view);
    }

    pub fn handle_command(&mut self, command: Command, view: &impl SendMsg) {
        match command {
            Command::Roll => {
                let roll = self.state.roll_dice();
                let mover = self.state.current_player();
                info!(
                    "{} rolled {} + {}",
                    self.state.player(mover).name(),
                    roll.die1,
                    roll.die2
                );
                send_message(view, Notice::DiceRolled { roll });
                send_message(
                    view,
                    Notice::PlayerMoved {
                        player: mover,
                        position: self.state.player(mover).position().get(),
                        square: self.state.square_name_of(mover).to_string(),
                    },
                );
                send_message(view, self.players_changed());
            }
            Command::Buy => {
                // A declined purchase sends the unchanged player list, which
                // is all the feedback the view gets
                self.state.buy_property();
                send_message(view, self.players_changed());
            }
            Command::EndTurn => {
                self.state.end_turn();
                info!(
                    "turn passed to {}",
                    self.state.player(self.state.current_player()).name()
                );
                send_message(
                    view,
                    Notice::TurnEnded {
                        current_player: self.state.current_player(),
                    },
                );
            }
        }
    }

    fn players_changed(&self) -> Notice {
        let players = [PlayerNum::P1, PlayerNum::P2]
            .iter()
            .map(|&num| {
                let player = self.state.player(num);
                PlayerSummary {
                    name: player.name().to_string(),
                    money: player.money,
                    square: self.state.square_name_of(num).to_string(),
                    color: player.color().to_string(),
                }
            })
            .collect();
        Notice::PlayersChanged { players }
    }
}

fn send_message<M: Serialize>(view: &impl SendMsg, message: M) {
    // If the message fails to send even after retries, there's not much we can do but proceed
    let _ = util::retry(1, || view.send(&serde_json::to_string(&message).unwrap()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monopoly::{SquareIndex, STARTING_MONEY};
    use crate::view::SendError;
    use std::cell::RefCell;

    struct MockSender;

    impl SendMsg for MockSender {
        fn send(&self, _msg: &str) -> Result<(), SendError> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingSink(RefCell<Vec<String>>);

    impl SendMsg for RecordingSink {
        fn send(&self, msg: &str) -> Result<(), SendError> {
            self.0.borrow_mut().push(msg.to_string());
            Ok(())
        }
    }

    // Always rolls (3, 4)
    #[derive(Debug, Default)]
    struct MockRng {
        second_die: bool,
    }

    impl DiceRng for MockRng {
        fn roll_die(&mut self) -> u8 {
            let die = if self.second_die { 4 } else { 3 };
            self.second_die = !self.second_die;
            die
        }
    }

    #[test]
    fn test_handle_invalid_message() {
        let mut game = Game::new(GameState::<MockRng>::default());
        let sink = RecordingSink::default();
        game.handle_message("foo", &sink);

        assert!(sink.0.borrow().is_empty());
        assert_eq!(game.state().current_player(), PlayerNum::P1);
        assert_eq!(game.state().player(PlayerNum::P1).position().get(), 0);
    }

    #[test]
    fn test_handle_roll_message() {
        let mut game = Game::new(GameState::<MockRng>::default());
        let sink = RecordingSink::default();
        game.handle_message("\"Roll\"", &sink);

        assert_eq!(game.state().player(PlayerNum::P1).position().get(), 7);
        assert_eq!(game.state().square_name_of(PlayerNum::P1), "Chance");

        let sent = sink.0.borrow();
        assert_eq!(sent.len(), 3);
        assert!(sent[0].contains("DiceRolled"));
        assert!(sent[1].contains("PlayerMoved"));
        assert!(sent[1].contains("Chance"));
        assert!(sent[2].contains("PlayersChanged"));
    }

    #[test]
    fn test_handle_buy_command() {
        let mut state = GameState::<MockRng>::default();
        let baltic = SquareIndex::new(state.board(), 3).unwrap();
        state.move_player(PlayerNum::P1, baltic);

        let mut game = Game::new(state);
        let sink = RecordingSink::default();
        game.handle_command(Command::Buy, &sink);

        assert_eq!(
            game.state().player(PlayerNum::P1).money,
            STARTING_MONEY - 60
        );
        assert_eq!(
            game.state().board().square(baltic).owner(),
            Some(PlayerNum::P1)
        );
        let sent = sink.0.borrow();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].contains("PlayersChanged"));
        assert!(sent[0].contains("1440"));
    }

    #[test]
    fn test_handle_end_turn_command() {
        let mut game = Game::new(GameState::<MockRng>::default());
        let sink = RecordingSink::default();

        game.handle_command(Command::EndTurn, &sink);
        assert_eq!(game.state().current_player(), PlayerNum::P2);
        assert!(sink.0.borrow()[0].contains("TurnEnded"));

        game.handle_command(Command::EndTurn, &sink);
        assert_eq!(game.state().current_player(), PlayerNum::P1);
    }

    #[test]
    fn test_full_turn_round_trip() {
        let mut game = Game::new(GameState::<MockRng>::default());

        game.handle_message("\"Roll\"", &MockSender);
        game.handle_message("\"Buy\"", &MockSender);
        game.handle_message("\"EndTurn\"", &MockSender);

        // P1 landed on Chance, so the buy was a silent no-op
        assert_eq!(game.state().player(PlayerNum::P1).money, STARTING_MONEY);
        assert_eq!(game.state().current_player(), PlayerNum::P2);
        assert!(game.state().last_roll().is_none());
    }
}
