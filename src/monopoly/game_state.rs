use crate::monopoly::board::{Board, SquareIndex};
use crate::monopoly::dice::{DiceRng, DiceRoll};
use crate::monopoly::player::{Player, PlayerNum, Players};

/// The state of one two-player session: the board, both players, and the
/// per-turn bookkeeping the view reads back.
///
/// Operations are advisory rather than enforcing: nothing stops a caller
/// from rolling twice in a turn or ending a turn without rolling, and
/// invalid actions are declined silently instead of returning errors.
#[derive(Debug)]
pub struct GameState<R: DiceRng> {
    board: Board,
    players: Players,
    current_player: PlayerNum,
    last_roll: Option<DiceRoll>,
    can_buy: bool,
    rng: R,
}

impl<R: DiceRng + Default> Default for GameState<R> {
    fn default() -> Self {
        GameState::new(Board::standard(), Players::default(), R::default())
    }
}

impl<R: DiceRng> GameState<R> {
    pub fn new(board: Board, players: Players, rng: R) -> Self {
        GameState {
            board,
            players,
            current_player: PlayerNum::P1,
            last_roll: None,
            can_buy: false,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self, num: PlayerNum) -> &Player {
        &self.players[num]
    }

    pub fn players(&self) -> &Players {
        &self.players
    }

    pub fn current_player(&self) -> PlayerNum {
        self.current_player
    }

    /// The most recent roll of the current turn, if any.
    pub fn last_roll(&self) -> Option<DiceRoll> {
        self.last_roll
    }

    /// Whether the view should offer the buy action.
    pub fn can_buy(&self) -> bool {
        self.can_buy
    }

    /// Name of the square the player is standing on.
    pub fn square_name_of(&self, num: PlayerNum) -> &str {
        self.board.square(self.players[num].position()).name()
    }

    /// Roll both dice and move the current player forward by their total,
    /// wrapping past the end of the board. No bonus is paid for passing GO.
    /// Landing on the opponent's square settles rent; landing on an unowned
    /// street opens the purchase window.
    pub fn roll_dice(&mut self) -> DiceRoll {
        let roll = DiceRoll {
            die1: self.rng.roll_die(),
            die2: self.rng.roll_die(),
        };
        let mover = self.current_player;
        let from = self.players[mover].position();
        let dest = self.board.advance(from, roll.total());
        self.move_player(mover, dest);

        let square = self.board.square(dest);
        self.can_buy = square.is_purchasable() && square.owner().is_none();
        self.last_roll = Some(roll);
        roll
    }

    /// Place a player on `dest`. A `SquareIndex` is always on the board, so
    /// wrapping is the caller's concern. Rent is settled when the square is
    /// owned by the other player.
    pub fn move_player(&mut self, num: PlayerNum, dest: SquareIndex) {
        self.players[num].set_position(dest);

        let square = self.board.square(dest);
        match square.owner() {
            Some(owner) if owner != num => self.pay_rent(num, dest),
            _ => {}
        }
    }

    /// Transfer the square's rent from `tenant` to the square's owner.
    /// Money may go negative; there is no bankruptcy handling.
    pub fn pay_rent(&mut self, tenant: PlayerNum, square: SquareIndex) {
        let (owner, rent) = {
            let square = self.board.square(square);
            match (square.owner(), square.rent()) {
                (Some(owner), Some(rent)) => (owner, rent),
                _ => return,
            }
        };
        if owner == tenant {
            return;
        }
        self.players[tenant].money -= rent;
        self.players[owner].money += rent;
    }

    /// Buy the square under the current player. Declines silently unless the
    /// square is an unowned street the player can afford. Railroads are
    /// priced but not purchasable.
    pub fn buy_property(&mut self) {
        let buyer = self.current_player;
        let position = self.players[buyer].position();
        let square = self.board.square(position);

        if !square.is_purchasable() || square.owner().is_some() {
            return;
        }
        let price = match square.price() {
            Some(price) => price,
            None => return,
        };
        if self.players[buyer].money < price {
            return;
        }

        self.players[buyer].money -= price;
        self.board.square_mut(position).set_owner(buyer);
        self.can_buy = false;
    }

    /// Hand the turn to the other player and clear the per-turn state.
    pub fn end_turn(&mut self) {
        self.current_player = self.current_player.other();
        self.can_buy = false;
        self.last_roll = None;
    }
}
