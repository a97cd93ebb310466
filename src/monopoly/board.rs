use crate::monopoly::player::PlayerNum;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("a board must contain at least one square")]
    Empty,
}

/// The color sets of the street properties.
#[derive(Serialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColorGroup {
    Brown,
    LightBlue,
}

impl ColorGroup {
    /// The hex color the view uses for the property's color bar.
    pub fn hex(&self) -> &'static str {
        match self {
            ColorGroup::Brown => "#8B4513",
            ColorGroup::LightBlue => "#87CEEB",
        }
    }
}

#[derive(Serialize, Copy, Clone, Debug, PartialEq)]
pub enum SquareKind {
    /// GO. Landing or passing here pays nothing.
    Special,
    Property {
        price: i32,
        rent: i32,
        group: ColorGroup,
    },
    /// Community chest. Card effects are not implemented.
    Chest,
    /// Tax squares carry an amount, but collection is not implemented.
    Tax { amount: i32 },
    /// Railroads charge rent once owned but cannot be bought.
    Railroad { price: i32, rent: i32 },
    /// Chance. Card effects are not implemented.
    Chance,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Square {
    name: String,
    kind: SquareKind,
    owner: Option<PlayerNum>,
}

impl Square {
    pub fn new(name: &str, kind: SquareKind) -> Self {
        Square {
            name: name.to_string(),
            kind,
            owner: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> SquareKind {
        self.kind
    }

    pub fn owner(&self) -> Option<PlayerNum> {
        self.owner
    }

    // Ownership is never cleared once set; there is no trading or selling.
    pub(crate) fn set_owner(&mut self, owner: PlayerNum) {
        self.owner = Some(owner);
    }

    pub fn price(&self) -> Option<i32> {
        match self.kind {
            SquareKind::Property { price, .. } | SquareKind::Railroad { price, .. } => Some(price),
            _ => None,
        }
    }

    pub fn rent(&self) -> Option<i32> {
        match self.kind {
            SquareKind::Property { rent, .. } | SquareKind::Railroad { rent, .. } => Some(rent),
            _ => None,
        }
    }

    /// Streets and railroads charge rent when owned.
    pub fn charges_rent(&self) -> bool {
        matches!(
            self.kind,
            SquareKind::Property { .. } | SquareKind::Railroad { .. }
        )
    }

    /// Only plain street properties can be bought.
    pub fn is_purchasable(&self) -> bool {
        matches!(self.kind, SquareKind::Property { .. })
    }
}

#[derive(Serialize, Copy, Clone, Debug, PartialEq, Eq)]
pub struct SquareIndex(usize);

impl SquareIndex {
    /// GO. Every board has a square at position 0.
    pub const GO: SquareIndex = SquareIndex(0);

    // Enforce that the index refers to a square on the given board
    pub fn new(board: &Board, idx: usize) -> Option<Self> {
        if idx < board.len() {
            Some(SquareIndex(idx))
        } else {
            None
        }
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

#[derive(Serialize, Debug, PartialEq)]
pub struct Board(Vec<Square>);

impl Board {
    pub fn new(squares: Vec<Square>) -> Result<Self, BoardError> {
        if squares.is_empty() {
            return Err(BoardError::Empty);
        }
        Ok(Board(squares))
    }

    /// The reference layout: the opening stretch of the US board.
    pub fn standard() -> Self {
        use SquareKind::*;
        Board(vec![
            Square::new("GO", Special),
            Square::new(
                "Mediterranean Avenue",
                Property {
                    price: 60,
                    rent: 2,
                    group: ColorGroup::Brown,
                },
            ),
            Square::new("Community Chest", Chest),
            Square::new(
                "Baltic Avenue",
                Property {
                    price: 60,
                    rent: 4,
                    group: ColorGroup::Brown,
                },
            ),
            Square::new("Income Tax", Tax { amount: 200 }),
            Square::new(
                "Reading Railroad",
                Railroad {
                    price: 200,
                    rent: 25,
                },
            ),
            Square::new(
                "Oriental Avenue",
                Property {
                    price: 100,
                    rent: 6,
                    group: ColorGroup::LightBlue,
                },
            ),
            Square::new("Chance", Chance),
            Square::new(
                "Vermont Avenue",
                Property {
                    price: 100,
                    rent: 6,
                    group: ColorGroup::LightBlue,
                },
            ),
            Square::new(
                "Connecticut Avenue",
                Property {
                    price: 120,
                    rent: 8,
                    group: ColorGroup::LightBlue,
                },
            ),
        ])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        // Board::new rejects empty boards
        false
    }

    pub fn square(&self, idx: SquareIndex) -> &Square {
        &self.0[idx.get()]
    }

    pub(crate) fn square_mut(&mut self, idx: SquareIndex) -> &mut Square {
        &mut self.0[idx.get()]
    }

    /// Advance a position clockwise, wrapping past the last square.
    pub fn advance(&self, from: SquareIndex, steps: u8) -> SquareIndex {
        SquareIndex((from.get() + steps as usize) % self.0.len())
    }

    pub fn squares(&self) -> impl Iterator<Item = &Square> {
        self.0.iter()
    }
}
