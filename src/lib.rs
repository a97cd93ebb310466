pub mod game;
pub mod messages;
pub mod monopoly;
pub mod util;
pub mod view;
