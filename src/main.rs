use monopoly_web::game::Game;
use monopoly_web::messages::Command;
use monopoly_web::monopoly::{GameRng, GameState};
use monopoly_web::view::ConsoleSink;
use std::io::BufRead;
use tracing::info;

/// Console stand-in for the browser view: reads commands from stdin and
/// prints the engine's notifications as JSON lines.
fn main() {
    tracing_subscriber::fmt().init();

    let mut game = Game::new(GameState::<GameRng>::default());
    let sink = ConsoleSink;
    info!("game ready; commands: roll, buy, end, quit");

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        let command = match line.trim() {
            "roll" => Command::Roll,
            "buy" => Command::Buy,
            "end" => Command::EndTurn,
            "quit" | "exit" => break,
            "" => continue,
            // Let raw JSON through so the wire format can be poked directly
            other => {
                game.handle_message(other, &sink);
                continue;
            }
        };
        game.handle_command(command, &sink);
    }
}
