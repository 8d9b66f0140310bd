//! Interactive terminal front end.
//!
//! Run with:
//! `cargo run -- [--verbose] [--permissive] [--random | --seed <n>] [--position <placement>]`
//!
//! Commands: a square such as `e2` (select / move), `move <from> <to>`,
//! `undo`, `redo`, `history`, `board`, `moves`, `new`, `help`, `quit`.

use std::io::{self, BufRead, Write};

use mailbox_chess::chess_errors::ChessErrors;
use mailbox_chess::controller::game_config::GameConfig;
use mailbox_chess::controller::game_controller::{
    GameController, MoveCue, MoveReport, SelectionOutcome,
};
use mailbox_chess::move_generation::move_generator::get_all_moves;
use mailbox_chess::utils::render_game_state::render_game_state;

const HELP: &str = "commands: <square> | move <from> <to> | undo | redo | history | board | moves | new | quit";

fn main() -> Result<(), String> {
    let config = GameConfig::from_args(std::env::args().skip(1)).map_err(|e| e.to_string())?;
    let mut game = GameController::new(config).map_err(|e| e.to_string())?;

    println!("{}", render_game_state(game.game_state(), &[]));
    println!("{HELP}");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line.map_err(|e| e.to_string())?;
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };

        let result = match command {
            "quit" | "exit" => break,
            "help" => {
                println!("{HELP}");
                Ok(())
            }
            "board" => {
                println!(
                    "{}",
                    render_game_state(game.game_state(), game.highlighted_squares())
                );
                Ok(())
            }
            "history" => {
                println!("{}", game.print_move_history());
                Ok(())
            }
            "moves" => get_all_moves(&game.game_state().board, game.side_to_move()).map(|moves| {
                let listed: Vec<String> = moves
                    .iter()
                    .map(|(from, to)| format!("{from}{to}"))
                    .collect();
                println!("{} moves: {}", listed.len(), listed.join(" "));
            }),
            "new" => game.new_game().map(|()| {
                println!("{}", render_game_state(game.game_state(), &[]));
            }),
            "undo" => game.undo().map(|report| announce("undo", &report)),
            "redo" => game.redo().map(|report| announce("redo", &report)),
            "move" => match (parts.next(), parts.next()) {
                (Some(from), Some(to)) => game.commit_move(from, to).map(|report| {
                    announce("played", &report);
                    println!("{}", render_game_state(game.game_state(), &[]));
                }),
                _ => Err(ChessErrors::InvalidArgument("usage: move <from> <to>".to_owned())),
            },
            square => game.square_activated(square).map(|outcome| match outcome {
                SelectionOutcome::Selected { square, targets, .. } => {
                    println!("{square}: {}", targets.join(" "));
                    println!(
                        "{}",
                        render_game_state(game.game_state(), game.highlighted_squares())
                    );
                }
                SelectionOutcome::Deselected { square } => println!("{square} deselected"),
                SelectionOutcome::Committed(report) => {
                    announce("played", &report);
                    println!("{}", render_game_state(game.game_state(), &[]));
                }
                SelectionOutcome::Ignored => {}
            }),
        };

        if let Err(err) = result {
            println!("{err}");
        }
        stdout.flush().map_err(|e| e.to_string())?;
    }

    Ok(())
}

fn announce(action: &str, report: &MoveReport) {
    let cue = match report.cue {
        MoveCue::Move => "move",
        MoveCue::Capture => "capture",
    };
    println!(
        "{action} {} ({}) [{cue}]",
        report.chess_move.to_chess_notation(),
        report.chess_move
    );
}
