//! Console front end for the turn orchestrator.
//!
//! Reads one command per line from stdin:
//! - a square such as `c3` clicks that square,
//! - `moves` lists the moves open to the side to move,
//! - `mode <easy|medium|hard|pvp>` switches the opponent,
//! - `new` restarts, `quit` exits.

use std::io::{self, BufRead, Write};

use plum_draughts::engines::difficulty::PlayMode;
use plum_draughts::game_state::draughts_types::{Board, Square};
use plum_draughts::play::collaborators::{AudioCue, GameObserver, GameStatus};
use plum_draughts::play::turn_orchestrator::{GameConfig, TurnOrchestrator};
use plum_draughts::utils::notation::square_from_notation;
use plum_draughts::utils::render_game_state::render_board;

struct ConsoleObserver;

impl GameObserver for ConsoleObserver {
    fn render(&mut self, board: &Board, legal_targets: &[Square]) {
        println!("{}", render_board(board, legal_targets));
    }

    fn audio_cue(&mut self, cue: AudioCue) {
        match cue {
            AudioCue::Move => println!("(move)"),
            AudioCue::Capture => println!("(capture)"),
            AudioCue::Win => println!("(win)"),
        }
    }

    fn status(&mut self, status: &GameStatus) {
        match status.winner {
            Some(winner) if !status.running => println!("{winner} wins"),
            _ => println!(
                "light {} dark {}, {} to move",
                status.light_pieces, status.dark_pieces, status.side_to_move
            ),
        }
    }
}

fn main() {
    env_logger::init();

    let mut game = TurnOrchestrator::with_observer(GameConfig::default(), ConsoleObserver);
    let stdin = io::stdin();

    prompt();
    for line in stdin.lock().lines() {
        let Ok(line) = line else {
            break;
        };
        let mut words = line.split_whitespace();
        match (words.next(), words.next()) {
            (None, _) => {}
            (Some("quit"), _) => break,
            (Some("new"), _) => game.restart(),
            (Some("moves"), _) => {
                let moves: Vec<String> = game.legal_moves().iter().map(ToString::to_string).collect();
                println!("{}", moves.join(" "));
            }
            (Some("mode"), Some(mode)) => match mode.parse::<PlayMode>() {
                Ok(mode) => {
                    if let Err(err) = game.set_mode(mode) {
                        println!("{err}");
                    }
                }
                Err(err) => println!("{err}"),
            },
            (Some(text), _) => match square_from_notation(text) {
                Ok(square) => {
                    if let Err(err) = game.select_square(i32::from(square.row()), i32::from(square.col())) {
                        println!("{err}");
                    }
                }
                Err(err) => println!("{err}"),
            },
        }
        prompt();
    }
}

fn prompt() {
    print!("> ");
    io::stdout().flush().ok();
}
