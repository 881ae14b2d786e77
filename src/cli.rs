//! Line-oriented terminal front-end.
//!
//! Reads one command per line and answers on the output stream:
//!
//! - `e2` clicks a square (select, deselect, or play the selected piece)
//! - `e2e4`, `e2 e4` or `e2-e4` plays a move directly
//! - `board`, `moves`, `history`, `reset`, `help`, `quit`

use std::io::{self, BufRead, Write};

use log::warn;

use crate::board::Square;
use crate::game::{square_label, Game};

const HELP: &str = "commands: <square> | <from><to> | board | moves | history | reset | help | quit";

/// Run the command loop until `quit` or end of input.
pub fn run_loop<R: BufRead, W: Write>(input: R, output: &mut W) -> io::Result<()> {
    let mut game = Game::new();
    print_position(&game, output)?;

    for line in input.lines() {
        let line = line?;
        let command = line.trim();
        if command.is_empty() {
            continue;
        }

        match command {
            "quit" | "exit" => break,
            "help" => writeln!(output, "{HELP}")?,
            "board" => print_position(&game, output)?,
            "reset" => {
                game.reset();
                print_position(&game, output)?;
            }
            "moves" => print_selection(&game, output)?,
            "history" => {
                for (i, description) in game.history().iter().enumerate() {
                    writeln!(output, "{}. {}", i + 1, description)?;
                }
            }
            _ => match command.parse::<Square>() {
                Ok(square) => {
                    if game.click(square).is_some() {
                        print_last_move(&game, output)?;
                        print_position(&game, output)?;
                    } else {
                        writeln!(output, "{}", game.message())?;
                        print_selection(&game, output)?;
                    }
                }
                Err(_) => match game.play_str(command) {
                    Ok(_) => {
                        print_last_move(&game, output)?;
                        print_position(&game, output)?;
                    }
                    Err(err) => {
                        warn!("rejected command {command:?}: {err}");
                        writeln!(output, "error: {err}")?;
                    }
                },
            },
        }
        output.flush()?;
    }

    Ok(())
}

/// Run the loop on stdin and stdout.
pub fn run_terminal_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_loop(stdin.lock(), &mut stdout)
}

fn print_position<W: Write>(game: &Game, output: &mut W) -> io::Result<()> {
    writeln!(output, "{}", game.board())?;
    writeln!(output, "{}", game.turn_text())?;
    writeln!(output, "{}", game.message())
}

fn print_last_move<W: Write>(game: &Game, output: &mut W) -> io::Result<()> {
    if let Some(description) = game.history().last() {
        writeln!(output, "{}. {}", game.history().len(), description)?;
    }
    Ok(())
}

fn print_selection<W: Write>(game: &Game, output: &mut W) -> io::Result<()> {
    let Some(from) = game.selected() else {
        return writeln!(output, "no piece selected");
    };
    let targets: Vec<String> = game.legal_moves().iter().map(ToString::to_string).collect();
    writeln!(
        output,
        "{}: {}",
        square_label(game.board(), from),
        targets.join(" ")
    )
}
