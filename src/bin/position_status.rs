use std::env;
use std::process;

use chess_rules::Game;

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("usage: position_status <move1> <move2> ...");
        process::exit(2);
    }

    let mut game = Game::new();
    for mv in &args {
        if let Err(err) = game.play_str(mv) {
            eprintln!("{mv}: {err}");
            process::exit(1);
        }
    }

    let side = game.side_to_move();
    let board = game.board();
    let legal_moves = board.all_legal_moves(side);
    println!("side_to_move: {}", side.name());
    println!("legal_moves: {}", legal_moves.len());
    println!("check: {}", board.is_in_check(side));
    println!("status: {}", game.status());
    for (i, description) in game.history().iter().enumerate() {
        println!("{}. {}", i + 1, description);
    }
    for (from, mv) in &legal_moves {
        println!("{from}{}", mv.to);
    }
}
