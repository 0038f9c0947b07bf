//! Terminal game loop: human against the minimax engine.
//!
//! The loop owns everything the engine does not: reading moves from
//! stdin, validating them against the generated move list, rendering
//! the board, flipping the turn, and scanning for a captured king
//! after every half-move.

use std::env;
use std::io::{self, BufRead, Write};
use std::process;

use chess_core::{coord_to_sq, generate_moves, sq, sq_to_coord, Move, Piece, PieceKind, Position, Side};
use minimax_engine::run_search;
use rand::thread_rng;

const DEFAULT_DEPTH: u8 = 3;

fn print_usage() {
    println!("kingtaker - play chess-by-movement-rules against a minimax engine");
    println!();
    println!("Usage:");
    println!("  kingtaker [--depth N]");
    println!();
    println!("Options:");
    println!("  --depth N   search depth in plies (default {DEFAULT_DEPTH});");
    println!("              each extra ply multiplies think time by ~20-60x");
    println!();
    println!("Enter moves as coordinate pairs, e.g. e2e4. 'quit' exits.");
}

fn parse_args() -> u8 {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut depth = DEFAULT_DEPTH;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--depth" => {
                i += 1;
                depth = match args.get(i).and_then(|v| v.parse::<u8>().ok()) {
                    Some(d) if d >= 1 => d,
                    _ => {
                        eprintln!("Error: --depth expects an integer >= 1");
                        print_usage();
                        process::exit(2);
                    }
                };
            }
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                process::exit(2);
            }
        }
        i += 1;
    }
    depth
}

fn piece_char(pc: Piece) -> char {
    let c = match pc.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match pc.side {
        Side::Human => c.to_ascii_uppercase(),
        Side::Engine => c,
    }
}

fn print_board(pos: &Position) {
    println!();
    for rank in (0..8i8).rev() {
        print!("{} ", rank + 1);
        for file in 0..8i8 {
            let cell = sq(file, rank).and_then(|s| pos.piece_at(s));
            match cell {
                Some(pc) => print!(" {}", piece_char(pc)),
                None => print!(" ."),
            }
        }
        println!();
    }
    println!("   a b c d e f g h");
    println!();
}

/// Accepts "e2e4" or "e2 e4".
fn parse_move(line: &str) -> Option<Move> {
    let compact: String = line.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.len() != 4 {
        return None;
    }
    let from = coord_to_sq(&compact[..2])?;
    let to = coord_to_sq(&compact[2..])?;
    Some(Move::new(from, to))
}

fn announce_winner(winner: Side) {
    match winner {
        Side::Human => println!("You win! The engine's king is captured."),
        Side::Engine => println!("The engine wins! Your king is captured."),
    }
}

fn main() {
    let depth = parse_args();
    let mut pos = Position::startpos();
    let mut rng = thread_rng();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Search depth: {depth} plies. You play the uppercase pieces.");
    print_board(&pos);

    loop {
        if let Some(winner) = pos.winner() {
            announce_winner(winner);
            break;
        }

        if pos.side_to_move == Side::Human {
            print!("your move> ");
            io::stdout().flush().ok();

            let line = match lines.next() {
                Some(Ok(l)) => l,
                _ => break, // EOF or read error
            };
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if trimmed == "quit" || trimmed == "exit" {
                break;
            }

            let mv = match parse_move(trimmed) {
                Some(mv) => mv,
                None => {
                    eprintln!("Could not read '{}'; enter moves like e2e4.", trimmed);
                    continue;
                }
            };
            if !generate_moves(&pos).contains(&mv) {
                eprintln!(
                    "{} to {} is not a legal move for you.",
                    sq_to_coord(mv.from),
                    sq_to_coord(mv.to)
                );
                continue;
            }

            pos.make_move(mv);
            pos.side_to_move = pos.side_to_move.other();
        } else {
            match run_search(&pos, depth, &mut rng) {
                Ok(report) => {
                    println!(
                        "Moved {} to {} in {:.2} seconds. ({} possibilities analyzed)",
                        sq_to_coord(report.mv.from),
                        sq_to_coord(report.mv.to),
                        report.elapsed.as_secs_f64(),
                        report.boards_examined
                    );
                    pos.make_move(report.mv);
                    pos.side_to_move = pos.side_to_move.other();
                }
                Err(err) => {
                    // no candidate moves left: treat as game over
                    println!("The engine cannot move ({err}).");
                    break;
                }
            }
        }

        print_board(&pos);
    }
}
