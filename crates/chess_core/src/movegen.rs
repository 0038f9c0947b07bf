use crate::{board::Position, types::*};

/// Generate every movement-rule move for the side to move, returning a
/// freshly allocated vector. Delegates to `generate_moves_into`.
pub fn generate_moves(pos: &Position) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    generate_moves_into(pos, &mut out);
    out
}

/// Generate all moves into the provided buffer, reusing it across calls.
///
/// Moves are pseudo-legal: each destination is reachable under the
/// piece's movement pattern and is empty or enemy-held, nothing more.
/// There is no self-check filtering in this ruleset; the game ends only
/// when a king is actually captured.
///
/// Emission order is row-major over origin squares, then each rule's own
/// destination order. That ordering only pins down the candidate list
/// the selector shuffles over, it carries no preference.
pub fn generate_moves_into(pos: &Position, out: &mut Vec<Move>) {
    out.clear();
    for from in 0..64u8 {
        let pc = match pos.piece_at(from) {
            Some(p) => p,
            None => continue,
        };
        if pc.side != pos.side_to_move {
            continue;
        }
        match pc.kind {
            PieceKind::Pawn => gen_pawn(pos, from, pc, out),
            PieceKind::Knight => gen_knight(pos, from, pc.side, out),
            PieceKind::Bishop => gen_slider(
                pos,
                from,
                pc.side,
                out,
                &[(1, 1), (1, -1), (-1, 1), (-1, -1)],
            ),
            PieceKind::Rook => gen_slider(
                pos,
                from,
                pc.side,
                out,
                &[(1, 0), (-1, 0), (0, 1), (0, -1)],
            ),
            PieceKind::Queen => gen_slider(
                pos,
                from,
                pc.side,
                out,
                &[
                    (1, 1),
                    (1, -1),
                    (-1, 1),
                    (-1, -1),
                    (1, 0),
                    (-1, 0),
                    (0, 1),
                    (0, -1),
                ],
            ),
            PieceKind::King => gen_king(pos, from, pc.side, out),
        }
    }
}

fn gen_pawn(pos: &Position, from: u8, pc: Piece, out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);
    let dir = pc.side.forward();

    // forward 1, and forward 2 while the pawn has never moved.
    // The double step is gated on the piece's own flag, not its rank.
    if let Some(to) = sq(f, r + dir) {
        if pos.piece_at(to).is_none() {
            out.push(Move::new(from, to));
            if !pc.moved {
                if let Some(to2) = sq(f, r + 2 * dir) {
                    if pos.piece_at(to2).is_none() {
                        out.push(Move::new(from, to2));
                    }
                }
            }
        }
    }

    // diagonal captures, strictly onto enemy-held squares
    for df in [-1, 1] {
        if let Some(to) = sq(f + df, r + dir) {
            if let Some(tpc) = pos.piece_at(to) {
                if tpc.side != pc.side {
                    out.push(Move::new(from, to));
                }
            }
        }
    }
}

fn gen_knight(pos: &Position, from: u8, c: Side, out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);
    let deltas = [
        (1, 2),
        (2, 1),
        (-1, 2),
        (-2, 1),
        (1, -2),
        (2, -1),
        (-1, -2),
        (-2, -1),
    ];
    for (df, dr) in deltas {
        if let Some(to) = sq(f + df, r + dr) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.side != c => out.push(Move::new(from, to)),
                _ => {}
            }
        }
    }
}

/// Ray-cast along each direction: empty squares keep the ray alive, the
/// first enemy piece is included and stops it, a friendly piece or the
/// board edge stops it without being included.
fn gen_slider(pos: &Position, from: u8, c: Side, out: &mut Vec<Move>, dirs: &[(i8, i8)]) {
    let f0 = file_of(from);
    let r0 = rank_of(from);
    for (df, dr) in dirs {
        let mut f = f0 + df;
        let mut r = r0 + dr;
        while let Some(to) = sq(f, r) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.side != c => {
                    out.push(Move::new(from, to));
                    break;
                }
                _ => break,
            }
            f += df;
            r += dr;
        }
    }
}

fn gen_king(pos: &Position, from: u8, c: Side, out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);
    let deltas = [
        (1, 1),
        (1, 0),
        (1, -1),
        (0, 1),
        (0, -1),
        (-1, 1),
        (-1, 0),
        (-1, -1),
    ];
    for (df, dr) in deltas {
        if let Some(to) = sq(f + df, r + dr) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.side != c => out.push(Move::new(from, to)),
                _ => {}
            }
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
