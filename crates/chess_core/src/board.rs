use crate::types::*;

/// Board state: an 8x8 mailbox of owned pieces plus whose turn it is.
///
/// Pieces are plain `Copy` values, so cloning a position copies every
/// piece with it. Search branches therefore own their grids outright
/// and can never write through to the live game.
#[derive(Clone, Debug)]
pub struct Position {
    pub board: [Option<Piece>; 64],
    pub side_to_move: Side,
}

impl Position {
    /// Standard opening setup. Human pieces on ranks 0-1, engine pieces
    /// on ranks 6-7, every `moved` flag fresh.
    pub fn startpos() -> Self {
        let mut p = Position {
            board: [None; 64],
            side_to_move: Side::Human,
        };

        // Pawns
        for f in 0..8 {
            p.board[8 + f] = Some(Piece::new(Side::Human, PieceKind::Pawn));
            p.board[48 + f] = Some(Piece::new(Side::Engine, PieceKind::Pawn));
        }
        // Back ranks
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            p.board[f] = Some(Piece::new(Side::Human, kind));
            p.board[56 + f] = Some(Piece::new(Side::Engine, kind));
        }
        p
    }

    /// Empty board, useful for setting up test scenarios piece by piece.
    pub fn empty(side_to_move: Side) -> Self {
        Position {
            board: [None; 64],
            side_to_move,
        }
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.board[sq as usize]
    }
    pub fn set_piece(&mut self, sq: u8, pc: Option<Piece>) {
        self.board[sq as usize] = pc;
    }

    /// Ownership query, total over all integer coordinates. Bounds are
    /// checked before the grid is indexed, so callers may probe squares
    /// past the edge and get `OffBoard` back.
    pub fn occupancy(&self, file: i8, rank: i8) -> Occupancy {
        match sq(file, rank) {
            None => Occupancy::OffBoard,
            Some(s) => match self.piece_at(s) {
                None => Occupancy::Empty,
                Some(pc) => Occupancy::Owned(pc.side),
            },
        }
    }

    /// Relocates the piece on `from` to `to`, clearing `from` and
    /// overwriting whatever stood on `to`. Marks the piece as moved.
    /// No legality check, no turn flip; both are the caller's job.
    pub fn make_move(&mut self, mv: Move) {
        self.relocate(mv, true);
    }

    fn relocate(&mut self, mv: Move, mark_moved: bool) {
        let mut moved = match self.piece_at(mv.from) {
            Some(pc) => pc,
            None => return, // nothing to move
        };
        if mark_moved {
            moved.moved = true;
        }
        self.set_piece(mv.from, None);
        self.set_piece(mv.to, Some(moved));
    }

    /// Independent successor position for search: a full copy with the
    /// turn flipped and `mv` applied. The `moved` flag is deliberately
    /// left untouched on the copy, so a speculative line keeps the
    /// pawn double-step available the way the live game would not.
    pub fn child(&self, mv: Move) -> Position {
        let mut next = self.clone();
        next.side_to_move = self.side_to_move.other();
        next.relocate(mv, false);
        next
    }

    pub fn king_present(&self, side: Side) -> bool {
        self.board
            .iter()
            .flatten()
            .any(|pc| pc.side == side && pc.kind == PieceKind::King)
    }

    /// Win scan: a side wins the moment the opposing king is gone from
    /// the grid. There is no check or checkmate in this ruleset.
    pub fn winner(&self) -> Option<Side> {
        if !self.king_present(Side::Engine) {
            return Some(Side::Human);
        }
        if !self.king_present(Side::Human) {
            return Some(Side::Engine);
        }
        None
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
