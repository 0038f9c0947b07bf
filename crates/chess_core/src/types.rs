#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Human,
    Engine,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Human => Side::Engine,
            Side::Engine => Side::Human,
        }
    }

    /// Signed unit value: +1 for the maximizing engine side, -1 for the
    /// human side. Search values follow this convention, so a capture
    /// always contributes `-sign` times the victim's material.
    pub fn sign(self) -> i32 {
        match self {
            Side::Human => -1,
            Side::Engine => 1,
        }
    }

    /// Pawn advance direction in ranks. Human pieces start on ranks 0-1
    /// and push toward rank 7; engine pieces push the other way.
    pub fn forward(self) -> i8 {
        match self {
            Side::Human => 1,
            Side::Engine => -1,
        }
    }
}

/// Result of asking who holds a square. Out-of-range coordinates are a
/// valid query and classify as `OffBoard` rather than failing, so the
/// movement rules can probe freely past the edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Occupancy {
    OffBoard,
    Empty,
    Owned(Side),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Material value in tenths of a pawn, so the half-point bishop stays
    /// exact and value ties compare with plain integer equality. The king
    /// dwarfs everything else: capturing it outweighs any exchange the
    /// search can find, which is how the game ends in this ruleset.
    pub const fn material(self) -> i32 {
        match self {
            PieceKind::Pawn => 10,
            PieceKind::Knight => 30,
            PieceKind::Bishop => 35,
            PieceKind::Rook => 40,
            PieceKind::Queen => 90,
            PieceKind::King => 10_000,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub side: Side,
    pub kind: PieceKind,
    /// Only the pawn's double-step rule reads this.
    pub moved: bool,
}

impl Piece {
    pub fn new(side: Side, kind: PieceKind) -> Self {
        Self {
            side,
            kind,
            moved: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: u8, // 0..63
    pub to: u8,   // 0..63
}

impl Move {
    pub fn new(from: u8, to: u8) -> Self {
        Self { from, to }
    }
}

// Helpers
pub fn file_of(sq: u8) -> i8 {
    (sq % 8) as i8
}
pub fn rank_of(sq: u8) -> i8 {
    (sq / 8) as i8
}
pub fn sq(file: i8, rank: i8) -> Option<u8> {
    if (0..8).contains(&file) && (0..8).contains(&rank) {
        Some((rank as u8) * 8 + (file as u8))
    } else {
        None
    }
}

pub fn sq_to_coord(sq: u8) -> String {
    let f = (b'a' + (sq % 8)) as char;
    let r = (b'1' + (sq / 8)) as char;
    format!("{f}{r}")
}

pub fn coord_to_sq(c: &str) -> Option<u8> {
    let b = c.as_bytes();
    if b.len() != 2 {
        return None;
    }
    let f = b[0];
    let r = b[1];
    if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
        return None;
    }
    let file = f - b'a';
    let rank = r - b'1';
    Some(rank * 8 + file)
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
