use chess_core::{generate_moves, Move, Position, Side};

/// One node of the materialized search tree: a position snapshot, the
/// move that produced it, and the cumulative material delta along the
/// path from the root. Positive values favor the engine side.
#[derive(Clone, Debug)]
pub struct Node {
    pub board: Position,
    /// Originating move; `None` only at the root.
    pub mv: Option<Move>,
    /// Sum of the capture deltas on the path from the root. Quiet moves
    /// contribute zero, so a capture-free path keeps the root's value.
    pub value: i32,
    pub children: Vec<Node>,
}

impl Node {
    pub fn root(board: Position) -> Self {
        Node {
            board,
            mv: None,
            value: 0,
            children: Vec::new(),
        }
    }

    /// Expands the full game tree below this node, `depth` plies deep.
    ///
    /// Every move of the side to move gets a child built on its own
    /// independent board copy; the child's value is computed from the
    /// capture delta alone, so no board is ever re-scored from scratch.
    /// `boards_examined` counts generated moves across the whole
    /// expansion and ends up in the search report.
    pub fn populate(&mut self, depth: u8, boards_examined: &mut u64) {
        if depth == 0 {
            return;
        }
        let moves = generate_moves(&self.board);
        *boards_examined += moves.len() as u64;
        self.children.reserve(moves.len());
        for mv in moves {
            let value_change = match self.board.piece_at(mv.to) {
                // A capture counts against the victim's side: the sign
                // convention makes it a gain for whoever is moving.
                Some(victim) => -victim.side.sign() * victim.kind.material(),
                None => 0,
            };
            let mut child = Node {
                board: self.board.child(mv),
                mv: Some(mv),
                value: self.value + value_change,
                children: Vec::new(),
            };
            child.populate(depth - 1, boards_examined);
            self.children.push(child);
        }
    }

    /// Bottom-up minimax fold. A leaf scores itself; an internal node
    /// takes the minimum of its children's values when the human side
    /// is to move here, the maximum otherwise, and reports that value
    /// with its *own* originating move. Ties keep the first child
    /// encountered; the root-level tie-break happens in the selector.
    pub fn propagate(&self) -> (i32, Option<Move>) {
        if self.children.is_empty() {
            return (self.value, self.mv);
        }
        let mut best = self.children[0].propagate().0;
        for child in &self.children[1..] {
            let (v, _) = child.propagate();
            let better = match self.board.side_to_move {
                Side::Human => v < best,
                Side::Engine => v > best,
            };
            if better {
                best = v;
            }
        }
        (best, self.mv)
    }
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tree_tests;
