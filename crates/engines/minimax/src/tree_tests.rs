use super::*;
use chess_core::{coord_to_sq, Piece, PieceKind};

fn put(pos: &mut Position, coord: &str, side: Side, kind: PieceKind) {
    let sq = coord_to_sq(coord).unwrap();
    pos.set_piece(sq, Some(Piece::new(side, kind)));
}

fn mv(from: &str, to: &str) -> Move {
    Move::new(coord_to_sq(from).unwrap(), coord_to_sq(to).unwrap())
}

fn collect_leaves<'a>(node: &'a Node, out: &mut Vec<&'a Node>) {
    if node.children.is_empty() {
        out.push(node);
    } else {
        for child in &node.children {
            collect_leaves(child, out);
        }
    }
}

#[test]
fn test_populate_counts_and_quiet_values() {
    let mut root = Node::root(Position::startpos());
    let mut boards = 0u64;
    root.populate(2, &mut boards);

    // 20 root moves, then 20 replies behind each of them
    assert_eq!(root.children.len(), 20);
    assert_eq!(boards, 20 + 20 * 20);

    let mut leaves = Vec::new();
    collect_leaves(&root, &mut leaves);
    assert_eq!(leaves.len(), 400);
    // no capture is reachable in two plies from the start, so every
    // path is quiet and keeps the root value
    assert!(leaves.iter().all(|n| n.value == 0));
}

#[test]
fn test_capture_sets_value_change() {
    let mut pos = Position::empty(Side::Human);
    put(&mut pos, "a1", Side::Human, PieceKind::Rook);
    put(&mut pos, "a3", Side::Engine, PieceKind::Pawn);

    let mut root = Node::root(pos);
    let mut boards = 0u64;
    root.populate(1, &mut boards);

    // up the file: a2 and the capture on a3; along the rank: b1..h1
    assert_eq!(root.children.len(), 9);
    for child in &root.children {
        if child.mv == Some(mv("a1", "a3")) {
            // human takes an engine pawn: 1 pawn in the human's favor
            assert_eq!(child.value, -10);
        } else {
            assert_eq!(child.value, 0);
        }
    }
}

#[test]
fn test_values_accumulate_along_path() {
    let mut pos = Position::empty(Side::Human);
    put(&mut pos, "a1", Side::Human, PieceKind::Rook);
    put(&mut pos, "a3", Side::Engine, PieceKind::Pawn);
    put(&mut pos, "h3", Side::Engine, PieceKind::Queen);

    let mut root = Node::root(pos);
    let mut boards = 0u64;
    root.populate(2, &mut boards);

    let rxp = root
        .children
        .iter()
        .find(|c| c.mv == Some(mv("a1", "a3")))
        .expect("capture child missing");
    assert_eq!(rxp.value, -10);

    // the queen recaptures the rook along the third rank; the leaf
    // carries the sum of both deltas: -10 + 40
    let qxr = rxp
        .children
        .iter()
        .find(|c| c.mv == Some(mv("h3", "a3")))
        .expect("recapture child missing");
    assert_eq!(qxr.value, 30);
}

#[test]
fn test_propagate_leaf_returns_own_pair() {
    let node = Node {
        board: Position::empty(Side::Human),
        mv: Some(mv("e2", "e4")),
        value: 7,
        children: Vec::new(),
    };
    assert_eq!(node.propagate(), (7, Some(mv("e2", "e4"))));
}

fn leaf(value: i32) -> Node {
    Node {
        board: Position::empty(Side::Engine),
        mv: Some(mv("a1", "a2")),
        value,
        children: Vec::new(),
    }
}

fn internal(side_to_move: Side, origin: Move, children: Vec<Node>) -> Node {
    Node {
        board: Position::empty(side_to_move),
        mv: Some(origin),
        value: 0,
        children,
    }
}

#[test]
fn test_propagate_two_ply_maximizing_root() {
    // engine to move at the root, human replies at the children:
    // min(3, 5) = 3 and min(2, 9) = 2, root takes the max = 3
    let c1 = internal(Side::Human, mv("b1", "c3"), vec![leaf(3), leaf(5)]);
    let c2 = internal(Side::Human, mv("g1", "f3"), vec![leaf(2), leaf(9)]);
    let root = Node {
        board: Position::empty(Side::Engine),
        mv: None,
        value: 0,
        children: vec![c1, c2],
    };
    assert_eq!(root.propagate(), (3, None));
}

#[test]
fn test_propagate_two_ply_minimizing_root() {
    // human to move at the root, engine replies at the children:
    // max(3, 5) = 5 and max(2, 9) = 9, root takes the min = 5
    let c1 = internal(Side::Engine, mv("b1", "c3"), vec![leaf(3), leaf(5)]);
    let c2 = internal(Side::Engine, mv("g1", "f3"), vec![leaf(2), leaf(9)]);
    let root = Node {
        board: Position::empty(Side::Human),
        mv: None,
        value: 0,
        children: vec![c1, c2],
    };
    assert_eq!(root.propagate(), (5, None));
}

#[test]
fn test_propagate_reports_own_move_not_childs() {
    let origin = mv("b1", "c3");
    let child = internal(Side::Human, origin, vec![leaf(4), leaf(6)]);
    let (value, reported) = child.propagate();
    assert_eq!(value, 4);
    // the propagated pair names the move that *entered* this node
    assert_eq!(reported, Some(origin));
}
