use super::*;

#[test]
fn test_side_sign_and_other() {
    assert_eq!(Side::Engine.sign(), 1);
    assert_eq!(Side::Human.sign(), -1);
    assert_eq!(Side::Human.other(), Side::Engine);
    assert_eq!(Side::Engine.other(), Side::Human);
    assert_eq!(Side::Human.forward(), 1);
    assert_eq!(Side::Engine.forward(), -1);
}

#[test]
fn test_material_values_are_exact() {
    // Tenth-of-a-pawn scale keeps the 3.5 bishop integral.
    assert_eq!(PieceKind::Pawn.material(), 10);
    assert_eq!(PieceKind::Knight.material(), 30);
    assert_eq!(PieceKind::Bishop.material(), 35);
    assert_eq!(PieceKind::Rook.material(), 40);
    assert_eq!(PieceKind::Queen.material(), 90);
    assert_eq!(PieceKind::King.material(), 10_000);
}

#[test]
fn test_sq_bounds() {
    assert_eq!(sq(0, 0), Some(0));
    assert_eq!(sq(7, 7), Some(63));
    assert_eq!(sq(-1, 0), None);
    assert_eq!(sq(0, 8), None);
    assert_eq!(sq(8, 8), None);
}

#[test]
fn test_coord_roundtrip() {
    assert_eq!(coord_to_sq("a1"), Some(0));
    assert_eq!(coord_to_sq("h8"), Some(63));
    assert_eq!(coord_to_sq("e2"), Some(12));
    assert_eq!(sq_to_coord(12), "e2");
    assert_eq!(coord_to_sq("i1"), None);
    assert_eq!(coord_to_sq("a9"), None);
    assert_eq!(coord_to_sq("e22"), None);
    for s in 0..64u8 {
        assert_eq!(coord_to_sq(&sq_to_coord(s)), Some(s));
    }
}
