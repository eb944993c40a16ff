//! Shape geometry tests: canonical cells, rotation, mirroring, kicks

use std::collections::HashSet;

use tetris80::core::shape::{find_kick, rotation_steps};
use tetris80::core::{get_shape, PieceShape, Tetromino};
use tetris80::types::PieceKind;

fn sorted(mut shape: PieceShape) -> PieceShape {
    shape.sort_unstable();
    shape
}

#[test]
fn test_every_variant_is_four_distinct_normalized_cells() {
    for kind in PieceKind::ALL {
        for rotation in 0..4 {
            for mirrored in [false, true] {
                let shape = get_shape(kind, rotation, mirrored);
                let unique: HashSet<_> = shape.iter().copied().collect();
                assert_eq!(unique.len(), 4, "{:?} r{} m{}", kind, rotation, mirrored);
                assert!(shape
                    .iter()
                    .all(|&(x, y)| (0..4).contains(&x) && (0..4).contains(&y)));
                assert_eq!(shape.iter().map(|c| c.0).min(), Some(0));
                assert_eq!(shape.iter().map(|c| c.1).min(), Some(0));
            }
        }
    }
}

#[test]
fn test_rotation_index_wraps() {
    for kind in PieceKind::ALL {
        for mirrored in [false, true] {
            let start = get_shape(kind, 0, mirrored);
            assert_eq!(get_shape(kind, 4, mirrored), start);
            assert_eq!(get_shape(kind, -4, mirrored), start);
            assert_eq!(get_shape(kind, 5, mirrored), get_shape(kind, 1, mirrored));
            assert_eq!(get_shape(kind, -1, mirrored), get_shape(kind, 3, mirrored));
        }
    }
    assert_eq!(rotation_steps(-6), 2);
}

#[test]
fn test_four_rotations_of_a_piece_return_home() {
    for kind in PieceKind::ALL {
        let piece = Tetromino::spawn(kind).with_mirror(true);
        let spun = piece.rotated().rotated().rotated().rotated();
        assert_eq!(spun, piece);
        assert_eq!(spun.shape(), piece.shape());
    }
}

#[test]
fn test_i_piece_shapes() {
    assert_eq!(get_shape(PieceKind::I, 0, false), [(0, 0), (1, 0), (2, 0), (3, 0)]);
    assert_eq!(get_shape(PieceKind::I, 1, false), [(0, 0), (0, 1), (0, 2), (0, 3)]);
    // A half turn covers the same cells, listed in reverse.
    assert_eq!(
        sorted(get_shape(PieceKind::I, 2, false)),
        sorted(get_shape(PieceKind::I, 0, false))
    );
    assert_eq!(
        sorted(get_shape(PieceKind::I, 3, false)),
        sorted(get_shape(PieceKind::I, 1, false))
    );
}

#[test]
fn test_o_piece_is_invariant() {
    let home = sorted(get_shape(PieceKind::O, 0, false));
    assert_eq!(home, [(0, 0), (0, 1), (1, 0), (1, 1)]);
    for rotation in 0..4 {
        for mirrored in [false, true] {
            assert_eq!(sorted(get_shape(PieceKind::O, rotation, mirrored)), home);
        }
    }
}

#[test]
fn test_t_rotates_clockwise() {
    // Pointing up, then pointing right.
    assert_eq!(
        sorted(get_shape(PieceKind::T, 0, false)),
        [(0, 1), (1, 0), (1, 1), (2, 1)]
    );
    assert_eq!(
        sorted(get_shape(PieceKind::T, 1, false)),
        [(0, 0), (0, 1), (0, 2), (1, 1)]
    );
}

#[test]
fn test_mirror_swaps_chiral_pairs() {
    assert_eq!(
        sorted(get_shape(PieceKind::L, 0, true)),
        sorted(get_shape(PieceKind::J, 0, false))
    );
    assert_eq!(
        sorted(get_shape(PieceKind::J, 0, true)),
        sorted(get_shape(PieceKind::L, 0, false))
    );
    assert_eq!(
        sorted(get_shape(PieceKind::S, 0, true)),
        sorted(get_shape(PieceKind::Z, 0, false))
    );
    assert_eq!(
        sorted(get_shape(PieceKind::T, 0, true)),
        sorted(get_shape(PieceKind::T, 0, false))
    );
}

#[test]
fn test_mirror_is_applied_before_rotation() {
    // Mirroring a rotated L must equal rotating the mirrored L, which is
    // what the stored (rotation, mirrored) pair means.
    let piece = Tetromino::spawn(PieceKind::L).rotated();
    let flipped = piece.with_mirror(true);
    assert_eq!(flipped.shape(), get_shape(PieceKind::L, 1, true));
    assert_eq!(
        sorted(flipped.shape()),
        sorted(get_shape(PieceKind::J, 1, false))
    );
}

#[test]
fn test_kick_order() {
    let mut tried = Vec::new();
    assert_eq!(
        find_kick(|dx| {
            tried.push(dx);
            false
        }),
        None
    );
    assert_eq!(tried, vec![0, -1, 1, -2, 2]);

    assert_eq!(find_kick(|dx| dx == 0 || dx == 1), Some(0));
    assert_eq!(find_kick(|dx| dx == 1 || dx == -1), Some(-1));
    assert_eq!(find_kick(|dx| dx == 2), Some(2));
}

#[test]
fn test_spawn_anchor() {
    for kind in PieceKind::ALL {
        let piece = Tetromino::spawn(kind);
        assert_eq!((piece.x, piece.y), (3, 0));
        assert_eq!(piece.rotation, 0);
        assert!(!piece.mirrored);
    }
}
