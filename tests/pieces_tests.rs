//! Piece geometry and randomizer tests

use std::collections::HashSet;

use blockfall::core::{get_shape, line_clear_score, try_rotate, Piece, PieceQueue, WALL_KICKS};
use blockfall::types::{Rotation, Shape, SPAWN_ROW, SPAWN_X};

const ROTATIONS: [Rotation; 4] = [
    Rotation::North,
    Rotation::East,
    Rotation::South,
    Rotation::West,
];

#[test]
fn test_every_state_has_four_distinct_cells() {
    for shape in Shape::ALL {
        for rotation in ROTATIONS {
            let cells: HashSet<_> = get_shape(shape, rotation).into_iter().collect();
            assert_eq!(cells.len(), 4, "{:?} {:?}", shape, rotation);
        }
    }
}

#[test]
fn test_o_piece_looks_the_same_in_every_state() {
    let north = get_shape(Shape::O, Rotation::North);
    for rotation in ROTATIONS {
        assert_eq!(get_shape(Shape::O, rotation), north);
    }
}

#[test]
fn test_four_rotations_return_to_start() {
    for shape in Shape::ALL {
        let start = Piece::new(shape, 4, 10);
        let mut cw = start;
        let mut ccw = start;
        for _ in 0..4 {
            cw = cw.rotated(true);
            ccw = ccw.rotated(false);
        }
        assert_eq!(cw, start);
        assert_eq!(ccw, start);
    }
}

#[test]
fn test_spawn_position() {
    let piece = Piece::spawn(Shape::L);
    assert_eq!((piece.x, piece.y), (SPAWN_X, SPAWN_ROW));
    assert_eq!((piece.x, piece.y), (5, 1));
    assert_eq!(piece.rotation, Rotation::North);
}

#[test]
fn test_cells_are_offsets_plus_origin() {
    let piece = Piece::new(Shape::T, 3, 7);
    let expected: Vec<_> = get_shape(Shape::T, Rotation::North)
        .iter()
        .map(|&(dx, dy)| (3 + dx, 7 + dy))
        .collect();
    assert_eq!(piece.cells().to_vec(), expected);
}

#[test]
fn test_kick_table_order() {
    assert_eq!(WALL_KICKS, [(0, 0), (-1, 0), (1, 0), (0, -1)]);
}

#[test]
fn test_try_rotate_takes_first_fitting_kick() {
    let piece = Piece::new(Shape::T, 5, 5);
    // Reject the unkicked and left-kicked candidates.
    let rotated = try_rotate(piece, true, |p| p.x >= 6).unwrap();
    assert_eq!((rotated.x, rotated.y), (6, 5));
    assert_eq!(rotated.rotation, Rotation::East);
}

#[test]
fn test_try_rotate_up_kick_is_last_resort() {
    let piece = Piece::new(Shape::J, 5, 5);
    let rotated = try_rotate(piece, false, |p| p.y == 4).unwrap();
    assert_eq!((rotated.x, rotated.y), (5, 4));
    assert_eq!(rotated.rotation, Rotation::West);
}

#[test]
fn test_try_rotate_gives_up() {
    assert_eq!(try_rotate(Piece::new(Shape::S, 5, 5), true, |_| false), None);
}

#[test]
fn test_seven_draws_are_a_permutation() {
    let mut queue = PieceQueue::with_seed(99);
    for _ in 0..5 {
        let bag: HashSet<Shape> = (0..7).map(|_| queue.draw()).collect();
        assert_eq!(bag.len(), 7);
    }
}

#[test]
fn test_same_seed_same_sequence() {
    let mut a = PieceQueue::with_seed(7);
    let mut b = PieceQueue::with_seed(7);
    for _ in 0..50 {
        assert_eq!(a.draw(), b.draw());
    }
}

#[test]
fn test_line_clear_score_table() {
    assert_eq!(line_clear_score(0), 0);
    assert_eq!(line_clear_score(1), 100);
    assert_eq!(line_clear_score(2), 300);
    assert_eq!(line_clear_score(3), 500);
    assert_eq!(line_clear_score(4), 800);
}
