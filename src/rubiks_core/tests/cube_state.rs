use itertools::Itertools;
use log::info;
use rubiks_core::{Color, CubeState, FacePose, Orientation, Rotation, block::fingerprint_of};

/// Check every structural invariant of a cube state.
fn assert_consistent(state: &CubeState) {
    for face in Color::ALL {
        let edges = state.face_edges(face);
        let corners = state.face_corners(face);
        assert_eq!(edges.iter().unique().count(), 4, "edges of {face}");
        assert_eq!(corners.iter().unique().count(), 4, "corners of {face}");

        // The lists hold exactly the blocks with a sticker on the face
        let touching_edges = state
            .edges()
            .iter()
            .filter(|edge| edge.touches(face))
            .count();
        let touching_corners = state
            .corners()
            .iter()
            .filter(|corner| corner.touches(face))
            .count();
        assert_eq!(touching_edges, 4);
        assert_eq!(touching_corners, 4);
        assert!(edges.iter().all(|&id| state.edge(id).touches(face)));
        assert!(corners.iter().all(|&id| state.corner(id).touches(face)));
    }

    let edge_listings = Color::ALL
        .iter()
        .flat_map(|&face| state.face_edges(face).iter().copied())
        .counts();
    assert_eq!(edge_listings.len(), 12);
    assert!(edge_listings.values().all(|&count| count == 2));

    let corner_listings = Color::ALL
        .iter()
        .flat_map(|&face| state.face_corners(face).iter().copied())
        .counts();
    assert_eq!(corner_listings.len(), 8);
    assert!(corner_listings.values().all(|&count| count == 3));

    // Placements describe real slots of the cube
    for edge in state.edges() {
        let [a, b] = *edge.placements();
        assert!(a.is_adjacent(b), "{edge}");
    }
    for corner in state.corners() {
        let [a, b, c] = *corner.placements();
        assert!(a.is_adjacent(b) && b.is_adjacent(c) && a.is_adjacent(c), "{corner}");
    }
    assert_eq!(state.edges().iter().map(|e| e.fingerprint()).unique().count(), 12);
    assert_eq!(state.corners().iter().map(|c| c.fingerprint()).unique().count(), 8);
}

fn solved() -> CubeState {
    CubeState::new().unwrap()
}

#[test_log::test]
fn solved_state_is_sorted_and_consistent() {
    let state = solved();
    assert!(state.is_sorted());
    assert_eq!(state.misplaced_count(), 0);
    assert_consistent(&state);

    let identities = state
        .edges()
        .iter()
        .map(|edge| fingerprint_of(*edge.identities()))
        .collect_vec();
    assert_eq!(identities.iter().unique().count(), 12);
    for edge in state.edges() {
        assert_eq!(edge.fingerprint(), &fingerprint_of(*edge.identities()));
    }
}

#[test_log::test]
fn four_quarter_turns_are_the_identity() {
    let fresh = solved();
    for face in Color::ALL {
        for rotation in Rotation::ALL {
            let mut state = fresh.clone();
            for turn in 1..=4 {
                state.rotate_face(face, rotation).unwrap();
                assert_consistent(&state);
                assert_eq!(state.is_sorted(), turn == 4, "{face} {rotation} x{turn}");
            }
            assert_eq!(state, fresh);
        }
    }
}

#[test_log::test]
fn a_turn_and_its_inverse_cancel() {
    let fresh = solved();
    for face in Color::ALL {
        for rotation in Rotation::ALL {
            let mut state = fresh.clone();
            state.rotate_face(face, rotation).unwrap();
            assert_ne!(state, fresh);
            state.rotate_face(face, rotation.inverse()).unwrap();
            assert_eq!(state, fresh);
        }
    }
}

#[test_log::test]
fn three_turns_are_one_inverse_turn() {
    for face in Color::ALL {
        let mut three = solved();
        for _ in 0..3 {
            three.rotate_face(face, Rotation::Clockwise).unwrap();
        }
        let mut one = solved();
        one.rotate_face(face, Rotation::Anticlockwise).unwrap();
        assert_eq!(three, one);
    }
}

#[test_log::test]
fn single_red_turn() {
    let fresh = solved();
    let mut state = fresh.clone();
    state.rotate_face(Color::Red, Rotation::Clockwise).unwrap();

    assert!(!state.is_sorted());
    assert_eq!(state.misplaced_count(), 8);
    assert_consistent(&state);

    // The turned face and the opposite face keep their blocks
    for face in [Color::Red, Color::Orange] {
        assert_eq!(state.face_edges(face), fresh.face_edges(face));
        assert_eq!(state.face_corners(face), fresh.face_corners(face));
    }

    for face in Orientation::default_for(Color::Red).ring() {
        let lost = fresh
            .face_edges(face)
            .iter()
            .filter(|id| !state.face_edges(face).contains(id))
            .count();
        let gained = state
            .face_edges(face)
            .iter()
            .filter(|id| !fresh.face_edges(face).contains(id))
            .count();
        assert_eq!((lost, gained), (1, 1), "edges of {face}");

        let lost = fresh
            .face_corners(face)
            .iter()
            .filter(|id| !state.face_corners(face).contains(id))
            .count();
        let gained = state
            .face_corners(face)
            .iter()
            .filter(|id| !fresh.face_corners(face).contains(id))
            .count();
        assert_eq!((lost, gained), (1, 1), "corners of {face}");

        // Slots are replaced in place
        let changed_slots = fresh
            .face_edges(face)
            .iter()
            .zip(state.face_edges(face))
            .filter(|(a, b)| a != b)
            .count();
        assert_eq!(changed_slots, 1);
    }
}

#[test_log::test]
fn clockwise_carries_top_to_right() {
    let orientation = Orientation::default_for(Color::Red);
    let [top, right, _, left] = orientation.ring();

    let mut state = solved();
    state.rotate_face(Color::Red, Rotation::Clockwise).unwrap();

    let id = state.find_edge(Color::Red, right).unwrap();
    let edge = state.edge(id);
    assert_eq!(fingerprint_of(*edge.identities()), fingerprint_of([Color::Red, top]));
    assert_eq!(edge.placement(top), Some(right));
    assert_eq!(edge.placement(Color::Red), Some(Color::Red));

    let id = state.find_corner(Color::Red, top, right).unwrap();
    let corner = state.corner(id);
    assert_eq!(
        fingerprint_of(*corner.identities()),
        fingerprint_of([Color::Red, top, left])
    );
    assert_eq!(corner.placement(left), Some(top));
    assert_eq!(corner.placement(top), Some(right));
}

#[test_log::test]
fn opposite_faces_commute() {
    for face in [Color::Red, Color::Blue, Color::Yellow] {
        let mut a = solved();
        a.rotate_face(face, Rotation::Clockwise).unwrap();
        a.rotate_face(face.opposite(), Rotation::Anticlockwise).unwrap();

        let mut b = solved();
        b.rotate_face(face.opposite(), Rotation::Anticlockwise).unwrap();
        b.rotate_face(face, Rotation::Clockwise).unwrap();

        assert_eq!(a, b);
    }
}

#[test_log::test]
fn commutator_of_adjacent_faces_has_order_six() {
    for (a, b) in [(Color::Red, Color::White), (Color::Blue, Color::Yellow)] {
        let mut state = solved();
        for repetition in 1..=6 {
            state.rotate_face(a, Rotation::Clockwise).unwrap();
            state.rotate_face(b, Rotation::Clockwise).unwrap();
            state.rotate_face(a, Rotation::Anticlockwise).unwrap();
            state.rotate_face(b, Rotation::Anticlockwise).unwrap();
            assert_consistent(&state);
            assert_eq!(state.is_sorted(), repetition == 6, "{a}{b} x{repetition}");
        }
    }
}

#[test_log::test]
fn random_walks_stay_consistent_and_undo() {
    let fresh = solved();
    let mut rng = fastrand::Rng::with_seed(0x5eed);

    for walk in 0..10 {
        let moves = (0..100)
            .map(|_| (rng.choice(Color::ALL).unwrap(), rng.choice(Rotation::ALL).unwrap()))
            .collect_vec();

        let mut state = fresh.clone();
        for &(face, rotation) in &moves {
            state.rotate_face(face, rotation).unwrap();
            assert_consistent(&state);
        }
        info!("Walk {walk} left {} blocks misplaced", state.misplaced_count());

        for &(face, rotation) in moves.iter().rev() {
            state.rotate_face(face, rotation.inverse()).unwrap();
        }
        assert_eq!(state, fresh);
    }
}

#[test_log::test]
fn reset_restores_the_solved_layout() {
    let mut state = solved();
    for face in Color::ALL {
        state.rotate_face(face, Rotation::Clockwise).unwrap();
    }
    assert!(!state.is_sorted());

    state.reset_blocks().unwrap();
    assert!(state.is_sorted());
    assert_eq!(state, solved());
}

#[test_log::test]
fn fingerprint_lookups_follow_placements() {
    let mut state = solved();
    state.rotate_face(Color::Blue, Rotation::Anticlockwise).unwrap();
    state.rotate_face(Color::Yellow, Rotation::Clockwise).unwrap();

    for face in Color::ALL {
        for &id in state.face_edges(face) {
            let edge = state.edge(id);
            let other = edge.placements().iter().copied().find(|&c| c != face).unwrap();
            assert_eq!(state.find_edge(face, other), Some(id));
        }
        for &id in state.face_corners(face) {
            let corner = state.corner(id);
            let (a, b) = corner
                .placements()
                .iter()
                .copied()
                .filter(|&c| c != face)
                .collect_tuple()
                .unwrap();
            assert_eq!(state.find_corner(face, a, b), Some(id));
            assert_eq!(state.find_corner(face, b, a), Some(id));
        }
        assert_eq!(state.find_edge(face, face.opposite()), None);
    }
}

#[test_log::test]
fn alternating_right_and_top_has_order_105() {
    // Alternate the right and top faces of every standard hold
    for front in Color::ALL {
        let orientation = Orientation::default_for(front);
        let right = orientation.face(FacePose::Right);
        let top = orientation.top();

        let mut state = solved();
        for step in 1..=105 {
            state.rotate_face(right, Rotation::Clockwise).unwrap();
            state.rotate_face(top, Rotation::Clockwise).unwrap();
            assert_eq!(state.is_sorted(), step == 105, "{front} x{step}");
        }
        assert_eq!(state.misplaced_count(), 0);
        assert_consistent(&state);
    }
}
