/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use marmot::{CastleSide, Color, File, GameState, Piece, PieceKind, Rank, FEN_STARTPOS};

fn assert_coord(state: &GameState, coord: &str, expected: Option<Piece>) {
    assert_eq!(
        state.piece_at_coord(coord).unwrap(),
        expected,
        "wrong contents on {coord}"
    );
}

#[test]
fn startpos_piece_placement() {
    let state = GameState::new();

    // Both back ranks, in file order
    let back_rank = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];
    for (file, kind) in File::iter().zip(back_rank) {
        assert_coord(&state, &format!("{file}1"), Some(Piece::new(Color::White, kind)));
        assert_coord(&state, &format!("{file}8"), Some(Piece::new(Color::Black, kind)));
    }

    // Pawn ranks
    for file in File::iter() {
        assert_coord(&state, &format!("{file}2"), Some(Piece::WHITE_PAWN));
        assert_coord(&state, &format!("{file}7"), Some(Piece::BLACK_PAWN));
    }

    // Everything between is empty
    for file in File::iter() {
        for rank in 3..=6 {
            assert_coord(&state, &format!("{file}{rank}"), None);
        }
    }
}

#[test]
fn startpos_ancillary_fields() {
    let state = GameState::new();

    assert_eq!(state.active_player(), Color::White);
    assert_eq!(state.en_passant_file(), None);
    assert_eq!(state.fifty_move_clock(), 0);
    assert_eq!(state.turn(), 1);
    assert!(state.previous().is_none());

    for color in Color::all() {
        assert!(state.can_castle(color, CastleSide::King));
        assert!(state.can_castle(color, CastleSide::Queen));
    }
}

#[test]
fn startpos_construction_paths_agree() {
    // `new`, `default`, an explicit parse of the literal, and `FromStr`
    // all produce the same value
    let explicit = GameState::from_fen(FEN_STARTPOS).unwrap();
    assert_eq!(GameState::new(), explicit);
    assert_eq!(GameState::default(), explicit);
    assert_eq!(FEN_STARTPOS.parse::<GameState>().unwrap(), explicit);
}

#[test]
fn midgame_position_accessors() {
    // Position after 1. e4 c5 2. Nf3
    let state = GameState::from_fen(
        "rnbqkbnr/pp1ppppp/8/2p5/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2",
    )
    .unwrap();

    assert_eq!(state.active_player(), Color::Black);
    assert_eq!(state.en_passant_file(), None);
    assert_eq!(state.fifty_move_clock(), 1);
    assert_eq!(state.turn(), 2);

    assert_coord(&state, "e4", Some(Piece::WHITE_PAWN));
    assert_coord(&state, "c5", Some(Piece::BLACK_PAWN));
    assert_coord(&state, "f3", Some(Piece::WHITE_KNIGHT));
    assert_coord(&state, "e2", None);
    assert_coord(&state, "g1", None);

    // The same cells through the index-based accessor, rank counted
    // top-down: e4 is file 4, rank index 4
    assert_eq!(state.piece_at_index(4, 4).unwrap(), Some(Piece::WHITE_PAWN));
    assert_eq!(state.piece_at_index(5, 5).unwrap(), Some(Piece::WHITE_KNIGHT));

    // And through the typed accessor
    assert_eq!(state.piece_at(File::C, Rank::R5), Some(Piece::BLACK_PAWN));
}

#[test]
fn states_are_plain_values() {
    // A parsed state can be cloned, compared, and queried from multiple
    // threads; nothing about it ever changes
    let state = std::sync::Arc::new(GameState::new());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let state = std::sync::Arc::clone(&state);
            std::thread::spawn(move || {
                assert_eq!(state.piece_at_coord("e1").unwrap(), Some(Piece::WHITE_KING));
                assert_eq!(state.turn(), 1);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(*state, state.clone().as_ref().clone());
}
