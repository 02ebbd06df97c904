/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use thiserror::Error;

use crate::{Color, Rank, Square};

/// A violation of the FEN grammar or of one of its cross-field
/// consistency rules.
///
/// Raised only while parsing; once a [`crate::GameState`] exists, none of
/// these can occur. Every variant carries the offending token so the
/// `Display` form is self-explanatory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("FEN must have exactly 6 space-separated fields, got {0}")]
    FieldCount(usize),

    #[error("board field must have exactly 8 ranks, got {0}")]
    RankCount(usize),

    #[error("rank {0} describes more than 8 files")]
    RankOverflow(Rank),

    #[error("rank {0} describes {1} files, expected exactly 8")]
    RankTotal(Rank, u8),

    #[error("invalid piece character {0:?}")]
    InvalidPieceChar(char),

    #[error("active color must be \"w\" or \"b\", got {0:?}")]
    InvalidActiveColor(String),

    #[error("castling field {0:?} is not \"-\" or an ordered subsequence of \"KQkq\"")]
    InvalidCastling(String),

    #[error("invalid square {0:?}")]
    InvalidSquare(String),

    #[error("invalid file character {0:?}, expected 'a' through 'h'")]
    InvalidFileChar(char),

    #[error("invalid rank character {0:?}, expected '1' through '8'")]
    InvalidRankChar(char),

    #[error("en passant target {0} is not on a double-step target rank")]
    EnPassantRank(Square),

    #[error("en passant target {0} belongs to the active player's side")]
    EnPassantOwnSide(Square),

    #[error("en passant target {0} and the square behind it must be empty")]
    EnPassantBlocked(Square),

    #[error("en passant target {0} must have a {} pawn in front of it", .1.name())]
    EnPassantMissingPawn(Square, Color),

    #[error("halfmove clock {0:?} is not a canonical non-negative integer")]
    InvalidClock(String),

    #[error("fullmove number {0:?} is not a canonical positive integer")]
    InvalidTurn(String),
}

/// An out-of-domain value passed to an accessor on an already-built
/// [`crate::GameState`].
///
/// Unlike [`ParseError`], these say nothing about any FEN text; they name
/// the argument that failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("file index {0} is out of range [0, 8)")]
    FileOutOfRange(usize),

    #[error("rank index {0} is out of range [0, 8)")]
    RankOutOfRange(usize),

    #[error("invalid coordinate {0:?}")]
    InvalidCoordinate(String),
}
