/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Format and invalid-argument error types.
mod error;

/// Colors, piece kinds, and the twelve canonical colored pieces.
mod piece;

/// Files, ranks, and board coordinates.
mod square;

/// The immutable game state and its FEN parser.
mod state;

pub use error::*;
pub use piece::*;
pub use square::*;
pub use state::*;
