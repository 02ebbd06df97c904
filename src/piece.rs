/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use crate::ParseError;

/// Represents the color of a player or piece.
///
/// In Western chess, White traditionally moves first, and therefore [`Color`] defaults to [`Color::White`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    /// Number of color variants.
    pub const COUNT: usize = 2;

    /// An array of both colors, starting with White.
    #[inline(always)]
    pub const fn all() -> [Self; Self::COUNT] {
        [Self::White, Self::Black]
    }

    /// Returns this [`Color`]'s opposite / inverse / enemy.
    ///
    /// # Example
    /// ```
    /// # use marmot::Color;
    /// assert_eq!(Color::White.opponent(), Color::Black);
    /// assert_eq!(Color::Black.opponent(), Color::White);
    /// ```
    #[inline(always)]
    pub const fn opponent(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Returns this [`Color`] as a `usize`.
    ///
    /// Will be `0` for White, `1` for Black.
    ///
    /// Useful for indexing into lists.
    #[inline(always)]
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Creates a [`Color`] from the FEN active-color character.
    ///
    /// Only the lowercase `'w'` and `'b'` are recognized, matching the
    /// strictness of the FEN active-color field.
    ///
    /// # Example
    /// ```
    /// # use marmot::Color;
    /// assert_eq!(Color::from_uci('w').unwrap(), Color::White);
    /// assert!(Color::from_uci('W').is_err());
    /// ```
    #[inline(always)]
    pub fn from_uci(color: char) -> Result<Self, ParseError> {
        match color {
            'w' => Ok(Self::White),
            'b' => Ok(Self::Black),
            _ => Err(ParseError::InvalidActiveColor(color.to_string())),
        }
    }

    /// Creates a [`Color`] based on the ASCII case of the provided character, with uppercase being White and lowercase being Black.
    ///
    /// This is how FEN piece letters encode their color, so it can be used in
    /// odd ways, such as finding the color of the char `'z'` (Black).
    #[inline(always)]
    pub const fn from_case(c: char) -> Self {
        if c.is_ascii_lowercase() {
            Self::Black
        } else {
            Self::White
        }
    }

    /// Converts this [`Color`] to its FEN character.
    #[inline(always)]
    pub const fn to_uci(&self) -> char {
        match self {
            Self::White => 'w',
            Self::Black => 'b',
        }
    }

    /// Fetches a human-readable name for this [`Color`].
    ///
    /// # Example
    /// ```
    /// # use marmot::Color;
    /// assert_eq!(Color::White.name(), "white");
    /// ```
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
        }
    }
}

impl fmt::Display for Color {
    /// A [`Color`] displays as its FEN character.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}

/// Represents the kind (or "role") that a chess piece can be.
///
/// These have no [`Color`] associated with them. See [`Piece`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Number of piece variants.
    pub const COUNT: usize = 6;

    /// An array of all 6 [`PieceKind`]s.
    ///
    /// In the order: `Pawn`, `Knight`, `Bishop`, `Rook`, `Queen`, `King`.
    #[inline(always)]
    pub const fn all() -> [Self; Self::COUNT] {
        use PieceKind::*;
        [Pawn, Knight, Bishop, Rook, Queen, King]
    }

    /// Creates a new [`PieceKind`] from a FEN piece character, ignoring its case.
    ///
    /// # Example
    /// ```
    /// # use marmot::PieceKind;
    /// assert_eq!(PieceKind::from_uci('Q').unwrap(), PieceKind::Queen);
    /// assert_eq!(PieceKind::from_uci('q').unwrap(), PieceKind::Queen);
    /// assert!(PieceKind::from_uci('x').is_err());
    /// ```
    #[inline(always)]
    pub fn from_uci(kind: char) -> Result<Self, ParseError> {
        match kind {
            'P' | 'p' => Ok(Self::Pawn),
            'N' | 'n' => Ok(Self::Knight),
            'B' | 'b' => Ok(Self::Bishop),
            'R' | 'r' => Ok(Self::Rook),
            'Q' | 'q' => Ok(Self::Queen),
            'K' | 'k' => Ok(Self::King),
            _ => Err(ParseError::InvalidPieceChar(kind)),
        }
    }

    /// Converts this [`PieceKind`] to a FEN character.
    ///
    /// Will always be a lowercase letter.
    #[inline(always)]
    pub const fn to_uci(&self) -> char {
        match self {
            Self::Pawn => 'p',
            Self::Knight => 'n',
            Self::Bishop => 'b',
            Self::Rook => 'r',
            Self::Queen => 'q',
            Self::King => 'k',
        }
    }

    /// Fetches a human-readable name for this [`PieceKind`].
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Pawn => "pawn",
            Self::Knight => "knight",
            Self::Bishop => "bishop",
            Self::Rook => "rook",
            Self::Queen => "queen",
            Self::King => "king",
        }
    }
}

impl fmt::Display for PieceKind {
    /// A [`PieceKind`] displays as its lowercase FEN character.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}

/// Represents a chess piece on the game board: a ([`Color`], [`PieceKind`]) pair.
///
/// Exactly twelve distinct values exist, available as associated constants
/// and through [`Piece::all`]. [`Piece::new`] always yields the canonical
/// value for its arguments, so equality of values and identity of
/// "instances" coincide; equality and hashing are structural over the pair.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Piece {
    color: Color,
    kind: PieceKind,
}

impl Piece {
    pub const WHITE_PAWN: Self = Self::new(Color::White, PieceKind::Pawn);
    pub const WHITE_KNIGHT: Self = Self::new(Color::White, PieceKind::Knight);
    pub const WHITE_BISHOP: Self = Self::new(Color::White, PieceKind::Bishop);
    pub const WHITE_ROOK: Self = Self::new(Color::White, PieceKind::Rook);
    pub const WHITE_QUEEN: Self = Self::new(Color::White, PieceKind::Queen);
    pub const WHITE_KING: Self = Self::new(Color::White, PieceKind::King);

    pub const BLACK_PAWN: Self = Self::new(Color::Black, PieceKind::Pawn);
    pub const BLACK_KNIGHT: Self = Self::new(Color::Black, PieceKind::Knight);
    pub const BLACK_BISHOP: Self = Self::new(Color::Black, PieceKind::Bishop);
    pub const BLACK_ROOK: Self = Self::new(Color::Black, PieceKind::Rook);
    pub const BLACK_QUEEN: Self = Self::new(Color::Black, PieceKind::Queen);
    pub const BLACK_KING: Self = Self::new(Color::Black, PieceKind::King);

    /// Number of unique piece variants.
    pub const COUNT: usize = Color::COUNT * PieceKind::COUNT;

    /// An array of all 12 [`Piece`]s, starting with White Pawn.
    #[inline(always)]
    pub const fn all() -> [Self; Self::COUNT] {
        [
            Self::WHITE_PAWN,
            Self::WHITE_KNIGHT,
            Self::WHITE_BISHOP,
            Self::WHITE_ROOK,
            Self::WHITE_QUEEN,
            Self::WHITE_KING,
            Self::BLACK_PAWN,
            Self::BLACK_KNIGHT,
            Self::BLACK_BISHOP,
            Self::BLACK_ROOK,
            Self::BLACK_QUEEN,
            Self::BLACK_KING,
        ]
    }

    /// Creates a new [`Piece`] from the given [`Color`] and [`PieceKind`].
    ///
    /// Always returns the canonical value for the pair; no other [`Piece`]
    /// value can be constructed.
    ///
    /// # Example
    /// ```
    /// # use marmot::{Piece, Color, PieceKind};
    /// let white_knight = Piece::new(Color::White, PieceKind::Knight);
    /// assert_eq!(white_knight, Piece::WHITE_KNIGHT);
    /// ```
    #[inline(always)]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Fetches the [`Color`] of this [`Piece`].
    #[inline(always)]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Fetches the [`PieceKind`] of this [`Piece`].
    #[inline(always)]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Returns `true` if this [`Piece`]'s [`Color`] is White.
    #[inline(always)]
    pub const fn is_white(&self) -> bool {
        matches!(self.color, Color::White)
    }

    /// Returns `true` if this [`Piece`]'s [`Color`] is Black.
    #[inline(always)]
    pub const fn is_black(&self) -> bool {
        matches!(self.color, Color::Black)
    }

    /// Creates a new [`Piece`] from a FEN piece character, with uppercase
    /// being White and lowercase being Black.
    ///
    /// # Example
    /// ```
    /// # use marmot::{Piece, Color, PieceKind};
    /// let white_knight = Piece::from_uci('N').unwrap();
    /// assert_eq!(white_knight.color(), Color::White);
    /// assert_eq!(white_knight.kind(), PieceKind::Knight);
    /// ```
    #[inline(always)]
    pub fn from_uci(piece: char) -> Result<Self, ParseError> {
        let kind = PieceKind::from_uci(piece)?;
        let color = Color::from_case(piece);
        Ok(Self::new(color, kind))
    }

    /// Converts this [`Piece`] into its FEN character, with uppercase
    /// being White and lowercase being Black.
    ///
    /// # Example
    /// ```
    /// # use marmot::Piece;
    /// assert_eq!(Piece::WHITE_KNIGHT.to_uci(), 'N');
    /// assert_eq!(Piece::BLACK_PAWN.to_uci(), 'p');
    /// ```
    #[inline(always)]
    pub const fn to_uci(&self) -> char {
        match self.color {
            Color::White => self.kind.to_uci().to_ascii_uppercase(),
            Color::Black => self.kind.to_uci(),
        }
    }

    /// Fetches a human-readable name for this [`Piece`].
    ///
    /// Used for diagnostics only; nothing parses it back.
    ///
    /// # Example
    /// ```
    /// # use marmot::Piece;
    /// assert_eq!(Piece::WHITE_QUEEN.name(), "white queen");
    /// ```
    #[inline(always)]
    pub fn name(&self) -> String {
        format!("{} {}", self.color.name(), self.kind.name())
    }
}

impl fmt::Display for Piece {
    /// A [`Piece`] displays as its FEN character.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}

impl fmt::Debug for Piece {
    /// Debug formatting displays a [`Piece`] as its human-readable name.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_values() {
        // Calling `new` twice with the same arguments yields equal values,
        // and every (color, kind) pair maps onto the fixed table.
        for color in Color::all() {
            for kind in PieceKind::all() {
                let a = Piece::new(color, kind);
                let b = Piece::new(color, kind);
                assert_eq!(a, b);
                assert!(Piece::all().contains(&a));
            }
        }

        // Exactly 12 distinct values exist.
        let all = Piece::all();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_uci_round_trip() {
        for piece in Piece::all() {
            let parsed = Piece::from_uci(piece.to_uci()).unwrap();
            assert_eq!(parsed, piece);
        }

        assert!(Piece::from_uci('x').is_err());
        assert!(Piece::from_uci('1').is_err());
    }

    #[test]
    fn test_names() {
        assert_eq!(Piece::WHITE_KNIGHT.name(), "white knight");
        assert_eq!(Piece::BLACK_QUEEN.name(), "black queen");
        assert_eq!(Piece::WHITE_KNIGHT.to_string(), "N");
        assert_eq!(Piece::BLACK_QUEEN.to_string(), "q");
    }
}
