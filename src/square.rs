/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{fmt, str::FromStr};

use crate::{ArgumentError, ParseError};

/// Represents a column (`a` through `h`) of the board.
///
/// Internally 0-based: `a = 0`, `h = 7`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct File(u8);

impl File {
    pub const A: Self = Self(0);
    pub const B: Self = Self(1);
    pub const C: Self = Self(2);
    pub const D: Self = Self(3);
    pub const E: Self = Self(4);
    pub const F: Self = Self(5);
    pub const G: Self = Self(6);
    pub const H: Self = Self(7);

    /// Number of files on the board.
    pub const COUNT: usize = 8;

    /// Returns an iterator over all files, from `a` to `h`.
    #[inline(always)]
    pub fn iter() -> impl ExactSizeIterator<Item = Self> + DoubleEndedIterator<Item = Self> {
        (0..Self::COUNT as u8).map(Self)
    }

    /// Creates a new [`File`] from a 0-based index.
    ///
    /// The provided `index` must be `[0, 8)` or else an error naming the
    /// file axis is returned.
    ///
    /// # Example
    /// ```
    /// # use marmot::File;
    /// assert_eq!(File::from_index(2).unwrap(), File::C);
    /// assert!(File::from_index(8).is_err());
    /// ```
    #[inline(always)]
    pub fn from_index(index: usize) -> Result<Self, ArgumentError> {
        if index < Self::COUNT {
            Ok(Self(index as u8))
        } else {
            Err(ArgumentError::FileOutOfRange(index))
        }
    }

    /// Creates a new [`File`] from a coordinate letter, `'a'` through `'h'`.
    ///
    /// # Example
    /// ```
    /// # use marmot::File;
    /// assert_eq!(File::from_char('e').unwrap(), File::E);
    /// assert!(File::from_char('z').is_err());
    /// ```
    #[inline(always)]
    pub fn from_char(file: char) -> Result<Self, ParseError> {
        match file {
            'a'..='h' => Ok(Self(file as u8 - b'a')),
            _ => Err(ParseError::InvalidFileChar(file)),
        }
    }

    /// Obtain the inner value as a `usize`.
    ///
    /// Useful for indexing.
    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    /// Converts this [`File`] to its coordinate letter.
    #[inline(always)]
    pub const fn char(&self) -> char {
        (self.0 + b'a') as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

impl fmt::Debug for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.char(), self.0)
    }
}

/// Represents a row of the board, stored top-down to match FEN's
/// rank-8-first order: index 0 is rank 8 and index 7 is rank 1.
///
/// The coordinate digit and the index therefore move in opposite
/// directions; [`Rank::from_char`] maps digit `d` to index `8 - d`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rank(u8);

impl Rank {
    pub const R8: Self = Self(0);
    pub const R7: Self = Self(1);
    pub const R6: Self = Self(2);
    pub const R5: Self = Self(3);
    pub const R4: Self = Self(4);
    pub const R3: Self = Self(5);
    pub const R2: Self = Self(6);
    pub const R1: Self = Self(7);

    /// Number of ranks on the board.
    pub const COUNT: usize = 8;

    /// Returns an iterator over all ranks, from rank 8 down to rank 1.
    #[inline(always)]
    pub fn iter() -> impl ExactSizeIterator<Item = Self> + DoubleEndedIterator<Item = Self> {
        (0..Self::COUNT as u8).map(Self)
    }

    /// Creates a new [`Rank`] from a 0-based, top-down index.
    ///
    /// The provided `index` must be `[0, 8)` or else an error naming the
    /// rank axis is returned.
    ///
    /// # Example
    /// ```
    /// # use marmot::Rank;
    /// assert_eq!(Rank::from_index(0).unwrap(), Rank::R8);
    /// assert!(Rank::from_index(9).is_err());
    /// ```
    #[inline(always)]
    pub fn from_index(index: usize) -> Result<Self, ArgumentError> {
        if index < Self::COUNT {
            Ok(Self(index as u8))
        } else {
            Err(ArgumentError::RankOutOfRange(index))
        }
    }

    /// Creates a new [`Rank`] from a coordinate digit, `'1'` through `'8'`.
    ///
    /// # Example
    /// ```
    /// # use marmot::Rank;
    /// assert_eq!(Rank::from_char('8').unwrap(), Rank::R8);
    /// assert_eq!(Rank::from_char('1').unwrap(), Rank::R1);
    /// assert!(Rank::from_char('9').is_err());
    /// ```
    #[inline(always)]
    pub fn from_char(rank: char) -> Result<Self, ParseError> {
        match rank {
            '1'..='8' => Ok(Self(b'8' - rank as u8)),
            _ => Err(ParseError::InvalidRankChar(rank)),
        }
    }

    /// Intended for internal iteration over known-good indices.
    #[inline(always)]
    pub(crate) const fn new_unchecked(rank: u8) -> Self {
        Self(rank)
    }

    /// Obtain the inner value as a `usize`.
    ///
    /// Useful for indexing.
    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    /// Converts this [`Rank`] to its coordinate digit.
    #[inline(always)]
    pub const fn char(&self) -> char {
        (b'8' - self.0) as char
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

impl fmt::Debug for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.char(), self.0)
    }
}

/// Represents a single square on an `8x8` chess board as a
/// ([`File`], [`Rank`]) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    file: File,
    rank: Rank,
}

impl Square {
    /// Creates a new [`Square`] from the provided [`File`] and [`Rank`].
    #[inline(always)]
    pub const fn new(file: File, rank: Rank) -> Self {
        Self { file, rank }
    }

    /// Creates a [`Square`] from a two-character coordinate string such as
    /// `"e4"`: a file letter followed by a rank digit.
    ///
    /// # Example
    /// ```
    /// # use marmot::{File, Rank, Square};
    /// let c4 = Square::from_uci("c4").unwrap();
    /// assert_eq!(c4, Square::new(File::C, Rank::R4));
    ///
    /// assert!(Square::from_uci("z0").is_err());
    /// assert!(Square::from_uci("e44").is_err());
    /// ```
    #[inline(always)]
    pub fn from_uci(square: &str) -> Result<Self, ParseError> {
        let mut chars = square.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => {
                Ok(Self::new(File::from_char(file)?, Rank::from_char(rank)?))
            }
            _ => Err(ParseError::InvalidSquare(square.to_string())),
        }
    }

    /// Fetches the [`File`] of this [`Square`].
    #[inline(always)]
    pub const fn file(&self) -> File {
        self.file
    }

    /// Fetches the [`Rank`] of this [`Square`].
    #[inline(always)]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Converts this [`Square`] to its coordinate string.
    ///
    /// # Example
    /// ```
    /// # use marmot::Square;
    /// assert_eq!(Square::from_uci("c4").unwrap().to_uci(), "c4");
    /// ```
    #[inline(always)]
    pub fn to_uci(&self) -> String {
        format!("{}{}", self.file, self.rank)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}

impl FromStr for Square {
    type Err = ParseError;
    /// Wrapper for [`Square::from_uci`].
    #[inline(always)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_uci(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsing() {
        assert_eq!(Rank::R1, Rank::from_char('1').unwrap());
        assert_eq!(Rank::R8, Rank::from_char('8').unwrap());
        assert_eq!(Rank::R8, Rank::from_index(0).unwrap());
        assert_eq!(Rank::R1, Rank::from_index(7).unwrap());

        assert_eq!(File::A, File::from_char('a').unwrap());
        assert_eq!(File::H, File::from_char('h').unwrap());
        assert_eq!(File::A, File::from_index(0).unwrap());
        assert_eq!(File::H, File::from_index(7).unwrap());

        assert!(Rank::from_char('0').is_err());
        assert!(Rank::from_char('9').is_err());
        assert!(File::from_char('z').is_err());
        assert!(File::from_char('A').is_err());

        // Now test squares as a whole
        assert_eq!(
            Square::from_uci("a1").unwrap(),
            Square::new(File::A, Rank::R1)
        );
        assert_eq!(
            Square::from_uci("h8").unwrap(),
            Square::new(File::H, Rank::R8)
        );
        assert_eq!(
            "d4".parse::<Square>().unwrap(),
            Square::new(File::D, Rank::R4)
        );

        assert!(Square::from_uci("a").is_err());
        assert!(Square::from_uci("1").is_err());
        assert!(Square::from_uci("").is_err());
        assert!(Square::from_uci("a11").is_err());
    }

    #[test]
    fn test_out_of_range_names_axis() {
        assert_eq!(
            File::from_index(8).unwrap_err(),
            ArgumentError::FileOutOfRange(8)
        );
        assert_eq!(
            Rank::from_index(42).unwrap_err(),
            ArgumentError::RankOutOfRange(42)
        );
    }

    #[test]
    fn test_iteration_order() {
        assert_eq!(File::iter().len(), 8);
        assert_eq!(File::iter().next().unwrap(), File::A);
        assert_eq!(File::iter().last().unwrap(), File::H);

        // Ranks iterate top-down, rank 8 first
        assert_eq!(Rank::iter().len(), 8);
        assert_eq!(Rank::iter().next().unwrap(), Rank::R8);
        assert_eq!(Rank::iter().last().unwrap(), Rank::R1);
    }

    #[test]
    fn test_display() {
        // The four corners, in top-down storage order
        assert_eq!(Square::new(File::A, Rank::R8).to_string(), "a8");
        assert_eq!(Square::new(File::H, Rank::R8).to_string(), "h8");
        assert_eq!(Square::new(File::A, Rank::R1).to_string(), "a1");
        assert_eq!(Square::new(File::H, Rank::R1).to_string(), "h1");

        // And an arbitrary square near the middle
        let d4 = Square::from_uci("d4").unwrap();
        assert_eq!(d4.file().index(), 3);
        assert_eq!(d4.rank().index(), 4);
        assert_eq!(d4.to_string(), "d4");
    }
}
