/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{str::FromStr, sync::Arc};

use crate::{ArgumentError, Color, File, ParseError, Piece, PieceKind, Rank, Square};

/// FEN string for the standard starting position.
pub const FEN_STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// The board side on which castling takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    /// Kingside, or "short" castling (the `K`/`k` FEN letters).
    King,
    /// Queenside, or "long" castling (the `Q`/`q` FEN letters).
    Queen,
}

/// Represents the castling rights of a single player.
///
/// A right being present means only that it has not been forfeited by a
/// king or rook move (or a rook capture). It does *not* assert that
/// castling is presently legal; path clearance and king safety are the
/// business of move generation, not of this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights {
    kingside: bool,
    queenside: bool,
}

impl CastlingRights {
    /// Returns `true` if the kingside right has not been forfeited.
    #[inline(always)]
    pub const fn kingside(&self) -> bool {
        self.kingside
    }

    /// Returns `true` if the queenside right has not been forfeited.
    #[inline(always)]
    pub const fn queenside(&self) -> bool {
        self.queenside
    }

    #[inline(always)]
    const fn any(&self) -> bool {
        self.kingside || self.queenside
    }
}

/// Represents a complete chess position, including move counters.
///
/// This is analogous to a FEN string, and possesses no way to move pieces
/// on the board: once built, a [`GameState`] never changes, so any number
/// of threads may hold and query it concurrently. It is constructed either
/// as the standard starting position ([`GameState::new`]) or by parsing a
/// FEN string ([`GameState::from_fen`]); a malformed FEN string yields a
/// [`ParseError`] and no partial state.
///
/// # Example
/// ```
/// # use marmot::{Color, GameState, Piece};
/// let state = GameState::new();
/// assert_eq!(state.active_player(), Color::White);
/// assert_eq!(state.piece_at_coord("e1").unwrap(), Some(Piece::WHITE_KING));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Cell contents, indexed `[file][rank]` with rank 0 being the 8th
    /// rank, matching FEN's top-to-bottom order. `None` is an empty square.
    squares: [[Option<Piece>; Rank::COUNT]; File::COUNT],

    /// The [`Color`] of the player whose turn it is.
    active_player: Color,

    /// Castling rights for each player.
    castling: [CastlingRights; Color::COUNT],

    /// File on which an en passant capture is currently available, if any.
    en_passant_file: Option<File>,

    /// Half-moves since the last pawn move or capture.
    fifty_move_clock: u32,

    /// Full-move counter, starting at 1.
    turn: u32,

    /// Back-link to the state this one succeeded, if any.
    ///
    /// No construction path in this crate populates it; it exists for
    /// collaborators that build successor states and want lineage.
    previous: Option<Arc<GameState>>,
}

impl GameState {
    /// Creates a [`GameState`] for the standard starting position: White
    /// to move, all four castling rights available, no en passant target,
    /// clock 0, turn 1.
    ///
    /// # Example
    /// ```
    /// # use marmot::GameState;
    /// let state = GameState::new();
    /// assert_eq!(state.turn(), 1);
    /// assert_eq!(state.fifty_move_clock(), 0);
    /// ```
    #[inline(always)]
    pub fn new() -> Self {
        // Safety: the starting position FEN is a valid, fixed literal.
        unsafe { Self::from_fen(FEN_STARTPOS).unwrap_unchecked() }
    }

    /// Creates a new [`GameState`] from the provided FEN string.
    ///
    /// The six space-separated fields are each parsed and cross-validated
    /// against the others; the first violation aborts the whole parse, so
    /// no partially valid state is ever observable.
    ///
    /// # Example
    /// ```
    /// # use marmot::{Color, File, GameState};
    /// let state = GameState::from_fen(
    ///     "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
    /// ).unwrap();
    /// assert_eq!(state.active_player(), Color::Black);
    /// assert_eq!(state.en_passant_file(), Some(File::E));
    /// ```
    pub fn from_fen(fen: &str) -> Result<Self, ParseError> {
        let fields: Vec<&str> = fen.split(' ').collect();
        if fields.len() != 6 {
            return Err(ParseError::FieldCount(fields.len()));
        }

        let squares = Self::parse_board(fields[0])?;
        let active_player = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(ParseError::InvalidActiveColor(other.to_string())),
        };
        let castling = Self::parse_castling(fields[2])?;
        let en_passant_file = Self::parse_en_passant(fields[3], &squares, active_player)?;

        let fifty_move_clock = canonical_int(fields[4])
            .ok_or_else(|| ParseError::InvalidClock(fields[4].to_string()))?;
        let turn = canonical_int(fields[5])
            .filter(|&turn| turn >= 1)
            .ok_or_else(|| ParseError::InvalidTurn(fields[5].to_string()))?;

        Ok(Self {
            squares,
            active_player,
            castling,
            en_passant_file,
            fifty_move_clock,
            turn,
            previous: None,
        })
    }

    /// Parses the piece-placement field: 8 `/`-separated rank strings,
    /// ranks listed top-down, digits consumed as empty-square runs.
    fn parse_board(
        board: &str,
    ) -> Result<[[Option<Piece>; Rank::COUNT]; File::COUNT], ParseError> {
        let ranks: Vec<&str> = board.split('/').collect();
        if ranks.len() != Rank::COUNT {
            return Err(ParseError::RankCount(ranks.len()));
        }

        let mut squares = [[None; Rank::COUNT]; File::COUNT];
        for (r, chunk) in ranks.iter().enumerate() {
            let rank = Rank::new_unchecked(r as u8);
            let mut file = 0u8;
            for c in chunk.chars() {
                if file >= File::COUNT as u8 {
                    return Err(ParseError::RankOverflow(rank));
                }

                if let Some(run) = c.to_digit(10).filter(|run| (1..=8).contains(run)) {
                    file += run as u8;
                } else {
                    squares[file as usize][r] = Some(Piece::from_uci(c)?);
                    file += 1;
                }
            }

            if file != File::COUNT as u8 {
                return Err(ParseError::RankTotal(rank, file));
            }
        }

        Ok(squares)
    }

    /// Parses the castling-availability field: `-` alone, or a non-empty
    /// subsequence of `KQkq` in exactly that relative order.
    ///
    /// Validation walks a shrinking reference sequence, so a repeated or
    /// out-of-order letter finds nothing left to consume and fails.
    fn parse_castling(token: &str) -> Result<[CastlingRights; Color::COUNT], ParseError> {
        let invalid = || ParseError::InvalidCastling(token.to_string());
        if token.is_empty() {
            return Err(invalid());
        }

        let mut castling = [CastlingRights::default(); Color::COUNT];
        let mut remaining: &[char] = &['K', 'Q', 'k', 'q', '-'];
        for c in token.chars() {
            let position = remaining
                .iter()
                .position(|&available| available == c)
                .ok_or_else(invalid)?;
            remaining = &remaining[position + 1..];

            match c {
                'K' => castling[Color::White.index()].kingside = true,
                'Q' => castling[Color::White.index()].queenside = true,
                'k' => castling[Color::Black.index()].kingside = true,
                'q' => castling[Color::Black.index()].queenside = true,
                // '-' is only valid when no right has been granted
                _ => {
                    if castling.iter().any(CastlingRights::any) {
                        return Err(invalid());
                    }
                }
            }
        }

        Ok(castling)
    }

    /// Parses and cross-validates the en-passant field against the board
    /// and the active player.
    ///
    /// A non-`-` target must name the square a pawn just double-stepped
    /// over: the implied mover differs from the active player, the target
    /// and the mover's start square are empty, and the landing square in
    /// front of the target holds exactly the mover's pawn.
    fn parse_en_passant(
        token: &str,
        squares: &[[Option<Piece>; Rank::COUNT]; File::COUNT],
        active_player: Color,
    ) -> Result<Option<File>, ParseError> {
        if token == "-" {
            return Ok(None);
        }

        let square = Square::from_uci(token)?;
        let rank = square.rank();
        let mover = if rank == Rank::R3 {
            Color::White
        } else if rank == Rank::R6 {
            Color::Black
        } else {
            return Err(ParseError::EnPassantRank(square));
        };
        if mover == active_player {
            return Err(ParseError::EnPassantOwnSide(square));
        }

        // White's double-step runs toward rank index 0, Black's away from it.
        let (start, landing) = match mover {
            Color::White => (rank.index() + 1, rank.index() - 1),
            Color::Black => (rank.index() - 1, rank.index() + 1),
        };
        let file = square.file().index();
        if squares[file][rank.index()].is_some() || squares[file][start].is_some() {
            return Err(ParseError::EnPassantBlocked(square));
        }
        if squares[file][landing] != Some(Piece::new(mover, PieceKind::Pawn)) {
            return Err(ParseError::EnPassantMissingPawn(square, mover));
        }

        Ok(Some(square.file()))
    }

    /// Fetches the contents of the cell at `file` and `rank`.
    ///
    /// `None` means the square is empty.
    ///
    /// # Example
    /// ```
    /// # use marmot::{File, GameState, Piece, Rank};
    /// let state = GameState::new();
    /// assert_eq!(state.piece_at(File::E, Rank::R8), Some(Piece::BLACK_KING));
    /// assert_eq!(state.piece_at(File::E, Rank::R4), None);
    /// ```
    #[inline(always)]
    pub const fn piece_at(&self, file: File, rank: Rank) -> Option<Piece> {
        self.squares[file.index()][rank.index()]
    }

    /// Fetches the contents of the cell at the given raw indices, rank
    /// counted top-down (rank index 0 is the 8th rank).
    ///
    /// Either index outside `[0, 8)` yields an [`ArgumentError`] naming
    /// the offending axis.
    ///
    /// # Example
    /// ```
    /// # use marmot::{ArgumentError, GameState};
    /// let state = GameState::new();
    /// assert!(state.piece_at_index(0, 0).is_ok());
    /// assert_eq!(
    ///     state.piece_at_index(8, 0),
    ///     Err(ArgumentError::FileOutOfRange(8)),
    /// );
    /// ```
    #[inline(always)]
    pub fn piece_at_index(&self, file: usize, rank: usize) -> Result<Option<Piece>, ArgumentError> {
        let file = File::from_index(file)?;
        let rank = Rank::from_index(rank)?;
        Ok(self.piece_at(file, rank))
    }

    /// Fetches the contents of the cell named by a coordinate string such
    /// as `"e4"`.
    ///
    /// A malformed coordinate yields [`ArgumentError::InvalidCoordinate`];
    /// the square-decoding details are not part of this surface.
    ///
    /// # Example
    /// ```
    /// # use marmot::{GameState, Piece};
    /// let state = GameState::new();
    /// assert_eq!(state.piece_at_coord("d1").unwrap(), Some(Piece::WHITE_QUEEN));
    /// assert!(state.piece_at_coord("j9").is_err());
    /// ```
    #[inline(always)]
    pub fn piece_at_coord(&self, coord: &str) -> Result<Option<Piece>, ArgumentError> {
        let square = Square::from_uci(coord)
            .map_err(|_| ArgumentError::InvalidCoordinate(coord.to_string()))?;
        Ok(self.piece_at(square.file(), square.rank()))
    }

    /// Returns the player whose turn it is.
    #[inline(always)]
    pub const fn active_player(&self) -> Color {
        self.active_player
    }

    /// Returns `true` if `color` has not forfeited the castling right on
    /// `side`.
    ///
    /// This tracks non-forfeiture only; whether castling is presently
    /// legal (path clearance, king safety) is out of this crate's scope.
    ///
    /// # Example
    /// ```
    /// # use marmot::{CastleSide, Color, GameState};
    /// let state = GameState::new();
    /// assert!(state.can_castle(Color::White, CastleSide::Queen));
    /// assert!(state.can_castle(Color::Black, CastleSide::King));
    /// ```
    #[inline(always)]
    pub const fn can_castle(&self, color: Color, side: CastleSide) -> bool {
        let rights = &self.castling[color.index()];
        match side {
            CastleSide::King => rights.kingside(),
            CastleSide::Queen => rights.queenside(),
        }
    }

    /// Returns the [`CastlingRights`] for `color`.
    #[inline(always)]
    pub const fn castling_rights(&self, color: Color) -> &CastlingRights {
        &self.castling[color.index()]
    }

    /// If an en passant capture is currently available, returns the
    /// [`File`] it is available on.
    #[inline(always)]
    pub const fn en_passant_file(&self) -> Option<File> {
        self.en_passant_file
    }

    /// Returns the half-move counter used to enforce the fifty-move rule.
    #[inline(always)]
    pub const fn fifty_move_clock(&self) -> u32 {
        self.fifty_move_clock
    }

    /// Returns the full-move counter, which starts at 1.
    #[inline(always)]
    pub const fn turn(&self) -> u32 {
        self.turn
    }

    /// Returns the state this one succeeded, if a collaborator linked one.
    ///
    /// Neither [`GameState::new`] nor [`GameState::from_fen`] populates
    /// the link.
    #[inline(always)]
    pub fn previous(&self) -> Option<&GameState> {
        self.previous.as_deref()
    }
}

impl Default for GameState {
    /// A "default" [`GameState`] is the standard starting position.
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for GameState {
    type Err = ParseError;
    /// Wrapper for [`GameState::from_fen`].
    #[inline(always)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_fen(s)
    }
}

/// Parses `token` as a base-10 integer, requiring the canonical textual
/// form: no sign, no leading zeros beyond a bare `"0"`, no whitespace.
#[inline(always)]
fn canonical_int(token: &str) -> Option<u32> {
    let value: u32 = token.parse().ok()?;
    (value.to_string() == token).then_some(value)
}
