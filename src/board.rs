use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// BoardError covers coordinates that do not name a square.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("square ({rank}, {file}) is outside the board")]
    OutOfRange { rank: u8, file: u8 },
}

/// ParseSquareError is returned when an algebraic square name can't be read.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid square name {0:?}")]
pub struct ParseSquareError(pub String);

/// Color denotes the two sides that can own pieces, and whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Role is what a piece does, independent of who owns it.
/// Declaration order matches the columns of the sprite atlas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::King,
        Role::Queen,
        Role::Bishop,
        Role::Knight,
        Role::Rook,
        Role::Pawn,
    ];

    fn letter(self) -> char {
        match self {
            Role::King => 'k',
            Role::Queen => 'q',
            Role::Bishop => 'b',
            Role::Knight => 'n',
            Role::Rook => 'r',
            Role::Pawn => 'p',
        }
    }
}

/// Piece is a Role-Color pair that represents a piece on the board.
/// An empty square is simply `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub role: Role,
}

impl Piece {
    pub const fn new(color: Color, role: Role) -> Self {
        Piece { color, role }
    }

    /// Numeric piece code in 1..=12: white king through white pawn, then
    /// black king through black pawn.
    pub fn code(self) -> u8 {
        let side = match self.color {
            Color::White => 0,
            Color::Black => 6,
        };
        side + self.role as u8 + 1
    }

    pub fn from_code(code: u8) -> Option<Self> {
        if code == 0 || code > 12 {
            return None;
        }
        let index = code - 1;
        let color = if index < 6 { Color::White } else { Color::Black };
        Some(Piece::new(color, Role::ALL[(index % 6) as usize]))
    }

    /// Cell of this piece in the 2x6 sprite atlas, counted row-major.
    pub fn atlas_index(self) -> usize {
        (self.code() - 1) as usize
    }

    /// FEN-style letter, uppercase for white.
    pub fn symbol(self) -> char {
        match self.color {
            Color::White => self.role.letter().to_ascii_uppercase(),
            Color::Black => self.role.letter(),
        }
    }
}

/// Square is a (rank, file) pair, both in 1..=8. Only `Square::new` builds
/// one, so holding a Square means the coordinates are on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    rank: u8,
    file: u8,
}

impl Square {
    pub fn new(rank: u8, file: u8) -> Result<Self, BoardError> {
        if (1..=8).contains(&rank) && (1..=8).contains(&file) {
            Ok(Square { rank, file })
        } else {
            Err(BoardError::OutOfRange { rank, file })
        }
    }

    pub fn rank(self) -> u8 {
        self.rank
    }

    pub fn file(self) -> u8 {
        self.file
    }

    /// All 64 squares, rank 1 first, files a..h within a rank.
    pub fn all() -> impl Iterator<Item = Square> {
        (1..=8u8).flat_map(|rank| (1..=8u8).map(move |file| Square { rank, file }))
    }

    fn index(self) -> (usize, usize) {
        ((self.rank - 1) as usize, (self.file - 1) as usize)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file - 1) as char, self.rank)
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseSquareError(s.to_string());
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(err());
        }
        let file = bytes[0].to_ascii_lowercase().wrapping_sub(b'a').wrapping_add(1);
        let rank = bytes[1].wrapping_sub(b'0');
        Square::new(rank, file).map_err(|_| err())
    }
}

/// Board contains the location information of each piece, indexed by
/// `[rank - 1][file - 1]`. It holds no rules of its own.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

const BACK_RANK: [Role; 8] = [
    Role::Rook,
    Role::Knight,
    Role::Bishop,
    Role::Queen,
    Role::King,
    Role::Bishop,
    Role::Knight,
    Role::Rook,
];

impl Board {
    pub fn empty() -> Self {
        Board::default()
    }

    pub fn starting_position() -> Self {
        let mut board = Board::empty();
        board.reset_to_starting_position();
        board
    }

    /// Overwrites every square with the standard opening layout.
    pub fn reset_to_starting_position(&mut self) {
        self.squares = [[None; 8]; 8];
        for (file, role) in BACK_RANK.iter().enumerate() {
            self.squares[0][file] = Some(Piece::new(Color::White, *role));
            self.squares[1][file] = Some(Piece::new(Color::White, Role::Pawn));
            self.squares[6][file] = Some(Piece::new(Color::Black, Role::Pawn));
            self.squares[7][file] = Some(Piece::new(Color::Black, *role));
        }
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        let (r, f) = square.index();
        self.squares[r][f]
    }

    /// Like `piece_at`, for callers still holding raw coordinates.
    pub fn get(&self, rank: u8, file: u8) -> Result<Option<Piece>, BoardError> {
        Ok(self.piece_at(Square::new(rank, file)?))
    }

    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        let (r, f) = square.index();
        self.squares[r][f] = piece;
    }

    /// Occupied squares with their pieces, in `Square::all` order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    pub fn king_count(&self, color: Color) -> usize {
        self.pieces()
            .filter(|(_, p)| *p == Piece::new(color, Role::King))
            .count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for cell in self.squares[rank].iter() {
                match cell {
                    Some(piece) => write!(f, "{}", piece.symbol())?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "  abcdefgh")
    }
}
