// ============================================================
// Layer 3 — Question Categories
// ============================================================
// Every generated sample belongs to exactly one category.
// Categories are identified on the command line and in the
// output layout by a small integer id:
//
//    0 checkmate          8 position
//    1 stalemate          9 count pieces for side
//    2 castling rights   10 count all pieces
//    3 castle            11 existence of piece with side
//    4 material advantage 12 existence of a piece
//    5 material count    13 legal move
//    6 check             14 is attacked
//    7 attack
//
// A selection is either a single id ("7") or an inclusive
// range ("2-14").
//
// Reference: Rust Book §6 (Enums and Pattern Matching)

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors raised while parsing a category selection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CategoryError {
    #[error("unknown question category id {0} (expected 0-14)")]
    UnknownId(u8),

    #[error("cannot parse category selection '{0}'")]
    Malformed(String),

    #[error("category range {start}-{end} is empty")]
    EmptyRange { start: u8, end: u8 },
}

/// One of the 15 question categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Checkmate,
    Stalemate,
    CastlingRights,
    Castle,
    MaterialAdvantage,
    MaterialCount,
    Check,
    Attack,
    Position,
    CountSide,
    CountBoard,
    ExistenceSide,
    Existence,
    LegalMove,
    IsAttacked,
}

impl Category {
    /// All categories in id order.
    pub const ALL: [Category; 15] = [
        Category::Checkmate,
        Category::Stalemate,
        Category::CastlingRights,
        Category::Castle,
        Category::MaterialAdvantage,
        Category::MaterialCount,
        Category::Check,
        Category::Attack,
        Category::Position,
        Category::CountSide,
        Category::CountBoard,
        Category::ExistenceSide,
        Category::Existence,
        Category::LegalMove,
        Category::IsAttacked,
    ];

    /// The numeric id used on the command line and as the
    /// output partition directory name.
    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> Result<Self, CategoryError> {
        Self::ALL
            .get(id as usize)
            .copied()
            .ok_or(CategoryError::UnknownId(id))
    }

    /// Human-readable name, used in logs and the `stats` output
    pub fn name(self) -> &'static str {
        match self {
            Category::Checkmate         => "checkmate",
            Category::Stalemate         => "stalemate",
            Category::CastlingRights    => "castling rights",
            Category::Castle            => "castle",
            Category::MaterialAdvantage => "material advantage",
            Category::MaterialCount     => "material count",
            Category::Check             => "check",
            Category::Attack            => "attack",
            Category::Position          => "position",
            Category::CountSide         => "count pieces for side",
            Category::CountBoard        => "count all pieces",
            Category::ExistenceSide     => "existence of piece with side",
            Category::Existence         => "existence of a piece",
            Category::LegalMove         => "legal move",
            Category::IsAttacked        => "is attacked",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.id(), self.name())
    }
}

/// Parse a category selection such as "7" or "2-14" into the
/// list of categories it names, in ascending id order.
pub fn parse_selection(selection: &str) -> Result<Vec<Category>, CategoryError> {
    let parse_id = |s: &str| -> Result<u8, CategoryError> {
        s.trim()
            .parse::<u8>()
            .map_err(|_| CategoryError::Malformed(selection.to_string()))
    };

    let (start, end) = match selection.split_once('-') {
        Some((a, b)) => (parse_id(a)?, parse_id(b)?),
        None => {
            let id = parse_id(selection)?;
            (id, id)
        }
    };

    if start > end {
        return Err(CategoryError::EmptyRange { start, end });
    }

    (start..=end).map(Category::from_id).collect()
}

impl FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s
            .trim()
            .parse::<u8>()
            .map_err(|_| CategoryError::Malformed(s.to_string()))?;
        Category::from_id(id)
    }
}
