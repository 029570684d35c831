//! Piece kinds.

use serde::{Deserialize, Serialize};

use crate::Side;

/// The six kinds of pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// Back-rank order from column 0 to column 7.
    pub const BACK_RANK: [PieceKind; 8] = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];

    /// Returns the symbol for this kind: uppercase for White, lowercase for Black.
    pub const fn symbol(self, side: Side) -> char {
        let c = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Rook => 'r',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match side {
            Side::White => c.to_ascii_uppercase(),
            Side::Black => c,
        }
    }

    /// Parses a symbol into a kind and side.
    pub const fn from_symbol(c: char) -> Option<(PieceKind, Side)> {
        let side = if c.is_ascii_uppercase() {
            Side::White
        } else {
            Side::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'r' => PieceKind::Rook,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some((kind, side))
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Rook => "Rook",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_case_follows_side() {
        assert_eq!(PieceKind::Pawn.symbol(Side::White), 'P');
        assert_eq!(PieceKind::Pawn.symbol(Side::Black), 'p');
        assert_eq!(PieceKind::King.symbol(Side::White), 'K');
        assert_eq!(PieceKind::Knight.symbol(Side::Black), 'n');
    }

    #[test]
    fn from_symbol() {
        assert_eq!(
            PieceKind::from_symbol('R'),
            Some((PieceKind::Rook, Side::White))
        );
        assert_eq!(
            PieceKind::from_symbol('q'),
            Some((PieceKind::Queen, Side::Black))
        );
        assert_eq!(PieceKind::from_symbol('x'), None);
        assert_eq!(PieceKind::from_symbol('1'), None);
    }

    #[test]
    fn every_symbol_parses_back() {
        let kinds = [
            PieceKind::Pawn,
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
        ];
        for kind in kinds {
            for side in Side::ALL {
                assert_eq!(PieceKind::from_symbol(kind.symbol(side)), Some((kind, side)));
            }
        }
    }

    #[test]
    fn display_name() {
        assert_eq!(PieceKind::Knight.to_string(), "Knight");
    }
}
