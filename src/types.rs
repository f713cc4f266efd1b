//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions (columns x rows)
pub const BOARD_WIDTH: u8 = 8;
pub const BOARD_HEIGHT: u8 = 8;

/// Number of shapes offered to the player at a time
pub const POOL_SIZE: usize = 3;

/// Base points awarded per newly occupied cell
pub const POINTS_PER_CELL: u32 = 10;

/// Base points per cleared line (multiplied by the simultaneous line count)
pub const LINE_POINTS: u32 = 100;

/// Flat bonus for emptying the board with a clear
pub const PERFECT_BONUS: u32 = 5000;

/// Display color tags, cosmetic only (the neon palette of 5)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTag {
    Cyan,
    Pink,
    Green,
    Amber,
    Violet,
}

impl ColorTag {
    /// All palette entries, in draw-index order
    pub const ALL: [ColorTag; 5] = [
        ColorTag::Cyan,
        ColorTag::Pink,
        ColorTag::Green,
        ColorTag::Amber,
        ColorTag::Violet,
    ];

    /// Palette index (0-based)
    pub fn index(&self) -> u8 {
        match self {
            ColorTag::Cyan => 0,
            ColorTag::Pink => 1,
            ColorTag::Green => 2,
            ColorTag::Amber => 3,
            ColorTag::Violet => 4,
        }
    }

    /// Look up a palette entry by index
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorTag::Cyan => "cyan",
            ColorTag::Pink => "pink",
            ColorTag::Green => "green",
            ColorTag::Amber => "amber",
            ColorTag::Violet => "violet",
        }
    }

}

/// Placeable polyomino kinds
///
/// The first five form the small catalog (at most 3 cells), the last five
/// the big catalog (3 to 5 cells). Offset data lives in `core::shapes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Dot,
    DuoRow,
    DuoCol,
    CornerNw,
    CornerSe,
    TrioRow,
    TrioCol,
    Square,
    Plus,
    PentaRow,
}

impl ShapeKind {
    /// Whether this kind belongs to the small catalog
    pub fn is_small(&self) -> bool {
        matches!(
            self,
            ShapeKind::Dot
                | ShapeKind::DuoRow
                | ShapeKind::DuoCol
                | ShapeKind::CornerNw
                | ShapeKind::CornerSe
        )
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Dot => "dot",
            ShapeKind::DuoRow => "duoRow",
            ShapeKind::DuoCol => "duoCol",
            ShapeKind::CornerNw => "cornerNw",
            ShapeKind::CornerSe => "cornerSe",
            ShapeKind::TrioRow => "trioRow",
            ShapeKind::TrioCol => "trioCol",
            ShapeKind::Square => "square",
            ShapeKind::Plus => "plus",
            ShapeKind::PentaRow => "pentaRow",
        }
    }

}

/// Session lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    Active,
    GameOver,
}

impl SessionState {
    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Active => "active",
            SessionState::GameOver => "gameOver",
        }
    }
}

/// Cell on the board (None = empty, Some = occupied with a color tag)
pub type Cell = Option<ColorTag>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_tag_index_roundtrip() {
        for tag in ColorTag::ALL {
            assert_eq!(ColorTag::from_index(tag.index()), Some(tag));
        }
        assert_eq!(ColorTag::from_index(5), None);
    }

    #[test]
    fn test_color_tag_labels_are_distinct() {
        for (i, a) in ColorTag::ALL.iter().enumerate() {
            for b in &ColorTag::ALL[i + 1..] {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
        // The board printer keys on the first letter
        for (i, a) in ColorTag::ALL.iter().enumerate() {
            for b in &ColorTag::ALL[i + 1..] {
                assert_ne!(a.as_str().chars().next(), b.as_str().chars().next());
            }
        }
    }

    #[test]
    fn test_shape_kind_labels_are_distinct() {
        let kinds = [
            ShapeKind::Dot,
            ShapeKind::DuoRow,
            ShapeKind::DuoCol,
            ShapeKind::CornerNw,
            ShapeKind::CornerSe,
            ShapeKind::TrioRow,
            ShapeKind::TrioCol,
            ShapeKind::Square,
            ShapeKind::Plus,
            ShapeKind::PentaRow,
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }

    #[test]
    fn test_shape_kind_catalog_split() {
        assert!(ShapeKind::Dot.is_small());
        assert!(ShapeKind::CornerSe.is_small());
        assert!(!ShapeKind::TrioRow.is_small());
        assert!(!ShapeKind::PentaRow.is_small());
    }
}
