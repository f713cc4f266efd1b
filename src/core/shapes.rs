//! Shapes module - polyomino catalogs and random draws
//!
//! Two catalogs of five shapes each: small (at most 3 cells) and big
//! (3 to 5 cells). Offsets are (dr, dc) relative to the placement anchor,
//! matching the board's (row, col) addressing.

use crate::core::rng::RandomSource;
use crate::types::{ColorTag, ShapeKind};

/// Offset of a single cell relative to the shape anchor
pub type CellOffset = (i8, i8);

/// Small catalog - shapes of at most 3 cells
pub const SMALL_SHAPES: [ShapeKind; 5] = [
    ShapeKind::Dot,
    ShapeKind::DuoRow,
    ShapeKind::DuoCol,
    ShapeKind::CornerNw,
    ShapeKind::CornerSe,
];

/// Big catalog - shapes of 3 to 5 cells
pub const BIG_SHAPES: [ShapeKind; 5] = [
    ShapeKind::TrioRow,
    ShapeKind::TrioCol,
    ShapeKind::Square,
    ShapeKind::Plus,
    ShapeKind::PentaRow,
];

/// Get the cell offsets for a shape kind
pub fn shape_cells(kind: ShapeKind) -> &'static [CellOffset] {
    match kind {
        ShapeKind::Dot => &[(0, 0)],
        ShapeKind::DuoRow => &[(0, 0), (0, 1)],
        ShapeKind::DuoCol => &[(0, 0), (1, 0)],
        ShapeKind::CornerNw => &[(0, 0), (0, 1), (1, 0)],
        ShapeKind::CornerSe => &[(0, 1), (1, 1), (1, 0)],
        ShapeKind::TrioRow => &[(0, 0), (0, 1), (0, 2)],
        ShapeKind::TrioCol => &[(0, 0), (1, 0), (2, 0)],
        ShapeKind::Square => &[(0, 0), (0, 1), (1, 0), (1, 1)],
        ShapeKind::Plus => &[(0, 1), (1, 0), (1, 1), (1, 2), (2, 1)],
        ShapeKind::PentaRow => &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)],
    }
}

/// A drawn shape instance: a catalog entry plus its display color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub kind: ShapeKind,
    pub color: ColorTag,
}

impl Shape {
    /// Get this shape's cell offsets
    pub fn cells(&self) -> &'static [CellOffset] {
        shape_cells(self.kind)
    }

    /// Number of cells the shape occupies
    pub fn cell_count(&self) -> usize {
        self.cells().len()
    }

    /// Draw a random shape: catalog with equal probability, then uniform
    /// within the catalog, then a uniform display color
    pub fn draw(rng: &mut dyn RandomSource) -> Self {
        let pool = if rng.next_range(2) == 0 {
            &SMALL_SHAPES
        } else {
            &BIG_SHAPES
        };
        let kind = pool[rng.next_range(pool.len() as u32) as usize];
        let color = ColorTag::ALL[rng.next_range(ColorTag::ALL.len() as u32) as usize];
        Self { kind, color }
    }
}
