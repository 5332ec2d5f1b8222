//! Shapes module - the block library
//!
//! Every shape is a fixed occupancy mask inside a 6x6 box plus a two-color
//! gradient identity. Shapes are `Copy` values: offering, drawing and placing a
//! shape always works on a copy, never on the catalog entry itself.

use crate::types::{Color, ColorPair, ShapeKind, MAX_SHAPE_DIM};

/// Occupancy mask, row-major: `mask[y][x]`.
pub type ShapeMask = [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];

/// A block shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    kind: ShapeKind,
    mask: ShapeMask,
    width: u8,
    height: u8,
    colors: ColorPair,
}

impl Shape {
    /// Build a shape from row strings where `#` marks an occupied cell.
    ///
    /// Width is the longest row, height is the number of rows.
    const fn from_rows(kind: ShapeKind, rows: &[&str], colors: ColorPair) -> Self {
        let mut mask = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        let mut width = 0;
        let mut y = 0;
        while y < rows.len() {
            let row = rows[y].as_bytes();
            let mut x = 0;
            while x < row.len() {
                mask[y][x] = row[x] == b'#';
                x += 1;
            }
            if row.len() > width {
                width = row.len();
            }
            y += 1;
        }
        assert!(width <= MAX_SHAPE_DIM && rows.len() <= MAX_SHAPE_DIM);
        Self {
            kind,
            mask,
            width: width as u8,
            height: rows.len() as u8,
            colors,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn colors(&self) -> ColorPair {
        self.colors
    }

    /// Whether the mask cell at `(dx, dy)` is occupied. Outside the bounding box is empty.
    #[inline]
    pub fn is_filled(&self, dx: u8, dy: u8) -> bool {
        dx < self.width && dy < self.height && self.mask[dy as usize][dx as usize]
    }

    /// Occupied mask cells as `(dx, dy)` offsets from the anchor, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        (0..self.height).flat_map(move |dy| {
            (0..self.width).filter_map(move |dx| self.is_filled(dx, dy).then_some((dx, dy)))
        })
    }

    pub fn cell_count(&self) -> usize {
        self.cells().count()
    }
}

/// The fixed catalog, in draw order.
pub const SHAPE_LIBRARY: [Shape; 7] = [
    Shape::from_rows(
        ShapeKind::Single,
        &["#"],
        ColorPair::new(Color::rgb(230, 41, 55), Color::rgb(255, 161, 150)),
    ),
    Shape::from_rows(
        ShapeKind::Square,
        &["##", "##"],
        ColorPair::new(Color::rgb(0, 228, 48), Color::rgb(161, 255, 150)),
    ),
    Shape::from_rows(
        ShapeKind::Ell,
        &["#.", "#.", "##"],
        ColorPair::new(Color::rgb(0, 121, 241), Color::rgb(150, 220, 255)),
    ),
    Shape::from_rows(
        ShapeKind::Line4,
        &["#", "#", "#", "#"],
        ColorPair::new(Color::rgb(253, 249, 0), Color::rgb(255, 253, 150)),
    ),
    Shape::from_rows(
        ShapeKind::Tee,
        &["###", ".#."],
        ColorPair::new(Color::rgb(200, 122, 255), Color::rgb(230, 190, 255)),
    ),
    Shape::from_rows(
        ShapeKind::Row6,
        &["######"],
        ColorPair::new(Color::rgb(255, 109, 194), Color::rgb(255, 200, 230)),
    ),
    Shape::from_rows(
        ShapeKind::Column6,
        &["#", "#", "#", "#", "#", "#"],
        ColorPair::new(Color::rgb(255, 144, 30), Color::rgb(255, 210, 161)),
    ),
];

/// Look up the catalog entry for a kind.
pub fn get_shape(kind: ShapeKind) -> Shape {
    match kind {
        ShapeKind::Single => SHAPE_LIBRARY[0],
        ShapeKind::Square => SHAPE_LIBRARY[1],
        ShapeKind::Ell => SHAPE_LIBRARY[2],
        ShapeKind::Line4 => SHAPE_LIBRARY[3],
        ShapeKind::Tee => SHAPE_LIBRARY[4],
        ShapeKind::Row6 => SHAPE_LIBRARY[5],
        ShapeKind::Column6 => SHAPE_LIBRARY[6],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_order_matches_kinds() {
        for (shape, kind) in SHAPE_LIBRARY.iter().zip(ShapeKind::ALL) {
            assert_eq!(shape.kind(), kind);
            assert_eq!(get_shape(kind), *shape);
        }
    }

    #[test]
    fn test_library_dimensions_and_counts() {
        let expect = [
            (ShapeKind::Single, 1, 1, 1),
            (ShapeKind::Square, 2, 2, 4),
            (ShapeKind::Ell, 2, 3, 4),
            (ShapeKind::Line4, 1, 4, 4),
            (ShapeKind::Tee, 3, 2, 4),
            (ShapeKind::Row6, 6, 1, 6),
            (ShapeKind::Column6, 1, 6, 6),
        ];
        for (kind, w, h, n) in expect {
            let shape = get_shape(kind);
            assert_eq!(shape.width(), w, "{:?} width", kind);
            assert_eq!(shape.height(), h, "{:?} height", kind);
            assert_eq!(shape.cell_count(), n, "{:?} cells", kind);
        }
    }

    #[test]
    fn test_ell_and_tee_masks() {
        let ell: Vec<_> = get_shape(ShapeKind::Ell).cells().collect();
        assert_eq!(ell, vec![(0, 0), (0, 1), (0, 2), (1, 2)]);

        let tee: Vec<_> = get_shape(ShapeKind::Tee).cells().collect();
        assert_eq!(tee, vec![(0, 0), (1, 0), (2, 0), (1, 1)]);
    }

    #[test]
    fn test_gradient_identities_are_distinct() {
        for (i, a) in SHAPE_LIBRARY.iter().enumerate() {
            for b in &SHAPE_LIBRARY[i + 1..] {
                assert_ne!(a.colors(), b.colors());
            }
        }
    }

    #[test]
    fn test_is_filled_outside_box() {
        let square = get_shape(ShapeKind::Square);
        assert!(square.is_filled(1, 1));
        assert!(!square.is_filled(2, 0));
        assert!(!square.is_filled(0, 2));
    }
}
