//! Shape catalog - the seven tetrominoes and their colors
//!
//! Shapes are rectangular boolean matrices rather than fixed mino lists, so a
//! rotation changes the matrix dimensions (the I piece goes from 4x1 to 1x4).
//! Matrices are written as one bitmask per row, most significant bit leftmost.

use arrayvec::ArrayVec;

use crate::rng::SimpleRng;
use crate::types::{ColorId, ShapeKind, MAX_SHAPE_DIM};

/// Filled-cell offsets `(x, y)` of a matrix, row-major
pub type Offsets = ArrayVec<(i8, i8), { MAX_SHAPE_DIM * MAX_SHAPE_DIM }>;

/// Rectangular occupancy matrix, at most 4x4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Matrix {
    width: u8,
    height: u8,
    rows: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Matrix {
    /// Build a matrix from row bitmasks.
    ///
    /// Bit `width - 1 - x` of `bits[y]` is the cell at column `x`.
    pub const fn from_bits(width: u8, height: u8, bits: [u8; MAX_SHAPE_DIM]) -> Self {
        assert!(width as usize <= MAX_SHAPE_DIM && height as usize <= MAX_SHAPE_DIM);
        let mut rows = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        let mut y = 0;
        while y < height as usize {
            let mut x = 0;
            while x < width as usize {
                rows[y][x] = (bits[y] >> (width as usize - 1 - x)) & 1 == 1;
                x += 1;
            }
            y += 1;
        }
        Self {
            width,
            height,
            rows,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Cell at `(x, y)`; anything outside the matrix is unset
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width as usize && y < self.height as usize && self.rows[y][x]
    }

    /// Clockwise quarter turn: `rotated[y][x] = self[height - 1 - x][y]`.
    pub fn rotated_cw(&self) -> Self {
        let mut rows = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        let (w, h) = (self.width as usize, self.height as usize);
        for (y, row) in rows.iter_mut().enumerate().take(w) {
            for (x, cell) in row.iter_mut().enumerate().take(h) {
                *cell = self.rows[h - 1 - x][y];
            }
        }
        Self {
            width: self.height,
            height: self.width,
            rows,
        }
    }

    /// Offsets of every set cell
    pub fn filled(&self) -> Offsets {
        let mut out = Offsets::new();
        for y in 0..self.height as usize {
            for x in 0..self.width as usize {
                if self.rows[y][x] {
                    out.push((x as i8, y as i8));
                }
            }
        }
        out
    }
}

/// Immutable catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeDef {
    pub kind: ShapeKind,
    pub matrix: Matrix,
    pub color: ColorId,
}

const CATALOG: [ShapeDef; 7] = [
    ShapeDef {
        kind: ShapeKind::I,
        matrix: Matrix::from_bits(4, 1, [0b1111, 0, 0, 0]),
        color: ColorId::Rose,
    },
    ShapeDef {
        kind: ShapeKind::O,
        matrix: Matrix::from_bits(2, 2, [0b11, 0b11, 0, 0]),
        color: ColorId::Sky,
    },
    ShapeDef {
        kind: ShapeKind::T,
        matrix: Matrix::from_bits(3, 2, [0b111, 0b010, 0, 0]),
        color: ColorId::Mint,
    },
    ShapeDef {
        kind: ShapeKind::L,
        matrix: Matrix::from_bits(3, 2, [0b111, 0b100, 0, 0]),
        color: ColorId::Orchid,
    },
    ShapeDef {
        kind: ShapeKind::J,
        matrix: Matrix::from_bits(3, 2, [0b111, 0b001, 0, 0]),
        color: ColorId::Amber,
    },
    ShapeDef {
        kind: ShapeKind::S,
        matrix: Matrix::from_bits(3, 2, [0b110, 0b011, 0, 0]),
        color: ColorId::Lemon,
    },
    ShapeDef {
        kind: ShapeKind::Z,
        matrix: Matrix::from_bits(3, 2, [0b011, 0b110, 0, 0]),
        color: ColorId::Cobalt,
    },
];

/// The full catalog, in fixed order
pub fn catalog() -> &'static [ShapeDef; 7] {
    &CATALOG
}

/// Catalog entry for a shape kind
pub fn shape(kind: ShapeKind) -> &'static ShapeDef {
    let idx = match kind {
        ShapeKind::I => 0,
        ShapeKind::O => 1,
        ShapeKind::T => 2,
        ShapeKind::L => 3,
        ShapeKind::J => 4,
        ShapeKind::S => 5,
        ShapeKind::Z => 6,
    };
    &CATALOG[idx]
}

/// Uniform pick from the catalog
pub fn random_shape(rng: &mut SimpleRng) -> &'static ShapeDef {
    &CATALOG[rng.pick(CATALOG.len())]
}
