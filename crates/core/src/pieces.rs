//! Pieces module - tetromino catalog and matrix rotation
//!
//! Every piece is an N×N cell matrix (1 = filled). Rotation is a pure matrix
//! transform; wall kicks live in [`crate::movement`].

use crate::types::{Color, PieceKind};

/// Largest matrix edge in the catalog (the I piece)
pub const MAX_SHAPE: usize = 4;

/// Offset of a single filled cell relative to the piece origin, as `(dx, dy)`
pub type CellOffset = (i8, i8);

/// A piece cell-matrix of up to 4×4.
///
/// Cells outside `rows × cols` are always zero, so two shapes compare equal
/// exactly when their matrices do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[u8; MAX_SHAPE]; MAX_SHAPE],
}

impl Shape {
    /// Build a shape from a padded matrix. Only the top-left `rows × cols`
    /// block is meaningful; callers must pass zeros elsewhere.
    pub const fn new(rows: u8, cols: u8, cells: [[u8; MAX_SHAPE]; MAX_SHAPE]) -> Self {
        Self { rows, cols, cells }
    }

    /// Build a shape from nested rows, e.g. a matrix coming from a test or a
    /// custom catalog. Returns `None` for empty, ragged or oversized input.
    pub fn from_rows(rows: &[&[u8]]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if height == 0 || width == 0 || height > MAX_SHAPE || width > MAX_SHAPE {
            return None;
        }
        let mut cells = [[0u8; MAX_SHAPE]; MAX_SHAPE];
        for (r, row) in rows.iter().enumerate() {
            if row.len() != width {
                return None;
            }
            for (c, &v) in row.iter().enumerate() {
                cells[r][c] = u8::from(v != 0);
            }
        }
        Some(Self::new(height as u8, width as u8, cells))
    }

    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Matrix width, including empty columns (used for spawn centering)
    pub fn width(&self) -> u8 {
        self.cols
    }

    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < self.cols() && self.cells[row][col] != 0
    }

    /// Offsets `(dx, dy)` of every filled cell, row-major.
    pub fn filled_cells(&self) -> impl Iterator<Item = CellOffset> + '_ {
        (0..self.rows()).flat_map(move |row| {
            (0..self.cols())
                .filter(move |&col| self.cells[row][col] != 0)
                .map(move |col| (col as i8, row as i8))
        })
    }

    /// Matrix as nested vectors, for display and tests
    pub fn to_matrix(&self) -> Vec<Vec<u8>> {
        (0..self.rows())
            .map(|r| self.cells[r][..self.cols()].to_vec())
            .collect()
    }

    /// 90° clockwise rotation: `rotated[col][rows-1-row] = original[row][col]`.
    pub fn rotate_cw(&self) -> Shape {
        let rows = self.rows();
        let cols = self.cols();
        let mut cells = [[0u8; MAX_SHAPE]; MAX_SHAPE];
        for row in 0..rows {
            for col in 0..cols {
                cells[col][rows - 1 - row] = self.cells[row][col];
            }
        }
        Shape::new(self.cols, self.rows, cells)
    }

    /// 90° counter-clockwise rotation (three clockwise turns)
    pub fn rotate_ccw(&self) -> Shape {
        self.rotate_cw().rotate_cw().rotate_cw()
    }
}

/// Free-function form of [`Shape::rotate_cw`]
pub fn rotate_clockwise(shape: &Shape) -> Shape {
    shape.rotate_cw()
}

pub fn rotate_counter_clockwise(shape: &Shape) -> Shape {
    shape.rotate_ccw()
}

/// Immutable catalog record for one piece kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TetrominoDef {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: Color,
}

/// The seven tetrominoes in spawn orientation
pub const CATALOG: [TetrominoDef; 7] = [
    TetrominoDef {
        kind: PieceKind::I,
        shape: Shape::new(4, 4, [[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]]),
        color: Color::Orange,
    },
    TetrominoDef {
        kind: PieceKind::O,
        shape: Shape::new(2, 2, [[1, 1, 0, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]),
        color: Color::Red,
    },
    TetrominoDef {
        kind: PieceKind::T,
        shape: Shape::new(3, 3, [[0, 1, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]]),
        color: Color::Yellow,
    },
    TetrominoDef {
        kind: PieceKind::S,
        shape: Shape::new(3, 3, [[0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]),
        color: Color::Cyan,
    },
    TetrominoDef {
        kind: PieceKind::Z,
        shape: Shape::new(3, 3, [[1, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]]),
        color: Color::Green,
    },
    TetrominoDef {
        kind: PieceKind::J,
        shape: Shape::new(3, 3, [[1, 0, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]]),
        color: Color::Pink,
    },
    TetrominoDef {
        kind: PieceKind::L,
        shape: Shape::new(3, 3, [[0, 0, 1, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]]),
        color: Color::Blue,
    },
];

/// Catalog entry for a piece kind
pub fn definition(kind: PieceKind) -> &'static TetrominoDef {
    let index = match kind {
        PieceKind::I => 0,
        PieceKind::O => 1,
        PieceKind::T => 2,
        PieceKind::S => 3,
        PieceKind::Z => 4,
        PieceKind::J => 5,
        PieceKind::L => 6,
    };
    &CATALOG[index]
}

/// Spawn-orientation shape for a piece kind
pub fn spawn_shape(kind: PieceKind) -> Shape {
    definition(kind).shape
}

/// Display color for a piece kind
pub fn color_of(kind: PieceKind) -> Color {
    definition(kind).color
}
