use super::constants::HEX_NEIGHBOR_OFFSETS;
use glam::DVec2;
use rand::Rng;
use smallvec::SmallVec;

/// Staggered lattice geometry derived from the hexagon size.
///
/// Odd rows are shifted right by half a column, which turns the rectangular
/// `(row, col)` index space into a hex-like arrangement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HexLayout {
    pub hex_size: f64,
}

impl HexLayout {
    pub fn new(hex_size: f64) -> Self {
        Self { hex_size }
    }

    #[inline]
    pub fn x_offset(&self) -> f64 {
        self.hex_size * 3.0
    }

    #[inline]
    pub fn y_offset(&self) -> f64 {
        self.hex_size * 3.0_f64.sqrt() / 2.0
    }

    /// Number of `(rows, cols)` needed to cover a viewport.
    pub fn dimensions_for(&self, width: u32, height: u32) -> (usize, usize) {
        let cols = (width as f64 / self.x_offset()).ceil() as usize;
        let rows = (height as f64 / self.y_offset()).ceil() as usize;
        (rows, cols)
    }

    /// Pixel center of a lattice point.
    #[inline]
    pub fn cell_center(&self, row: usize, col: usize) -> DVec2 {
        let x_off = self.x_offset();
        let stagger = (row % 2) as f64 * x_off / 2.0;
        DVec2::new(col as f64 * x_off + stagger, row as f64 * self.y_offset())
    }
}

/// Row-major brightness storage for the lattice.
#[derive(Clone, Debug, Default)]
pub struct HexField {
    rows: usize,
    cols: usize,
    brightness: Vec<f64>,
}

impl HexField {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            brightness: vec![0.0; rows * cols],
        }
    }

    /// Build a field with every cell drawn uniformly from `[0, 1)`.
    pub fn random(rows: usize, cols: usize, rng: &mut impl Rng) -> Self {
        let brightness = (0..rows * cols).map(|_| rng.gen::<f64>()).collect();
        Self {
            rows,
            cols,
            brightness,
        }
    }

    /// Build a field from explicit row-major values, clamped into `[0, 1]`.
    /// Returns `None` when the value count doesn't match the shape.
    pub fn from_values(rows: usize, cols: usize, values: Vec<f64>) -> Option<Self> {
        if values.len() != rows * cols {
            return None;
        }
        let brightness = values.into_iter().map(|v| v.clamp(0.0, 1.0)).collect();
        Some(Self {
            rows,
            cols,
            brightness,
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.brightness.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.brightness.is_empty()
    }

    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.brightness[self.index(row, col)])
        } else {
            None
        }
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        if row < self.rows && col < self.cols {
            let i = self.index(row, col);
            self.brightness[i] = value.clamp(0.0, 1.0);
        }
    }

    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.brightness
    }

    #[inline]
    pub(crate) fn values_mut(&mut self) -> &mut [f64] {
        &mut self.brightness
    }

    /// In-bounds axial neighbours of `(row, col)` as flat indices.
    pub fn neighbor_indices(&self, row: usize, col: usize) -> SmallVec<[usize; 6]> {
        let mut out = SmallVec::new();
        for (dr, dc) in HEX_NEIGHBOR_OFFSETS {
            let r = row as i64 + dr as i64;
            let c = col as i64 + dc as i64;
            if r >= 0 && c >= 0 && (r as usize) < self.rows && (c as usize) < self.cols {
                out.push(self.index(r as usize, c as usize));
            }
        }
        out
    }

    /// Mean neighbour brightness read from `source`, or `0.0` with no neighbours.
    pub fn neighbor_average(&self, source: &[f64], row: usize, col: usize) -> f64 {
        let neighbors = self.neighbor_indices(row, col);
        if neighbors.is_empty() {
            return 0.0;
        }
        let sum: f64 = neighbors.iter().map(|&i| source[i]).sum();
        sum / neighbors.len() as f64
    }
}
