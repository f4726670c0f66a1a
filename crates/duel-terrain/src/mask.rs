//! SolidityMask: one bit per 1×1 cell over the playable region.

use duel_core::types::{Bounds, DVec2};

use crate::Terrain;

/// A crater carved into the mask, kept for renderers that rebuild the
/// ground texture from scratch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crater {
    pub center: DVec2,
    pub radius: f64,
}

/// Bit-packed solidity field. Bit 1 = solid, bit 0 = air. Row-major,
/// top-to-bottom, left-to-right.
#[derive(Debug, Clone)]
pub struct SolidityMask {
    width: usize,
    height: usize,
    bits: Vec<u8>,
    craters: Vec<Crater>,
}

impl SolidityMask {
    /// An all-air mask covering `bounds`.
    pub fn empty(bounds: Bounds) -> Self {
        let width = bounds.width.ceil().max(0.0) as usize;
        let height = bounds.height.ceil().max(0.0) as usize;
        Self {
            width,
            height,
            bits: vec![0; (width * height).div_ceil(8)],
            craters: Vec::new(),
        }
    }

    /// Width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Craters in the order they were carved.
    pub fn craters(&self) -> &[Crater] {
        &self.craters
    }

    /// Number of solid cells.
    pub fn solid_cells(&self) -> usize {
        self.bits.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Whether the cell at integer coordinates is solid. Out of range is air.
    pub fn cell(&self, col: usize, row: usize) -> bool {
        if col >= self.width || row >= self.height {
            return false;
        }
        let idx = row * self.width + col;
        self.bits[idx / 8] & (1 << (idx % 8)) != 0
    }

    fn set_cell(&mut self, col: usize, row: usize, solid: bool) {
        let idx = row * self.width + col;
        let mask = 1u8 << (idx % 8);
        if solid {
            self.bits[idx / 8] |= mask;
        } else {
            self.bits[idx / 8] &= !mask;
        }
    }

    /// Mark rows `[top_row, bottom_row)` of column `col` solid.
    /// Only used while building the initial ground.
    pub(crate) fn fill_column(&mut self, col: usize, top_row: usize, bottom_row: usize) {
        let bottom_row = bottom_row.min(self.height);
        for row in top_row..bottom_row {
            self.set_cell(col, row, true);
        }
    }

    /// Topmost solid y in the column containing `x`, if any.
    pub fn surface_y(&self, x: f64) -> Option<f64> {
        if x < 0.0 {
            return None;
        }
        let col = x.floor() as usize;
        (0..self.height)
            .find(|&row| self.cell(col, row))
            .map(|row| row as f64)
    }
}

impl Terrain for SolidityMask {
    fn is_solid_at(&self, point: DVec2) -> bool {
        if point.x < 0.0 || point.y < 0.0 {
            return false;
        }
        self.cell(point.x.floor() as usize, point.y.floor() as usize)
    }

    fn carve_crater(&mut self, center: DVec2, radius: f64) {
        if !(radius > 0.0) || self.width == 0 || self.height == 0 {
            return;
        }

        // Clear every cell that touches the disk, not just those whose
        // center is inside it, so no point within `radius` stays solid.
        let col_lo = (center.x - radius).floor().max(0.0) as usize;
        let row_lo = (center.y - radius).floor().max(0.0) as usize;
        let col_hi = ((center.x + radius).floor().max(-1.0) + 1.0) as usize;
        let row_hi = ((center.y + radius).floor().max(-1.0) + 1.0) as usize;
        let col_hi = col_hi.min(self.width);
        let row_hi = row_hi.min(self.height);
        let r_sq = radius * radius;

        let mut cleared = 0usize;
        for row in row_lo..row_hi {
            let y0 = row as f64;
            let dy = (y0 - center.y).max(0.0).max(center.y - (y0 + 1.0));
            for col in col_lo..col_hi {
                let x0 = col as f64;
                let dx = (x0 - center.x).max(0.0).max(center.x - (x0 + 1.0));
                if dx * dx + dy * dy <= r_sq && self.cell(col, row) {
                    self.set_cell(col, row, false);
                    cleared += 1;
                }
            }
        }

        self.craters.push(Crater { center, radius });
        tracing::debug!(x = center.x, y = center.y, radius, cleared, "crater carved");
    }
}
