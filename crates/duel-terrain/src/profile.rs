//! Initial ground generation from a `TerrainProfile`.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use duel_core::config::TerrainProfile;
use duel_core::types::Bounds;

use crate::mask::SolidityMask;

/// Number of sine octaves summed for rolling hills.
const ROLLING_OCTAVES: u32 = 3;

/// Build the starting mask for `profile` over `bounds`.
///
/// A cell is solid when its center lies inside the profile's ground.
pub fn build_mask(bounds: Bounds, profile: &TerrainProfile) -> SolidityMask {
    let mut mask = SolidityMask::empty(bounds);
    let height = mask.height();

    match *profile {
        TerrainProfile::Flat { surface_y } => {
            let top = first_row_at_or_below(surface_y);
            for col in 0..mask.width() {
                mask.fill_column(col, top, height);
            }
        }
        TerrainProfile::Slab { top, bottom } => {
            let top_row = first_row_at_or_below(top);
            let bottom_row = first_row_at_or_below(bottom);
            for col in 0..mask.width() {
                mask.fill_column(col, top_row, bottom_row);
            }
        }
        TerrainProfile::Rolling {
            seed,
            base_y,
            amplitude,
            wavelength,
        } => {
            let surface = rolling_surface(
                mask.width(),
                bounds.height,
                seed,
                base_y,
                amplitude,
                wavelength,
            );
            for (col, y) in surface.into_iter().enumerate() {
                mask.fill_column(col, first_row_at_or_below(y), height);
            }
        }
    }

    tracing::debug!(
        width = mask.width(),
        height = mask.height(),
        solid = mask.solid_cells(),
        "terrain built"
    );
    mask
}

/// First row whose center (`row + 0.5`) is at or below `y`.
fn first_row_at_or_below(y: f64) -> usize {
    (y - 0.5).ceil().max(0.0) as usize
}

/// Surface height per column: a normalized sum of sine octaves with
/// seeded phases, clamped to the world.
fn rolling_surface(
    columns: usize,
    world_height: f64,
    seed: u64,
    base_y: f64,
    amplitude: f64,
    wavelength: f64,
) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let phases: Vec<f64> = (0..ROLLING_OCTAVES)
        .map(|_| rng.gen_range(0.0..std::f64::consts::TAU))
        .collect();
    let norm: f64 = (0..ROLLING_OCTAVES).map(|k| 0.5f64.powi(k as i32)).sum();

    (0..columns)
        .map(|col| {
            let x = col as f64 + 0.5;
            let wave: f64 = phases
                .iter()
                .enumerate()
                .map(|(k, phase)| {
                    let weight = 0.5f64.powi(k as i32);
                    let freq = std::f64::consts::TAU * 2f64.powi(k as i32) / wavelength;
                    weight * (x * freq + phase).sin()
                })
                .sum();
            (base_y + amplitude * wave / norm).clamp(0.0, world_height)
        })
        .collect()
}
