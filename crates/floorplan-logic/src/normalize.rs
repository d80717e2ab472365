//! Grid quantization for table coordinates.
//!
//! Repeated drag deltas leave floating-point residue (`100.00009` next to
//! `100.0`) that would break flush-edge adjacency. Quantizing every accepted
//! coordinate to the grid removes it.

use crate::bounds::Point;
use crate::config::LayoutConfig;
use crate::constants;

/// Quantize `coord` to the default 4px grid.
///
/// A missing or non-finite coordinate is replaced by the fallback (100) and
/// logged; it is never propagated as an error.
pub fn normalize(coord: Option<f32>) -> f32 {
    normalize_to_grid(coord, constants::DEFAULT_GRID_SIZE, constants::FALLBACK_COORD)
}

/// [`normalize`] with the grid and fallback taken from `config`.
pub fn normalize_with(coord: Option<f32>, config: &LayoutConfig) -> f32 {
    normalize_to_grid(coord, config.grid_size, config.fallback_coord)
}

/// Quantize both axes of a position.
pub fn normalize_point(x: Option<f32>, y: Option<f32>, config: &LayoutConfig) -> Point {
    Point::new(normalize_with(x, config), normalize_with(y, config))
}

fn normalize_to_grid(coord: Option<f32>, grid_size: f32, fallback: f32) -> f32 {
    let value = match coord {
        Some(v) if v.is_finite() => v,
        other => {
            log::warn!(
                "invalid coordinate {:?}, substituting fallback {}",
                other,
                fallback
            );
            return fallback;
        }
    };
    if !(grid_size.is_finite() && grid_size > 0.0) {
        // No usable grid: pass the coordinate through unquantized.
        return value;
    }
    (value / grid_size).round() * grid_size
}
