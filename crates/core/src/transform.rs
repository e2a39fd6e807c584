//! Flat function interface for the snapping math. Each of these takes raw
//! floats, validates them, and hands off to the types in [crate::hex]. Use
//! these if you're wiring snapping into a host that doesn't want to deal with
//! [HexGrid] or [CubePoint] directly.

use crate::{
    hex::{CubePoint, HexGrid, Orientation, PlanarPoint},
    util::{check_finite, check_grid_size, round_half_away},
    SnapError,
};

pub use crate::hex::apothem_to_circumradius;

/// Convert a world space point on the grid plane to fractional cube
/// coordinates. Fails with [SnapError::InvalidGridSize] if the apothem isn't
/// positive, or [SnapError::NonFiniteInput] if the point isn't finite.
pub fn world_to_cube(
    x: f64,
    z: f64,
    apothem: f64,
    orientation: Orientation,
) -> Result<CubePoint, SnapError> {
    HexGrid::new(apothem, orientation)?.world_to_cube(PlanarPoint::new(x, z))
}

/// Round fractional cube coordinates to the nearest cell center. The input
/// should be close to the plane `x + y + z = 0`, but doesn't have to be on it
/// exactly. The output is whole-valued and always on the plane. See
/// [CubePoint::round] for details on tie breaking.
pub fn cube_round(x: f64, y: f64, z: f64) -> Result<CubePoint, SnapError> {
    Ok(CubePoint::new(x, y, z)?.round())
}

/// Convert cube coordinates to a world space point on the grid plane. See
/// [HexGrid::cube_to_world] for the rounding caveat on point-top grids.
pub fn cube_to_world(
    x: f64,
    y: f64,
    z: f64,
    apothem: f64,
    orientation: Orientation,
) -> Result<PlanarPoint, SnapError> {
    let grid = HexGrid::new(apothem, orientation)?;
    grid.cube_to_world(CubePoint::new(x, y, z)?)
}

/// Snap a vertical coordinate to the nearest multiple of `interval`, with
/// halfway cases going away from zero. This has nothing to do with hexagons,
/// it just shares the rounding convention. A result too large to represent
/// is a [SnapError::NonFiniteInput].
pub fn snap_vertical(y: f64, interval: f64) -> Result<f64, SnapError> {
    let interval = check_grid_size(interval)?;
    let y = check_finite("y", y)?;
    check_finite("y", round_half_away(y / interval) * interval)
}
