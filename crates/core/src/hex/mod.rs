//! This module holds basic types and math related to hexagon grids.
//!
//! ## Coordinate Systems
//!
//! Snapping converts between two different coordinate systems:
//!
//! ### World Coordinates
//!
//! World coordinates are the continuous, three-dimensional coordinates of
//! whatever host system is positioning objects. The hex grid lies flat on the
//! `x`/`z` plane, and `y` is the vertical axis. The grid logic only ever looks
//! at the planar `(x, z)` pair (see [PlanarPoint]). The vertical axis can be
//! snapped too, but that's a simple independent rounding step that has
//! nothing to do with hexagons (see [crate::transform::snap_vertical]).
//!
//! ### Cube Coordinates
//!
//! Cube coordinates address cells in the hex grid. The system we use is the
//! [cube coordinate system defined by Amit Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-cube).
//!
//! Each coordinate has three components (`x`, `y`, and `z`). **For any cell
//! center, all three components will be whole numbers and `x + y + z = 0`.**
//! Even though the grid is two-dimensional, three components make the
//! rounding math much simpler than axial or offset schemes. Any point in the
//! grid (not just cell centers) can be expressed in cube space with
//! fractional components, and the plane `x + y + z = 0` still holds.
//!
//! #### Snapping
//!
//! Snapping a world point to the grid involves these steps:
//!
//! 1. Convert the planar point to fractional cube coordinates
//!    ([HexGrid::world_to_cube])
//! 2. Round the cube coordinates to the nearest cell center, while keeping
//!    `x + y + z = 0` ([CubePoint::round])
//! 3. Convert the cell center back to world space ([HexGrid::cube_to_world])
//!
//! ## Grid Size
//!
//! Grids are sized by their **apothem**, the distance from the center of a
//! cell to the midpoint of one of its sides. The math works in terms of the
//! **circumradius** (center to vertex), which is derived from the apothem via
//! [APOTHEM_TO_CIRCUMRADIUS].

mod unit;

pub use self::unit::*;
use crate::{
    util::{check_finite, check_grid_size, round_half_away},
    SnapError,
};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// `sqrt(3)`. Shows up everywhere in hexagon math.
pub const SQRT_3: f64 = 1.7320508075688772;

/// Multiplicative factor that converts a hexagon's apothem to its
/// circumradius. Exactly `2 / sqrt(3)`, roughly 1.1547.
pub const APOTHEM_TO_CIRCUMRADIUS: f64 = 1.1547005383792515;

/// Which way the hexagons in a grid are rotated. This determines which basis
/// vectors map the cube axes onto the world plane.
///
/// See this page for pictures of both:
/// https://www.redblobgames.com/grids/hexagons/#basics
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Orientation {
    /// Each hexagon has a vertex pointing along the `+z` axis. Rows of cells
    /// run along the `x` axis.
    PointTop,
    /// Each hexagon has a flat side facing the `+z` axis. Columns of cells
    /// run along the `z` axis.
    FlatTop,
}

impl Default for Orientation {
    fn default() -> Self {
        Self::PointTop
    }
}

/// Convert a hexagon apothem (center to side midpoint) to its circumradius
/// (center to vertex). This doesn't validate the input at all; if you need
/// that, construct a [HexGrid].
pub fn apothem_to_circumradius(apothem: f64) -> f64 {
    apothem * APOTHEM_TO_CIRCUMRADIUS
}

/// A hexagon grid definition: how big each cell is and which way cells are
/// rotated. A grid is validated on construction, so all the conversions on
/// it can divide by its size without worrying.
///
/// Grids are cheap to create, so there's no reason to hang onto one if the
/// size changes, e.g. when the apothem comes from an object's scale.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HexGrid {
    apothem: f64,
    orientation: Orientation,
}

impl HexGrid {
    /// Define a new grid. Returns [SnapError::InvalidGridSize] if the apothem
    /// is not a finite number greater than zero.
    pub fn new(
        apothem: f64,
        orientation: Orientation,
    ) -> Result<Self, SnapError> {
        Ok(Self {
            apothem: check_grid_size(apothem)?,
            orientation,
        })
    }

    /// Distance from the center of a cell to the midpoint of any of its
    /// sides
    pub fn apothem(&self) -> f64 {
        self.apothem
    }

    /// Distance from the center of a cell to any of its vertices
    pub fn circumradius(&self) -> f64 {
        apothem_to_circumradius(self.apothem)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Convert a point in world space to (fractional) cube coordinates. The
    /// output falls on the plane `x + y + z = 0` by construction, since `y`
    /// is derived from the other two.
    ///
    /// Returns [SnapError::NonFiniteInput] if the input has a NaN/infinite
    /// component, or if the conversion overflows.
    pub fn world_to_cube(
        &self,
        point: PlanarPoint,
    ) -> Result<CubePoint, SnapError> {
        let px = check_finite("x", point.x)?;
        let pz = check_finite("z", point.z)?;
        let radius = self.circumradius();

        let (x, z) = match self.orientation {
            Orientation::PointTop => (
                (SQRT_3 / 3.0 * px - 1.0 / 3.0 * pz) / radius,
                (2.0 / 3.0 * pz) / radius,
            ),
            Orientation::FlatTop => (
                (2.0 / 3.0 * px) / radius,
                (-1.0 / 3.0 * px + SQRT_3 / 3.0 * pz) / radius,
            ),
        };
        CubePoint::new_xz(x, z)
    }

    /// Convert cube coordinates to a point in world space. This is the
    /// inverse of [Self::world_to_cube], with one catch: for point-top grids,
    /// the output `x` is rounded to a whole number (half away from zero). The
    /// `z` component is never rounded, and flat-top grids are never rounded.
    ///
    /// Returns [SnapError::NonFiniteInput] if the conversion overflows.
    pub fn cube_to_world(
        &self,
        point: CubePoint,
    ) -> Result<PlanarPoint, SnapError> {
        let radius = self.circumradius();
        let (x, z) = match self.orientation {
            Orientation::PointTop => (
                round_half_away(
                    radius * (SQRT_3 * point.x() + SQRT_3 / 2.0 * point.z()),
                ),
                radius * (1.5 * point.z()),
            ),
            Orientation::FlatTop => (
                radius * (1.5 * point.x()),
                radius * (SQRT_3 / 2.0 * point.x() + SQRT_3 * point.z()),
            ),
        };
        Ok(PlanarPoint::new(check_finite("x", x)?, check_finite("z", z)?))
    }

    /// Get the cube coordinates of the cell that contains the given world
    /// point.
    pub fn cell_at(&self, point: PlanarPoint) -> Result<CubePoint, SnapError> {
        Ok(self.world_to_cube(point)?.round())
    }

    /// Move a world point to the center of the cell that contains it.
    pub fn snap(&self, point: PlanarPoint) -> Result<PlanarPoint, SnapError> {
        self.cube_to_world(self.cell_at(point)?)
    }
}
