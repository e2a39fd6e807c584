//! This sub-module contains the point types that the snapping math passes
//! around. See the parent module documentation for more info on the coordinate
//! systems.

use crate::{
    util::{check_finite, round_half_away},
    SnapError,
};
use derive_more::{Display, From};
use serde::Serialize;

/// A point in cube coordinate space. This can be any point in the hex grid,
/// not just a cell center. Use [Self::round] to get the center of the cell
/// that a point falls in.
///
/// All components are guaranteed to be finite. Points created by
/// [Self::new_xz] (or by any of the conversions in this crate) also fall on
/// the plane `x + y + z = 0`. [Self::new] doesn't enforce that, because
/// fractional coordinates coming from other sources are allowed to be a bit
/// off due to floating point error.
#[derive(Copy, Clone, Debug, PartialEq, Display)]
#[display(fmt = "({}, {}, {})", "self.x", "self.y", "self.z")]
pub struct CubePoint {
    x: f64,
    y: f64,
    z: f64,
}

impl CubePoint {
    pub const ORIGIN: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Construct a new point from all three components. Returns
    /// [SnapError::NonFiniteInput] if any of them are NaN or infinite.
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self, SnapError> {
        Ok(Self {
            x: check_finite("x", x)?,
            y: check_finite("y", y)?,
            z: check_finite("z", z)?,
        })
    }

    /// Construct a new point with the given x and z. Since x+y+z=0 for all
    /// points, we can derive y from x & z.
    pub fn new_xz(x: f64, z: f64) -> Result<Self, SnapError> {
        Self::new(x, -x - z, z)
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    /// Round this point to the center of the cell that it falls in. Every
    /// component of the output is a whole number, and the output always
    /// satisfies `x + y + z = 0` exactly.
    ///
    /// Each component is rounded on its own (half away from zero), which can
    /// break the zero-sum. To fix that, the component that moved the most
    /// during rounding gets re-derived from the other two. The checks run in
    /// the order x, y, z with strict comparisons, so when residuals tie, the
    /// later axis is the one that gets overwritten. Changing this order
    /// changes which cell ambiguous points land in!
    pub fn round(self) -> Self {
        let mut x = round_half_away(self.x);
        let mut y = round_half_away(self.y);
        let mut z = round_half_away(self.z);

        let x_diff = (x - self.x).abs();
        let y_diff = (y - self.y).abs();
        let z_diff = (z - self.z).abs();

        if x_diff > y_diff && x_diff > z_diff {
            x = -y - z;
        } else if y_diff > z_diff {
            y = -x - z;
        } else {
            z = -x - y;
        }

        // Adding zero turns any -0.0 into 0.0
        Self {
            x: x + 0.0,
            y: y + 0.0,
            z: z + 0.0,
        }
    }
}

/// A point on the grid plane in world space. This is the `(x, z)` pair of a
/// [WorldPosition]; the vertical axis is dropped.
#[derive(Copy, Clone, Debug, PartialEq, Display)]
#[display(fmt = "({}, {})", "self.x", "self.z")]
pub struct PlanarPoint {
    pub x: f64,
    pub z: f64,
}

impl PlanarPoint {
    pub const ORIGIN: Self = Self { x: 0.0, z: 0.0 };

    pub const fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }
}

/// A full position in world space. `x` and `z` define the grid plane, `y` is
/// vertical.
#[derive(Copy, Clone, Debug, PartialEq, Display, From, Serialize)]
#[display(fmt = "({}, {}, {})", "self.x", "self.y", "self.z")]
pub struct WorldPosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl WorldPosition {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Get the grid plane component of this position
    pub fn planar(self) -> PlanarPoint {
        PlanarPoint::new(self.x, self.z)
    }

    /// Replace the grid plane component of this position, keeping the
    /// vertical component
    pub fn with_planar(self, planar: PlanarPoint) -> Self {
        Self::new(planar.x, self.y, planar.z)
    }
}
