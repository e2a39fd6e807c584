use crate::hex::Orientation;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use validator::Validate;

/// Configuration that defines how a [Snapper](crate::Snapper) moves objects
/// onto the grid. Planar (hex grid) snapping and vertical snapping are
/// controlled independently; either, both, or neither can be enabled.
///
/// Fields for a disabled step are still validated, but they're never used.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SnapConfig {
    /// Which way the hexagons in the grid are rotated
    pub orientation: Orientation,

    /// Should positions be snapped to the nearest cell center on the `x`/`z`
    /// plane?
    pub planar_snap_enabled: bool,

    /// Where the grid's apothem comes from. See [ApothemSource].
    pub apothem_source: ApothemSource,

    /// Grid apothem to use with [ApothemSource::Custom]. This is the distance
    /// from the center of a cell to the midpoint of one of its sides, **not**
    /// the distance to a vertex.
    #[validate(range(min = 0.0001))]
    pub custom_apothem: f64,

    /// Should the vertical (`y`) component be snapped?
    pub vertical_snap_enabled: bool,

    /// Interval that vertical positions are snapped to. E.g. 0.5 snaps to
    /// `..., -0.5, 0.0, 0.5, 1.0, ...`
    #[validate(range(min = 0.0001))]
    pub vertical_interval: f64,
}

/// Where to get the grid size from.
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
pub enum ApothemSource {
    /// Use the `x` component of the snapped object's local scale. This means
    /// each object can carry its own grid size, and resizing an object moves
    /// it onto a different grid.
    Scale,
    /// Use [SnapConfig::custom_apothem] for all objects
    Custom,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::PointTop,
            planar_snap_enabled: true,
            apothem_source: ApothemSource::Scale,
            custom_apothem: 1.0,
            vertical_snap_enabled: false,
            vertical_interval: 1.0,
        }
    }
}
