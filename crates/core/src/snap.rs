use crate::{
    config::{ApothemSource, SnapConfig},
    hex::{HexGrid, WorldPosition},
    transform::snap_vertical,
    util::check_grid_size,
    SnapError,
};
use anyhow::Context;
use log::{info, trace};
use validator::Validate;

/// A snapper moves positions onto the grid defined by a [SnapConfig]. It
/// holds no state other than its config, so one snapper can be shared
/// between any number of objects (and threads) and called as often as the
/// host likes, e.g. once per object per frame.
///
/// Config options cannot be changed after creating a snapper, but snappers
/// are very cheap to create so if you need to change the config, just create
/// a new one.
#[derive(Copy, Clone, Debug)]
pub struct Snapper {
    config: SnapConfig,
}

impl Snapper {
    /// Initialize a new snapper with the given options. Returns an error if
    /// the config is invalid. Validation errors come back as
    /// [validator::ValidationErrors], and grid sizes that pass range
    /// validation but still can't be used (e.g. infinite) come back as
    /// [SnapError].
    pub fn new(config: SnapConfig) -> anyhow::Result<Self> {
        info!("Initializing snapper with config {:?}", config);

        config.validate()?;
        // Only check sizes for steps that will actually use them
        if config.planar_snap_enabled
            && config.apothem_source == ApothemSource::Custom
        {
            check_grid_size(config.custom_apothem)
                .context("invalid custom apothem")?;
        }
        if config.vertical_snap_enabled {
            check_grid_size(config.vertical_interval)
                .context("invalid vertical interval")?;
        }

        Ok(Self { config })
    }

    /// Get a reference to the config that this snapper uses
    pub fn config(&self) -> &SnapConfig {
        &self.config
    }

    /// Get the grid that positions will be snapped to. `scale` is the `x`
    /// component of the snapped object's local scale, which is only used
    /// with [ApothemSource::Scale].
    pub fn grid(&self, scale: f64) -> Result<HexGrid, SnapError> {
        let apothem = match self.config.apothem_source {
            ApothemSource::Scale => scale,
            ApothemSource::Custom => self.config.custom_apothem,
        };
        HexGrid::new(apothem, self.config.orientation)
    }

    /// Snap a position according to this snapper's config, and return the
    /// snapped position. The input isn't modified, it's up to the caller to
    /// apply the output to whatever object it belongs to.
    ///
    /// - If planar snapping is enabled, `x` and `z` are moved to the center
    ///   of the grid cell they fall in
    /// - If vertical snapping is enabled, `y` is moved to the nearest multiple
    ///   of the vertical interval
    ///
    /// Components that aren't snapped are passed through untouched, and never
    /// validated. `scale` is only used for [ApothemSource::Scale]; pass
    /// anything if you're using a custom apothem.
    pub fn snap(
        &self,
        position: WorldPosition,
        scale: f64,
    ) -> Result<WorldPosition, SnapError> {
        let mut snapped = position;

        if self.config.vertical_snap_enabled {
            snapped.y =
                snap_vertical(position.y, self.config.vertical_interval)?;
        }

        if self.config.planar_snap_enabled {
            let grid = self.grid(scale)?;
            snapped = snapped.with_planar(grid.snap(position.planar())?);
        }

        trace!("Snapped {} to {}", position, snapped);
        Ok(snapped)
    }
}
