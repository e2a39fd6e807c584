//! hexsnap moves objects onto a hexagon grid. Given a position in world space
//! and a grid definition, it finds the hexagon cell the position falls in and
//! returns that cell's center. This crate only contains the snapping logic;
//! attaching it to objects and deciding when to run it is up to the host.
//!
//! ```
//! use hexsnap::{SnapConfig, Snapper, WorldPosition};
//!
//! # fn main() -> anyhow::Result<()> {
//! let snapper = Snapper::new(SnapConfig::default())?;
//! // The default config takes the grid size from the object's scale
//! let snapped = snapper.snap(WorldPosition::new(2.1, 4.2, 0.2), 1.0)?;
//! assert_eq!(snapped, WorldPosition::new(2.0, 4.2, 0.0));
//! # Ok(())
//! # }
//! ```
//!
//! See [SnapConfig] for details on how snapping can be customized, and
//! [transform] for the underlying math as plain functions.

mod config;
mod error;
pub mod hex;
mod snap;
pub mod transform;
mod util;

pub use crate::{
    config::{ApothemSource, SnapConfig},
    error::SnapError,
    hex::{CubePoint, HexGrid, Orientation, PlanarPoint, WorldPosition},
    snap::Snapper,
};
