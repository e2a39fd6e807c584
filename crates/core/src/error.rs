use thiserror::Error;

/// Errors that can occur while snapping. All of these are precondition
/// violations on the caller's input; the snapping math itself holds no state,
/// so nothing here is ever fatal or worth retrying.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum SnapError {
    /// A grid apothem or snap interval was zero, negative, NaN, or infinite.
    /// We check this before dividing by it, so you'll never get NaN/infinite
    /// coordinates out of a bad grid size.
    #[error("invalid grid size {0}; must be a finite number greater than 0")]
    InvalidGridSize(f64),

    /// A coordinate (either from the input position or derived from it) was
    /// NaN or infinite. Rounding is never attempted on these values.
    #[error("non-finite {axis} coordinate: {value}")]
    NonFiniteInput { axis: &'static str, value: f64 },
}
