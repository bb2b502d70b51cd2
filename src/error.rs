use thiserror::Error;

/// Result alias for the measurement pipeline.
pub type MeasureResult<T> = Result<T, MeasureError>;

/// Terminal failures of the measurement pipeline.
///
/// Every kind names the stage that gave up, so a caller can tell a bad
/// photo (nothing skin-coloured in frame) from a bad setup (coin missing
/// or outside the configured radius band).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MeasureError {
    /// The input image is empty or has a zero dimension.
    #[error("input image is empty or has zero dimensions")]
    InvalidImage,

    /// The saturation mask produced no contours, so there is no foot
    /// candidate to measure.
    #[error("no foot silhouette found in the saturation mask")]
    FootNotFound,

    /// The circle transform produced no candidate inside the configured
    /// radius band.
    #[error("no circular reference object found in the radius band")]
    ReferenceNotFound,

    /// Calibration inputs were degenerate (zero pixel radius or a
    /// non-positive known radius), so no scale factor exists.
    #[error("calibration failed: reference radius is degenerate")]
    CalibrationFailed,
}
