use crate::error::{MeasureError, MeasureResult};
use crate::models::ScaleFactor;

/// Derive the image scale from the reference circle.
///
/// `reference_radius_cm` is the known physical radius of the reference
/// object, `pixel_radius` the detected one. Degenerate inputs fail with
/// `CalibrationFailed` rather than producing a zero or infinite scale.
pub fn scale_factor(reference_radius_cm: f32, pixel_radius: i32) -> MeasureResult<ScaleFactor> {
    if pixel_radius <= 0 || reference_radius_cm <= 0.0 {
        return Err(MeasureError::CalibrationFailed);
    }

    Ok(ScaleFactor {
        cm_per_pixel: reference_radius_cm / pixel_radius as f32,
    })
}
