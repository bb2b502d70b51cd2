use crate::models::{BoundingRect, Measurement, ScaleFactor};

/// Convert the foot's pixel bounding box to physical units. Length runs
/// along the image's vertical axis, width along the horizontal one.
pub fn apply_scale(rect: &BoundingRect, scale: ScaleFactor) -> Measurement {
    Measurement {
        width_cm: rect.width as f32 * scale.cm_per_pixel,
        length_cm: rect.height as f32 * scale.cm_per_pixel,
    }
}
