use image::GrayImage;
use imageproc::contours::find_contours;
use imageproc::edges::canny;
use imageproc::geometry::approximate_polygon_dp;

use crate::config::MeasureConfig;
use crate::models::BoundingRect;

/// Canny edge map of the saturation mask.
pub fn edge_map(mask: &GrayImage, config: &MeasureConfig) -> GrayImage {
    canny(mask, config.canny_low, config.canny_high)
}

/// Find every contour in the mask, simplify each to a polygon and reduce
/// it to its bounding rectangle.
///
/// The full border tree is walked, so hole borders produce candidates
/// too. That matches how a thin edge ring yields both an outer and an
/// inner rectangle of nearly equal size.
pub fn foot_rectangles(mask: &GrayImage, config: &MeasureConfig) -> Vec<BoundingRect> {
    let edges = edge_map(mask, config);
    let contours = find_contours::<i32>(&edges);

    contours
        .iter()
        .filter_map(|c| {
            // Simplification keeps endpoints, so a degenerate contour's
            // box is the same with or without it.
            if c.points.len() < 3 {
                return BoundingRect::from_points(&c.points);
            }
            let poly = approximate_polygon_dp(&c.points, config.poly_tolerance, true);
            BoundingRect::from_points(&poly)
        })
        .collect()
}

/// Pick the candidate with the largest area. Earlier candidates win ties.
pub fn largest_rectangle(rects: &[BoundingRect]) -> Option<BoundingRect> {
    rects.iter().copied().fold(None, |best, r| match best {
        Some(b) if r.area() <= b.area() => Some(b),
        _ => Some(r),
    })
}
