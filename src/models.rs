use imageproc::point::Point;
use serde::Serialize;

/// Axis-aligned bounding rectangle in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoundingRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl BoundingRect {
    /// Tight bounding box of a point set. Returns `None` for an empty set.
    pub fn from_points(points: &[Point<i32>]) -> Option<Self> {
        let first = points.first()?;
        let (mut min_x, mut min_y) = (first.x, first.y);
        let (mut max_x, mut max_y) = (first.x, first.y);

        for p in &points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        Some(Self {
            x: min_x,
            y: min_y,
            width: (max_x - min_x + 1) as u32,
            height: (max_y - min_y + 1) as u32,
        })
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn right(&self) -> i32 {
        self.x + self.width as i32 - 1
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32 - 1
    }
}

/// A circle candidate produced by the Hough transform, in pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReferenceCircle {
    pub cx: i32,
    pub cy: i32,
    pub radius: i32,
}

impl ReferenceCircle {
    pub fn center(&self) -> (i32, i32) {
        (self.cx, self.cy)
    }
}

/// Centimetres per pixel, derived from the reference circle.
///
/// Only `calibration::scale_factor` builds one, and it rejects degenerate
/// inputs, so a value of this type is always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScaleFactor {
    pub cm_per_pixel: f32,
}

/// Physical foot dimensions in centimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Measurement {
    pub width_cm: f32,
    pub length_cm: f32,
}

/// Everything a successful measurement run produces: the selected
/// reference circle, the scale derived from it, the foot's pixel
/// bounding box and its physical dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeasureReport {
    pub reference: ReferenceCircle,
    /// Known physical radius of the reference object in centimetres.
    pub reference_radius_cm: f32,
    pub scale: ScaleFactor,
    pub foot: BoundingRect,
    pub measurement: Measurement,
}
