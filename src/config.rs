/// Tuning parameters for the measurement pipeline.
///
/// The defaults are calibrated for a hand-held photo of a bare foot next
/// to a toonie. Every stage reads its constants from here, so a caller
/// can shift a single threshold without touching the detectors.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasureConfig {
    /// Gaussian sigma applied to the colour image before anything else.
    pub blur_sigma: f32,
    /// Saturation values at or below this drop to zero in the skin mask.
    pub saturation_floor: u8,
    /// Canny low threshold for the foot contour stage.
    pub canny_low: f32,
    /// Canny high threshold for the foot contour stage.
    pub canny_high: f32,
    /// Douglas-Peucker tolerance in pixels for contour simplification.
    pub poly_tolerance: f64,
    /// Inverse resolution of the Hough accumulator grid (1.0 = full size).
    pub accumulator_scale: f32,
    /// Minimum pixel distance between accepted circle centers.
    pub min_center_distance: f32,
    /// Canny high threshold inside the circle detector; low is half of it.
    pub circle_edge_threshold: f32,
    /// Minimum accumulator votes for a center candidate.
    pub accumulator_threshold: u32,
    /// Radius band for the reference circle, in pixels.
    pub min_radius: u32,
    pub max_radius: u32,
    /// Known physical radius of the reference object in centimetres.
    /// The default is a Canadian toonie.
    pub reference_radius_cm: f32,
    /// Run the foot and reference detectors on separate threads.
    pub parallel: bool,
    /// Print per-stage progress to stdout.
    pub verbose: bool,
}

impl MeasureConfig {
    pub fn new() -> Self {
        Self {
            blur_sigma: 0.8,
            saturation_floor: 45,
            canny_low: 150.0,
            canny_high: 225.0,
            poly_tolerance: 3.0,
            accumulator_scale: 1.5,
            min_center_distance: 50.0,
            circle_edge_threshold: 150.0,
            accumulator_threshold: 40,
            min_radius: 0,
            max_radius: 30,
            reference_radius_cm: 1.325,
            parallel: false,
            verbose: false,
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_reference_radius(mut self, radius_cm: f32) -> Self {
        self.reference_radius_cm = radius_cm;
        self
    }

    pub fn with_radius_band(mut self, min_radius: u32, max_radius: u32) -> Self {
        self.min_radius = min_radius;
        self.max_radius = max_radius;
        self
    }
}

impl Default for MeasureConfig {
    fn default() -> Self {
        Self::new()
    }
}
