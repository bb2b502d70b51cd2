pub mod preprocessing;
pub mod contours;
pub mod circles;

use image::{DynamicImage, RgbImage};

use crate::calibration;
use crate::config::MeasureConfig;
use crate::error::{MeasureError, MeasureResult};
use crate::measurement;
use crate::models::{BoundingRect, MeasureReport, ReferenceCircle};
use preprocessing::Preprocessed;

/// Main measurement pipeline orchestrator
pub struct MeasurePipeline {
    pub config: MeasureConfig,
}

impl MeasurePipeline {
    pub fn new(config: MeasureConfig) -> Self {
        Self { config }
    }

    /// Run the full measurement pipeline on an image.
    pub fn measure(&self, img: &DynamicImage) -> MeasureResult<MeasureReport> {
        let rgb = self.checked_rgb(img)?;

        // Step 1: Preprocess image
        if self.config.verbose {
            println!("\nPreprocessing image...");
            println!("Smoothing and building the saturation mask...");
        }
        let pre = preprocessing::preprocess(&rgb, &self.config);

        // Step 2: Run both detectors
        let (rect_candidates, circle_candidates) = self.run_detectors(&pre);

        if self.config.verbose {
            println!("Found {} foot candidates", rect_candidates.len());
            println!("Found {} circle candidates", circle_candidates.len());
        }

        // Step 3: Select the foot box and the reference circle
        let foot =
            contours::largest_rectangle(&rect_candidates).ok_or(MeasureError::FootNotFound)?;
        let reference =
            circles::largest_circle(&circle_candidates).ok_or(MeasureError::ReferenceNotFound)?;

        if self.config.verbose {
            println!(
                "\nSelected foot box {}x{} at ({}, {})",
                foot.width, foot.height, foot.x, foot.y
            );
            println!(
                "Selected reference circle r={} at ({}, {})",
                reference.radius, reference.cx, reference.cy
            );
        }

        // Step 4: Calibrate and convert to physical units
        let scale = calibration::scale_factor(self.config.reference_radius_cm, reference.radius)?;
        let measurement = measurement::apply_scale(&foot, scale);

        if self.config.verbose {
            println!("Scale: {:.5} cm/px", scale.cm_per_pixel);
        }

        Ok(MeasureReport {
            reference,
            reference_radius_cm: self.config.reference_radius_cm,
            scale,
            foot,
            measurement,
        })
    }

    /// Run just the preprocessing stage.
    pub fn preprocess(&self, img: &DynamicImage) -> MeasureResult<Preprocessed> {
        let rgb = self.checked_rgb(img)?;
        Ok(preprocessing::preprocess(&rgb, &self.config))
    }

    /// Get all foot rectangle candidates from an image (for debugging)
    pub fn foot_candidates(&self, img: &DynamicImage) -> MeasureResult<Vec<BoundingRect>> {
        let pre = self.preprocess(img)?;
        Ok(contours::foot_rectangles(&pre.mask, &self.config))
    }

    /// Get all reference circle candidates from an image (for debugging)
    pub fn reference_candidates(&self, img: &DynamicImage) -> MeasureResult<Vec<ReferenceCircle>> {
        let pre = self.preprocess(img)?;
        Ok(circles::detect_circles(&pre.gray, &self.config))
    }

    fn run_detectors(&self, pre: &Preprocessed) -> (Vec<BoundingRect>, Vec<ReferenceCircle>) {
        if self.config.parallel {
            if self.config.verbose {
                println!("\nRunning both detectors on worker threads...");
            }
            std::thread::scope(|s| {
                let contour_worker = s.spawn(|| contours::foot_rectangles(&pre.mask, &self.config));
                let circle_worker = s.spawn(|| circles::detect_circles(&pre.gray, &self.config));
                (
                    contour_worker.join().expect("contour worker panicked"),
                    circle_worker.join().expect("circle worker panicked"),
                )
            })
        } else {
            if self.config.verbose {
                println!("\nDetecting foot contours...");
            }
            let rects = contours::foot_rectangles(&pre.mask, &self.config);
            if self.config.verbose {
                println!("Detecting reference circles...");
            }
            let found = circles::detect_circles(&pre.gray, &self.config);
            (rects, found)
        }
    }

    fn checked_rgb(&self, img: &DynamicImage) -> MeasureResult<RgbImage> {
        if img.width() == 0 || img.height() == 0 {
            return Err(MeasureError::InvalidImage);
        }
        Ok(img.to_rgb8())
    }
}

impl Default for MeasurePipeline {
    fn default() -> Self {
        Self::new(MeasureConfig::new())
    }
}
