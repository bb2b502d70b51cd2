use image::{GrayImage, Luma, Rgb, RgbImage, imageops};
use imageproc::contrast::{ThresholdType, threshold_mut};
use imageproc::filter::gaussian_blur_f32;

use crate::config::MeasureConfig;

/// Intermediate images shared by the two detectors.
pub struct Preprocessed {
    /// Smoothed colour image, the base for annotation overlays.
    pub smoothed: RgbImage,
    /// Saturation mask feeding the foot contour stage.
    pub mask: GrayImage,
    /// Blurred grayscale image feeding the circle detector.
    pub gray: GrayImage,
}

/// Apply Gaussian smoothing to the colour image.
pub fn smooth(img: &RgbImage, sigma: f32) -> RgbImage {
    gaussian_blur_f32(img, sigma)
}

/// Extract the HSV saturation channel.
///
/// Saturation only depends on the per-pixel channel maximum and minimum,
/// so the result is identical no matter how the channels are ordered.
pub fn saturation_channel(img: &RgbImage) -> GrayImage {
    GrayImage::from_fn(img.width(), img.height(), |x, y| {
        let Rgb([r, g, b]) = *img.get_pixel(x, y);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        if max == 0 {
            Luma([0])
        } else {
            let s = (max - min) as f32 / max as f32 * 255.0;
            Luma([s.round() as u8])
        }
    })
}

/// Build the skin mask: saturation channel with everything at or below
/// the floor forced to zero. Values above the floor keep their level so
/// later gradients stay meaningful.
pub fn saturation_mask(img: &RgbImage, floor: u8) -> GrayImage {
    let mut mask = saturation_channel(img);
    // imageproc 0.25 implements ToZero/ToZeroInverted swapped relative to
    // its own docs; this variant is the one that keeps values strictly
    // above the floor and zeroes the rest.
    threshold_mut(&mut mask, floor, ThresholdType::ToZeroInverted);
    mask
}

/// Convert to grayscale for the circle detector.
pub fn to_grayscale(img: &RgbImage) -> GrayImage {
    imageops::grayscale(img)
}

/// Run the full preprocessing stage.
///
/// The grayscale path is smoothed a second time after conversion, so the
/// circle detector sees a softer image than the mask does.
pub fn preprocess(image: &RgbImage, config: &MeasureConfig) -> Preprocessed {
    let smoothed = smooth(image, config.blur_sigma);
    let mask = saturation_mask(&smoothed, config.saturation_floor);
    let gray = gaussian_blur_f32(&to_grayscale(&smoothed), config.blur_sigma);

    Preprocessed {
        smoothed,
        mask,
        gray,
    }
}
