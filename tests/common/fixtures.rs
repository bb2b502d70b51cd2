use image::{DynamicImage, GrayImage, ImageBuffer, Luma, Rgb, RgbImage};
use tempfile::NamedTempFile;

/// Skin-like fill for the foot shape. Saturation works out to 170,
/// well above the default mask floor.
pub const SKIN: Rgb<u8> = Rgb([210, 120, 70]);
/// Neutral background with zero saturation.
pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
/// Coin fill: neutral gray, so it is invisible to the saturation mask
/// but makes a strong luminance edge for the circle detector.
pub const COIN: Rgb<u8> = Rgb([70, 70, 70]);

/// Canonical scene geometry shared by the pipeline tests.
pub const SCENE_W: u32 = 320;
pub const SCENE_H: u32 = 240;
pub const FOOT_X: u32 = 40;
pub const FOOT_Y: u32 = 60;
pub const FOOT_W: u32 = 40;
pub const FOOT_H: u32 = 100;
pub const COIN_CX: i32 = 240;
pub const COIN_CY: i32 = 120;
pub const COIN_R: i32 = 20;

/// White colour scene of the given size.
pub fn blank_scene(width: u32, height: u32) -> RgbImage {
    ImageBuffer::from_pixel(width, height, BACKGROUND)
}

/// All-black scene with nothing to detect.
pub fn black_scene(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(ImageBuffer::from_pixel(width, height, Rgb([0, 0, 0])))
}

/// Fill an axis-aligned rectangle, clipped to the image.
pub fn draw_filled_rect(img: &mut RgbImage, x: u32, y: u32, w: u32, h: u32, color: Rgb<u8>) {
    for yy in y..(y + h).min(img.height()) {
        for xx in x..(x + w).min(img.width()) {
            img.put_pixel(xx, yy, color);
        }
    }
}

/// Fill a disk, clipped to the image.
pub fn draw_filled_disk(img: &mut RgbImage, cx: i32, cy: i32, radius: i32, color: Rgb<u8>) {
    let (w, h) = (img.width() as i32, img.height() as i32);
    for yy in (cy - radius).max(0)..=(cy + radius).min(h - 1) {
        for xx in (cx - radius).max(0)..=(cx + radius).min(w - 1) {
            let (dx, dy) = (xx - cx, yy - cy);
            if dx * dx + dy * dy <= radius * radius {
                img.put_pixel(xx as u32, yy as u32, color);
            }
        }
    }
}

/// Canonical test scene: a skin-tone foot box and a dark coin on a
/// white background, far enough apart not to interact.
pub fn foot_and_coin_scene() -> DynamicImage {
    let mut img = blank_scene(SCENE_W, SCENE_H);
    draw_filled_rect(&mut img, FOOT_X, FOOT_Y, FOOT_W, FOOT_H, SKIN);
    draw_filled_disk(&mut img, COIN_CX, COIN_CY, COIN_R, COIN);
    DynamicImage::ImageRgb8(img)
}

/// Fill a rectangle in a grayscale mask.
pub fn draw_mask_rect(mask: &mut GrayImage, x: u32, y: u32, w: u32, h: u32, level: u8) {
    for yy in y..(y + h).min(mask.height()) {
        for xx in x..(x + w).min(mask.width()) {
            mask.put_pixel(xx, yy, Luma([level]));
        }
    }
}

/// Fill a disk in a grayscale image.
pub fn draw_gray_disk(img: &mut GrayImage, cx: i32, cy: i32, radius: i32, level: u8) {
    let (w, h) = (img.width() as i32, img.height() as i32);
    for yy in (cy - radius).max(0)..=(cy + radius).min(h - 1) {
        for xx in (cx - radius).max(0)..=(cx + radius).min(w - 1) {
            let (dx, dy) = (xx - cx, yy - cy);
            if dx * dx + dy * dy <= radius * radius {
                img.put_pixel(xx as u32, yy as u32, Luma([level]));
            }
        }
    }
}

/// White grayscale scene with a single dark disk.
pub fn gray_disk_scene(w: u32, h: u32, cx: i32, cy: i32, radius: i32) -> GrayImage {
    let mut img = GrayImage::from_pixel(w, h, Luma([255]));
    draw_gray_disk(&mut img, cx, cy, radius, 60);
    img
}

/// Saves the scene to a temp PNG and returns the handle.
/// The file will be automatically cleaned up when dropped.
pub fn save_temp_png(img: &DynamicImage) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("Failed to create temp image file");
    img.save_with_format(file.path(), image::ImageFormat::Png)
        .expect("Failed to save test image");
    file
}
