use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_circle_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect;

use crate::models::{BoundingRect, ReferenceCircle};

/// Outline colour for detected shapes.
pub const OUTLINE_COLOR: Rgb<u8> = Rgb([0, 128, 0]);

/// Draw every circle candidate and the selected foot rectangle on a copy
/// of the image. Outlines are two pixels wide.
pub fn annotate(
    image: &RgbImage,
    circles: &[ReferenceCircle],
    foot: Option<&BoundingRect>,
) -> RgbImage {
    let mut canvas = image.clone();

    for c in circles {
        draw_hollow_circle_mut(&mut canvas, c.center(), c.radius, OUTLINE_COLOR);
        if c.radius > 1 {
            draw_hollow_circle_mut(&mut canvas, c.center(), c.radius - 1, OUTLINE_COLOR);
        }
    }

    if let Some(rect) = foot {
        draw_rect_outline(&mut canvas, rect);
    }

    canvas
}

fn draw_rect_outline(canvas: &mut RgbImage, rect: &BoundingRect) {
    draw_hollow_rect_mut(
        canvas,
        Rect::at(rect.x, rect.y).of_size(rect.width.max(1), rect.height.max(1)),
        OUTLINE_COLOR,
    );
    // Second ring one pixel in, only when the box is big enough to hold
    // it.
    if rect.width > 2 && rect.height > 2 {
        draw_hollow_rect_mut(
            canvas,
            Rect::at(rect.x + 1, rect.y + 1).of_size(rect.width - 2, rect.height - 2),
            OUTLINE_COLOR,
        );
    }
}
