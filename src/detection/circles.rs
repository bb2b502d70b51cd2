use image::GrayImage;
use imageproc::edges::canny;
use imageproc::gradients::{horizontal_sobel, vertical_sobel};

use crate::config::MeasureConfig;
use crate::models::ReferenceCircle;

/// Gradient Hough transform for circles.
///
/// Edge pixels vote for possible centers along their gradient direction
/// across the configured radius band. Cells of a coarsened accumulator
/// grid that clear the vote threshold and are local maxima become center
/// candidates. Each candidate center is re-fitted to the centroid of the
/// edge pixels in its radius band (the coarse grid can land a few pixels
/// off, which would skew the radius estimate); candidates too close to a
/// stronger one are dropped, and each survivor gets the radius best
/// supported by the edge pixels around it.
pub fn detect_circles(gray: &GrayImage, config: &MeasureConfig) -> Vec<ReferenceCircle> {
    let (w, h) = gray.dimensions();
    if w == 0 || h == 0 {
        return Vec::new();
    }

    let min_r = config.min_radius.max(1);
    let max_r = config.max_radius;
    if max_r < min_r {
        return Vec::new();
    }

    // Step 1: edge map and gradients. The edge threshold doubles as the
    // Canny high threshold, with the low one at half.
    let edges = canny(
        gray,
        config.circle_edge_threshold / 2.0,
        config.circle_edge_threshold,
    );
    let gx = horizontal_sobel(gray);
    let gy = vertical_sobel(gray);

    // Step 2: vote for centers on a grid coarsened by the accumulator
    // scale.
    let cell = config.accumulator_scale.max(1.0);
    let acc_w = ((w as f32 / cell).ceil() as usize).max(1);
    let acc_h = ((h as f32 / cell).ceil() as usize).max(1);
    let mut acc = vec![0u32; acc_w * acc_h];
    let mut edge_points: Vec<(f32, f32)> = Vec::new();

    for (x, y, p) in edges.enumerate_pixels() {
        if p[0] == 0 {
            continue;
        }
        let dx = gx.get_pixel(x, y)[0] as f32;
        let dy = gy.get_pixel(x, y)[0] as f32;
        let mag = (dx * dx + dy * dy).sqrt();
        if mag < 1.0 {
            continue;
        }
        edge_points.push((x as f32, y as f32));

        let (ux, uy) = (dx / mag, dy / mag);

        // Gradient polarity is unknown, so vote along both directions.
        for sign in [1.0f32, -1.0] {
            for r in min_r..=max_r {
                let cx = x as f32 + sign * ux * r as f32;
                let cy = y as f32 + sign * uy * r as f32;
                if cx < 0.0 || cy < 0.0 || cx >= w as f32 || cy >= h as f32 {
                    // The ray is straight, once it leaves it stays out.
                    break;
                }
                acc[(cy / cell) as usize * acc_w + (cx / cell) as usize] += 1;
            }
        }
    }

    // Step 3: collect local maxima above the vote threshold. The
    // comparison is strict towards left and up only, so a plateau of
    // equal cells yields exactly one candidate.
    let mut candidates: Vec<(u32, f32, f32)> = Vec::new();
    for ay in 0..acc_h {
        for ax in 0..acc_w {
            let votes = acc[ay * acc_w + ax];
            if votes < config.accumulator_threshold {
                continue;
            }
            let left = if ax > 0 { acc[ay * acc_w + ax - 1] } else { 0 };
            let right = if ax + 1 < acc_w {
                acc[ay * acc_w + ax + 1]
            } else {
                0
            };
            let up = if ay > 0 { acc[(ay - 1) * acc_w + ax] } else { 0 };
            let down = if ay + 1 < acc_h {
                acc[(ay + 1) * acc_w + ax]
            } else {
                0
            };
            if votes > left && votes > up && votes >= right && votes >= down {
                candidates.push((votes, (ax as f32 + 0.5) * cell, (ay as f32 + 0.5) * cell));
            }
        }
    }

    // Stable sort keeps scan order between equal vote counts.
    candidates.sort_by(|a, b| b.0.cmp(&a.0));

    // Step 4: re-fit centers, suppress near-duplicates and estimate
    // radii. Refinement happens before suppression so that coarse maxima
    // belonging to the same circle converge and collapse into one.
    let min_dist_sq = config.min_center_distance * config.min_center_distance;
    let mut kept: Vec<(f32, f32)> = Vec::new();
    let mut found: Vec<ReferenceCircle> = Vec::new();

    for (_, cx, cy) in candidates {
        let (cx, cy) = refine_center(&edge_points, cx, cy, min_r, max_r);
        let too_close = kept.iter().any(|&(px, py)| {
            let (dx, dy) = (cx - px, cy - py);
            dx * dx + dy * dy < min_dist_sq
        });
        if too_close {
            continue;
        }
        if let Some(radius) = estimate_radius(&edge_points, cx, cy, min_r, max_r) {
            kept.push((cx, cy));
            found.push(ReferenceCircle {
                cx: cx.round() as i32,
                cy: cy.round() as i32,
                radius: radius as i32,
            });
        }
    }

    found
}

/// Pull a coarse accumulator center onto the centroid of the edge
/// pixels in its radius band. For a closed ring that centroid is the
/// true center, so a couple of iterations settle well inside a pixel.
fn refine_center(
    edge_points: &[(f32, f32)],
    mut cx: f32,
    mut cy: f32,
    min_r: u32,
    max_r: u32,
) -> (f32, f32) {
    let lo = (min_r as f32 - 1.5).max(0.0);
    let hi = max_r as f32 + 1.5;
    for _ in 0..3 {
        let (mut sx, mut sy, mut n) = (0.0f32, 0.0f32, 0u32);
        for &(x, y) in edge_points {
            let (dx, dy) = (x - cx, y - cy);
            let d = (dx * dx + dy * dy).sqrt();
            if d >= lo && d <= hi {
                sx += x;
                sy += y;
                n += 1;
            }
        }
        if n == 0 {
            break;
        }
        cx = sx / n as f32;
        cy = sy / n as f32;
    }
    (cx, cy)
}

/// Radius with the most edge support around a center. Ties go to the
/// smaller radius.
fn estimate_radius(
    edge_points: &[(f32, f32)],
    cx: f32,
    cy: f32,
    min_r: u32,
    max_r: u32,
) -> Option<u32> {
    let mut hist = vec![0u32; (max_r - min_r + 1) as usize];
    for &(x, y) in edge_points {
        let (dx, dy) = (x - cx, y - cy);
        let r = (dx * dx + dy * dy).sqrt().round() as i64;
        if r >= min_r as i64 && r <= max_r as i64 {
            hist[(r - min_r as i64) as usize] += 1;
        }
    }

    let mut best: Option<(u32, u32)> = None;
    for (i, &count) in hist.iter().enumerate() {
        if count == 0 {
            continue;
        }
        match best {
            Some((c, _)) if count <= c => {}
            _ => best = Some((count, min_r + i as u32)),
        }
    }
    best.map(|(_, r)| r)
}

/// Pick the candidate with the largest radius. Earlier candidates win
/// ties.
pub fn largest_circle(circles: &[ReferenceCircle]) -> Option<ReferenceCircle> {
    circles.iter().copied().fold(None, |best, c| match best {
        Some(b) if c.radius <= b.radius => Some(b),
        _ => Some(c),
    })
}
