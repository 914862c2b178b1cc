//! Image rotation about the centre with an expanded canvas.
//!
//! Exact multiples of 90 degrees use the lossless `image::imageops`
//! rotations. Every other angle uses inverse mapping: for each pixel in the
//! output image we find the source position and interpolate.
//!
//! For rotation by angle θ (counter-clockwise on screen, where y grows
//! down), the inverse transform is:
//! ```text
//! src_x = (dst_x - dst_cx) * cos(θ) - (dst_y - dst_cy) * sin(θ) + src_cx
//! src_y = (dst_x - dst_cx) * sin(θ) + (dst_y - dst_cy) * cos(θ) + src_cy
//! ```
//!
//! Interpolation runs on premultiplied alpha so that the transparent
//! corners do not bleed dark fringes into the rotated edges.

use super::{check_buffer, InterpolationFilter, TransformError};
use crate::decode::{DecodedImage, CHANNELS};

/// Angles closer than this to a multiple of 90 degrees take the exact path.
const RIGHT_ANGLE_TOLERANCE: f64 = 0.001;

/// Slack subtracted before rounding bounds up, so exact integer extents
/// are not bumped by floating point noise.
const BOUNDS_EPSILON: f64 = 1e-6;

/// Quarter-turn classification of an angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuarterTurn {
    None,
    Ccw90,
    Half,
    Cw90,
}

fn quarter_turn(angle_degrees: f64) -> Option<QuarterTurn> {
    let normalized = angle_degrees.rem_euclid(360.0);
    [
        (0.0, QuarterTurn::None),
        (90.0, QuarterTurn::Ccw90),
        (180.0, QuarterTurn::Half),
        (270.0, QuarterTurn::Cw90),
        (360.0, QuarterTurn::None),
    ]
    .into_iter()
    .find(|(target, _)| (normalized - target).abs() < RIGHT_ANGLE_TOLERANCE)
    .map(|(_, turn)| turn)
}

/// Compute the dimensions of the bounding box for a rotated image.
///
/// When an image is rotated, the corners extend beyond the original bounds.
/// This returns the smallest canvas that holds the whole rotated image.
///
/// # Arguments
///
/// * `width` - Original image width
/// * `height` - Original image height
/// * `angle_degrees` - Rotation angle in degrees (positive = counter-clockwise)
///
/// # Returns
///
/// Tuple of (new_width, new_height) for the rotated bounding box.
pub fn compute_rotated_bounds(width: u32, height: u32, angle_degrees: f64) -> (u32, u32) {
    match quarter_turn(angle_degrees) {
        Some(QuarterTurn::None) | Some(QuarterTurn::Half) => return (width, height),
        Some(QuarterTurn::Ccw90) | Some(QuarterTurn::Cw90) => return (height, width),
        None => {}
    }

    let angle_rad = angle_degrees.to_radians();
    let cos = angle_rad.cos().abs();
    let sin = angle_rad.sin().abs();

    let w = width as f64;
    let h = height as f64;

    // new_w = |w*cos| + |h*sin|
    // new_h = |w*sin| + |h*cos|
    let new_w = (w * cos + h * sin - BOUNDS_EPSILON).ceil() as u32;
    let new_h = (w * sin + h * cos - BOUNDS_EPSILON).ceil() as u32;

    (new_w.max(1), new_h.max(1))
}

/// Rotate an image about its centre.
///
/// The output canvas is expanded to fit the entire rotated image (no
/// clipping). Exposed corners are transparent.
///
/// # Arguments
///
/// * `image` - Source image to rotate
/// * `angle_degrees` - Rotation angle in degrees (positive = counter-clockwise)
/// * `filter` - Interpolation method (Bicubic by default, Bilinear for previews)
///
/// # Errors
///
/// Returns `TransformError::InvalidParameter` for a non-finite angle and
/// `TransformError::InvalidPixelData` for a malformed source.
pub fn apply_rotation(
    image: &DecodedImage,
    angle_degrees: f64,
    filter: InterpolationFilter,
) -> Result<DecodedImage, TransformError> {
    if !angle_degrees.is_finite() {
        return Err(TransformError::InvalidParameter {
            name: "rotation_angle",
            reason: format!("{} is not a finite angle", angle_degrees),
        });
    }
    check_buffer(image)?;

    if let Some(turn) = quarter_turn(angle_degrees) {
        return rotate_quarter(image, turn);
    }

    let (src_w, src_h) = (image.width as f64, image.height as f64);
    let (dst_w, dst_h) = compute_rotated_bounds(image.width, image.height, angle_degrees);

    let angle_rad = angle_degrees.to_radians();
    let cos = angle_rad.cos();
    let sin = angle_rad.sin();

    let src_cx = src_w / 2.0;
    let src_cy = src_h / 2.0;
    let dst_cx = dst_w as f64 / 2.0;
    let dst_cy = dst_h as f64 / 2.0;

    let mut output = DecodedImage::transparent(dst_w, dst_h);

    for dst_y in 0..dst_h {
        for dst_x in 0..dst_w {
            // Work on pixel centres
            let dx = dst_x as f64 + 0.5 - dst_cx;
            let dy = dst_y as f64 + 0.5 - dst_cy;

            let src_x = dx * cos - dy * sin + src_cx - 0.5;
            let src_y = dx * sin + dy * cos + src_cy - 0.5;

            let pixel = match filter {
                InterpolationFilter::Nearest => sample_nearest(image, src_x, src_y),
                InterpolationFilter::Bilinear => sample_bilinear(image, src_x, src_y),
                InterpolationFilter::Bicubic => sample_bicubic(image, src_x, src_y),
            };

            let dst_idx = (dst_y as usize * dst_w as usize + dst_x as usize) * CHANNELS;
            output.pixels[dst_idx..dst_idx + CHANNELS].copy_from_slice(&pixel);
        }
    }

    Ok(output)
}

fn rotate_quarter(image: &DecodedImage, turn: QuarterTurn) -> Result<DecodedImage, TransformError> {
    if turn == QuarterTurn::None {
        return Ok(image.clone());
    }

    let rgba = image
        .to_rgba_image()
        .ok_or_else(|| TransformError::InvalidPixelData {
            expected: image.width as usize * image.height as usize * CHANNELS,
            actual: image.pixels.len(),
        })?;

    // imageops rotations are clockwise
    let rotated = match turn {
        QuarterTurn::Ccw90 => image::imageops::rotate270(&rgba),
        QuarterTurn::Half => image::imageops::rotate180(&rgba),
        QuarterTurn::Cw90 => image::imageops::rotate90(&rgba),
        QuarterTurn::None => rgba,
    };

    Ok(DecodedImage::from_rgba_image(rotated))
}

/// Premultiplied RGBA of the pixel at integer coordinates, transparent outside.
#[inline]
fn premultiplied(image: &DecodedImage, px: i64, py: i64) -> [f64; 4] {
    if px < 0 || py < 0 || px >= image.width as i64 || py >= image.height as i64 {
        return [0.0; 4];
    }
    let idx = (py as usize * image.width as usize + px as usize) * CHANNELS;
    let p = &image.pixels[idx..idx + CHANNELS];
    let alpha = p[3] as f64 / 255.0;
    [
        p[0] as f64 * alpha,
        p[1] as f64 * alpha,
        p[2] as f64 * alpha,
        p[3] as f64,
    ]
}

/// Convert an accumulated premultiplied sample back to straight RGBA8.
fn unpremultiply(sum: [f64; 4]) -> [u8; 4] {
    let alpha = sum[3].clamp(0.0, 255.0);
    if alpha < 0.5 {
        return [0; 4];
    }
    let scale = 255.0 / alpha;
    [
        (sum[0] * scale).clamp(0.0, 255.0).round() as u8,
        (sum[1] * scale).clamp(0.0, 255.0).round() as u8,
        (sum[2] * scale).clamp(0.0, 255.0).round() as u8,
        alpha.round() as u8,
    ]
}

fn sample_nearest(image: &DecodedImage, x: f64, y: f64) -> [u8; 4] {
    let px = x.round() as i64;
    let py = y.round() as i64;
    match (u32::try_from(px), u32::try_from(py)) {
        (Ok(px), Ok(py)) => image.pixel(px, py).unwrap_or([0; 4]),
        _ => [0; 4],
    }
}

/// Bilinear interpolation over the 4 nearest pixels.
fn sample_bilinear(image: &DecodedImage, x: f64, y: f64) -> [u8; 4] {
    let x0 = x.floor();
    let y0 = y.floor();
    let fx = x - x0;
    let fy = y - y0;
    let (x0, y0) = (x0 as i64, y0 as i64);

    let taps = [
        (x0, y0, (1.0 - fx) * (1.0 - fy)),
        (x0 + 1, y0, fx * (1.0 - fy)),
        (x0, y0 + 1, (1.0 - fx) * fy),
        (x0 + 1, y0 + 1, fx * fy),
    ];

    let mut sum = [0.0f64; 4];
    for (px, py, weight) in taps {
        let p = premultiplied(image, px, py);
        for c in 0..4 {
            sum[c] += p[c] * weight;
        }
    }

    unpremultiply(sum)
}

/// Bicubic interpolation over a 4x4 neighbourhood with the Catmull-Rom kernel.
fn sample_bicubic(image: &DecodedImage, x: f64, y: f64) -> [u8; 4] {
    let x0 = x.floor() as i64;
    let y0 = y.floor() as i64;

    let mut sum = [0.0f64; 4];

    for ky in -1..=2 {
        let py = y0 + ky;
        let wy = catmull_rom_weight(y - py as f64);
        for kx in -1..=2 {
            let px = x0 + kx;
            let weight = catmull_rom_weight(x - px as f64) * wy;
            if weight == 0.0 {
                continue;
            }
            let p = premultiplied(image, px, py);
            for c in 0..4 {
                sum[c] += p[c] * weight;
            }
        }
    }

    unpremultiply(sum)
}

/// Catmull-Rom cubic kernel (Keys cubic with a = -0.5).
///
/// ```text
/// W(x) = 1.5|x|³ - 2.5|x|² + 1            for |x| <= 1
/// W(x) = -0.5|x|³ + 2.5|x|² - 4|x| + 2    for 1 < |x| < 2
/// W(x) = 0                                otherwise
/// ```
fn catmull_rom_weight(x: f64) -> f64 {
    let x = x.abs();
    if x <= 1.0 {
        (1.5 * x - 2.5) * x * x + 1.0
    } else if x < 2.0 {
        ((-0.5 * x + 2.5) * x - 4.0) * x + 2.0
    } else {
        0.0
    }
}
