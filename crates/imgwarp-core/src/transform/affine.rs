//! Affine maps and the inverse-mapping warp used by translation and shear.
//!
//! A matrix describes the forward map from source to output coordinates:
//! ```text
//! x' = a * x + b * y + c
//! y' = d * x + e * y + f
//! ```
//! The warp walks the output image, maps each pixel centre back through the
//! inverse, and copies the nearest source pixel. A singular map has no
//! inverse, so its source pixels are pushed forward instead and the content
//! collapses onto a line.

use super::{check_buffer, TransformError};
use crate::decode::{DecodedImage, CHANNELS};

/// Determinants smaller than this are treated as singular.
const SINGULAR_EPSILON: f64 = 1e-9;

/// A 2x3 affine matrix in forward (source to output) direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineMatrix {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl AffineMatrix {
    pub const IDENTITY: AffineMatrix = AffineMatrix {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 0.0,
        e: 1.0,
        f: 0.0,
    };

    /// `x' = x + dx, y' = y + dy`
    pub fn translation(dx: f64, dy: f64) -> Self {
        Self {
            c: dx,
            f: dy,
            ..Self::IDENTITY
        }
    }

    /// `x' = x + shx * y, y' = shy * x + y`
    pub fn shear(shx: f64, shy: f64) -> Self {
        Self {
            b: shx,
            d: shy,
            ..Self::IDENTITY
        }
    }

    pub fn determinant(&self) -> f64 {
        self.a * self.e - self.b * self.d
    }

    /// Inverse map, or `None` if the linear part is singular.
    pub fn inverse(&self) -> Option<AffineMatrix> {
        let det = self.determinant();
        if !det.is_finite() || det.abs() < SINGULAR_EPSILON {
            return None;
        }

        let a = self.e / det;
        let b = -self.b / det;
        let d = -self.d / det;
        let e = self.a / det;

        Some(AffineMatrix {
            a,
            b,
            c: -(a * self.c + b * self.f),
            d,
            e,
            f: -(d * self.c + e * self.f),
        })
    }

    /// Map a point through the matrix.
    #[inline]
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.a * x + self.b * y + self.c,
            self.d * x + self.e * y + self.f,
        )
    }
}

impl Default for AffineMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Warp `image` through `matrix` onto a transparent `out_width x out_height` canvas.
///
/// Uses nearest-neighbour sampling at pixel centres, so integer
/// translations and the identity are reproduced exactly. When `matrix` is
/// singular each source pixel centre is mapped forward instead, and later
/// pixels in row-major order overwrite earlier ones.
///
/// # Errors
///
/// Returns `TransformError::InvalidPixelData` if the source buffer is malformed.
pub fn warp_affine(
    image: &DecodedImage,
    matrix: &AffineMatrix,
    out_width: u32,
    out_height: u32,
) -> Result<DecodedImage, TransformError> {
    check_buffer(image)?;

    let Some(inverse) = matrix.inverse() else {
        tracing::debug!(
            "affine map is singular (determinant {}), splatting forward",
            matrix.determinant()
        );
        return Ok(splat_forward(image, matrix, out_width, out_height));
    };

    let mut output = DecodedImage::transparent(out_width, out_height);

    for dst_y in 0..out_height {
        for dst_x in 0..out_width {
            let (src_x, src_y) = inverse.apply(dst_x as f64 + 0.5, dst_y as f64 + 0.5);
            let Some((sx, sy)) = cell(src_x, src_y, image.width, image.height) else {
                continue;
            };

            let src_idx = (sy * image.width as usize + sx) * CHANNELS;
            let dst_idx = (dst_y as usize * out_width as usize + dst_x as usize) * CHANNELS;

            output.pixels[dst_idx..dst_idx + CHANNELS]
                .copy_from_slice(&image.pixels[src_idx..src_idx + CHANNELS]);
        }
    }

    Ok(output)
}

fn splat_forward(
    image: &DecodedImage,
    matrix: &AffineMatrix,
    out_width: u32,
    out_height: u32,
) -> DecodedImage {
    let mut output = DecodedImage::transparent(out_width, out_height);

    for src_y in 0..image.height {
        for src_x in 0..image.width {
            let (x, y) = matrix.apply(src_x as f64 + 0.5, src_y as f64 + 0.5);
            let Some((dx, dy)) = cell(x, y, out_width, out_height) else {
                continue;
            };

            let src_idx = (src_y as usize * image.width as usize + src_x as usize) * CHANNELS;
            let dst_idx = (dy * out_width as usize + dx) * CHANNELS;

            output.pixels[dst_idx..dst_idx + CHANNELS]
                .copy_from_slice(&image.pixels[src_idx..src_idx + CHANNELS]);
        }
    }

    output
}

/// Pixel containing `(x, y)`, or `None` outside a `width x height` grid.
#[inline]
fn cell(x: f64, y: f64, width: u32, height: u32) -> Option<(usize, usize)> {
    let inside = x >= 0.0 && y >= 0.0 && x < width as f64 && y < height as f64;
    inside.then(|| (x.floor() as usize, y.floor() as usize))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::test_support::gradient;

    fn approx_eq(a: &AffineMatrix, b: &AffineMatrix) -> bool {
        [
            (a.a, b.a),
            (a.b, b.b),
            (a.c, b.c),
            (a.d, b.d),
            (a.e, b.e),
            (a.f, b.f),
        ]
        .iter()
        .all(|(x, y)| (x - y).abs() < 1e-12)
    }

    #[test]
    fn test_identity_inverse() {
        let inv = AffineMatrix::IDENTITY.inverse().unwrap();
        assert!(approx_eq(&inv, &AffineMatrix::IDENTITY));
    }

    #[test]
    fn test_translation_inverse() {
        let inv = AffineMatrix::translation(3.0, -7.0).inverse().unwrap();
        assert!(approx_eq(&inv, &AffineMatrix::translation(-3.0, 7.0)));
    }

    #[test]
    fn test_inverse_undoes_forward_map() {
        let m = AffineMatrix::shear(0.4, -0.3);
        let inv = m.inverse().unwrap();

        let (x, y) = m.apply(12.5, -3.25);
        let (bx, by) = inv.apply(x, y);
        assert!((bx - 12.5).abs() < 1e-9);
        assert!((by + 3.25).abs() < 1e-9);
    }

    #[test]
    fn test_singular_shear_has_no_inverse() {
        let m = AffineMatrix::shear(1.0, 1.0);
        assert!(m.determinant().abs() < 1e-12);
        assert!(m.inverse().is_none());
    }

    #[test]
    fn test_warp_identity_is_exact() {
        let img = gradient(17, 9);
        let result = warp_affine(&img, &AffineMatrix::IDENTITY, 17, 9).unwrap();
        assert_eq!(result, img);
    }

    #[test]
    fn test_warp_into_larger_canvas() {
        let img = gradient(4, 4);
        let result = warp_affine(&img, &AffineMatrix::IDENTITY, 6, 5).unwrap();

        assert_eq!(result.width, 6);
        assert_eq!(result.height, 5);
        assert_eq!(result.pixel(3, 3), img.pixel(3, 3));
        assert_eq!(result.pixel(5, 0), Some([0, 0, 0, 0]));
        assert_eq!(result.pixel(0, 4), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_warp_singular_splats_onto_line() {
        let img = gradient(4, 4);
        let result = warp_affine(&img, &AffineMatrix::shear(1.0, 1.0), 4, 4).unwrap();

        assert_eq!((result.width, result.height), (4, 4));
        // Centre (0.5, 0.5) lands at (1.0, 1.0)
        assert_eq!(result.pixel(1, 1), img.pixel(0, 0));
        for y in 0..4 {
            for x in 0..4 {
                if x != y {
                    assert_eq!(result.pixel(x, y), Some([0, 0, 0, 0]), "({}, {})", x, y);
                }
            }
        }
    }

    #[test]
    fn test_warp_zero_matrix_collapses_to_point() {
        let img = gradient(3, 3);
        let zero = AffineMatrix {
            a: 0.0,
            e: 0.0,
            c: 1.0,
            f: 2.0,
            ..AffineMatrix::IDENTITY
        };
        let result = warp_affine(&img, &zero, 3, 3).unwrap();

        // Every source pixel lands on (1, 2); the last one written wins
        assert_eq!(result.pixel(1, 2), img.pixel(2, 2));
        let opaque = result.pixels.chunks_exact(4).filter(|p| p[3] != 0).count();
        assert_eq!(opaque, 1);
    }

    #[test]
    fn test_warp_rejects_bad_buffer() {
        let img = DecodedImage {
            width: 4,
            height: 4,
            pixels: vec![0; 3],
        };
        let result = warp_affine(&img, &AffineMatrix::IDENTITY, 4, 4);
        assert!(matches!(result, Err(TransformError::InvalidPixelData { .. })));
    }
}
