//! Upload decoding for the transform form.
//!
//! The form accepts JPEG and PNG files. The format is sniffed from the
//! bytes rather than trusted from the file name, and JPEG EXIF orientation
//! is applied so the preview matches what the user sees in other viewers.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageFormat};

use super::{DecodeError, DecodedImage, Orientation};

/// File extensions accepted by the upload picker.
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["jpg", "png", "jpeg"];

/// Check whether a file name carries an extension the upload form accepts.
///
/// The comparison is case-insensitive. Names without an extension are
/// rejected.
pub fn is_supported_upload(file_name: &str) -> bool {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => SUPPORTED_EXTENSIONS
            .iter()
            .any(|supported| ext.eq_ignore_ascii_case(supported)),
        _ => false,
    }
}

/// Decode uploaded bytes into an RGBA image, applying EXIF orientation.
///
/// # Errors
///
/// - `DecodeError::EmptyInput` if `bytes` is empty
/// - `DecodeError::UnsupportedFormat` if the bytes are a recognised format
///   other than JPEG or PNG
/// - `DecodeError::CorruptedFile` if the bytes are not an image or fail to decode
pub fn decode_upload(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let format = sniff_format(bytes)?;
    let img = decode_with_format(bytes, format)?;

    let img = if format == ImageFormat::Jpeg {
        apply_orientation(img, extract_orientation(bytes))
    } else {
        img
    };

    let decoded = DecodedImage::from_rgba_image(img.into_rgba8());
    tracing::debug!(
        "decoded {:?} upload: {}x{}",
        format,
        decoded.width,
        decoded.height
    );
    Ok(decoded)
}

fn sniff_format(bytes: &[u8]) -> Result<ImageFormat, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::EmptyInput);
    }

    let format =
        image::guess_format(bytes).map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    match format {
        ImageFormat::Jpeg | ImageFormat::Png => Ok(format),
        other => Err(DecodeError::UnsupportedFormat(format!("{:?}", other))),
    }
}

fn decode_with_format(bytes: &[u8], format: ImageFormat) -> Result<DynamicImage, DecodeError> {
    image::load_from_memory_with_format(bytes, format)
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))
}

/// Returns `Orientation::Normal` if no EXIF data is found.
fn extract_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);

    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Orientation::from)
            .unwrap_or_default(),
        Err(_) => Orientation::Normal,
    }
}

fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}
