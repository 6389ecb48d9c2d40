use std::io::Cursor;
use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, ImageReader};
use rten_tensor::NdTensor;

use crate::error::ImageDecodeError;

/// Pad value for the letterbox margins, matching the gray the model was
/// exported with.
const PAD_VALUE: f32 = 114.0 / 255.0;

/// Decode uploaded JPEG/PNG bytes into an image.
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage, ImageDecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(image::ImageError::IoError)?;
    Ok(reader.decode()?)
}

/// Open and decode an image file (the CLI entry path).
pub fn open_image(path: &Path) -> Result<DynamicImage, ImageDecodeError> {
    let reader = ImageReader::open(path).map_err(|source| ImageDecodeError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(reader.decode()?)
}

/// Scale and padding applied while letterboxing, kept around so decoded
/// boxes can be mapped back into original-image coordinates.
#[derive(Debug, Clone, Copy)]
pub struct LetterboxParams {
    pub scale: f32,
    pub pad_x: f32,
    pub pad_y: f32,
    pub orig_w: u32,
    pub orig_h: u32,
}

/// Fit the image into a `size`x`size` square, preserving aspect ratio and
/// centering it on gray padding, packed as an NCHW float tensor in [0,1].
pub fn letterbox_to_tensor(img: &DynamicImage, size: u32) -> (NdTensor<f32, 4>, LetterboxParams) {
    let rgb = img.to_rgb8();
    let (orig_w, orig_h) = rgb.dimensions();

    let scale = (size as f32 / orig_w.max(1) as f32).min(size as f32 / orig_h.max(1) as f32);
    let scaled_w = ((orig_w as f32 * scale).round() as u32).clamp(1, size);
    let scaled_h = ((orig_h as f32 * scale).round() as u32).clamp(1, size);
    let resized = image::imageops::resize(&rgb, scaled_w, scaled_h, FilterType::Triangle);

    let pad_x = (size - scaled_w) / 2;
    let pad_y = (size - scaled_h) / 2;

    let mut tensor = NdTensor::full([1, 3, size as usize, size as usize], PAD_VALUE);
    for (x, y, pixel) in resized.enumerate_pixels() {
        let tx = (x + pad_x) as usize;
        let ty = (y + pad_y) as usize;
        for c in 0..3 {
            tensor[[0, c, ty, tx]] = pixel[c] as f32 / 255.0;
        }
    }

    let params = LetterboxParams {
        scale,
        pad_x: pad_x as f32,
        pad_y: pad_y as f32,
        orig_w,
        orig_h,
    };
    (tensor, params)
}
