use std::path::Path;

use ab_glyph::{FontVec, PxScale};
use anyhow::Context;
use image::{DynamicImage, Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_text_mut};
use imageproc::rect::Rect;

use crate::models::Detection;

const BOX_COLOR: Rgb<u8> = Rgb([220, 40, 40]);
const LABEL_FONT_SIZE: f32 = 18.0;
const BORDER_THICKNESS: i32 = 2;

/// Draws detection rectangles and labels onto a copy of the input image.
/// Pure presentation; holds only the loaded label font.
pub struct Annotator {
    font: FontVec,
}

impl Annotator {
    /// Load the label font from a TTF/OTF file.
    pub fn load(font_path: &Path) -> anyhow::Result<Self> {
        let data = std::fs::read(font_path)
            .with_context(|| format!("failed to read label font {}", font_path.display()))?;
        let font = FontVec::try_from_vec(data)
            .with_context(|| format!("{} is not a usable font", font_path.display()))?;
        Ok(Self { font })
    }

    /// Draw a rectangle and `"{label} {confidence:.2}"` for each detection.
    pub fn annotate(&self, image: &DynamicImage, detections: &[Detection]) -> RgbImage {
        let mut canvas = image.to_rgb8();
        let (width, height) = canvas.dimensions();

        for detection in detections {
            let bb = &detection.bounding_box;
            let x_min = (bb.x_min.floor() as i32).clamp(0, width as i32 - 1);
            let y_min = (bb.y_min.floor() as i32).clamp(0, height as i32 - 1);
            let x_max = (bb.x_max.ceil() as i32).clamp(0, width as i32 - 1);
            let y_max = (bb.y_max.ceil() as i32).clamp(0, height as i32 - 1);
            if x_min >= x_max || y_min >= y_max {
                continue;
            }

            for inset in 0..BORDER_THICKNESS {
                let rect_w = (x_max - x_min - 2 * inset).max(1) as u32;
                let rect_h = (y_max - y_min - 2 * inset).max(1) as u32;
                draw_hollow_rect_mut(
                    &mut canvas,
                    Rect::at(x_min + inset, y_min + inset).of_size(rect_w, rect_h),
                    BOX_COLOR,
                );
            }

            let text = format!("{} {:.2}", detection.label, detection.confidence);
            let text_y = (y_min - LABEL_FONT_SIZE as i32 - 2).max(0);
            draw_text_mut(
                &mut canvas,
                BOX_COLOR,
                x_min,
                text_y,
                PxScale::from(LABEL_FONT_SIZE),
                &self.font,
                &text,
            );
        }

        canvas
    }
}
