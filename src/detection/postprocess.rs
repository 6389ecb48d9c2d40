use crate::models::BoundingBox;

use super::preprocessing::LetterboxParams;

/// One thresholded anchor row before non-maximum suppression.
#[derive(Debug, Clone)]
pub(crate) struct Candidate {
    pub bbox: BoundingBox,
    pub class_id: usize,
    pub confidence: f32,
}

/// Decode anchor rows of `[cx, cy, w, h, objectness, class scores...]` into
/// candidates in original-image pixel coordinates.
///
/// Rows below the confidence threshold, rows with non-finite values, and
/// boxes that collapse to nothing after the letterbox transform is undone
/// are all dropped.
pub(crate) fn decode_rows<'a>(
    rows: impl Iterator<Item = &'a [f32]>,
    params: LetterboxParams,
    confidence_threshold: f32,
) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    if params.scale <= f32::EPSILON {
        return candidates;
    }

    for row in rows {
        let objectness = row[4];
        let (class_id, class_score) = row[5..]
            .iter()
            .enumerate()
            .fold((0usize, f32::NEG_INFINITY), |best, (idx, &score)| {
                if score > best.1 { (idx, score) } else { best }
            });

        let confidence = objectness * class_score;
        if !confidence.is_finite() || confidence < confidence_threshold {
            continue;
        }

        let (cx, cy, w, h) = (row[0], row[1], row[2], row[3]);
        if ![cx, cy, w, h].iter().all(|v| v.is_finite()) || w <= 0.0 || h <= 0.0 {
            continue;
        }

        // Undo the letterbox transform and clamp to the original image.
        let max_x = params.orig_w as f32;
        let max_y = params.orig_h as f32;
        let x_min = ((cx - w / 2.0 - params.pad_x) / params.scale).clamp(0.0, max_x);
        let y_min = ((cy - h / 2.0 - params.pad_y) / params.scale).clamp(0.0, max_y);
        let x_max = ((cx + w / 2.0 - params.pad_x) / params.scale).clamp(0.0, max_x);
        let y_max = ((cy + h / 2.0 - params.pad_y) / params.scale).clamp(0.0, max_y);

        let bbox = BoundingBox { x_min, y_min, x_max, y_max };
        if bbox.area() <= 0.0 {
            continue;
        }

        candidates.push(Candidate { bbox, class_id, confidence: confidence.min(1.0) });
    }

    candidates
}

/// Greedy class-aware non-maximum suppression: keep the strongest box and
/// drop same-class boxes overlapping it beyond the IoU threshold.
pub(crate) fn nms(mut candidates: Vec<Candidate>, iou_threshold: f32) -> Vec<Candidate> {
    candidates.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

    let mut kept: Vec<Candidate> = Vec::new();
    'next: for candidate in candidates {
        for existing in &kept {
            if existing.class_id == candidate.class_id
                && existing.bbox.iou(&candidate.bbox) > iou_threshold
            {
                continue 'next;
            }
        }
        kept.push(candidate);
    }
    kept
}
