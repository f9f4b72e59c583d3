use thiserror::Error;

use crate::annotation::domain::draw_command::DrawCommand;
use crate::annotation::domain::selection_policy::SelectionPolicy;
use crate::shared::constants::{FACE_BOX_COLOR, LANDMARK_COLOR, SEARCH_REGION_COLOR};
use crate::shared::detection_rect::DetectionRect;
use crate::shared::landmark_set::LandmarkSet;

#[derive(Error, Debug, PartialEq)]
pub enum AnnotatorError {
    #[error("scale factor must be positive, got {0}")]
    NonPositiveScale(f64),
    #[error("search-region padding must be non-negative, got {0}")]
    NegativePadding(f64),
}

/// Turns one frame's raw detector output into display-space overlay
/// commands.
///
/// Pure: pixel mutation and presentation belong to the sink. For the
/// primary face (chosen by the selection policy) it emits the face box,
/// the padded search region, and one dot per landmark. The search region
/// is padded and truncated in working space, then scaled, so it matches
/// what a detector searching the working frame would actually see.
#[derive(Debug)]
pub struct FrameAnnotator {
    scale_factor: f64,
    padding: f64,
    policy: SelectionPolicy,
}

impl FrameAnnotator {
    pub fn new(
        scale_factor: f64,
        padding: f64,
        policy: SelectionPolicy,
    ) -> Result<Self, AnnotatorError> {
        if scale_factor <= 0.0 {
            return Err(AnnotatorError::NonPositiveScale(scale_factor));
        }
        if padding < 0.0 {
            return Err(AnnotatorError::NegativePadding(padding));
        }
        Ok(Self {
            scale_factor,
            padding,
            policy,
        })
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    /// Computes the overlay for one frame.
    ///
    /// `landmarks` is aligned by index to `rects`; detectors that produce
    /// no shape for a face leave its slot `None`. With no detections the
    /// result is empty.
    pub fn annotate(
        &self,
        rects: &[DetectionRect],
        landmarks: &[Option<LandmarkSet>],
    ) -> Vec<DrawCommand> {
        let Some(primary) = self.policy.select(rects) else {
            return Vec::new();
        };
        let face = rects[primary];

        let mut commands = Vec::new();
        commands.push(self.rect_command(face, FACE_BOX_COLOR));
        commands.push(self.rect_command(face.padded(self.padding), SEARCH_REGION_COLOR));

        if let Some(Some(shape)) = landmarks.get(primary) {
            for &(x, y) in shape.points() {
                commands.push(DrawCommand::Dot {
                    x: (self.scale_factor * x) as i32,
                    y: (self.scale_factor * y) as i32,
                    color: LANDMARK_COLOR,
                });
            }
        }

        commands
    }

    fn rect_command(&self, rect: DetectionRect, color: [u8; 3]) -> DrawCommand {
        let (left, top, right, bottom) = rect.scaled_corners(self.scale_factor);
        DrawCommand::Rect {
            left,
            top,
            right,
            bottom,
            color,
        }
    }
}
