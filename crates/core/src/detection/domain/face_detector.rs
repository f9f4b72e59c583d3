use crate::shared::detection_rect::DetectionRect;
use crate::shared::frame::Frame;
use crate::shared::landmark_set::LandmarkSet;

/// Domain interface for face detection on the working (downscaled) frame.
///
/// All coordinates are in the working frame's space; the annotator rescales
/// them for display. Implementations may be stateful, hence `&mut self`.
pub trait FaceDetector: Send {
    /// Face bounding boxes found in `frame`, in detection order.
    fn detect(&mut self, frame: &Frame) -> Result<Vec<DetectionRect>, Box<dyn std::error::Error>>;

    /// Landmark shape for one previously detected face, if the model
    /// produces one.
    fn landmarks(
        &mut self,
        frame: &Frame,
        face: &DetectionRect,
    ) -> Result<Option<LandmarkSet>, Box<dyn std::error::Error>>;
}
