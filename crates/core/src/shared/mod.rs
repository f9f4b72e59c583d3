pub mod constants;
pub mod detection_rect;
pub mod frame;
pub mod landmark_set;
