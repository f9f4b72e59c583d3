/// Factor between the display frame and the downscaled working frame
/// detection runs on.
pub const DEFAULT_RESIZE_SCALE: u32 = 4;

/// Fraction of a face's width/height added on each side to form the
/// search region.
pub const DEFAULT_SEARCH_REGION_PADDING: f64 = 0.2;

/// Overlay colors (RGB).
pub const FACE_BOX_COLOR: [u8; 3] = [0, 0, 255];
pub const SEARCH_REGION_COLOR: [u8; 3] = [0, 255, 0];
pub const LANDMARK_COLOR: [u8; 3] = [255, 0, 0];

/// Landmark model cardinalities (5-point and 68-point shape models).
pub const LANDMARK_CARDINALITIES: &[usize] = &[5, 68];

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff", "tif", "webp"];
