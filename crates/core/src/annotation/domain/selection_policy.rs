use crate::shared::detection_rect::DetectionRect;

/// Which face gets landmark annotation when several are detected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SelectionPolicy {
    /// The first rectangle the detector reported.
    FirstDetected,
    /// The rectangle with the largest area. Comparison is strict, so ties
    /// keep the earliest index.
    #[default]
    LargestArea,
}

impl SelectionPolicy {
    /// Index of the primary face, or `None` when no faces were detected.
    pub fn select(&self, rects: &[DetectionRect]) -> Option<usize> {
        if rects.is_empty() {
            return None;
        }
        match self {
            SelectionPolicy::FirstDetected => Some(0),
            SelectionPolicy::LargestArea => {
                let mut best = 0;
                for (i, r) in rects.iter().enumerate().skip(1) {
                    if r.area() > rects[best].area() {
                        best = i;
                    }
                }
                Some(best)
            }
        }
    }
}
