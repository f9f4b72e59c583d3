use crate::shared::frame::Frame;

/// Stream properties reported when a source opens.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceInfo {
    pub width: u32,
    pub height: u32,
    /// `None` for live sources with no known end.
    pub frame_count: Option<usize>,
}

/// Result of one acquisition attempt.
#[derive(Debug)]
pub enum GrabOutcome {
    /// A frame was captured.
    Frame(Frame),
    /// Nothing available this cycle; the loop skips the iteration.
    NotReady,
    /// The source is exhausted (finite sources only).
    End,
}

/// Supplies frames to the capture loop, one per iteration.
///
/// `open` failure is fatal to the run. Implementations also release their
/// resources on drop, so every exit path of the loop cleans up.
pub trait FrameSource: Send {
    /// Acquires the underlying device or file set and reports its
    /// dimensions.
    fn open(&mut self) -> Result<SourceInfo, Box<dyn std::error::Error>>;

    /// Blocks until the next frame, or reports `NotReady` / `End`.
    fn grab(&mut self) -> Result<GrabOutcome, Box<dyn std::error::Error>>;

    /// Releases any resources held by the source.
    fn close(&mut self);
}
