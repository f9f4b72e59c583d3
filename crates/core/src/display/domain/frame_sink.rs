use crate::annotation::domain::draw_command::DrawCommand;
use crate::shared::frame::Frame;

/// Renders annotated frames.
///
/// `poll` doubles as the loop's yield point (the on-screen equivalent is a
/// key-wait); returning `false` ends the run.
pub trait FrameSink: Send {
    /// Displays or persists one frame with its overlay.
    fn present(
        &mut self,
        frame: &Frame,
        commands: &[DrawCommand],
    ) -> Result<(), Box<dyn std::error::Error>>;

    /// Yields to the presentation layer; `false` requests shutdown.
    fn poll(&mut self) -> Result<bool, Box<dyn std::error::Error>>;
}
