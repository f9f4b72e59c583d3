use std::path::{Path, PathBuf};

use crate::annotation::domain::draw_command::DrawCommand;
use crate::display::domain::frame_sink::FrameSink;
use crate::display::infrastructure::rasterize;
use crate::shared::frame::Frame;

/// Writes annotated frames as numbered PNG files using the `image` crate.
///
/// The file stand-in for an on-screen window: `present` burns the overlay
/// into a copy of the frame and saves it, `poll` always continues.
pub struct AnnotatedImageSink {
    output_dir: PathBuf,
}

impl AnnotatedImageSink {
    pub fn new(output_dir: &Path) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
        }
    }
}

impl FrameSink for AnnotatedImageSink {
    fn present(
        &mut self,
        frame: &Frame,
        commands: &[DrawCommand],
    ) -> Result<(), Box<dyn std::error::Error>> {
        std::fs::create_dir_all(&self.output_dir)?;

        let mut annotated = frame.clone();
        rasterize::apply(&mut annotated, commands);

        let img = image::RgbImage::from_raw(
            annotated.width(),
            annotated.height(),
            annotated.data().to_vec(),
        )
        .ok_or("Failed to create image from frame data")?;

        let path = self
            .output_dir
            .join(format!("frame_{:05}.png", frame.index()));
        img.save(&path)?;
        Ok(())
    }

    fn poll(&mut self) -> Result<bool, Box<dyn std::error::Error>> {
        Ok(true)
    }
}
