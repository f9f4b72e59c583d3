use std::fs;
use std::path::{Path, PathBuf};

use crate::capture::domain::frame_source::{FrameSource, GrabOutcome, SourceInfo};
use crate::shared::constants::IMAGE_EXTENSIONS;
use crate::shared::frame::Frame;

/// Adapts a directory of image files to the [`FrameSource`] interface.
///
/// Files are sorted by name and replayed in order, acting as a canned
/// camera. A file that fails to decode is skipped with a warning rather
/// than ending the run, matching how a camera drops a frame.
pub struct ImageSequenceSource {
    dir: PathBuf,
    files: Vec<PathBuf>,
    next: usize,
}

impl ImageSequenceSource {
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
            files: Vec::new(),
            next: 0,
        }
    }
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn decode(path: &Path, index: usize) -> Result<Frame, Box<dyn std::error::Error>> {
    let img = image::open(path)?.into_rgb8();
    let (width, height) = img.dimensions();
    Ok(Frame::new(img.into_raw(), width, height, 3, index))
}

impl FrameSource for ImageSequenceSource {
    fn open(&mut self) -> Result<SourceInfo, Box<dyn std::error::Error>> {
        let entries = fs::read_dir(&self.dir)
            .map_err(|e| format!("failed to open frame directory {}: {e}", self.dir.display()))?;

        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| is_image(p))
            .collect();
        files.sort();

        if files.is_empty() {
            return Err(format!("no image files in {}", self.dir.display()).into());
        }

        // Dimensions come from the first frame; a camera would report them
        // from the device instead.
        let first = decode(&files[0], 0)?;
        let info = SourceInfo {
            width: first.width(),
            height: first.height(),
            frame_count: Some(files.len()),
        };

        self.files = files;
        self.next = 0;
        Ok(info)
    }

    fn grab(&mut self) -> Result<GrabOutcome, Box<dyn std::error::Error>> {
        if self.next >= self.files.len() {
            return Ok(GrabOutcome::End);
        }
        let path = self.files[self.next].clone();
        let index = self.next;
        self.next += 1;

        match decode(&path, index) {
            Ok(frame) => Ok(GrabOutcome::Frame(frame)),
            Err(e) => {
                log::warn!("skipping undecodable frame {}: {e}", path.display());
                Ok(GrabOutcome::NotReady)
            }
        }
    }

    fn close(&mut self) {
        self.files.clear();
        self.next = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_image(dir: &Path, name: &str, width: u32, height: u32, rgb: [u8; 3]) -> PathBuf {
        let path = dir.join(name);
        let mut img = image::RgbImage::new(width, height);
        for pixel in img.pixels_mut() {
            *pixel = image::Rgb(rgb);
        }
        img.save(&path).unwrap();
        path
    }

    fn grab_frame(source: &mut ImageSequenceSource) -> Frame {
        match source.grab().unwrap() {
            GrabOutcome::Frame(frame) => frame,
            other => panic!("expected a frame, got {other:?}"),
        }
    }

    #[test]
    fn test_open_reports_dimensions_and_count() {
        let dir = tempfile::tempdir().unwrap();
        write_image(dir.path(), "a.png", 64, 48, [10, 20, 30]);
        write_image(dir.path(), "b.png", 64, 48, [40, 50, 60]);

        let mut source = ImageSequenceSource::new(dir.path());
        let info = source.open().unwrap();
        assert_eq!(info.width, 64);
        assert_eq!(info.height, 48);
        assert_eq!(info.frame_count, Some(2));
    }

    #[test]
    fn test_open_missing_directory_fails() {
        let mut source = ImageSequenceSource::new(Path::new("/nonexistent/frames"));
        assert!(source.open().is_err());
    }

    #[test]
    fn test_open_empty_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut source = ImageSequenceSource::new(dir.path());
        assert!(source.open().is_err());
    }

    #[test]
    fn test_grab_yields_frames_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        // written out of order on purpose
        write_image(dir.path(), "frame_002.png", 4, 4, [2, 2, 2]);
        write_image(dir.path(), "frame_001.png", 4, 4, [1, 1, 1]);

        let mut source = ImageSequenceSource::new(dir.path());
        source.open().unwrap();

        let first = grab_frame(&mut source);
        assert_eq!(first.index(), 0);
        assert_eq!(first.data()[0], 1);

        let second = grab_frame(&mut source);
        assert_eq!(second.index(), 1);
        assert_eq!(second.data()[0], 2);
    }

    #[test]
    fn test_grab_after_last_frame_is_end() {
        let dir = tempfile::tempdir().unwrap();
        write_image(dir.path(), "only.png", 4, 4, [0, 0, 0]);

        let mut source = ImageSequenceSource::new(dir.path());
        source.open().unwrap();
        grab_frame(&mut source);
        assert!(matches!(source.grab().unwrap(), GrabOutcome::End));
        assert!(matches!(source.grab().unwrap(), GrabOutcome::End));
    }

    #[test]
    fn test_corrupt_file_is_skipped_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_image(dir.path(), "a.png", 4, 4, [0, 0, 0]);
        fs::write(dir.path().join("b.png"), b"not an image").unwrap();

        let mut source = ImageSequenceSource::new(dir.path());
        source.open().unwrap();
        grab_frame(&mut source);
        assert!(matches!(source.grab().unwrap(), GrabOutcome::NotReady));
        // the bad file was passed over, sequence then ends
        assert!(matches!(source.grab().unwrap(), GrabOutcome::End));
    }

    #[test]
    fn test_non_image_files_ignored() {
        let dir = tempfile::tempdir().unwrap();
        write_image(dir.path(), "a.png", 4, 4, [0, 0, 0]);
        fs::write(dir.path().join("notes.txt"), b"ignore me").unwrap();

        let mut source = ImageSequenceSource::new(dir.path());
        let info = source.open().unwrap();
        assert_eq!(info.frame_count, Some(1));
    }

    #[test]
    fn test_close_resets_state() {
        let dir = tempfile::tempdir().unwrap();
        write_image(dir.path(), "a.png", 4, 4, [0, 0, 0]);

        let mut source = ImageSequenceSource::new(dir.path());
        source.open().unwrap();
        source.close();
        assert!(matches!(source.grab().unwrap(), GrabOutcome::End));
    }
}
