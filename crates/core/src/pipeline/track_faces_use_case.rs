use crate::annotation::domain::frame_annotator::FrameAnnotator;
use crate::capture::domain::frame_source::{FrameSource, GrabOutcome};
use crate::detection::domain::face_detector::FaceDetector;
use crate::display::domain::frame_sink::FrameSink;
use crate::pipeline::fps_meter::FpsMeter;

/// What a completed run did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunSummary {
    pub frames_presented: u64,
    pub frames_skipped: u64,
    pub average_fps: f64,
}

/// The capture loop: grab, detect, annotate, present, repeat.
///
/// Single-threaded and synchronous; each iteration runs to completion
/// before the next grab. All loop state (FPS accumulator, counters) lives
/// here rather than in globals. Source open failure aborts the run;
/// a grab that yields nothing skips the iteration and keeps looping.
pub struct TrackFacesUseCase {
    source: Box<dyn FrameSource>,
    detector: Box<dyn FaceDetector>,
    sink: Box<dyn FrameSink>,
    annotator: FrameAnnotator,
    resize_scale: u32,
    max_frames: Option<u64>,
    fps: FpsMeter,
    on_progress: Option<Box<dyn Fn(usize, Option<usize>) -> bool + Send>>,
}

impl TrackFacesUseCase {
    pub fn new(
        source: Box<dyn FrameSource>,
        detector: Box<dyn FaceDetector>,
        sink: Box<dyn FrameSink>,
        annotator: FrameAnnotator,
        resize_scale: u32,
        max_frames: Option<u64>,
        on_progress: Option<Box<dyn Fn(usize, Option<usize>) -> bool + Send>>,
    ) -> Self {
        Self {
            source,
            detector,
            sink,
            annotator,
            resize_scale,
            max_frames,
            fps: FpsMeter::new(),
            on_progress,
        }
    }

    pub fn run(&mut self) -> Result<RunSummary, Box<dyn std::error::Error>> {
        let info = self.source.open()?;
        log::info!("Resolution: ({} x {})", info.width, info.height);

        let mut presented: u64 = 0;
        let mut skipped: u64 = 0;

        loop {
            if self.max_frames.is_some_and(|max| presented >= max) {
                break;
            }

            let frame = match self.source.grab()? {
                GrabOutcome::Frame(frame) => frame,
                GrabOutcome::NotReady => {
                    skipped += 1;
                    continue;
                }
                GrabOutcome::End => break,
            };

            if let Some(stats) = self.fps.tick() {
                log::debug!(
                    "Frame time: {:.1}ms, FPS: {:.1}, average: {:.1}",
                    stats.interval_ms,
                    stats.fps,
                    stats.average_fps
                );
            }

            let working = frame.downscale(self.resize_scale);
            let rects = self.detector.detect(&working)?;
            let mut landmarks = Vec::with_capacity(rects.len());
            for rect in &rects {
                landmarks.push(self.detector.landmarks(&working, rect)?);
            }

            let commands = self.annotator.annotate(&rects, &landmarks);
            self.sink.present(&frame, &commands)?;
            presented += 1;

            if !self.sink.poll()? {
                break;
            }
            self.report_progress(presented as usize, info.frame_count)?;
        }

        self.source.close();
        Ok(RunSummary {
            frames_presented: presented,
            frames_skipped: skipped,
            average_fps: self.fps.average_fps(),
        })
    }

    fn report_progress(
        &self,
        current: usize,
        total: Option<usize>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(ref callback) = self.on_progress {
            if !callback(current, total) {
                return Err("Cancelled".into());
            }
        }
        Ok(())
    }
}
