use std::time::Instant;

/// Per-frame timing for one capture-loop iteration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameStats {
    pub interval_ms: f64,
    /// `1000 / interval_ms` for this frame.
    pub fps: f64,
    /// Unbounded running mean of per-frame fps, no windowing or decay.
    pub average_fps: f64,
}

/// Frame-rate accumulator owned by the capture loop.
///
/// Replaces the original demos' free-floating timestamp/counter globals
/// with explicit state. Intervals that are not positive (clock went
/// backwards, or two ticks in the same instant) record no sample.
pub struct FpsMeter {
    last: Instant,
    cumulative_fps: f64,
    frames: u64,
}

impl FpsMeter {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            cumulative_fps: 0.0,
            frames: 0,
        }
    }

    pub fn tick(&mut self) -> Option<FrameStats> {
        self.tick_at(Instant::now())
    }

    /// Records one frame at an explicit instant. Split out so tests can
    /// drive the meter deterministically.
    pub fn tick_at(&mut self, now: Instant) -> Option<FrameStats> {
        let interval_ms = now.duration_since(self.last).as_secs_f64() * 1000.0;
        self.last = now;
        if interval_ms <= 0.0 {
            return None;
        }
        Some(self.record(interval_ms))
    }

    fn record(&mut self, interval_ms: f64) -> FrameStats {
        let fps = 1000.0 / interval_ms;
        self.cumulative_fps += fps;
        self.frames += 1;
        FrameStats {
            interval_ms,
            fps,
            average_fps: self.cumulative_fps / self.frames as f64,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Running average over all frames seen so far, 0 before the first.
    pub fn average_fps(&self) -> f64 {
        if self.frames == 0 {
            0.0
        } else {
            self.cumulative_fps / self.frames as f64
        }
    }
}

impl Default for FpsMeter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::time::Duration;

    #[test]
    fn test_running_average_of_30_60_90() {
        // instantaneous fps 30, 60, 90 → averages 30, 45, 60
        let mut meter = FpsMeter::new();
        let s1 = meter.record(1000.0 / 30.0);
        assert_relative_eq!(s1.fps, 30.0, epsilon = 1e-9);
        assert_relative_eq!(s1.average_fps, 30.0, epsilon = 1e-9);

        let s2 = meter.record(1000.0 / 60.0);
        assert_relative_eq!(s2.fps, 60.0, epsilon = 1e-9);
        assert_relative_eq!(s2.average_fps, 45.0, epsilon = 1e-9);

        let s3 = meter.record(1000.0 / 90.0);
        assert_relative_eq!(s3.fps, 90.0, epsilon = 1e-9);
        assert_relative_eq!(s3.average_fps, 60.0, epsilon = 1e-9);
    }

    #[test]
    fn test_tick_at_measures_interval() {
        let mut meter = FpsMeter::new();
        let start = meter.last;

        let stats = meter.tick_at(start + Duration::from_millis(50)).unwrap();
        assert_relative_eq!(stats.interval_ms, 50.0, epsilon = 1e-6);
        assert_relative_eq!(stats.fps, 20.0, epsilon = 1e-6);
    }

    #[test]
    fn test_tick_at_same_instant_records_nothing() {
        let mut meter = FpsMeter::new();
        let start = meter.last;
        assert!(meter.tick_at(start).is_none());
        assert_eq!(meter.frames(), 0);
    }

    #[test]
    fn test_interval_advances_between_ticks() {
        let mut meter = FpsMeter::new();
        let start = meter.last;
        meter.tick_at(start + Duration::from_millis(10)).unwrap();
        let stats = meter.tick_at(start + Duration::from_millis(30)).unwrap();
        // second interval is 20ms, not 30
        assert_relative_eq!(stats.interval_ms, 20.0, epsilon = 1e-6);
    }

    #[test]
    fn test_average_fps_before_any_frame_is_zero() {
        let meter = FpsMeter::new();
        assert_eq!(meter.average_fps(), 0.0);
        assert_eq!(meter.frames(), 0);
    }

    #[test]
    fn test_frame_count_accumulates() {
        let mut meter = FpsMeter::new();
        meter.record(10.0);
        meter.record(10.0);
        meter.record(10.0);
        assert_eq!(meter.frames(), 3);
        assert_relative_eq!(meter.average_fps(), 100.0, epsilon = 1e-9);
    }
}
