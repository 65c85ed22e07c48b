/// Approximate frames-per-second, refreshed about once a second.
/// Frames are counted over a window of at least `WINDOW_MS` and divided by
/// the window's real length.
#[derive(Clone, Debug)]
pub struct FpsMeter {
    window_start_ms: Option<u64>,
    frames: u32,
    fps: f32,
}

impl FpsMeter {
    const WINDOW_MS: u64 = 1000;

    pub fn new() -> Self {
        Self {
            window_start_ms: None,
            frames: 0,
            fps: 0.0,
        }
    }

    /// Most recent estimate
    pub const fn fps(&self) -> f32 {
        self.fps
    }

    pub fn record_frame(&mut self, now_ms: u64) {
        let Some(start) = self.window_start_ms else {
            self.window_start_ms = Some(now_ms);
            return;
        };

        self.frames += 1;
        let elapsed = now_ms.saturating_sub(start);
        if elapsed >= Self::WINDOW_MS {
            self.fps = self.frames as f32 * 1000.0 / elapsed as f32;
            self.frames = 0;
            self.window_start_ms = Some(now_ms);
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

    #[test]
    fn test_sixty_frames_per_second() {
        let mut meter = FpsMeter::new();
        // 61 frames 1000/60 ms apart: one to open the window, sixty inside it
        for i in 0..=60u64 {
            meter.record_frame(i * 1000 / 60);
        }
        assert!((meter.fps() - 60.0).abs() < 0.5, "got {}", meter.fps());
    }

    #[test]
    fn test_no_estimate_before_first_window() {
        let mut meter = FpsMeter::new();
        meter.record_frame(0);
        meter.record_frame(500);
        assert_eq!(meter.fps(), 0.0);
    }
}
