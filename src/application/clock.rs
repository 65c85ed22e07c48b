use crate::config::MIN_DELAY_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Running,
    Paused,
}

/// SimulationClock decides when a generation step is due.
/// It runs on its own delay, independent of the render frame rate.
#[derive(Clone, Debug)]
pub struct SimulationClock {
    state: RunState,
    delay_ms: u32,
    max_delay_ms: u32,
    delay_step_ms: u32,
    last_step_ms: u64,
    ticks: u64,
}

impl SimulationClock {
    pub fn new(delay_ms: u32, max_delay_ms: u32, delay_step_ms: u32, paused: bool) -> Self {
        Self {
            state: if paused { RunState::Paused } else { RunState::Running },
            delay_ms: delay_ms.clamp(MIN_DELAY_MS, max_delay_ms),
            max_delay_ms,
            delay_step_ms,
            last_step_ms: 0,
            ticks: 0,
        }
    }

    pub const fn state(&self) -> RunState {
        self.state
    }

    pub const fn is_running(&self) -> bool {
        matches!(self.state, RunState::Running)
    }

    pub const fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Generations stepped since the last reset
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Toggle play/pause state
    pub fn toggle(&mut self) {
        self.state = match self.state {
            RunState::Running => RunState::Paused,
            RunState::Paused => RunState::Running,
        };
    }

    /// Shorter delay, saturating at zero
    pub fn faster(&mut self) {
        self.delay_ms = self
            .delay_ms
            .saturating_sub(self.delay_step_ms)
            .max(MIN_DELAY_MS);
    }

    /// Longer delay, saturating at the configured maximum
    pub fn slower(&mut self) {
        self.delay_ms = self
            .delay_ms
            .saturating_add(self.delay_step_ms)
            .min(self.max_delay_ms);
    }

    pub fn reset_ticks(&mut self) {
        self.ticks = 0;
    }

    /// True when a step should run at `now_ms`. Never true while paused.
    pub fn is_due(&self, now_ms: u64) -> bool {
        self.is_running() && now_ms.saturating_sub(self.last_step_ms) >= u64::from(self.delay_ms)
    }

    /// Record that a step ran at `now_ms`
    pub fn mark_stepped(&mut self, now_ms: u64) {
        self.last_step_ms = now_ms;
        self.ticks += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock(delay: u32) -> SimulationClock {
        SimulationClock::new(delay, 990, 10, false)
    }

    #[test]
    fn test_due_after_delay() {
        let mut c = clock(100);
        c.mark_stepped(1000);
        assert!(!c.is_due(1099));
        assert!(c.is_due(1100));
        assert_eq!(c.ticks(), 1);
    }

    #[test]
    fn test_never_due_while_paused() {
        let mut c = clock(0);
        c.toggle();
        assert_eq!(c.state(), RunState::Paused);
        assert!(!c.is_due(u64::MAX));
        c.toggle();
        assert!(c.is_due(0));
    }

    #[test]
    fn test_delay_floor() {
        let mut c = clock(30);
        for _ in 0..50 {
            c.faster();
        }
        assert_eq!(c.delay_ms(), 0);
    }

    #[test]
    fn test_delay_cap() {
        let mut c = clock(950);
        for _ in 0..50 {
            c.slower();
        }
        assert_eq!(c.delay_ms(), 990);
    }

    #[test]
    fn test_initial_delay_is_clamped() {
        assert_eq!(clock(5000).delay_ms(), 990);
    }

    #[test]
    fn test_clock_going_backwards_is_not_due() {
        let mut c = clock(100);
        c.mark_stepped(500);
        assert!(!c.is_due(400));
    }
}
