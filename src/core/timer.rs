//! The Pomodoro interval state machine.
//!
//! Cycles between work and break intervals: every completed work interval
//! is followed by a short break, except every Nth (default 4th), which is
//! followed by a long break. Completing any break returns to work.
//!
//! The timer holds no clock of its own. The owning event loop calls
//! [`PomodoroTimer::tick`] once per second; because there is exactly one
//! loop, there is never more than one active countdown no matter how many
//! times `start` is pressed.

use serde::{Deserialize, Serialize};

use crate::config::TimerConfig;

/// Which interval the timer is currently in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Focused-work countdown.
    Work,
    /// Short break between work intervals.
    Short,
    /// Long break after every Nth work interval.
    Long,
}

impl Mode {
    /// Human-readable label for display.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Short => "Short Break",
            Self::Long => "Long Break",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// An interval transition, emitted when a countdown completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// A work interval finished; a short break begins.
    ShortBreak,
    /// A work interval finished; a long break begins.
    LongBreak,
    /// A break finished; work begins.
    BackToWork,
}

impl Transition {
    /// User-facing notification text for this transition.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::ShortBreak => "☕ Time for a short break!",
            Self::LongBreak => "🎉 Time for a long break!",
            Self::BackToWork => "📝 Back to work!",
        }
    }
}

/// The countdown-timer state machine.
#[derive(Debug, Clone)]
pub struct PomodoroTimer {
    work_seconds: u32,
    short_seconds: u32,
    long_seconds: u32,
    long_break_every: u32,
    mode: Mode,
    time_left: u32,
    cycle_count: u32,
    running: bool,
}

impl PomodoroTimer {
    /// Create a timer in the initial work state from the given durations.
    #[must_use]
    pub const fn new(config: &TimerConfig) -> Self {
        Self {
            work_seconds: config.work_minutes * 60,
            short_seconds: config.short_break_minutes * 60,
            long_seconds: config.long_break_minutes * 60,
            long_break_every: config.pomodoros_until_long_break,
            mode: Mode::Work,
            time_left: config.work_minutes * 60,
            cycle_count: 0,
            running: false,
        }
    }

    /// Begin counting down. Idempotent if already running.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop counting down without touching the remaining time.
    /// Idempotent if already paused.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Stop the countdown and reinitialize to the work state with the
    /// durations the timer was built with. Clears the cycle count.
    pub fn reset(&mut self) {
        self.running = false;
        self.mode = Mode::Work;
        self.time_left = self.work_seconds;
        self.cycle_count = 0;
    }

    /// Adopt new durations, then reinitialize exactly like [`Self::reset`].
    ///
    /// Changing settings always restarts the cycle from work, discarding
    /// any in-progress countdown.
    pub fn apply_settings(&mut self, config: &TimerConfig) {
        self.work_seconds = config.work_minutes * 60;
        self.short_seconds = config.short_break_minutes * 60;
        self.long_seconds = config.long_break_minutes * 60;
        self.long_break_every = config.pomodoros_until_long_break;
        self.reset();
    }

    /// Advance the countdown by one second.
    ///
    /// Returns the transition if this tick completed an interval. A
    /// transition stops the countdown; the next interval starts when the
    /// user starts it. Does nothing while paused.
    pub fn tick(&mut self) -> Option<Transition> {
        if !self.running {
            return None;
        }

        if self.time_left == 0 {
            self.running = false;
            return Some(self.switch_mode());
        }

        self.time_left -= 1;
        None
    }

    /// Move to the next interval and return the transition taken.
    fn switch_mode(&mut self) -> Transition {
        match self.mode {
            Mode::Work => {
                self.cycle_count += 1;
                if self.cycle_count % self.long_break_every == 0 {
                    self.mode = Mode::Long;
                    self.time_left = self.long_seconds;
                    Transition::LongBreak
                } else {
                    self.mode = Mode::Short;
                    self.time_left = self.short_seconds;
                    Transition::ShortBreak
                }
            }
            Mode::Short | Mode::Long => {
                self.mode = Mode::Work;
                self.time_left = self.work_seconds;
                Transition::BackToWork
            }
        }
    }

    /// The current interval.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Seconds remaining in the current interval.
    #[must_use]
    pub const fn time_left(&self) -> u32 {
        self.time_left
    }

    /// Number of completed work intervals.
    #[must_use]
    pub const fn cycle_count(&self) -> u32 {
        self.cycle_count
    }

    /// Whether the countdown is active.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Remaining time rendered as zero-padded `MM:SS`.
    #[must_use]
    pub fn display(&self) -> String {
        format_mmss(self.time_left)
    }

    /// Fraction of the current interval already elapsed (0.0 - 1.0).
    #[must_use]
    pub fn progress(&self) -> f64 {
        let total = match self.mode {
            Mode::Work => self.work_seconds,
            Mode::Short => self.short_seconds,
            Mode::Long => self.long_seconds,
        };
        if total == 0 {
            return 1.0;
        }
        1.0 - (f64::from(self.time_left) / f64::from(total))
    }
}

/// Format a number of seconds as zero-padded `MM:SS`.
#[must_use]
pub fn format_mmss(seconds: u32) -> String {
    let minutes = seconds / 60;
    let secs = seconds % 60;
    format!("{minutes:02}:{secs:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(work: u32, short: u32, long: u32) -> TimerConfig {
        TimerConfig {
            work_minutes: work,
            short_break_minutes: short,
            long_break_minutes: long,
            pomodoros_until_long_break: 4,
        }
    }

    /// Run the timer through the remainder of the current interval and
    /// return the transition it ends with.
    fn complete_interval(timer: &mut PomodoroTimer) -> Transition {
        timer.start();
        loop {
            if let Some(transition) = timer.tick() {
                return transition;
            }
        }
    }

    #[test]
    fn test_initial_state() {
        let timer = PomodoroTimer::new(&config(25, 5, 15));

        assert_eq!(timer.mode(), Mode::Work);
        assert_eq!(timer.time_left(), 25 * 60);
        assert_eq!(timer.cycle_count(), 0);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_initial_state_arbitrary_durations() {
        for (w, s, l) in [(1, 1, 1), (45, 10, 30), (90, 2, 20)] {
            let timer = PomodoroTimer::new(&config(w, s, l));
            assert_eq!(timer.mode(), Mode::Work);
            assert_eq!(timer.time_left(), w * 60);
        }
    }

    #[test]
    fn test_tick_decrements_while_running() {
        let mut timer = PomodoroTimer::new(&config(25, 5, 15));
        timer.start();

        assert_eq!(timer.tick(), None);
        assert_eq!(timer.time_left(), 25 * 60 - 1);
    }

    #[test]
    fn test_tick_is_inert_while_paused() {
        let mut timer = PomodoroTimer::new(&config(25, 5, 15));

        assert_eq!(timer.tick(), None);
        assert_eq!(timer.time_left(), 25 * 60);

        timer.start();
        timer.tick();
        timer.pause();
        let left = timer.time_left();
        timer.tick();
        assert_eq!(timer.time_left(), left);
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut timer = PomodoroTimer::new(&config(25, 5, 15));
        timer.start();
        timer.start();

        // One tick, one decrement, no matter how many starts
        timer.tick();
        assert_eq!(timer.time_left(), 25 * 60 - 1);
    }

    #[test]
    fn test_pause_is_idempotent_and_preserves_time() {
        let mut timer = PomodoroTimer::new(&config(25, 5, 15));
        timer.start();
        timer.tick();
        timer.pause();
        timer.pause();

        assert!(!timer.is_running());
        assert_eq!(timer.time_left(), 25 * 60 - 1);
    }

    #[test]
    fn test_work_completion_goes_to_short_break() {
        let mut timer = PomodoroTimer::new(&config(1, 1, 1));

        let transition = complete_interval(&mut timer);

        assert_eq!(transition, Transition::ShortBreak);
        assert_eq!(timer.mode(), Mode::Short);
        assert_eq!(timer.cycle_count(), 1);
        assert_eq!(timer.time_left(), 60);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_every_fourth_work_completion_goes_to_long_break() {
        let mut timer = PomodoroTimer::new(&config(1, 1, 2));

        for expected_cycle in 1..=8u32 {
            let transition = complete_interval(&mut timer);
            assert_eq!(timer.cycle_count(), expected_cycle);

            if expected_cycle % 4 == 0 {
                assert_eq!(transition, Transition::LongBreak);
                assert_eq!(timer.mode(), Mode::Long);
                assert_eq!(timer.time_left(), 2 * 60);
            } else {
                assert_eq!(transition, Transition::ShortBreak);
                assert_eq!(timer.mode(), Mode::Short);
            }

            // Finish the break; cycle count must not change
            let back = complete_interval(&mut timer);
            assert_eq!(back, Transition::BackToWork);
            assert_eq!(timer.mode(), Mode::Work);
            assert_eq!(timer.time_left(), 60);
            assert_eq!(timer.cycle_count(), expected_cycle);
        }
    }

    #[test]
    fn test_break_completion_returns_to_work() {
        let mut timer = PomodoroTimer::new(&config(2, 1, 1));
        complete_interval(&mut timer); // work -> short

        let transition = complete_interval(&mut timer);

        assert_eq!(transition, Transition::BackToWork);
        assert_eq!(timer.mode(), Mode::Work);
        assert_eq!(timer.time_left(), 2 * 60);
        assert_eq!(timer.cycle_count(), 1);
    }

    #[test]
    fn test_reset_reinitializes_to_work() {
        let mut timer = PomodoroTimer::new(&config(25, 5, 15));
        complete_interval(&mut timer);
        timer.start();
        timer.tick();

        timer.reset();

        assert_eq!(timer.mode(), Mode::Work);
        assert_eq!(timer.time_left(), 25 * 60);
        assert_eq!(timer.cycle_count(), 0);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_apply_settings_always_resets() {
        let mut timer = PomodoroTimer::new(&config(25, 5, 15));
        complete_interval(&mut timer); // now in short break, cycle 1
        timer.start();

        timer.apply_settings(&config(50, 10, 20));

        assert_eq!(timer.mode(), Mode::Work);
        assert_eq!(timer.time_left(), 50 * 60);
        assert_eq!(timer.cycle_count(), 0);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_fourth_work_completion_example() {
        // Settings {25, 5, 15}: after 3 work cycles and their breaks,
        // cycle_count = 3; the 4th work completion yields a long break
        // with 900 seconds on the clock.
        let mut timer = PomodoroTimer::new(&config(25, 5, 15));

        for _ in 0..3 {
            assert_eq!(complete_interval(&mut timer), Transition::ShortBreak);
            assert_eq!(complete_interval(&mut timer), Transition::BackToWork);
        }
        assert_eq!(timer.cycle_count(), 3);

        let transition = complete_interval(&mut timer);
        assert_eq!(transition, Transition::LongBreak);
        assert_eq!(timer.cycle_count(), 4);
        assert_eq!(timer.mode(), Mode::Long);
        assert_eq!(timer.time_left(), 900);
    }

    #[test]
    fn test_display_is_zero_padded() {
        let mut timer = PomodoroTimer::new(&config(25, 5, 15));
        assert_eq!(timer.display(), "25:00");

        timer.start();
        timer.tick();
        assert_eq!(timer.display(), "24:59");
    }

    #[test]
    fn test_format_mmss() {
        assert_eq!(format_mmss(0), "00:00");
        assert_eq!(format_mmss(9), "00:09");
        assert_eq!(format_mmss(90), "01:30");
        assert_eq!(format_mmss(25 * 60), "25:00");
    }

    #[test]
    fn test_progress() {
        let mut timer = PomodoroTimer::new(&config(1, 1, 1));
        assert!(timer.progress().abs() < f64::EPSILON);

        timer.start();
        for _ in 0..30 {
            timer.tick();
        }
        assert!((timer.progress() - 0.5).abs() < 0.01);
    }
}
