//! Counter animations for the about section
//!
//! The host drives these with a repeating timer of [`COUNTER_TICK`] and stops
//! it once [`StatsAnimation::is_finished`] returns true.

use std::time::Duration;

use folio_core::PersonalStats;

/// Interval between counter frames
pub const COUNTER_TICK: Duration = Duration::from_millis(16);

/// Time a counter takes to reach its target
pub const COUNTER_DURATION: Duration = Duration::from_millis(2000);

/// Delay before the stats counters start
pub const STATS_START_DELAY: Duration = Duration::from_millis(500);

/// Delay before skill bars grow to their proficiency width
pub const SKILL_BAR_REVEAL_DELAY: Duration = Duration::from_millis(200);

/// Counts from 0 to `target` in equal steps, one per tick
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: u32,
    increment: f64,
    current: f64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: u32) -> Self {
        Self::with_timing(target, COUNTER_DURATION, COUNTER_TICK)
    }

    pub fn with_timing(target: u32, duration: Duration, tick: Duration) -> Self {
        let frames = (duration.as_secs_f64() / tick.as_secs_f64()).max(1.0);
        Self {
            target,
            increment: f64::from(target) / frames,
            current: 0.0,
            finished: false,
        }
    }

    /// Advance one frame and return the value to display
    pub fn tick(&mut self) -> u32 {
        if self.finished {
            return self.target;
        }
        self.current += self.increment;
        if self.current >= f64::from(self.target) {
            self.finished = true;
            self.target
        } else {
            self.current.floor() as u32
        }
    }

    /// Value shown right now
    pub fn value(&self) -> u32 {
        if self.finished {
            self.target
        } else {
            self.current.floor() as u32
        }
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

/// All numeric stats counting up together. Text stats are shown as-is once
/// the animation starts.
#[derive(Debug, Clone)]
pub struct StatsAnimation {
    stats: PersonalStats,
    projects_completed: CounterAnimation,
    languages_learned: CounterAnimation,
    certifications: CounterAnimation,
    github_commits: CounterAnimation,
}

impl StatsAnimation {
    pub fn new(stats: PersonalStats) -> Self {
        Self {
            projects_completed: CounterAnimation::new(stats.projects_completed),
            languages_learned: CounterAnimation::new(stats.languages_learned),
            certifications: CounterAnimation::new(stats.certifications),
            github_commits: CounterAnimation::new(stats.github_commits),
            stats,
        }
    }

    /// What is displayed before the start delay has elapsed
    pub fn placeholder() -> PersonalStats {
        PersonalStats {
            coding_years: "0".to_string(),
            lines_of_code: "0".to_string(),
            ..PersonalStats::default()
        }
    }

    /// Advance every counter by one frame
    pub fn tick(&mut self) -> PersonalStats {
        self.projects_completed.tick();
        self.languages_learned.tick();
        self.certifications.tick();
        self.github_commits.tick();
        self.snapshot()
    }

    pub fn snapshot(&self) -> PersonalStats {
        PersonalStats {
            coding_years: self.stats.coding_years.clone(),
            projects_completed: self.projects_completed.value(),
            languages_learned: self.languages_learned.value(),
            certifications: self.certifications.value(),
            github_commits: self.github_commits.value(),
            lines_of_code: self.stats.lines_of_code.clone(),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.projects_completed.is_finished()
            && self.languages_learned.is_finished()
            && self.certifications.is_finished()
            && self.github_commits.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_stats() -> PersonalStats {
        PersonalStats {
            coding_years: "8+".to_string(),
            projects_completed: 50,
            languages_learned: 7,
            certifications: 3,
            github_commits: 1500,
            lines_of_code: "100K+".to_string(),
        }
    }

    #[test]
    fn test_counter_reaches_target_after_duration() {
        let mut counter = CounterAnimation::new(250);
        let frames = (COUNTER_DURATION.as_millis() / COUNTER_TICK.as_millis()) as usize;

        let mut last = 0;
        for _ in 0..frames - 1 {
            let value = counter.tick();
            assert!(value >= last, "counter must not go backwards");
            assert!(value < 250);
            last = value;
        }

        // the last frame or the one after snaps to the exact target
        counter.tick();
        counter.tick();
        assert!(counter.is_finished());
        assert_eq!(counter.value(), 250);
    }

    #[test]
    fn test_counter_increment_matches_frame_count() {
        let mut counter = CounterAnimation::new(125);
        assert_eq!(counter.tick(), 1);
        assert_eq!(counter.tick(), 2);
    }

    #[test]
    fn test_zero_target_finishes_on_first_tick() {
        let mut counter = CounterAnimation::new(0);
        assert_eq!(counter.tick(), 0);
        assert!(counter.is_finished());
    }

    #[test]
    fn test_finished_counter_stays_at_target() {
        let mut counter = CounterAnimation::with_timing(3, Duration::from_millis(32), COUNTER_TICK);
        counter.tick();
        counter.tick();
        assert!(counter.is_finished());
        assert_eq!(counter.tick(), 3);
    }

    #[test]
    fn test_stats_text_values_pass_through() {
        let mut animation = StatsAnimation::new(sample_stats());

        let first = animation.tick();
        assert_eq!(first.coding_years, "8+");
        assert_eq!(first.lines_of_code, "100K+");
        assert!(first.github_commits < 1500);

        while !animation.is_finished() {
            animation.tick();
        }
        assert_eq!(animation.snapshot(), sample_stats());
    }

    #[test]
    fn test_placeholder_shows_zeroes() {
        let placeholder = StatsAnimation::placeholder();
        assert_eq!(placeholder.coding_years, "0");
        assert_eq!(placeholder.projects_completed, 0);
    }
}
