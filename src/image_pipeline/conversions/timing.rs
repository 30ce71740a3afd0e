use std::time::{Duration, Instant};

use tracing::debug;

#[derive(Debug, Clone)]
pub struct StepTiming {
    pub name: &'static str,
    pub duration: Duration,
}

/// Durations of the steps of one frame cycle, in execution order.
#[derive(Debug, Default, Clone)]
pub struct FrameTimings {
    steps: Vec<StepTiming>,
}

impl FrameTimings {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn add_step(&mut self, name: &'static str, duration: Duration) {
        self.steps.push(StepTiming { name, duration });
    }

    pub fn record(&mut self, timer: Timer) {
        let (name, duration) = timer.stop();
        self.add_step(name, duration);
    }

    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(|s| s.duration).sum()
    }

    /// Total time spent in steps called `name`.
    pub fn get_step(&self, name: &str) -> Option<Duration> {
        let mut matching = self.steps.iter().filter(|s| s.name == name).peekable();
        matching.peek()?;
        Some(matching.map(|s| s.duration).sum())
    }

    pub fn steps(&self) -> &[StepTiming] {
        &self.steps
    }

    pub fn log_summary(&self) {
        let total = self.total_duration();
        for step in &self.steps {
            let percentage = if total.as_secs_f64() > 0.0 {
                (step.duration.as_secs_f64() / total.as_secs_f64()) * 100.0
            } else {
                0.0
            };
            debug!(
                "{:<16} {:>9.3}ms ({:>5.1}%)",
                step.name,
                step.duration.as_secs_f64() * 1000.0,
                percentage
            );
        }
        debug!("{:<16} {:>9.3}ms", "frame total", total.as_secs_f64() * 1000.0);
    }
}

pub struct Timer {
    start: Instant,
    name: &'static str,
}

impl Timer {
    pub fn start(name: &'static str) -> Self {
        Self {
            start: Instant::now(),
            name,
        }
    }

    pub fn stop(self) -> (&'static str, Duration) {
        (self.name, self.start.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_keep_order_and_sum() {
        let mut timings = FrameTimings::new();
        timings.add_step("convert_yuv", Duration::from_millis(3));
        timings.add_step("warp_affine", Duration::from_millis(2));
        timings.add_step("convert_yuv", Duration::from_millis(1));

        let names: Vec<&str> = timings.steps().iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["convert_yuv", "warp_affine", "convert_yuv"]);
        assert_eq!(timings.total_duration(), Duration::from_millis(6));
        assert_eq!(timings.get_step("convert_yuv"), Some(Duration::from_millis(4)));
        assert_eq!(timings.get_step("classify"), None);
    }

    #[test]
    fn test_timer_records_named_step() {
        let mut timings = FrameTimings::new();
        timings.record(Timer::start("normalize"));

        assert_eq!(timings.steps().len(), 1);
        assert!(timings.get_step("normalize").is_some());
    }
}
