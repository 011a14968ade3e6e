use std::collections::HashMap;
use std::fmt::Write as _;
use std::time::{Duration, Instant};

/// Wall-clock duration of one named pipeline stage.
#[derive(Debug, Clone)]
pub struct StepTiming {
    pub name: String,
    pub duration: Duration,
}

/// Stage durations collected over one `process_with_timings` call, in the
/// order the stages ran.
#[derive(Debug, Default)]
pub struct PipelineTimings {
    steps: Vec<StepTiming>,
    step_map: HashMap<String, Duration>,
}

impl PipelineTimings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_step(&mut self, name: impl Into<String>, duration: Duration) {
        let name = name.into();
        *self.step_map.entry(name.clone()).or_insert(Duration::ZERO) += duration;
        self.steps.push(StepTiming { name, duration });
    }

    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(|s| s.duration).sum()
    }

    pub fn get_step(&self, name: &str) -> Option<Duration> {
        self.step_map.get(name).copied()
    }

    pub fn steps(&self) -> &[StepTiming] {
        &self.steps
    }

    /// Renders the stages as a fixed-width table with their share of the total.
    pub fn summary(&self) -> String {
        let total = self.total_duration();
        let mut out = String::new();
        let _ = writeln!(out, "Pipeline Timing Summary:");
        let _ = writeln!(out, "{:-<60}", "");
        for step in &self.steps {
            let percentage = if total.as_secs_f64() > 0.0 {
                (step.duration.as_secs_f64() / total.as_secs_f64()) * 100.0
            } else {
                0.0
            };
            let _ = writeln!(
                out,
                "{:<30} {:>12.3}ms ({:>5.1}%)",
                step.name,
                step.duration.as_secs_f64() * 1000.0,
                percentage
            );
        }
        let _ = writeln!(out, "{:-<60}", "");
        let _ = write!(out, "{:<30} {:>12.3}ms", "Total", total.as_secs_f64() * 1000.0);
        out
    }
}

pub struct Timer {
    start: Instant,
    name: String,
}

impl Timer {
    pub fn start(name: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            name: name.into(),
        }
    }

    pub fn stop(self) -> (String, Duration) {
        (self.name, self.start.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_steps_accumulate() {
        let mut timings = PipelineTimings::new();
        timings.add_step("detect_edges", Duration::from_millis(2));
        timings.add_step("detect_edges", Duration::from_millis(3));
        timings.add_step("expand_to_rgba", Duration::from_millis(1));

        assert_eq!(timings.steps().len(), 3);
        assert_eq!(timings.get_step("detect_edges"), Some(Duration::from_millis(5)));
        assert_eq!(timings.get_step("missing"), None);
        assert_eq!(timings.total_duration(), Duration::from_millis(6));
    }

    #[test]
    fn test_summary_lists_every_step() {
        let mut timings = PipelineTimings::new();
        timings.add_step("yuv_to_rgba", Duration::from_micros(750));
        timings.add_step("rgba_to_gray", Duration::from_micros(250));

        let summary = timings.summary();
        assert!(summary.contains("yuv_to_rgba"));
        assert!(summary.contains("rgba_to_gray"));
        assert!(summary.contains("75.0%"));
        assert!(summary.lines().last().unwrap().starts_with("Total"));
    }
}
