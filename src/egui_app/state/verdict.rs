use std::time::{Duration, Instant};

use crate::service::Verdict;

/// Length of the one-shot pulse played when a verdict arrives.
pub const PULSE_DURATION: Duration = Duration::from_millis(600);

/// What the result area currently shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum VerdictPhase {
    /// Nothing submitted yet; the result area is hidden.
    #[default]
    Hidden,
    /// A request is in flight.
    Loading,
    /// The service returned a verdict.
    Ready {
        label: Verdict,
        confidence: String,
    },
    /// The request failed; `message` is shown in place of the confidence line.
    Failed { message: String },
}

/// Result area contents plus the pulse animation clock.
#[derive(Debug, Default)]
pub struct VerdictPanelState {
    /// Current phase of the result area.
    pub phase: VerdictPhase,
    pulse_started: Option<Instant>,
}

impl VerdictPanelState {
    /// Start the one-shot pulse animation.
    pub fn start_pulse(&mut self, now: Instant) {
        self.pulse_started = Some(now);
    }

    /// Pulse progress in `0.0..=1.0`, or `None` once the pulse has finished.
    pub fn pulse_progress(&self, now: Instant) -> Option<f32> {
        let started = self.pulse_started?;
        let elapsed = now.saturating_duration_since(started);
        if elapsed >= PULSE_DURATION {
            return None;
        }
        Some(elapsed.as_secs_f32() / PULSE_DURATION.as_secs_f32())
    }

    /// Drop the pulse clock once the animation has played out.
    pub fn tick(&mut self, now: Instant) {
        if let Some(started) = self.pulse_started
            && now.saturating_duration_since(started) >= PULSE_DURATION
        {
            self.pulse_started = None;
        }
    }
}

/// Feedback prompt shown under a successful verdict.
#[derive(Clone, Copy, Debug, Default)]
pub struct FeedbackPromptState {
    /// Whether the prompt is showing.
    pub visible: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulse_runs_once_and_expires() {
        let t0 = Instant::now();
        let mut panel = VerdictPanelState::default();
        assert!(panel.pulse_progress(t0).is_none());

        panel.start_pulse(t0);
        let mid = panel.pulse_progress(t0 + Duration::from_millis(300)).unwrap();
        assert!((mid - 0.5).abs() < 0.01);

        panel.tick(t0 + PULSE_DURATION);
        assert!(panel.pulse_progress(t0 + PULSE_DURATION).is_none());
    }

    #[test]
    fn phase_defaults_to_hidden() {
        assert_eq!(VerdictPanelState::default().phase, VerdictPhase::Hidden);
    }
}
