use std::time::{Duration, Instant};

/// How long a notification stays fully visible before it starts to leave.
pub const NOTIFICATION_VISIBLE: Duration = Duration::from_millis(5000);
/// Length of the exit animation before the notification is detached.
pub const NOTIFICATION_EXIT: Duration = Duration::from_millis(300);

/// Visual category of a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationCategory {
    Success,
    Error,
}

/// A single transient message with its own removal clock.
#[derive(Clone, Debug)]
pub struct Notification {
    /// Visual category.
    pub category: NotificationCategory,
    /// Message text.
    pub text: String,
    created: Instant,
    exit_started: Option<Instant>,
}

impl Notification {
    fn new(category: NotificationCategory, text: String, now: Instant) -> Self {
        Self {
            category,
            text,
            created: now,
            exit_started: None,
        }
    }

    /// Start the exit phase unless it is already underway.
    pub fn begin_exit(&mut self, now: Instant) {
        if self.exit_started.is_none() {
            self.exit_started = Some(now);
        }
    }

    /// Progress through the exit phase in `0.0..=1.0`, or `None` while visible.
    pub fn exit_progress(&self, now: Instant) -> Option<f32> {
        let started = self.exit_started?;
        let elapsed = now.saturating_duration_since(started);
        Some((elapsed.as_secs_f32() / NOTIFICATION_EXIT.as_secs_f32()).min(1.0))
    }

    fn expired(&self, now: Instant) -> bool {
        self.exit_started
            .is_some_and(|started| now.saturating_duration_since(started) >= NOTIFICATION_EXIT)
    }

    fn visible_elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created)
    }
}

/// All live notifications. Each manages its own timers; there is no queue
/// and no cap on how many coexist.
#[derive(Debug, Default)]
pub struct NotificationsState {
    items: Vec<Notification>,
}

impl NotificationsState {
    /// Show a new notification immediately.
    pub fn push(&mut self, category: NotificationCategory, text: impl Into<String>) {
        self.push_at(category, text, Instant::now());
    }

    /// Show a new notification with an explicit creation time.
    pub fn push_at(
        &mut self,
        category: NotificationCategory,
        text: impl Into<String>,
        now: Instant,
    ) {
        self.items
            .push(Notification::new(category, text.into(), now));
    }

    /// Dismiss a notification early; it still plays the exit animation.
    pub fn dismiss(&mut self, index: usize, now: Instant) {
        if let Some(item) = self.items.get_mut(index) {
            item.begin_exit(now);
        }
    }

    /// Advance every notification's removal clock.
    pub fn tick(&mut self, now: Instant) {
        for item in &mut self.items {
            if item.exit_started.is_none() && item.visible_elapsed(now) >= NOTIFICATION_VISIBLE {
                item.begin_exit(now);
            }
        }
        self.items.retain(|item| !item.expired(now));
    }

    /// Live notifications, oldest first.
    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    /// True when no notifications are showing.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_one(now: Instant) -> NotificationsState {
        let mut state = NotificationsState::default();
        state.push_at(NotificationCategory::Error, "oops", now);
        state
    }

    #[test]
    fn notification_stays_until_visible_window_ends() {
        let t0 = Instant::now();
        let mut state = state_with_one(t0);

        state.tick(t0 + Duration::from_millis(4999));
        assert_eq!(state.items().len(), 1);
        assert!(state.items()[0].exit_progress(t0).is_none());
    }

    #[test]
    fn notification_removes_itself_within_total_window() {
        let t0 = Instant::now();
        let mut state = state_with_one(t0);

        state.tick(t0 + NOTIFICATION_VISIBLE);
        assert_eq!(state.items().len(), 1, "exit phase keeps it attached");
        assert!(
            state.items()[0]
                .exit_progress(t0 + NOTIFICATION_VISIBLE)
                .is_some()
        );

        state.tick(t0 + NOTIFICATION_VISIBLE + NOTIFICATION_EXIT);
        assert!(state.is_empty());
    }

    #[test]
    fn click_dismissal_uses_the_same_two_phases() {
        let t0 = Instant::now();
        let mut state = state_with_one(t0);

        let click = t0 + Duration::from_millis(100);
        state.dismiss(0, click);
        state.tick(click + Duration::from_millis(299));
        assert_eq!(state.items().len(), 1);

        state.tick(click + NOTIFICATION_EXIT);
        assert!(state.is_empty());
    }

    #[test]
    fn dismissal_does_not_restart_an_exit_in_progress() {
        let t0 = Instant::now();
        let mut state = state_with_one(t0);

        state.dismiss(0, t0 + Duration::from_millis(100));
        state.dismiss(0, t0 + Duration::from_millis(250));
        state.tick(t0 + Duration::from_millis(100) + NOTIFICATION_EXIT);
        assert!(state.is_empty());
    }

    #[test]
    fn notifications_expire_independently() {
        let t0 = Instant::now();
        let mut state = NotificationsState::default();
        state.push_at(NotificationCategory::Error, "first", t0);
        state.push_at(
            NotificationCategory::Success,
            "second",
            t0 + Duration::from_millis(2000),
        );

        state.tick(t0 + NOTIFICATION_VISIBLE);
        state.tick(t0 + NOTIFICATION_VISIBLE + NOTIFICATION_EXIT);
        assert_eq!(state.items().len(), 1);
        assert_eq!(state.items()[0].text, "second");

        let second_created = t0 + Duration::from_millis(2000);
        state.tick(second_created + NOTIFICATION_VISIBLE);
        state.tick(second_created + NOTIFICATION_VISIBLE + NOTIFICATION_EXIT);
        assert!(state.is_empty());
    }

    #[test]
    fn exit_progress_is_clamped() {
        let t0 = Instant::now();
        let mut state = state_with_one(t0);
        state.dismiss(0, t0);
        let progress = state.items()[0]
            .exit_progress(t0 + Duration::from_secs(10))
            .unwrap();
        assert_eq!(progress, 1.0);
    }
}
