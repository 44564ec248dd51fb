use std::time::{Duration, Instant};

/// Viewport width above which an open menu closes on its own.
pub const MENU_BREAKPOINT: f32 = 768.0;
/// Delay between a navigation-link click and the menu closing.
pub const LINK_CLOSE_DELAY: Duration = Duration::from_millis(150);

/// Pages reachable from the navigation menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Analyze,
    History,
    About,
}

impl Page {
    /// Label shown on the navigation link.
    pub fn title(self) -> &'static str {
        match self {
            Self::Analyze => "Analyze",
            Self::History => "History",
            Self::About => "About",
        }
    }
}

/// Navigation menu state machine: closed (initial) or open, plus the
/// presentation flags each transition updates together.
#[derive(Debug, Default)]
pub struct NavMenuState {
    /// Whether the menu panel is showing.
    pub open: bool,
    /// Active styling on the toggle control.
    pub toggle_active: bool,
    /// Dimmed overlay behind the menu panel.
    pub overlay_visible: bool,
    /// Blocks scrolling of the page content while the menu covers it.
    pub scroll_lock: bool,
    /// Page the content area currently shows.
    pub page: Page,
    close_at: Option<Instant>,
}

impl NavMenuState {
    /// Transition to the open state.
    pub fn open(&mut self) {
        self.open = true;
        self.toggle_active = true;
        self.overlay_visible = true;
        self.scroll_lock = true;
        self.close_at = None;
    }

    /// Transition to the closed state.
    pub fn close(&mut self) {
        self.open = false;
        self.toggle_active = false;
        self.overlay_visible = false;
        self.scroll_lock = false;
        self.close_at = None;
    }

    /// Flip between open and closed.
    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Arrange for the menu to close shortly after a link click.
    pub fn schedule_close(&mut self, now: Instant) {
        if self.open {
            self.close_at = Some(now + LINK_CLOSE_DELAY);
        }
    }

    /// True while a delayed close is pending.
    pub fn close_pending(&self) -> bool {
        self.close_at.is_some()
    }

    /// Apply a pending delayed close once its deadline passes.
    pub fn tick(&mut self, now: Instant) {
        if self.close_at.is_some_and(|deadline| now >= deadline) {
            self.close();
        }
    }
}
