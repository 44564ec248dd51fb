use std::time::Instant;

use super::Controller;
use crate::egui_app::state::{MENU_BREAKPOINT, Page};

impl Controller {
    /// Flip the navigation menu between open and closed.
    pub fn toggle_menu(&mut self) {
        self.ui.menu.toggle();
    }

    /// Close the navigation menu immediately.
    pub fn close_menu(&mut self) {
        self.ui.menu.close();
    }

    /// Switch the content area to `page` and close an open menu after the
    /// link-click delay.
    pub fn select_page(&mut self, page: Page, now: Instant) {
        self.ui.menu.page = page;
        self.ui.menu.schedule_close(now);
    }

    /// Close an open menu in response to the Escape key.
    pub fn handle_escape(&mut self) {
        if self.ui.menu.open {
            self.ui.menu.close();
        }
    }

    /// Close an open menu once the viewport grows past the breakpoint.
    pub fn observe_viewport_width(&mut self, width: f32) {
        if self.ui.menu.open && width > MENU_BREAKPOINT {
            self.ui.menu.close();
        }
    }
}
