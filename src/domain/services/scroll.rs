#[cfg(test)]
#[path = "scroll_test.rs"]
mod tests;

use ratatui::widgets::ScrollbarState;

#[derive(Default)]
pub struct Scroll {
    content_length: u16,
    viewport_length: u16,
    pub position: u16,
    pub scrollbar_state: ScrollbarState,
}

impl Scroll {
    fn max_position(&self) -> u16 {
        if self.content_length > self.viewport_length {
            return self.content_length - self.viewport_length;
        }

        return 0;
    }

    pub fn up(&mut self) {
        self.position = self.position.saturating_sub(1);
        self.scrollbar_state.prev();
    }

    pub fn down(&mut self) {
        self.position = self.position.saturating_add(1).min(self.max_position());
        self.scrollbar_state.next();
    }

    pub fn page_up(&mut self) {
        for _ in 0..self.viewport_length.max(1) {
            self.up();
        }
    }

    pub fn page_down(&mut self) {
        for _ in 0..self.viewport_length.max(1) {
            self.down();
        }
    }

    pub fn reset(&mut self) {
        self.position = 0;
        self.scrollbar_state.first();
    }

    /// Keeps scroll bounds in sync with the rendered content. Must run
    /// before the widgets are drawn so the position stays clamped when the
    /// content shrinks or the terminal resizes.
    pub fn set_state(&mut self, content_length: u16, viewport_length: u16) {
        self.content_length = content_length;
        self.viewport_length = viewport_length;
        self.position = self.position.min(self.max_position());
        self.scrollbar_state = self
            .scrollbar_state
            .content_length(content_length)
            .viewport_content_length(viewport_length);
    }
}
