use crate::widgets::{CharDisplay, InputBox};
use crate::App;
use ratatui::prelude::*;

impl App {
    /// Main render function for the application UI
    pub fn render(&mut self, f: &mut Frame) {
        let status_rows = if self.config.ui.show_status_bar { 1 } else { 0 };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),           // Input field
                Constraint::Min(1),              // Character display
                Constraint::Length(status_rows), // Status line
            ])
            .split(f.area());

        self.render_input(f, chunks[0]);
        self.render_display(f, chunks[1]);

        if self.config.ui.show_status_bar {
            self.render_status_line(f, chunks[2]);
        }
    }

    /// Render the input field and place the terminal cursor on its caret
    fn render_input(&self, f: &mut Frame, area: Rect) {
        let input = InputBox::new(&self.input);
        let caret = input.caret_position(area);

        f.render_widget(input, area);
        if area.height > 2 && area.width > 2 {
            f.set_cursor_position(caret);
        }
    }

    fn render_display(&self, f: &mut Frame, area: Rect) {
        let display = CharDisplay::new(self.editor.surface()).wrap(self.config.ui.wrap_display);
        f.render_widget(display, area);
    }

    fn render_status_line(&mut self, f: &mut Frame, area: Rect) {
        self.update_status_bar();
        f.render_widget(&self.status_bar, area);
    }
}
