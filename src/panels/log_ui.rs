use std::collections::VecDeque;


use super::panel_trait::Panel;

/// Scrolling text log of per-tick deltas.
pub struct LogPanel {
    pub lines: VecDeque<String>,
    pub max_lines: usize,
}

impl Default for LogPanel {
    fn default() -> Self {
        Self::new(10_000)
    }
}

impl LogPanel {
    pub fn new(max_lines: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            max_lines: max_lines.max(1),
        }
    }

    /// Append a line, dropping the oldest beyond `max_lines`.
    pub fn push(&mut self, line: String) {
        self.lines.push_back(line);
        while self.lines.len() > self.max_lines {
            self.lines.pop_front();
        }
    }
}

impl Panel for LogPanel {
    fn title(&self) -> &'static str {
        "Timing log"
    }

    fn render_panel(&mut self, ui: &mut egui::Ui) {
        let row_height = ui.text_style_height(&egui::TextStyle::Monospace);
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .stick_to_bottom(true)
            .show_rows(ui, row_height, self.lines.len(), |ui, range| {
                for line in self.lines.range(range) {
                    ui.monospace(line);
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_drops_oldest_lines() {
        let mut log = LogPanel::new(2);
        log.push("a".into());
        log.push("b".into());
        log.push("c".into());
        assert_eq!(log.lines, VecDeque::from(vec!["b".to_string(), "c".to_string()]));
    }
}
