use aqua_core::TextSink;
use std::collections::VecDeque;

/// Scrolling text log.
///
/// Lines are append-only from the writer's side; with a non-zero `limit`
/// the oldest lines are dropped so a long-running session stays bounded.
#[derive(Debug, Clone, Default)]
pub struct LogBuffer {
    lines:       VecDeque<String>,
    limit:       usize,
    /// Set by `scroll_to_end`: the view keeps the newest line in sight.
    follow_tail: bool,
}

impl LogBuffer {
    /// `limit` = 0 keeps every line.
    pub fn new(limit: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            limit,
            follow_tail: false,
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whole log as one newline-joined string.
    pub fn text(&self) -> String {
        self.lines().collect::<Vec<_>>().join("\n")
    }

    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit;
        self.trim();
    }

    pub fn follows_tail(&self) -> bool {
        self.follow_tail
    }

    fn trim(&mut self) {
        if self.limit == 0 {
            return;
        }
        while self.lines.len() > self.limit {
            self.lines.pop_front();
        }
    }
}

impl TextSink for LogBuffer {
    fn append_line(&mut self, line: &str) {
        self.lines.push_back(line.to_string());
        self.trim();
    }

    fn scroll_to_end(&mut self) {
        self.follow_tail = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_in_order() {
        let mut log = LogBuffer::new(0);
        log.append_line("a");
        log.append_line("b");
        assert_eq!(log.text(), "a\nb");
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn limit_drops_oldest() {
        let mut log = LogBuffer::new(2);
        for l in ["one", "two", "three"] {
            log.append_line(l);
        }
        assert_eq!(log.lines().collect::<Vec<_>>(), vec!["two", "three"]);

        log.set_limit(1);
        assert_eq!(log.text(), "three");
    }

    #[test]
    fn scroll_to_end_pins_view_to_tail() {
        let mut log = LogBuffer::new(0);
        assert!(!log.follows_tail());
        log.append_line("x");
        log.scroll_to_end();
        assert!(log.follows_tail());
    }
}
