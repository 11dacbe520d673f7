const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// ANSI styling of terminal messages.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    color: bool,
}

impl Theme {
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    pub const fn is_colored(&self) -> bool {
        self.color
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    pub fn title(&self, text: &str) -> String {
        self.paint(&format!("{BOLD}{CYAN}"), text)
    }

    pub fn success(&self, text: &str) -> String {
        self.paint(GREEN, text)
    }

    pub fn warning(&self, text: &str) -> String {
        self.paint(YELLOW, text)
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(RED, text)
    }
}
