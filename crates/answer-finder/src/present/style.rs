//! Console styling, injected into the sink instead of set up globally.

use owo_colors::OwoColorize;

/// How console output is decorated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// ANSI colours.
    #[default]
    Colored,
    /// No escape sequences; for pipes, files and `--no-color`.
    Plain,
}

impl Style {
    /// Pick a style from the `--no-color` flag and the `NO_COLOR` convention.
    pub fn detect(no_color: bool) -> Self {
        if no_color || std::env::var_os("NO_COLOR").is_some() {
            Style::Plain
        } else {
            Style::Colored
        }
    }

    pub fn rule(self, s: &str) -> String {
        self.paint(s, |s| s.cyan().to_string())
    }

    pub fn title(self, s: &str) -> String {
        self.paint(s, |s| s.yellow().bold().to_string())
    }

    pub fn question(self, s: &str) -> String {
        self.paint(s, |s| s.magenta().to_string())
    }

    pub fn correct(self, s: &str) -> String {
        self.paint(s, |s| s.green().to_string())
    }

    pub fn answer(self, s: &str) -> String {
        self.paint(s, |s| s.white().to_string())
    }

    pub fn success(self, s: &str) -> String {
        self.paint(s, |s| s.green().to_string())
    }

    pub fn warning(self, s: &str) -> String {
        self.paint(s, |s| s.yellow().to_string())
    }

    pub fn error(self, s: &str) -> String {
        self.paint(s, |s| s.red().to_string())
    }

    fn paint(self, s: &str, colored: impl Fn(&str) -> String) -> String {
        match self {
            Style::Colored => colored(s),
            Style::Plain => s.to_string(),
        }
    }
}
