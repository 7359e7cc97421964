use std::fmt::Display;

/// ANSI color codes for console output.
pub mod colors {
    pub const ERROR: &str = "\x1b[31m"; // Red
    pub const SUCCESS: &str = "\x1b[32m"; // Green
    pub const DEBUG: &str = "\x1b[34m"; // Blue
    pub const INFO: &str = "\x1b[35m"; // Magenta
    pub const NOTICE: &str = "\x1b[37m"; // White
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode, as chosen on the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    /// Color only when the output is a terminal.
    #[default]
    Auto,
    /// Always color.
    Always,
    /// Never color.
    Never,
}

impl ColorMode {
    /// Resolves the mode against whether the output is a terminal.
    #[must_use]
    pub const fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            Self::Auto => is_tty,
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// Wraps text in color codes, or leaves it alone when colors are off.
///
/// # Examples
/// ```
/// use yardcalc::color::{Palette, colors};
///
/// assert_eq!(Palette::plain().paint(colors::ERROR, "Error: "), "Error: ");
/// assert_eq!(Palette::new(true).paint(colors::INFO, 7), "\x1b[35m7\x1b[0m");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// Creates a palette that colors when `enabled` is set.
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// A palette that never colors.
    #[must_use]
    pub const fn plain() -> Self {
        Self::new(false)
    }

    /// Returns `true` if this palette emits color codes.
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        self.enabled
    }

    /// Renders `text`, colored with `color` when enabled.
    #[must_use]
    pub fn paint(self, color: &str, text: impl Display) -> String {
        if self.enabled {
            format!("{color}{text}{}", colors::RESET)
        } else {
            text.to_string()
        }
    }
}
