use crate::rating::RatingBucket;
use colored::*;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    /// Whether text written to `stream` gets ANSI colors.
    pub fn should_use_color(&self, stream: Stream) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(stream),
        }
    }
}

/// Where formatted text ends up. Auto-detection probes this stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stream {
    #[default]
    Stdout,
    Stderr,
}

impl Stream {
    pub fn is_terminal(self) -> bool {
        match self {
            Self::Stdout => std::io::stdout().is_terminal(),
            Self::Stderr => std::io::stderr().is_terminal(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
    pub stream: Stream,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            stream: Stream::Stdout,
        }
    }
}

impl FormattingConfig {
    pub fn new(color: ColorMode) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    /// Same settings, detected against stderr instead of stdout.
    pub fn on_stderr(self) -> Self {
        Self {
            stream: Stream::Stderr,
            ..self
        }
    }

    pub fn use_color(&self) -> bool {
        self.color.should_use_color(self.stream)
    }

    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        // Check NO_COLOR environment variable (per no-color.org standard)
        if var("NO_COLOR").is_some() {
            config.color = ColorMode::Never;
        }

        if var("CLICOLOR").as_deref() == Some("0") {
            config.color = ColorMode::Never;
        }

        if var("CLICOLOR_FORCE").as_deref() == Some("1") {
            config.color = ColorMode::Always;
        }

        config
    }

    /// Plain output: no colors
    pub fn plain() -> Self {
        Self::new(ColorMode::Never)
    }

    /// Resolve CLI flag, config file and environment, strongest first.
    pub fn resolve(plain: bool, use_color: Option<bool>) -> Self {
        if plain {
            return Self::plain();
        }
        match use_color {
            Some(true) => Self::new(ColorMode::Always),
            Some(false) => Self::plain(),
            None => Self::from_env(),
        }
    }
}

pub trait OutputFormatter {
    fn error(&self, text: &str) -> String;
    fn header(&self, text: &str) -> String;
    fn bold(&self, text: &str) -> String;
    fn dim(&self, text: &str) -> String;
    fn link(&self, text: &str) -> String;
    fn rating(&self, text: &str, bucket: RatingBucket) -> String;
}

pub struct ColoredFormatter {
    config: FormattingConfig,
}

impl ColoredFormatter {
    pub fn new(config: FormattingConfig) -> Self {
        // Set colored control based on configuration
        colored::control::set_override(config.use_color());
        Self { config }
    }

    fn enabled(&self) -> bool {
        self.config.use_color()
    }
}

impl OutputFormatter for ColoredFormatter {
    fn error(&self, text: &str) -> String {
        if self.enabled() {
            text.red().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn header(&self, text: &str) -> String {
        if self.enabled() {
            text.bold().underline().to_string()
        } else {
            text.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.enabled() {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.enabled() {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    fn link(&self, text: &str) -> String {
        if self.enabled() {
            text.bright_blue().underline().to_string()
        } else {
            text.to_string()
        }
    }

    fn rating(&self, text: &str, bucket: RatingBucket) -> String {
        if self.enabled() {
            text.color(bucket.terminal_color()).bold().to_string()
        } else {
            text.to_string()
        }
    }
}

fn detect_color_support(stream: Stream) -> bool {
    auto_color(stream.is_terminal(), env::var("TERM").ok().as_deref())
}

fn auto_color(is_terminal: bool, term: Option<&str>) -> bool {
    is_terminal && term != Some("dumb")
}
