use clap::{Parser, ValueEnum};
use log::LevelFilter;
use stenotype::{Emit, DEFAULT_NAMESPACE};

/// Translate steno notation into Python type hints.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Arguments {
    /// How much to log.
    #[arg(short, long, value_enum, default_value_t = LogLevel::Info)]
    pub loglevel: LogLevel,

    /// The namespace canonical names live in.
    #[arg(short, long, default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,

    /// What to print for each expression.
    #[arg(short, long, value_enum, default_value_t = Emit::Typing)]
    pub emit: Emit,

    /// Print failures with the offending source underlined.
    #[arg(short, long)]
    pub rich: bool,

    /// Expressions in steno notation, each translated on its own.
    pub expressions: Vec<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warning => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}
