//! Immutable run configuration, built once from the parsed command line.

use crate::cli::CliFlags;
use crate::pass::PoolMode;

pub const DEFAULT_LENGTH: usize = 16;

/// What the generator needs to produce one password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    pub length: usize,
    pub pool: PoolMode,
    /// Reshuffle the whole pool before every drawn character.
    ///
    /// This does not make the password stronger than drawing uniformly from
    /// an unshuffled pool. It is the documented default and is kept as is.
    pub shuffle: bool,
}

/// Where the finished password goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub clipboard: bool,
    pub print: bool,
}

impl OutputConfig {
    pub fn has_sink(&self) -> bool {
        self.clipboard || self.print
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Verbose,
    /// Prints pool contents. Not for production use.
    Debug,
}

impl Verbosity {
    pub fn level(self) -> log::LevelFilter {
        match self {
            Verbosity::Quiet => log::LevelFilter::Off,
            Verbosity::Verbose => log::LevelFilter::Info,
            Verbosity::Debug => log::LevelFilter::Debug,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub generation: GenerationConfig,
    pub output: OutputConfig,
    pub verbosity: Verbosity,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            generation: GenerationConfig {
                length: DEFAULT_LENGTH,
                pool: PoolMode::Alphanumeric,
                shuffle: true,
            },
            output: OutputConfig {
                clipboard: true,
                print: false,
            },
            verbosity: Verbosity::Quiet,
        }
    }
}

impl From<&CliFlags> for Settings {
    fn from(flags: &CliFlags) -> Self {
        let verbosity = if flags.debug {
            Verbosity::Debug
        } else if flags.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Quiet
        };

        Self {
            generation: GenerationConfig {
                length: flags.length.unwrap_or(DEFAULT_LENGTH),
                pool: if flags.all_printables {
                    PoolMode::Extended
                } else {
                    PoolMode::Alphanumeric
                },
                shuffle: !flags.skip_shuffling,
            },
            output: OutputConfig {
                clipboard: !flags.no_clipboard,
                print: flags.print,
            },
            verbosity,
        }
    }
}
