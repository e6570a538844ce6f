//! CLI context - bundles parsed flags and the settings derived from them.

use std::io;

use copypasta::ClipboardContext;

use super::{CliFlags, help, logger, prompts};
use crate::entropy;
use crate::error::{Error, Result};
use crate::exits;
use crate::pass::{self, charset};
use crate::settings::{Settings, Verbosity};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Help shown, nothing generated.
    Help,
    Delivered,
}

/// Application context for one invocation.
pub struct Context {
    pub flags: CliFlags,
    pub settings: Settings,
}

impl Context {
    pub fn new(args: &[String]) -> Self {
        let flags = super::parse(args);
        let settings = Settings::from(&flags);
        Self { flags, settings }
    }

    /// parse → probe → build pool → generate → deliver.
    pub fn run(&self) -> Result<Outcome> {
        if self.flags.help {
            help::print_help();
            return Ok(Outcome::Help);
        }

        logger::init(self.settings.verbosity);
        exits::harden_process();
        self.report_configuration();

        let mut rng = entropy::probe()?;
        let mut clipboard = if self.settings.output.clipboard {
            Some(open_clipboard()?)
        } else {
            None
        };

        let generation = &self.settings.generation;
        let mut pool = charset::build(generation.pool);
        log::info!("using {} for pool (alphabet).", generation.pool.describe());
        log::debug!("pool defined  > [ {} ]", pool);

        let pass = pass::generate(&mut pool, generation.length, generation.shuffle, &mut rng);
        log::info!("password generated");

        let delivered = pass::output::deliver(
            &pass,
            &self.settings.output,
            clipboard.as_mut(),
            &mut io::stdout(),
        );
        drop(pass);
        delivered?;

        log::debug!("Program finished");
        Ok(Outcome::Delivered)
    }

    fn report_configuration(&self) {
        if self.settings.verbosity == Verbosity::Debug {
            prompts::debug_mode_warning();
            log::debug!("{}", self.flags.dump());
        }
        log::info!(
            "password length set to {}",
            self.settings.generation.length
        );
    }
}

fn open_clipboard() -> Result<ClipboardContext> {
    ClipboardContext::new().map_err(|e| Error::ClipboardUnavailable(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::PoolMode;

    fn context(list: &[&str]) -> Context {
        let args: Vec<String> = std::iter::once("cspgen")
            .chain(list.iter().copied())
            .map(String::from)
            .collect();
        Context::new(&args)
    }

    #[test]
    fn help_skips_generation() {
        let ctx = context(&["--help"]);
        assert_eq!(ctx.run().unwrap(), Outcome::Help);
    }

    #[test]
    fn settings_follow_flags() {
        let ctx = context(&["48", "af"]);
        assert_eq!(ctx.settings.generation.length, 48);
        assert_eq!(ctx.settings.generation.pool, PoolMode::Extended);
        assert!(!ctx.settings.generation.shuffle);
        assert!(ctx.settings.output.clipboard);
    }

    #[test]
    fn no_sink_settings() {
        let ctx = context(&["-n"]);
        assert!(!ctx.settings.output.has_sink());
    }
}
