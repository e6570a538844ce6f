//! Delivering the password to its sinks.

use std::io::Write;

use copypasta::ClipboardProvider;
use zeroize::Zeroize;

use super::Password;
use crate::error::{Error, Result};
use crate::settings::OutputConfig;

/// Copy `pass` to `clipboard` and/or print it to `out`, as configured.
///
/// `clipboard` must be `Some` when `config.clipboard` is set. Fails with
/// `NoOutputConfigured` when neither sink is enabled; the password is not
/// written anywhere in that case.
pub fn deliver<C, W>(
    pass: &Password,
    config: &OutputConfig,
    clipboard: Option<&mut C>,
    out: &mut W,
) -> Result<()>
where
    C: ClipboardProvider + ?Sized,
    W: Write,
{
    match (config.clipboard, clipboard) {
        (true, Some(ctx)) => {
            copy_to_clipboard(ctx, pass)?;
            log::info!("copied to clipboard");
        }
        (true, None) => {
            return Err(Error::ClipboardUnavailable("no clipboard context".into()));
        }
        (false, _) => log::info!("NOT copied to clipboard"),
    }

    if config.print {
        let mut line = Vec::with_capacity(pass.expose().len() + 1);
        line.extend_from_slice(pass.expose().as_bytes());
        line.push(b'\n');
        let written = out.write_all(&line).and_then(|_| out.flush());
        line.zeroize();
        written?;
    }

    if !config.has_sink() {
        return Err(Error::NoOutputConfigured);
    }
    Ok(())
}

fn copy_to_clipboard<C: ClipboardProvider + ?Sized>(ctx: &mut C, pass: &Password) -> Result<()> {
    ctx.set_contents(pass.expose().to_owned())
        .map_err(|e| Error::Clipboard(e.to_string()))?;
    // Reading back forces some backends to take ownership of the selection.
    if let Ok(mut retrieved) = ctx.get_contents() {
        retrieved.zeroize();
    }
    Ok(())
}
