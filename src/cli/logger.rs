//! Progress and debug messages on stdout via `log`.

use std::io::Write;

use env_logger::{Builder, Target};

use crate::settings::Verbosity;

/// Install the logger for `verbosity`. `RUST_LOG` is ignored so pool
/// contents only appear when `d` is given.
pub fn init(verbosity: Verbosity) {
    let _ = Builder::new()
        .filter_level(verbosity.level())
        .target(Target::Stdout)
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .try_init();
}
