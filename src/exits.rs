//! Process exit codes and startup hardening.

use std::process::ExitCode;

pub const SUCCESS: u8 = 0;
pub const FAILURE: u8 = 1;
/// Secure random source or clipboard missing.
pub const MISSING_DEPENDENCY: u8 = 2;
/// Password generated but neither copied nor printed.
pub const NO_OUTPUT: u8 = 3;

pub fn code(code: u8) -> ExitCode {
    ExitCode::from(code)
}

/// Keep the password out of core dumps and ptrace attach.
#[cfg(target_os = "linux")]
pub fn harden_process() {
    let rc = unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
    if rc != 0 {
        log::debug!("prctl(PR_SET_DUMPABLE) failed");
    }
}

#[cfg(not(target_os = "linux"))]
pub fn harden_process() {}
