use crate::terminal::TextBox;

pub fn help_text() -> String {
    TextBox::new()
        .top("cspgen")
        .line_center("Cryptographically secure password generator")
        .line("")
        .line("Draws every character from the operating system's secure random")
        .line("source. By default the password goes to the clipboard only.")
        .line("")
        .line("USAGE:")
        .line("  cspgen [password-length] [parameters]")
        .line("")
        .line("PASSWORD LENGTH:")
        .line("  Decimal number in first position, default 16.")
        .line("")
        .line("PARAMETERS (single letters, any order, unknown characters ignored):")
        .opt("  h", "show this help instead of generating a password")
        .opt("  a", "use special characters and space as well as letters and digits")
        .opt(
            "  f",
            "skip the pool shuffle before each character (faster, equally random)",
        )
        .opt("  o", "print the password to stdout")
        .opt("  n", "do not copy the password to the clipboard; combine with o")
        .opt("  v", "verbose: report each phase of the run")
        .opt(
            "  d",
            "debug: also print flags and every pool permutation. Unsafe, never use for real passwords",
        )
        .line("")
        .line("  Letters are matched anywhere in the arguments, so h, -h and --help")
        .line("  are the same.")
        .line("")
        .line("EXAMPLES:")
        .opt("  -h", "show this help")
        .opt("  drwho", "show this help")
        .opt("  (none)", "16 characters to the clipboard")
        .opt("  a", "16 characters with special characters to the clipboard")
        .opt("  64 a", "64 characters with special characters to the clipboard")
        .opt("  f", "16 characters to the clipboard, no pool shuffling")
        .opt("  no", "16 characters to stdout, clipboard untouched")
        .opt("  --debug", "16 characters to the clipboard with debug output")
        .opt("  -n", "password is generated and dumped, exit code 3")
        .line("")
        .line("EXIT CODES:")
        .opt("  0", "success, or help shown")
        .opt("  2", "secure random source or clipboard unavailable")
        .opt("  3", "no output selected")
        .bottom()
        .render()
}

pub fn print_help() {
    print!("{}", help_text());
}

/// Shown when a capability the generator needs is missing.
pub fn requirements_text() -> String {
    TextBox::new()
        .top("Requirements")
        .line("This program needs a secure random source from the operating")
        .line("system and, unless run with n, access to the system clipboard")
        .line("(an X11 or Wayland session on Linux).")
        .line("")
        .line("Use `cspgen no` to print the password instead of copying it.")
        .bottom()
        .render()
}
