use super::CliFlags;

pub const HELP: char = 'h';
pub const ALL_PRINTABLES: char = 'a';
pub const SKIP_SHUFFLING: char = 'f';
pub const PRINT: char = 'o';
pub const NO_CLIPBOARD: char = 'n';
pub const VERBOSE: char = 'v';
pub const DEBUG: char = 'd';

/// Parse `args` (program name first).
///
/// A decimal integer in first position is the password length and is
/// consumed. Everything after it is joined into one string and each switch is
/// on if its letter appears anywhere in it. Nothing is rejected: unknown
/// characters are ignored and a malformed length is just another flag string,
/// so `-h`, `--help` and `h` all ask for help.
pub fn parse(args: &[String]) -> CliFlags {
    let mut flags = CliFlags::default();
    let mut rest = args.get(1..).unwrap_or_default();

    if let Some(first) = rest.first()
        && let Some(length) = parse_length(first)
    {
        flags.length = Some(length);
        rest = &rest[1..];
    }

    let soup = rest.concat();
    flags.help = soup.contains(HELP);
    if flags.help {
        return flags;
    }

    flags.all_printables = soup.contains(ALL_PRINTABLES);
    flags.skip_shuffling = soup.contains(SKIP_SHUFFLING);
    flags.print = soup.contains(PRINT);
    flags.no_clipboard = soup.contains(NO_CLIPBOARD);
    flags.verbose = soup.contains(VERBOSE);
    flags.debug = soup.contains(DEBUG);
    flags
}

/// Signed decimal integer, surrounding whitespace and single underscores
/// between digits allowed (`1_000`). Negative lengths clamp to zero.
///
/// Huge lengths are accepted as given and fail at allocation, not clamped.
fn parse_length(arg: &str) -> Option<usize> {
    let trimmed = arg.trim();
    let digits = trimmed.trim_start_matches(['+', '-']);
    if digits.is_empty()
        || trimmed.len() - digits.len() > 1
        || digits.starts_with('_')
        || digits.ends_with('_')
        || digits.contains("__")
    {
        return None;
    }
    let value: i128 = trimmed.replace('_', "").parse().ok()?;
    if value <= 0 {
        return Some(0);
    }
    usize::try_from(value).ok()
}
