/// Single-letter switches found anywhere in the arguments, plus the optional
/// leading length.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CliFlags {
    pub length: Option<usize>,
    pub help: bool,
    pub all_printables: bool,
    pub skip_shuffling: bool,
    pub print: bool,
    pub no_clipboard: bool,
    pub verbose: bool,
    pub debug: bool,
}

impl CliFlags {
    /// One `name=value` per line, for debug output.
    pub fn dump(&self) -> String {
        format!(
            "Flags:\nallprintables={}\nskipshuffling={}\nverboseprints={}\ndebuggingmode={}\nprintpassword={}\nnoclipboardcp={}",
            self.all_printables,
            self.skip_shuffling,
            self.verbose,
            self.debug,
            self.print,
            self.no_clipboard,
        )
    }
}
