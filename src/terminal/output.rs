//! Box drawing.
//!
//! ┌─ Title ──────────┐
//! │ content          │
//! └──────────────────┘

pub const BOX_WIDTH: usize = 74;

/// Text box rendered line by line, printed in one go.
#[derive(Debug, Default)]
pub struct TextBox {
    lines: Vec<String>,
}

impl TextBox {
    pub fn new() -> Self {
        Self::default()
    }

    /// ┌─ Title ───────────────────────────┐
    pub fn top(mut self, title: &str) -> Self {
        if title.is_empty() {
            self.lines.push(format!("┌{}┐", "─".repeat(BOX_WIDTH - 2)));
        } else {
            let title_part = format!("─ {} ", title);
            let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
            self.lines
                .push(format!("┌{}{}┐", title_part, "─".repeat(remaining)));
        }
        self
    }

    /// │ content                            │
    pub fn line(mut self, content: &str) -> Self {
        let inner_width = BOX_WIDTH - 4;
        let padding = inner_width.saturating_sub(content.chars().count());
        self.lines
            .push(format!("│ {}{} │", content, " ".repeat(padding)));
        self
    }

    /// │          content          │
    pub fn line_center(mut self, content: &str) -> Self {
        let inner_width = BOX_WIDTH - 4;
        let total_padding = inner_width.saturating_sub(content.chars().count());
        let left_pad = total_padding / 2;
        let right_pad = total_padding - left_pad;
        self.lines.push(format!(
            "│ {}{}{} │",
            " ".repeat(left_pad),
            content,
            " ".repeat(right_pad)
        ));
        self
    }

    /// Flag column plus a description that wraps under itself.
    pub fn opt(mut self, flag: &str, desc: &str) -> Self {
        let inner_width = BOX_WIDTH - 4;
        let flag_col = 12;
        let desc_col = inner_width - flag_col;

        let mut wrapped: Vec<String> = Vec::new();
        let mut current = String::new();
        for word in desc.split_whitespace() {
            if current.is_empty() {
                current = word.to_string();
            } else if current.len() + 1 + word.len() <= desc_col {
                current.push(' ');
                current.push_str(word);
            } else {
                wrapped.push(std::mem::take(&mut current));
                current = word.to_string();
            }
        }
        if !current.is_empty() {
            wrapped.push(current);
        }

        for (i, text) in wrapped.iter().enumerate() {
            let head = if i == 0 { flag } else { "" };
            let content = format!("{:<width$}{}", head, text, width = flag_col);
            self = self.line(&content);
        }
        self
    }

    /// └──────────────────────────────────┘
    pub fn bottom(mut self) -> Self {
        self.lines.push(format!("└{}┘", "─".repeat(BOX_WIDTH - 2)));
        self
    }

    pub fn render(&self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}
