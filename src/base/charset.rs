#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    pub dash: char,
    /// Draws the rule above a table footer.
    pub rule: char,
    pub tree_sideways_t: &'static str,
    pub tree_corner: &'static str,
    pub tree_pipe_gap: &'static str,
    pub tree_space: &'static str,
    pub color: bool,
}

impl Default for Charset {
    /// Only ASCII characters. No color.
    fn default() -> Self {
        Self {
            dash: '-',
            rule: '=',
            tree_sideways_t: "|-- ",
            tree_corner: "`-- ",
            tree_pipe_gap: "|   ",
            tree_space: "    ",
            color: false,
        }
    }
}

impl Charset {
    pub fn with_unicode(self) -> Self {
        Self {
            dash: '\u{2500}',
            rule: '\u{2550}',
            tree_sideways_t: "\u{251c}\u{2500}\u{2500} ",
            tree_corner: "\u{2514}\u{2500}\u{2500} ",
            tree_pipe_gap: "\u{2502}   ",
            tree_space: "    ",
            ..self
        }
    }

    pub fn with_color(self) -> Self {
        Self {
            color: true,
            ..self
        }
    }

    /// Paints `s` red if color is enabled and `negative` is set.
    pub fn paint_amount(&self, s: String, negative: bool) -> String {
        if self.color && negative {
            colored::Colorize::red(s.as_str()).to_string()
        } else {
            s
        }
    }

    /// Paints a section heading if color is enabled.
    pub fn paint_heading(&self, s: &str) -> String {
        if self.color {
            colored::Colorize::bold(s).to_string()
        } else {
            s.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_without_color() {
        let charset = Charset::default().with_unicode();
        assert_eq!(charset.paint_amount("(1.00)".into(), true), "(1.00)");
        assert_eq!(charset.paint_heading("Net"), "Net");
    }

    #[test]
    fn test_paint_with_color() {
        colored::control::set_override(true);
        let charset = Charset::default().with_color();
        assert_ne!(charset.paint_amount("(1.00)".into(), true), "(1.00)");
        assert_eq!(charset.paint_amount("1.00".into(), false), "1.00");
        assert!(charset.paint_heading("Net").contains("Net"));
    }
}
