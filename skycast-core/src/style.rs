/// ANSI style codes used by the report formatter.
///
/// Built once per invocation and passed by reference. `plain()` carries
/// empty codes, for tests and for callers writing to a non-terminal.
#[derive(Debug, Clone)]
pub struct Styles {
    pub reset: &'static str,
    pub red: &'static str,
    pub green: &'static str,
    pub yellow: &'static str,
    pub magenta: &'static str,
    pub gold: &'static str,
}

impl Styles {
    pub fn ansi() -> Self {
        Self {
            reset: "\x1b[0m",
            red: "\x1b[31m",
            green: "\x1b[1m\x1b[32m",
            yellow: "\x1b[33m",
            magenta: "\x1b[35m",
            gold: "\x1b[1m\x1b[38;5;214m",
        }
    }

    pub fn plain() -> Self {
        Self { reset: "", red: "", green: "", yellow: "", magenta: "", gold: "" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_styles_carry_no_codes() {
        let styles = Styles::plain();
        assert!(styles.reset.is_empty());
        assert!(styles.red.is_empty());
        assert!(styles.gold.is_empty());
    }

    #[test]
    fn ansi_styles_are_escape_sequences() {
        let styles = Styles::ansi();
        assert_eq!(styles.reset, "\x1b[0m");
        assert!(styles.red.starts_with("\x1b["));
    }
}
