//! Output formatting utilities.
//!
//! Provides consistent JSON/text output across commands via the `OutputFormatter` trait.

use serde::Serialize;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text (default).
    #[default]
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    pub fn from_cli(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Trait for types that can format output in multiple formats.
///
/// JSON serialization uses serde, while text formatting is custom.
pub trait OutputFormatter: Serialize {
    fn format_text(&self) -> String;

    /// Render in the specified format.
    fn render(&self, format: &OutputFormat) -> String {
        match format {
            OutputFormat::Text => self.format_text(),
            OutputFormat::Json => serde_json::to_string(self).unwrap_or_default(),
        }
    }

    /// Print to stdout in the specified format.
    fn print(&self, format: &OutputFormat) {
        println!("{}", self.render(format));
    }
}

/// Join an error with its `source()` chain: `outer: inner: root`.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct TestOutput {
        name: String,
        count: usize,
    }

    impl OutputFormatter for TestOutput {
        fn format_text(&self) -> String {
            format!("{}: {}", self.name, self.count)
        }
    }

    #[test]
    fn test_output_format_from_cli() {
        assert_eq!(OutputFormat::from_cli(false), OutputFormat::Text);
        assert_eq!(OutputFormat::from_cli(true), OutputFormat::Json);
    }

    #[test]
    fn test_render() {
        let out = TestOutput {
            name: "files".to_string(),
            count: 3,
        };
        assert_eq!(out.render(&OutputFormat::Text), "files: 3");
        assert_eq!(
            out.render(&OutputFormat::Json),
            r#"{"name":"files","count":3}"#
        );
    }

    #[test]
    fn test_error_chain() {
        #[derive(Debug, thiserror::Error)]
        #[error("outer")]
        struct Outer(#[source] std::io::Error);

        let err = Outer(std::io::Error::other("disk full"));
        assert_eq!(error_chain(&err), "outer: disk full");
    }
}
