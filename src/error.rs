//! Error types for running the demonstration.
//!
//! The lessons themselves are total: every operation accepts any input. What
//! can fail is the environment around them (a closed stdout, a bad config
//! file), and those failures are reported here.

use std::io;
use thiserror::Error;

/// Errors produced while configuring or running the demo.
#[derive(Debug, Error)]
pub enum DemoError {
    /// Writing a lesson's output failed.
    #[error("failed to write output for lesson `{lesson}`")]
    Output {
        lesson: &'static str,
        #[source]
        source: io::Error,
    },

    /// `--lessons` or the config file selected nothing.
    #[error("at least one lesson must be selected")]
    EmptyLessonSelection,

    /// The configured timestamp format does not parse as strftime.
    #[error("invalid timestamp format {format:?}")]
    InvalidTimestampFormat { format: String },

    #[error("unsupported config extension: {0:?}")]
    UnsupportedConfigExtension(String),
}

impl DemoError {
    pub fn output(lesson: &'static str, source: io::Error) -> Self {
        DemoError::Output { lesson, source }
    }
}

pub type DemoResult<T> = Result<T, DemoError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn output_error_keeps_io_source() {
        let source = io::Error::new(io::ErrorKind::BrokenPipe, "closed");
        let err = DemoError::output("person", source);
        assert!(matches!(err, DemoError::Output { lesson: "person", .. }));
        assert_eq!(err.to_string(), "failed to write output for lesson `person`");
        let source = err.source().expect("io source");
        assert_eq!(source.to_string(), "closed");
    }

    #[test]
    fn config_errors_render_their_input() {
        assert_eq!(
            DemoError::EmptyLessonSelection.to_string(),
            "at least one lesson must be selected"
        );
        let err = DemoError::InvalidTimestampFormat {
            format: "%Q".to_string(),
        };
        assert_eq!(err.to_string(), "invalid timestamp format \"%Q\"");
    }
}
