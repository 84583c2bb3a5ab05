//! Error types for loading vehicle descriptions

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::vehicle::GeometryError;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug)]
pub enum DescriptionError {
    #[error("failed to read vehicle description: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse vehicle description: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid vehicle: {0}")]
    Geometry(#[from] GeometryError),
}

impl DescriptionError {
    /// Source span of a parse error, if the parser reported one
    pub fn span(&self) -> Option<Span> {
        match self {
            DescriptionError::Parse(err) => err.span(),
            _ => None,
        }
    }

    /// Format the error with source context using ariadne.
    ///
    /// Errors without a source span format as their plain message.
    pub fn format(&self, source: &str, filename: &str) -> String {
        let (DescriptionError::Parse(err), Some(span)) = (self, self.span()) else {
            return self.to_string();
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message("invalid vehicle description")
            .with_label(
                Label::new((filename, span))
                    .with_message(err.message())
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}
