use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum PDFError {
    #[error(transparent)]
    /// An I/O error occurred while writing the document out
    Io(#[from] std::io::Error),

    #[error("the {font} font cannot encode {ch:?}")]
    /// The font metrics provider has no glyph for a character. Layout can't
    /// continue without a width, so this is fatal for the composition
    Unencodable { ch: char, font: &'static str },

    #[error("invalid export data: {0}")]
    /// The export data could not be parsed from JSON
    Json(#[from] serde_json::Error),

    #[error("page is missing from the document")]
    /// A page referenced by the document's page order is not in the arena
    PageMissing,
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, PDFError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unencodable_message_names_the_character() {
        let err = PDFError::Unencodable {
            ch: '😀',
            font: "Helvetica",
        };
        assert_eq!(
            err.to_string(),
            "the Helvetica font cannot encode '😀'"
        );
    }
}
