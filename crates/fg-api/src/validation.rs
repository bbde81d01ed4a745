use crate::error::ApiError;

/// Message returned when the request carries no usable text
pub const NO_TEXT_MESSAGE: &str = "No text provided";

/// Validate the free text submitted for flashcard generation
///
/// Returns the text with surrounding whitespace removed.
///
/// # Examples
/// ```
/// use fg_api::validation::validate_text;
///
/// assert_eq!(validate_text(Some("  Napoleon  "), 100).unwrap(), "Napoleon");
/// assert!(validate_text(Some("   "), 100).is_err());
/// assert!(validate_text(None, 100).is_err());
/// ```
pub fn validate_text(text: Option<&str>, max_length: usize) -> Result<&str, ApiError> {
    let text = text.map(str::trim).unwrap_or_default();

    if text.is_empty() {
        return Err(ApiError::Validation(NO_TEXT_MESSAGE.to_string()));
    }

    if text.chars().count() > max_length {
        return Err(ApiError::Validation(format!(
            "Text is too long: at most {max_length} characters are allowed"
        )));
    }

    Ok(text)
}
