//! Validation helpers for DTOs.

use validator::ValidationError;

/// Upper bound on stored logo values. Uploads are data URLs of images capped
/// around 2 MB, which base64 inflates by roughly a third.
const MAX_LOGO_LEN: usize = 2_900_000;

/// Validates a team logo value: either an emoji literal or an embedded
/// `data:` image URL, never empty.
pub fn validate_logo_value(logo: &str) -> Result<(), ValidationError> {
    if logo.is_empty() {
        let mut err = ValidationError::new("logo_empty");
        err.message = Some("Logo must not be empty".into());
        return Err(err);
    }

    if logo.len() > MAX_LOGO_LEN {
        let mut err = ValidationError::new("logo_too_large");
        err.message = Some(format!("Logo exceeds {MAX_LOGO_LEN} characters").into());
        return Err(err);
    }

    Ok(())
}

/// Validates an uploaded logo payload: must be an embedded image data URL.
pub fn validate_image_data_url(value: &str) -> Result<(), ValidationError> {
    validate_logo_value(value)?;

    if !value.starts_with("data:image/") {
        let mut err = ValidationError::new("logo_not_image_data_url");
        err.message = Some("Uploaded logos must be `data:image/...` URLs".into());
        return Err(err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emoji_and_data_urls_are_valid_logos() {
        assert!(validate_logo_value("\u{1f1e6}\u{1f1f7}").is_ok());
        assert!(validate_logo_value("data:image/png;base64,AAAA").is_ok());
    }

    #[test]
    fn empty_and_oversized_logos_are_rejected() {
        assert!(validate_logo_value("").is_err());
        let oversized = "x".repeat(MAX_LOGO_LEN + 1);
        assert!(validate_logo_value(&oversized).is_err());
    }

    #[test]
    fn uploads_must_be_image_data_urls() {
        assert!(validate_image_data_url("data:image/png;base64,AAAA").is_ok());
        assert!(validate_image_data_url("data:text/plain;base64,AAAA").is_err());
        assert!(validate_image_data_url("\u{1f1e6}\u{1f1f7}").is_err());
        assert!(validate_image_data_url("").is_err());
    }
}
