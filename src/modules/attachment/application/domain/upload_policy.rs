/// What citizens may attach to an issue report.
const ALLOWED_CONTENT_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/webp",
    "video/mp4",
    "application/pdf",
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Content type '{0}' is not allowed")]
pub struct DisallowedContentType(pub String);

pub fn validate_content_type(content_type: &str) -> Result<(), DisallowedContentType> {
    let normalized = content_type.trim().to_lowercase();

    if ALLOWED_CONTENT_TYPES.contains(&normalized.as_str()) {
        Ok(())
    } else {
        Err(DisallowedContentType(content_type.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_photos_and_pdf() {
        assert!(validate_content_type("image/jpeg").is_ok());
        assert!(validate_content_type("application/pdf").is_ok());
    }

    #[test]
    fn test_normalizes_case_and_whitespace() {
        assert!(validate_content_type(" Image/PNG ").is_ok());
    }

    #[test]
    fn test_rejects_executables() {
        let err = validate_content_type("application/x-msdownload").unwrap_err();
        assert_eq!(err.0, "application/x-msdownload");
    }
}
