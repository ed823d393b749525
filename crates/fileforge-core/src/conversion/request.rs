//! Conversion Requests
//!
//! What the visitor submitted: one file or one URL, plus a target format.

use percent_encoding::percent_decode_str;

use crate::error::ConversionError;

/// Extension a URL must point at
pub const EXPECTED_EXTENSION: &str = ".pdf";

const FALLBACK_STEM: &str = "converted-document";

/// Metadata of a file picked in the browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub size: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionSource {
    File(UploadedFile),
    Url(String),
}

impl ConversionSource {
    /// Name shown in logs and placeholder text
    pub fn label(&self) -> &str {
        match self {
            ConversionSource::File(file) => &file.name,
            ConversionSource::Url(url) => url,
        }
    }

    /// Base name for the download, e.g. "report" for "report.pdf"
    pub fn file_stem(&self) -> String {
        let name = match self {
            ConversionSource::File(file) => file.name.clone(),
            ConversionSource::Url(url) => url_file_name(url),
        };
        let stem = name.split('.').next().unwrap_or("").trim();
        if stem.is_empty() {
            FALLBACK_STEM.to_string()
        } else {
            stem.to_string()
        }
    }
}

/// Form state for one conversion. Holding a file and a URL at once is not
/// representable; setting one replaces the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionRequest {
    source: Option<ConversionSource>,
    pub target_format: String,
}

impl ConversionRequest {
    pub fn new(target_format: impl Into<String>) -> Self {
        Self {
            source: None,
            target_format: target_format.into(),
        }
    }

    pub fn with_file(mut self, file: UploadedFile) -> Self {
        self.set_file(file);
        self
    }

    pub fn with_url(mut self, url: &str) -> Self {
        self.set_url(url);
        self
    }

    pub fn set_file(&mut self, file: UploadedFile) {
        self.source = Some(ConversionSource::File(file));
    }

    /// A blank URL clears the source.
    pub fn set_url(&mut self, url: &str) {
        let url = url.trim();
        self.source = if url.is_empty() {
            None
        } else {
            Some(ConversionSource::Url(url.to_string()))
        };
    }

    pub fn clear_source(&mut self) {
        self.source = None;
    }

    pub fn source(&self) -> Option<&ConversionSource> {
        self.source.as_ref()
    }

    pub fn file(&self) -> Option<&UploadedFile> {
        match &self.source {
            Some(ConversionSource::File(file)) => Some(file),
            _ => None,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match &self.source {
            Some(ConversionSource::Url(url)) => Some(url),
            _ => None,
        }
    }
}

/// Accept only http(s) links whose path ends in `.pdf`.
pub fn validate_pdf_url(url: &str) -> Result<(), ConversionError> {
    let invalid = || ConversionError::InvalidUrl {
        url: url.to_string(),
        expected: EXPECTED_EXTENSION,
    };

    let lower = url.to_ascii_lowercase();
    let rest = lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"))
        .ok_or_else(invalid)?;

    if rest.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    let without_query = rest.split(['?', '#']).next().unwrap_or("");
    let (host, path) = without_query.split_once('/').ok_or_else(invalid)?;
    if host.is_empty() || !path.ends_with(EXPECTED_EXTENSION) {
        return Err(invalid());
    }
    Ok(())
}

/// Last path segment of a URL, percent-decoded
fn url_file_name(url: &str) -> String {
    let path = url.split(['?', '#']).next().unwrap_or("");
    let segment = path.rsplit('/').next().unwrap_or("");
    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> UploadedFile {
        UploadedFile {
            name: name.to_string(),
            size: 1024,
        }
    }

    #[test]
    fn test_setting_url_clears_file() {
        let mut request = ConversionRequest::new("PDF to Word").with_file(file("a.pdf"));
        assert!(request.file().is_some());

        request.set_url("https://example.com/a.pdf");
        assert!(request.file().is_none());
        assert_eq!(request.url(), Some("https://example.com/a.pdf"));

        request.set_file(file("b.pdf"));
        assert!(request.url().is_none());
        assert_eq!(request.file().map(|f| f.name.as_str()), Some("b.pdf"));
    }

    #[test]
    fn test_blank_url_clears_source() {
        let mut request = ConversionRequest::new("PDF to Word").with_file(file("a.pdf"));
        request.set_url("   ");
        assert!(request.source().is_none());
    }

    #[test]
    fn test_valid_urls() {
        assert!(validate_pdf_url("https://example.com/docs/report.pdf").is_ok());
        assert!(validate_pdf_url("http://example.com/REPORT.PDF?dl=1").is_ok());
    }

    #[test]
    fn test_invalid_urls() {
        for url in [
            "example.com/report.pdf",
            "ftp://example.com/report.pdf",
            "https:///report.pdf",
            "https://example.com",
            "https://example.com/report.docx",
            "https://exa mple.com/report.pdf",
        ] {
            assert!(
                matches!(validate_pdf_url(url), Err(ConversionError::InvalidUrl { .. })),
                "{url} should be rejected"
            );
        }
    }

    #[test]
    fn test_file_stems() {
        assert_eq!(ConversionSource::File(file("report.final.pdf")).file_stem(), "report");
        assert_eq!(ConversionSource::File(file(".pdf")).file_stem(), "converted-document");
        assert_eq!(
            ConversionSource::Url("https://example.com/files/Annual%20Report.pdf?x=1".into())
                .file_stem(),
            "Annual Report"
        );
    }
}
