//! Simulated Conversion
//!
//! Validates a request, waits out a fixed delay and hands back a
//! placeholder document. No network traffic happens here.

mod format;
mod request;
mod session;

use std::future::Future;
use std::time::Duration;

use crate::config::ApiConfig;
use crate::entitlement::Entitlements;
use crate::error::ConversionError;

pub use format::TargetFormat;
pub use request::{validate_pdf_url, ConversionRequest, ConversionSource, UploadedFile, EXPECTED_EXTENSION};
pub use session::{ConversionSession, ConversionStatus};

/// In-memory download produced by a conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadArtifact {
    pub file_name: String,
    /// MIME type of `body`
    pub mime_type: String,
    /// Format the visitor asked for
    pub format: TargetFormat,
    pub body: String,
}

/// A request that passed every precondition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedConversion {
    pub source_label: String,
    pub file_stem: String,
    pub format_label: String,
    pub format: TargetFormat,
}

#[derive(Debug, Clone)]
pub struct MockConverter {
    config: ApiConfig,
    entitlements: Entitlements,
}

impl MockConverter {
    pub fn new(config: ApiConfig, entitlements: Entitlements) -> Self {
        Self {
            config,
            entitlements,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Check preconditions without doing any work.
    pub fn prepare(&self, request: &ConversionRequest) -> Result<PreparedConversion, ConversionError> {
        if !self.config.has_api_key() {
            return Err(ConversionError::MissingCredential);
        }

        let source = request.source().ok_or(ConversionError::MissingInput)?;

        let format_label = request.target_format.trim();
        if format_label.is_empty() {
            return Err(ConversionError::MissingTargetFormat);
        }

        match source {
            ConversionSource::Url(url) => validate_pdf_url(url)?,
            ConversionSource::File(file) => {
                let limit = self.entitlements.max_upload_bytes();
                if file.size > limit {
                    return Err(ConversionError::FileTooLarge {
                        name: file.name.clone(),
                        size: file.size,
                        limit,
                    });
                }
            }
        }

        Ok(PreparedConversion {
            source_label: source.label().to_string(),
            file_stem: source.file_stem(),
            format_label: format_label.to_string(),
            format: TargetFormat::classify(format_label),
        })
    }

    /// Wait the simulated delay, then build the placeholder.
    ///
    /// `sleep` is supplied by the caller so the browser can use a JS timer.
    pub async fn run<S, F>(&self, prepared: PreparedConversion, sleep: S) -> Result<DownloadArtifact, ConversionError>
    where
        S: FnOnce(Duration) -> F,
        F: Future<Output = ()>,
    {
        log::info!(
            "[Convert] Starting mock conversion of '{}' to {}",
            prepared.source_label,
            prepared.format_label
        );
        sleep(self.config.simulated_delay).await;

        let artifact = build_placeholder(&prepared);
        log::info!(
            "[Convert] Mock conversion produced {} ({})",
            artifact.file_name,
            artifact.mime_type
        );
        Ok(artifact)
    }

    /// `prepare` followed by `run`. Failed preconditions return at once.
    pub async fn convert<S, F>(&self, request: &ConversionRequest, sleep: S) -> Result<DownloadArtifact, ConversionError>
    where
        S: FnOnce(Duration) -> F,
        F: Future<Output = ()>,
    {
        let prepared = self.prepare(request)?;
        self.run(prepared, sleep).await
    }
}

fn build_placeholder(prepared: &PreparedConversion) -> DownloadArtifact {
    let format = prepared.format;
    let source = &prepared.source_label;
    let label = &prepared.format_label;

    // Binary formats cannot be faked; ship a text note instead
    if !format.is_textual() {
        return DownloadArtifact {
            file_name: format!("{}.{}.txt", prepared.file_stem, format.extension()),
            mime_type: TargetFormat::Text.mime_type().to_string(),
            format,
            body: format!(
                "This is a mock {label} file.\n\nIn production this would be an actual {} file.\nOriginal file: {source}\n",
                format.extension().to_ascii_uppercase()
            ),
        };
    }

    let body = if matches!(format, TargetFormat::Html) {
        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n  <title>Converted Document</title>\n  <style>\n    body {{ font-family: Arial, sans-serif; margin: 40px; line-height: 1.6; }}\n  </style>\n</head>\n<body>\n  <h1>Converted Document</h1>\n  <p>This is a placeholder produced by the FileForge demo converter.</p>\n  <p>Original file: {source}</p>\n  <p>Converted to: {label}</p>\n</body>\n</html>\n"
        )
    } else {
        format!(
            "Converted Document\n\nThis is a placeholder produced by the FileForge demo converter.\nOriginal file: {source}\nConverted to: {label}\n"
        )
    };

    DownloadArtifact {
        file_name: format!("{}.{}", prepared.file_stem, format.extension()),
        mime_type: format.mime_type().to_string(),
        format,
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::Tier;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    fn converter() -> MockConverter {
        MockConverter::new(
            ApiConfig::default().with_api_key(Some("test-key")),
            Entitlements::default(),
        )
    }

    fn pdf(name: &str, size: u64) -> UploadedFile {
        UploadedFile {
            name: name.to_string(),
            size,
        }
    }

    #[test]
    fn test_word_conversion_succeeds() {
        let request = ConversionRequest::new("Word").with_file(pdf("report.pdf", 2048));
        let slept = Cell::new(None);
        let artifact = block_on(converter().convert(&request, |d| {
            slept.set(Some(d));
            async {}
        }))
        .unwrap();

        assert_eq!(artifact.format, TargetFormat::Word);
        assert_eq!(artifact.file_name, "report.docx.txt");
        assert_eq!(artifact.mime_type, "text/plain");
        assert!(artifact.body.contains("mock Word file"));
        assert!(artifact.body.contains("DOCX"));
        assert_eq!(slept.get(), Some(Duration::from_millis(2000)));
    }

    #[test]
    fn test_missing_input_never_sleeps() {
        let request = ConversionRequest::new("PDF to Word");
        let slept = Cell::new(false);
        let result = block_on(converter().convert(&request, |_| {
            slept.set(true);
            async {}
        }));
        assert_eq!(result, Err(ConversionError::MissingInput));
        assert!(!slept.get());
    }

    #[test]
    fn test_missing_target_format() {
        let request = ConversionRequest::new("  ").with_file(pdf("a.pdf", 1));
        assert_eq!(
            converter().prepare(&request),
            Err(ConversionError::MissingTargetFormat)
        );
    }

    #[test]
    fn test_missing_credential_checked_first() {
        let converter = MockConverter::new(ApiConfig::default(), Entitlements::default());
        let request = ConversionRequest::new("");
        assert_eq!(
            converter.prepare(&request),
            Err(ConversionError::MissingCredential)
        );
    }

    #[test]
    fn test_invalid_url_rejected() {
        let request = ConversionRequest::new("PDF to Text").with_url("https://example.com/a.docx");
        assert!(matches!(
            converter().prepare(&request),
            Err(ConversionError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_file_size_limit_follows_tier() {
        let big = pdf("big.pdf", 20 * 1024 * 1024);
        let request = ConversionRequest::new("PDF to Word").with_file(big);
        assert!(matches!(
            converter().prepare(&request),
            Err(ConversionError::FileTooLarge { .. })
        ));

        let standard = MockConverter::new(
            ApiConfig::default().with_api_key(Some("k")),
            Entitlements::for_tier(Tier::Standard),
        );
        assert!(standard.prepare(&request).is_ok());
    }

    #[test]
    fn test_html_and_text_placeholders() {
        let request = ConversionRequest::new("PDF to HTML").with_url("https://example.com/guide.pdf");
        let html = block_on(converter().convert(&request, |_| async {})).unwrap();
        assert_eq!(html.file_name, "guide.html");
        assert_eq!(html.mime_type, "text/html");
        assert!(html.body.starts_with("<!DOCTYPE html>"));
        assert!(html.body.contains("https://example.com/guide.pdf"));

        let request = ConversionRequest::new("PDF to Text").with_file(pdf("notes.pdf", 10));
        let text = block_on(converter().convert(&request, |_| async {})).unwrap();
        assert_eq!(text.file_name, "notes.txt");
        assert_eq!(text.mime_type, "text/plain");
        assert!(text.body.contains("Converted to: PDF to Text"));
    }

    #[test]
    fn test_unknown_format_gets_generic_placeholder() {
        let request = ConversionRequest::new("Wordsmith Export").with_file(pdf("a.pdf", 10));
        let artifact = block_on(converter().convert(&request, |_| async {})).unwrap();
        assert_eq!(artifact.format, TargetFormat::Generic);
        assert_eq!(artifact.mime_type, "text/plain");
        assert_eq!(artifact.file_name, "a.pdf.txt");
    }
}
