//! Conversion Session
//!
//! Status of the conversion form across attempts:
//! `Idle → Converting → {Succeeded, Failed} → Idle`.

use super::{ConversionRequest, DownloadArtifact, MockConverter, PreparedConversion};
use crate::error::ConversionError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConversionStatus {
    #[default]
    Idle,
    Converting,
    Succeeded(DownloadArtifact),
    Failed(ConversionError),
    /// No credential configured; shown as "service unavailable"
    ApiKeyMissing,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionSession {
    status: ConversionStatus,
    attempts: u32,
}

impl ConversionSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &ConversionStatus {
        &self.status
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// The submit control stays disabled while this is true.
    pub fn is_busy(&self) -> bool {
        matches!(self.status, ConversionStatus::Converting)
    }

    pub fn artifact(&self) -> Option<&DownloadArtifact> {
        match &self.status {
            ConversionStatus::Succeeded(artifact) => Some(artifact),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ConversionError> {
        match &self.status {
            ConversionStatus::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Begin an attempt.
    ///
    /// Returns the prepared work when the session moved to `Converting`.
    /// A failed precondition moves straight to `Failed` (or `ApiKeyMissing`)
    /// and returns `None`, as does a call made while already converting.
    pub fn start(&mut self, converter: &MockConverter, request: &ConversionRequest) -> Option<PreparedConversion> {
        if self.is_busy() {
            log::warn!("[Convert] Ignoring submit while a conversion is running");
            return None;
        }

        match converter.prepare(request) {
            Ok(prepared) => {
                self.attempts += 1;
                self.status = ConversionStatus::Converting;
                Some(prepared)
            }
            Err(err) => {
                log::warn!("[Convert] Rejected request: {}", err);
                self.status = if err.is_credential_error() {
                    ConversionStatus::ApiKeyMissing
                } else {
                    ConversionStatus::Failed(err)
                };
                None
            }
        }
    }

    /// Record the outcome of the running attempt.
    pub fn finish(&mut self, outcome: Result<DownloadArtifact, ConversionError>) {
        if !self.is_busy() {
            log::warn!("[Convert] Outcome arrived with no conversion running");
            return;
        }
        self.status = match outcome {
            Ok(artifact) => ConversionStatus::Succeeded(artifact),
            Err(err) => {
                log::error!("[Convert] Conversion failed: {}", err);
                ConversionStatus::Failed(err)
            }
        };
    }

    /// Dismiss the notice or drop the finished download.
    pub fn reset(&mut self) {
        if !self.is_busy() {
            self.status = ConversionStatus::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::conversion::{TargetFormat, UploadedFile};
    use crate::entitlement::Entitlements;
    use futures::executor::block_on;

    fn converter(key: Option<&str>) -> MockConverter {
        MockConverter::new(ApiConfig::default().with_api_key(key), Entitlements::default())
    }

    fn word_request() -> ConversionRequest {
        ConversionRequest::new("PDF to Word").with_file(UploadedFile {
            name: "cv.pdf".to_string(),
            size: 500,
        })
    }

    #[test]
    fn test_missing_input_fails_without_converting() {
        let mut session = ConversionSession::new();
        let prepared = session.start(&converter(Some("k")), &ConversionRequest::new("PDF to Word"));
        assert!(prepared.is_none());
        assert_eq!(
            session.status(),
            &ConversionStatus::Failed(ConversionError::MissingInput)
        );
        assert_eq!(session.attempts(), 0);
    }

    #[test]
    fn test_full_cycle() {
        let converter = converter(Some("k"));
        let mut session = ConversionSession::new();

        let prepared = session.start(&converter, &word_request()).unwrap();
        assert!(session.is_busy());

        // second submit while busy is refused
        assert!(session.start(&converter, &word_request()).is_none());
        assert_eq!(session.attempts(), 1);

        let outcome = block_on(converter.run(prepared, |_| async {}));
        session.finish(outcome);
        let artifact = session.artifact().unwrap();
        assert_eq!(artifact.format, TargetFormat::Word);

        // restart from Succeeded goes back to Converting
        assert!(session.start(&converter, &word_request()).is_some());
        assert_eq!(session.status(), &ConversionStatus::Converting);
        assert_eq!(session.attempts(), 2);
    }

    #[test]
    fn test_retry_after_failure_starts_converting() {
        let converter = converter(Some("k"));
        let mut session = ConversionSession::new();

        assert!(session.start(&converter, &ConversionRequest::new("PDF to Word")).is_none());
        assert!(session.error().is_some());
        assert_eq!(session.attempts(), 0);

        assert!(session.start(&converter, &word_request()).is_some());
        assert_eq!(session.status(), &ConversionStatus::Converting);
        assert_eq!(session.attempts(), 1);
    }

    #[test]
    fn test_missing_key_is_distinct_state() {
        let mut session = ConversionSession::new();
        assert!(session.start(&converter(None), &word_request()).is_none());
        assert_eq!(session.status(), &ConversionStatus::ApiKeyMissing);
        assert!(session.error().is_none());
    }

    #[test]
    fn test_finish_and_reset_outside_attempt() {
        let mut session = ConversionSession::new();
        session.finish(Err(ConversionError::Other("late".to_string())));
        assert_eq!(session.status(), &ConversionStatus::Idle);

        session.start(&converter(Some("k")), &ConversionRequest::new(""));
        assert!(session.error().is_some());
        session.reset();
        assert_eq!(session.status(), &ConversionStatus::Idle);
    }

    #[test]
    fn test_reset_does_not_interrupt_running_attempt() {
        let mut session = ConversionSession::new();
        session.start(&converter(Some("k")), &word_request());
        session.reset();
        assert!(session.is_busy());
    }
}
