/// Entity-recognition stage errors.
///
/// An unavailable recognizer is not an error — the stage degrades to an
/// empty result. A recognizer that *fails during inference* is fatal for
/// the request (fail-fast, no retries).
#[derive(Debug, thiserror::Error)]
pub enum DetectorError {
    #[error("entity recognizer '{recognizer}' failed: {reason}")]
    RecognizerFailed { recognizer: String, reason: String },
}
