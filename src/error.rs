use thiserror::Error;

/// Everything that can abort a single poll cycle.
///
/// None of these are fatal: the scheduler logs them and moves on to the next
/// cycle.
#[derive(Debug, Error)]
pub enum CycleError {
    /// Connection refused, DNS failure or any other request-level failure.
    #[error("collector request failed: {0}")]
    Transport(String),

    /// The client deadline fired before the response was complete.
    #[error("collector request timed out")]
    Timeout,

    /// The response arrived but its body could not be read.
    #[error("failed to read collector response body: {0}")]
    Body(String),

    /// The body was not a JSON array of readings.
    #[error("failed to decode readings: {0}")]
    Decode(String),

    /// A panic caught at the cycle boundary.
    #[error("unexpected fault: {0}")]
    Fault(String),
}

impl From<reqwest::Error> for CycleError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            CycleError::Timeout
        } else {
            CycleError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for CycleError {
    fn from(err: serde_json::Error) -> Self {
        CycleError::Decode(err.to_string())
    }
}
