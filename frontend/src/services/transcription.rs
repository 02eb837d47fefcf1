use gloo::timers::future::TimeoutFuture;
use std::future::Future;
use std::pin::Pin;

pub type TranscriptFuture = Pin<Box<dyn Future<Output = Result<String, String>>>>;

/// Capability seam for speech-to-text. Components only see this trait, so
/// a real recognition backend can replace the simulation without touching
/// any form logic.
pub trait TranscriptionProvider {
    /// Begin capturing audio. `Err` carries the user-facing notice for a
    /// denied microphone permission.
    fn begin_capture(&self) -> Result<(), String>;

    /// Stop capturing and resolve to the transcript.
    fn finish_capture(&self) -> TranscriptFuture;
}

pub const SIMULATED_TRANSCRIPT: &str =
    "This is a simulated transcription of your description. A speech-to-text \
     service would return the recognized text here.";

pub const MICROPHONE_DENIED_NOTICE: &str =
    "Microphone access required. Please allow microphone access to use voice input.";

/// Stand-in provider: capture always succeeds and the transcript is a
/// canned string delivered after a short delay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulatedTranscription {
    pub deny_capture: bool,
}

impl TranscriptionProvider for SimulatedTranscription {
    fn begin_capture(&self) -> Result<(), String> {
        if self.deny_capture {
            Err(MICROPHONE_DENIED_NOTICE.to_string())
        } else {
            Ok(())
        }
    }

    fn finish_capture(&self) -> TranscriptFuture {
        Box::pin(async {
            TimeoutFuture::new(600).await;
            Ok(SIMULATED_TRANSCRIPT.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn denied_capture_surfaces_the_notice() {
        let provider = SimulatedTranscription { deny_capture: true };
        assert_eq!(
            provider.begin_capture().unwrap_err(),
            MICROPHONE_DENIED_NOTICE
        );
        assert!(SimulatedTranscription::default().begin_capture().is_ok());
    }
}
