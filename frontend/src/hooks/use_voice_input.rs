use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::logging::Logger;
use crate::services::transcription::TranscriptionProvider;

/// State and controls for one voice-capture session.
#[derive(Clone, PartialEq)]
pub struct VoiceInputHandle {
    pub recording: bool,
    pub transcript: Option<String>,
    /// One-shot notice when capture could not start. There is no retry
    /// flow; the user can press record again.
    pub error: Option<String>,
    pub start: Callback<()>,
    pub stop: Callback<()>,
    pub reset: Callback<()>,
}

/// Start/stop recording against a pluggable transcription provider. The
/// transcript arrives asynchronously after stop.
#[hook]
pub fn use_voice_input(provider: Rc<dyn TranscriptionProvider>) -> VoiceInputHandle {
    let recording = use_state(|| false);
    let transcript = use_state(|| Option::<String>::None);
    let error = use_state(|| Option::<String>::None);

    let start = {
        let provider = provider.clone();
        let recording = recording.clone();
        let error = error.clone();

        Callback::from(move |_| {
            match provider.begin_capture() {
                Ok(()) => {
                    error.set(None);
                    recording.set(true);
                }
                Err(notice) => {
                    Logger::warn_with_component("voice-input", &notice);
                    error.set(Some(notice));
                }
            }
        })
    };

    let stop = {
        let provider = provider.clone();
        let recording = recording.clone();
        let transcript = transcript.clone();
        let error = error.clone();

        Callback::from(move |_| {
            if !*recording {
                return;
            }
            recording.set(false);

            let transcript = transcript.clone();
            let error = error.clone();
            let pending = provider.finish_capture();
            spawn_local(async move {
                match pending.await {
                    Ok(text) => transcript.set(Some(text)),
                    Err(notice) => {
                        Logger::error_with_component("voice-input", &notice);
                        error.set(Some(notice));
                    }
                }
            });
        })
    };

    let reset = {
        let recording = recording.clone();
        let transcript = transcript.clone();
        let error = error.clone();

        Callback::from(move |_| {
            recording.set(false);
            transcript.set(None);
            error.set(None);
        })
    };

    VoiceInputHandle {
        recording: *recording,
        transcript: (*transcript).clone(),
        error: (*error).clone(),
        start,
        stop,
        reset,
    }
}
