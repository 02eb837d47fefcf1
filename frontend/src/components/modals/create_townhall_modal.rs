use std::rc::Rc;

use web_sys::{HtmlInputElement, HtmlTextAreaElement, MouseEvent};
use yew::prelude::*;

use crate::hooks::use_voice_input::use_voice_input;
use crate::services::logging::Logger;
use crate::services::transcription::{SimulatedTranscription, TranscriptionProvider};

/// What the creation flow produces.
#[derive(Clone, Copy, PartialEq, Eq)]
enum CreateKind {
    Topic,
    Meeting,
    Both,
}

impl CreateKind {
    fn label(&self) -> &'static str {
        match self {
            CreateKind::Topic => "Topic",
            CreateKind::Meeting => "Meeting",
            CreateKind::Both => "Topic & Meeting",
        }
    }

    fn includes_meeting(&self) -> bool {
        matches!(self, CreateKind::Meeting | CreateKind::Both)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum MeetingFormat {
    Virtual,
    InPerson,
}

#[derive(Properties, PartialEq)]
pub struct CreateTownhallModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

/// Creation dialog for a discussion topic, a meeting, or both at once,
/// with voice input for the description.
#[function_component(CreateTownhallModal)]
pub fn create_townhall_modal(props: &CreateTownhallModalProps) -> Html {
    let kind = use_state(|| CreateKind::Topic);
    let title = use_state(String::new);
    let description = use_state(String::new);
    let meeting_date = use_state(String::new);
    let meeting_time = use_state(String::new);
    let location = use_state(String::new);
    let format = use_state(|| MeetingFormat::Virtual);

    let voice = use_voice_input(Rc::new(SimulatedTranscription::default()) as Rc<dyn TranscriptionProvider>);

    use_effect_with(props.is_open, {
        let kind = kind.clone();
        let title = title.clone();
        let description = description.clone();
        let meeting_date = meeting_date.clone();
        let meeting_time = meeting_time.clone();
        let location = location.clone();
        let format = format.clone();
        let reset_voice = voice.reset.clone();
        move |is_open| {
            if *is_open {
                kind.set(CreateKind::Topic);
                title.set(String::new());
                description.set(String::new());
                meeting_date.set(String::new());
                meeting_time.set(String::new());
                location.set(String::new());
                format.set(MeetingFormat::Virtual);
                reset_voice.emit(());
            }
            || ()
        }
    });

    use_effect_with((voice.transcript.clone(), (*description).clone()), {
        let description = description.clone();
        move |(transcript, current): &(Option<String>, String)| {
            if let Some(text) = transcript {
                if current.is_empty() {
                    description.set(text.clone());
                }
            }
            || ()
        }
    });

    if !props.is_open {
        return html! {};
    }

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };
    let on_modal_click = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let select_kind = |value: CreateKind| {
        let kind = kind.clone();
        Callback::from(move |_: MouseEvent| kind.set(value))
    };
    let select_format = |value: MeetingFormat| {
        let format = format.clone();
        Callback::from(move |_: MouseEvent| format.set(value))
    };

    let on_title_input = {
        let title = title.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            title.set(input.value());
        })
    };
    let on_description_input = {
        let description = description.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            description.set(area.value());
        })
    };
    let on_date_change = {
        let meeting_date = meeting_date.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            meeting_date.set(input.value());
        })
    };
    let on_time_change = {
        let meeting_time = meeting_time.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            meeting_time.set(input.value());
        })
    };
    let on_location_input = {
        let location = location.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            location.set(input.value());
        })
    };

    let toggle_recording = {
        let recording = voice.recording;
        let start = voice.start.clone();
        let stop = voice.stop.clone();
        Callback::from(move |_: MouseEvent| {
            if recording {
                stop.emit(());
            } else {
                start.emit(());
            }
        })
    };

    let effective_description = if description.is_empty() {
        voice.transcript.clone().unwrap_or_default()
    } else {
        (*description).clone()
    };
    let submit_disabled = title.trim().is_empty() || effective_description.trim().is_empty();

    let on_submit = {
        let kind_value = *kind;
        let title = title.clone();
        let description = description.clone();
        let meeting_date = meeting_date.clone();
        let meeting_time = meeting_time.clone();
        let location = location.clone();
        let reset_voice = voice.reset.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            Logger::info_with_component(
                "townhall",
                &format!("{} created", kind_value.label()),
            );
            title.set(String::new());
            description.set(String::new());
            meeting_date.set(String::new());
            meeting_time.set(String::new());
            location.set(String::new());
            reset_voice.emit(());
            on_close.emit(());
        })
    };

    let kind_button = |value: CreateKind, label: &'static str| {
        let class = if *kind == value {
            "btn btn-sm btn-primary"
        } else {
            "btn btn-sm btn-ghost"
        };
        html! {
            <button {class} onclick={select_kind(value)}>{label}</button>
        }
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal create-townhall-modal" onclick={on_modal_click}>
                <h3 class="modal-title">{"Create New"}</h3>

                <div class="kind-toggle">
                    {kind_button(CreateKind::Topic, "Topic")}
                    {kind_button(CreateKind::Meeting, "Meeting")}
                    {kind_button(CreateKind::Both, "Both")}
                </div>

                <div class="form-group">
                    <label for="townhall-title">{"Title"}</label>
                    <input
                        id="townhall-title"
                        type="text"
                        placeholder="Enter topic/meeting title"
                        value={(*title).clone()}
                        oninput={on_title_input}
                    />
                </div>

                <div class="form-group">
                    <label for="townhall-description">{"Description"}</label>
                    <textarea
                        id="townhall-description"
                        placeholder="Describe the topic or meeting agenda"
                        rows="4"
                        value={effective_description.clone()}
                        oninput={on_description_input}
                    />

                    <div class="voice-input">
                        <div class="voice-input-head">
                            <span>{"Voice Input"}</span>
                            {if voice.recording {
                                html! { <span class="badge badge-destructive recording">{"Recording..."}</span> }
                            } else {
                                html! {}
                            }}
                            <button
                                class={if voice.recording { "btn btn-sm btn-destructive" } else { "btn btn-sm btn-outline" }}
                                onclick={toggle_recording}
                            >
                                {if voice.recording { "Stop" } else { "Record" }}
                            </button>
                        </div>
                        {if let Some(notice) = &voice.error {
                            html! { <p class="voice-error">{notice.clone()}</p> }
                        } else {
                            html! {}
                        }}
                        {if let Some(transcript) = &voice.transcript {
                            html! {
                                <div class="transcription">
                                    <p class="transcription-label">{"Transcription:"}</p>
                                    <p>{transcript.clone()}</p>
                                </div>
                            }
                        } else {
                            html! {}
                        }}
                    </div>
                </div>

                {if kind.includes_meeting() {
                    html! {
                        <>
                            <div class="form-row">
                                <div class="form-group">
                                    <label for="meeting-date">{"Meeting Date"}</label>
                                    <input
                                        id="meeting-date"
                                        type="date"
                                        value={(*meeting_date).clone()}
                                        onchange={on_date_change}
                                    />
                                </div>
                                <div class="form-group">
                                    <label for="meeting-time">{"Meeting Time"}</label>
                                    <input
                                        id="meeting-time"
                                        type="time"
                                        value={(*meeting_time).clone()}
                                        onchange={on_time_change}
                                    />
                                </div>
                            </div>

                            <div class="form-group">
                                <label>{"Meeting Type"}</label>
                                <div class="format-toggle">
                                    <button
                                        class={if *format == MeetingFormat::Virtual { "btn btn-sm btn-primary" } else { "btn btn-sm btn-outline" }}
                                        onclick={select_format(MeetingFormat::Virtual)}
                                    >
                                        {"Virtual"}
                                    </button>
                                    <button
                                        class={if *format == MeetingFormat::InPerson { "btn btn-sm btn-primary" } else { "btn btn-sm btn-outline" }}
                                        onclick={select_format(MeetingFormat::InPerson)}
                                    >
                                        {"In-Person"}
                                    </button>
                                </div>
                            </div>

                            {if *format == MeetingFormat::InPerson {
                                html! {
                                    <div class="form-group">
                                        <label for="meeting-location">{"Location"}</label>
                                        <input
                                            id="meeting-location"
                                            type="text"
                                            placeholder="Enter meeting location"
                                            value={(*location).clone()}
                                            oninput={on_location_input}
                                        />
                                    </div>
                                }
                            } else {
                                html! {}
                            }}
                        </>
                    }
                } else {
                    html! {}
                }}

                <div class="preview-card">
                    <h4>{"Preview"}</h4>
                    <p>
                        <strong>{"Title: "}</strong>
                        {if title.is_empty() { "Enter title".to_string() } else { (*title).clone() }}
                    </p>
                    <p>
                        <strong>{"Description: "}</strong>
                        {if effective_description.is_empty() { "Enter description".to_string() } else { effective_description.clone() }}
                    </p>
                    {if kind.includes_meeting() && !meeting_date.is_empty() {
                        let time = if meeting_time.is_empty() {
                            "--:--".to_string()
                        } else {
                            (*meeting_time).clone()
                        };
                        html! { <p>{format!("{} at {}", *meeting_date, time)}</p> }
                    } else {
                        html! {}
                    }}
                    {if kind.includes_meeting()
                        && *format == MeetingFormat::InPerson
                        && !location.is_empty()
                    {
                        html! { <p>{(*location).clone()}</p> }
                    } else {
                        html! {}
                    }}
                </div>

                <div class="modal-buttons">
                    <button class="btn btn-outline" onclick={on_cancel}>
                        {"Cancel"}
                    </button>
                    <button class="btn btn-primary" disabled={submit_disabled} onclick={on_submit}>
                        {format!("Create {}", kind.label())}
                    </button>
                </div>
            </div>
        </div>
    }
}
