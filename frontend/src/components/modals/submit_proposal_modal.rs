use std::rc::Rc;

use shared::Category;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, MouseEvent};
use yew::prelude::*;

use crate::hooks::use_geolocation::use_geolocation;
use crate::hooks::use_voice_input::use_voice_input;
use crate::services::logging::Logger;
use crate::services::transcription::{SimulatedTranscription, TranscriptionProvider};

#[derive(Properties, PartialEq)]
pub struct SubmitProposalModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

/// New-proposal form: voice input feeding the description, the detected
/// location, category select, optional image flag, and anonymous mode.
/// Submission is guarded client-side until the required fields are filled.
#[function_component(SubmitProposalModal)]
pub fn submit_proposal_modal(props: &SubmitProposalModalProps) -> Html {
    let title = use_state(String::new);
    let description = use_state(String::new);
    let category = use_state(|| Option::<Category>::None);
    let custom_location = use_state(String::new);
    let attach_image = use_state(|| false);
    let anonymous = use_state(|| false);

    let voice = use_voice_input(Rc::new(SimulatedTranscription::default()) as Rc<dyn TranscriptionProvider>);
    let location = use_geolocation();

    use_effect_with(props.is_open, {
        let title = title.clone();
        let description = description.clone();
        let category = category.clone();
        let custom_location = custom_location.clone();
        let attach_image = attach_image.clone();
        let anonymous = anonymous.clone();
        let reset_voice = voice.reset.clone();
        move |is_open| {
            if *is_open {
                title.set(String::new());
                description.set(String::new());
                category.set(None);
                custom_location.set(String::new());
                attach_image.set(false);
                anonymous.set(false);
                reset_voice.emit(());
            }
            || ()
        }
    });

    // The transcript fills the description only while it is still empty;
    // typed text wins.
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
    let on_category_change = {
        let category = category.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            category.set(Category::from_label(&select.value()));
        })
    };
    let on_location_input = {
        let custom_location = custom_location.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            custom_location.set(input.value());
        })
    };
    let toggle_image = {
        let attach_image = attach_image.clone();
        Callback::from(move |_: MouseEvent| attach_image.set(!*attach_image))
    };
    let toggle_anonymous = {
        let anonymous = anonymous.clone();
        Callback::from(move |_: Event| anonymous.set(!*anonymous))
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
    let submit_disabled =
        title.trim().is_empty() || effective_description.trim().is_empty() || category.is_none();

    let on_submit = {
        let title = title.clone();
        let description = description.clone();
        let category = category.clone();
        let custom_location = custom_location.clone();
        let attach_image = attach_image.clone();
        let anonymous = anonymous.clone();
        let reset_voice = voice.reset.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            Logger::info_with_component("proposal", "Proposal submitted for community review");
            title.set(String::new());
            description.set(String::new());
            category.set(None);
            custom_location.set(String::new());
            attach_image.set(false);
            anonymous.set(false);
            reset_voice.emit(());
            on_close.emit(());
        })
    };

    let location_label = location.position.map(|fix| fix.label());
    let preview_location = if !custom_location.is_empty() {
        (*custom_location).clone()
    } else {
        location_label
            .clone()
            .unwrap_or_else(|| "Location not specified".to_string())
    };
    let preview_submitter = if *anonymous { "Anonymous Citizen" } else { "Your Name" };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal submit-proposal-modal" onclick={on_modal_click}>
                <h3 class="modal-title">{"Submit New Proposal"}</h3>

                <div class="form-group">
                    <label for="proposal-title">{"Proposal Title"}</label>
                    <input
                        id="proposal-title"
                        type="text"
                        placeholder="Enter a clear, descriptive title"
                        value={(*title).clone()}
                        oninput={on_title_input}
                    />
                </div>

                <div class="form-group">
                    <label for="proposal-category">{"Category"}</label>
                    <select id="proposal-category" onchange={on_category_change}>
                        <option value="" selected={category.is_none()}>{"Select category"}</option>
                        {for Category::ALL.iter().map(|c| html! {
                            <option value={c.label()} selected={*category == Some(*c)}>
                                {c.label()}
                            </option>
                        })}
                    </select>
                </div>

                <div class="form-group">
                    <label for="proposal-description">{"Description"}</label>
                    <textarea
                        id="proposal-description"
                        placeholder="Describe your proposal in detail"
                        rows="5"
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

                <div class="form-group">
                    <label>{"Location"}</label>

                    {if let Some(label) = &location_label {
                        html! {
                            <div class="location-card">
                                <p class="location-detected">{"Current Location Detected"}</p>
                                <p class="location-label">{label.clone()}</p>
                            </div>
                        }
                    } else {
                        html! {}
                    }}

                    <label for="proposal-location" class="sub-label">
                        {"Or specify a different location"}
                    </label>
                    <input
                        id="proposal-location"
                        type="text"
                        placeholder="Enter specific address or location"
                        value={(*custom_location).clone()}
                        oninput={on_location_input}
                    />
                </div>

                <div class="form-group">
                    <label>{"Supporting Image (Optional)"}</label>
                    <button class="image-upload" onclick={toggle_image}>
                        {if *attach_image {
                            html! {
                                <>
                                    <p class="image-attached">{"Image attached"}</p>
                                    <p class="image-hint">{"Click to remove"}</p>
                                </>
                            }
                        } else {
                            html! {
                                <>
                                    <p>{"Upload Image"}</p>
                                    <p class="image-hint">{"Click to attach an image"}</p>
                                </>
                            }
                        }}
                    </button>
                </div>

                <div class="form-group anonymous-toggle">
                    <label for="anonymous-mode">
                        {"Submit Anonymously"}
                        <span class="toggle-hint">
                            {"When enabled, this proposal is shown as submitted by \
                              \"Anonymous Citizen\" instead of your name."}
                        </span>
                    </label>
                    <input
                        id="anonymous-mode"
                        type="checkbox"
                        checked={*anonymous}
                        onchange={toggle_anonymous}
                    />
                </div>

                <div class="preview-card">
                    <h4>{"Proposal Preview"}</h4>
                    <p><strong>{"Title: "}</strong>{if title.is_empty() { "Enter title".to_string() } else { (*title).clone() }}</p>
                    <p><strong>{"Category: "}</strong>{category.map(|c| c.label()).unwrap_or("Select category")}</p>
                    <p><strong>{"Description: "}</strong>{if effective_description.is_empty() { "Enter description".to_string() } else { effective_description.clone() }}</p>
                    <p><strong>{"Location: "}</strong>{preview_location}</p>
                    <p><strong>{"Submitted by: "}</strong>{preview_submitter}</p>
                    {if *attach_image {
                        html! { <p>{"Image attached"}</p> }
                    } else {
                        html! {}
                    }}
                </div>

                <div class="modal-buttons">
                    <button class="btn btn-outline" onclick={on_cancel}>
                        {"Cancel"}
                    </button>
                    <button class="btn btn-primary" disabled={submit_disabled} onclick={on_submit}>
                        {"Submit Proposal"}
                    </button>
                </div>
            </div>
        </div>
    }
}
