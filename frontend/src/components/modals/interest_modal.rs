use shared::{fixtures, InterestSelection};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::services::storage;

#[derive(Properties, PartialEq)]
pub struct InterestModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

/// Interest picker. Opens with the saved selection (or the defaults when
/// nothing is stored) and persists the toggled set on save.
#[function_component(InterestModal)]
pub fn interest_modal(props: &InterestModalProps) -> Html {
    let selection = use_state(InterestSelection::with_defaults);

    use_effect_with(props.is_open, {
        let selection = selection.clone();
        move |is_open| {
            if *is_open {
                selection.set(storage::load_interests());
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
    let on_save = {
        let selection = selection.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            // A failed write is logged by the storage service; the modal
            // still closes, matching the no-retry error model.
            let _ = storage::save_interests(&selection);
            on_close.emit(());
        })
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal interest-modal" onclick={on_modal_click}>
                <h3 class="modal-title">{"Select Your Interests"}</h3>

                <p class="modal-subtitle">
                    {"Choose topics you care about to get personalized content and notifications."}
                </p>

                <div class="interest-tags">
                    {for fixtures::interest_topics().iter().map(|topic| {
                        let topic = *topic;
                        let selection_handle = selection.clone();
                        let class = if selection.is_selected(topic) {
                            "badge badge-primary interest-tag"
                        } else {
                            "badge badge-outline interest-tag"
                        };
                        let onclick = Callback::from(move |_: MouseEvent| {
                            let mut next = (*selection_handle).clone();
                            next.toggle(topic);
                            selection_handle.set(next);
                        });
                        html! { <button {class} {onclick}>{topic}</button> }
                    })}
                </div>

                <div class="modal-buttons">
                    <button class="btn btn-outline" onclick={on_cancel}>
                        {"Cancel"}
                    </button>
                    <button class="btn btn-primary" onclick={on_save}>
                        {format!("Save Interests ({})", selection.len())}
                    </button>
                </div>
            </div>
        </div>
    }
}
