use shared::Proposal;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::services::logging::Logger;
use crate::services::share::{
    facebook_url, linkedin_url, mailto_url, share_payload, twitter_url, whatsapp_url, ShareKind,
    SharePayload,
};

#[derive(Properties, PartialEq)]
pub struct ShareProposalModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    pub proposal: Option<Proposal>,
}

fn current_page_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}

fn open_share_window(url: &str) {
    if let Some(window) = web_sys::window() {
        if window
            .open_with_url_and_target_and_features(url, "_blank", "width=600,height=400")
            .is_err()
        {
            Logger::warn_with_component("share", "Share window could not be opened");
        }
    }
}

/// Two-step share flow: pick what to share (the proposal itself or its
/// engagement numbers), then pick the platform.
#[function_component(ShareProposalModal)]
pub fn share_proposal_modal(props: &ShareProposalModalProps) -> Html {
    let share_kind = use_state(|| Option::<ShareKind>::None);

    use_effect_with(props.is_open, {
        let share_kind = share_kind.clone();
        move |is_open| {
            if *is_open {
                share_kind.set(None);
            }
            || ()
        }
    });

    let proposal = match &props.proposal {
        Some(proposal) => proposal,
        None => return html! {},
    };
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

    let choose = |kind: ShareKind| {
        let share_kind = share_kind.clone();
        Callback::from(move |_: MouseEvent| share_kind.set(Some(kind)))
    };
    let change_choice = {
        let share_kind = share_kind.clone();
        Callback::from(move |_: MouseEvent| share_kind.set(None))
    };

    let payload: Option<SharePayload> = (*share_kind).map(|kind| share_payload(proposal, kind));

    let platform_buttons = payload.as_ref().map(|payload| {
        let to_facebook = {
            let text = payload.text.clone();
            Callback::from(move |_: MouseEvent| {
                open_share_window(&facebook_url(&current_page_url(), &text));
            })
        };
        let to_twitter = {
            let text = payload.text.clone();
            let hashtags = payload.hashtags.clone();
            Callback::from(move |_: MouseEvent| {
                open_share_window(&twitter_url(&text, &hashtags));
            })
        };
        let to_linkedin = {
            let title = payload.title.clone();
            let text = payload.text.clone();
            Callback::from(move |_: MouseEvent| {
                open_share_window(&linkedin_url(&current_page_url(), &title, &text));
            })
        };
        let to_whatsapp = {
            let text = payload.text.clone();
            Callback::from(move |_: MouseEvent| {
                open_share_window(&whatsapp_url(&text));
            })
        };
        let via_email = {
            let title = payload.title.clone();
            let text = payload.text.clone();
            Callback::from(move |_: MouseEvent| {
                let url = mailto_url(&title, &text);
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(&url);
                }
            })
        };

        html! {
            <div class="share-platform-grid">
                <button class="btn btn-outline share-platform" onclick={to_facebook}>
                    {"Facebook"}
                </button>
                <button class="btn btn-outline share-platform" onclick={to_twitter}>
                    {"Twitter"}
                </button>
                <button class="btn btn-outline share-platform" onclick={to_linkedin}>
                    {"LinkedIn"}
                </button>
                <button class="btn btn-outline share-platform" onclick={to_whatsapp}>
                    {"WhatsApp"}
                </button>
                <button class="btn btn-outline share-platform span-two" onclick={via_email}>
                    {"Email"}
                </button>
            </div>
        }
    });

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal share-modal" onclick={on_modal_click}>
                <h3 class="modal-title">{"Share Your Proposal"}</h3>

                {match *share_kind {
                    None => html! {
                        <div class="share-choice">
                            <p class="modal-subtitle">{"What would you like to share?"}</p>

                            <button
                                class="btn btn-outline share-choice-btn"
                                onclick={choose(ShareKind::Proposal)}
                            >
                                <span class="share-choice-title">{"Share the Proposal"}</span>
                                <span class="share-choice-detail">
                                    {"Share your proposal details and encourage others to support it"}
                                </span>
                            </button>

                            <button
                                class="btn btn-outline share-choice-btn"
                                onclick={choose(ShareKind::Stats)}
                            >
                                <span class="share-choice-title">{"Share Engagement Stats"}</span>
                                <span class="share-choice-detail">
                                    {"Share the impact and community support your proposal has received"}
                                </span>
                            </button>
                        </div>
                    },
                    Some(kind) => html! {
                        <div class="share-platforms">
                            <div class="share-platforms-head">
                                <p class="modal-subtitle">
                                    {match kind {
                                        ShareKind::Proposal => "Sharing: Proposal Details",
                                        ShareKind::Stats => "Sharing: Engagement Stats",
                                    }}
                                </p>
                                <button class="btn btn-sm btn-ghost" onclick={change_choice}>
                                    {"Change"}
                                </button>
                            </div>
                            {platform_buttons.unwrap_or_default()}
                        </div>
                    },
                }}
            </div>
        </div>
    }
}
