use shared::{fixtures, Proposal};
use web_sys::{HtmlTextAreaElement, MouseEvent};
use yew::prelude::*;

use crate::components::tabs::proposals::status_badge_class;
use crate::services::logging::Logger;

#[derive(Clone, Copy, PartialEq, Eq)]
enum VoteDirection {
    Up,
    Down,
}

#[derive(Properties, PartialEq)]
pub struct ProposalDetailModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    pub proposal: Option<Proposal>,
}

/// Full proposal view: voting, administrative status, the area sentiment
/// legend, and the official and citizen comment threads.
#[function_component(ProposalDetailModal)]
pub fn proposal_detail_modal(props: &ProposalDetailModalProps) -> Html {
    let new_comment = use_state(String::new);
    let vote = use_state(|| Option::<VoteDirection>::None);

    use_effect_with(props.is_open, {
        let new_comment = new_comment.clone();
        let vote = vote.clone();
        move |is_open| {
            if *is_open {
                new_comment.set(String::new());
                vote.set(None);
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

    let on_upvote = {
        let vote = vote.clone();
        Callback::from(move |_: MouseEvent| {
            if *vote != Some(VoteDirection::Up) {
                vote.set(Some(VoteDirection::Up));
            }
        })
    };
    let on_downvote = {
        let vote = vote.clone();
        Callback::from(move |_: MouseEvent| {
            if *vote != Some(VoteDirection::Down) {
                vote.set(Some(VoteDirection::Down));
            }
        })
    };

    let on_comment_input = {
        let new_comment = new_comment.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            new_comment.set(area.value());
        })
    };
    let post_comment = {
        let new_comment = new_comment.clone();
        Callback::from(move |_: MouseEvent| {
            if !new_comment.trim().is_empty() {
                Logger::info_with_component("proposal", "Comment submitted");
                new_comment.set(String::new());
            }
        })
    };

    let displayed_upvotes = if *vote == Some(VoteDirection::Up) {
        proposal.upvotes + 1
    } else {
        proposal.upvotes
    };
    let displayed_downvotes = if *vote == Some(VoteDirection::Down) {
        proposal.downvotes + 1
    } else {
        proposal.downvotes
    };
    let upvote_class = if *vote == Some(VoteDirection::Up) {
        "btn btn-sm btn-primary"
    } else {
        "btn btn-sm btn-outline"
    };
    let downvote_class = if *vote == Some(VoteDirection::Down) {
        "btn btn-sm btn-destructive"
    } else {
        "btn btn-sm btn-outline"
    };
    let comment_empty = new_comment.trim().is_empty();

    let official_comments = fixtures::proposal_official_comments();
    let citizen_comments = fixtures::proposal_citizen_comments();

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal proposal-modal" onclick={on_modal_click}>
                <h3 class="modal-title">{proposal.title}</h3>

                <div class="proposal-modal-layout">
                    <div class="proposal-modal-left">
                        <div class="proposal-summary">
                            <div class="proposal-summary-tags">
                                <span class={status_badge_class(proposal.status)}>
                                    {proposal.status.label()}
                                </span>
                                <span class="badge badge-outline">{proposal.category.label()}</span>
                            </div>
                            <p class="proposal-location">{proposal.location}</p>
                            <p class="proposal-body">{proposal.description}</p>
                            <p class="proposal-byline">
                                {format!(
                                    "Submitted by {} on {}",
                                    proposal.submitted_by, proposal.submitted_date
                                )}
                            </p>

                            <div class="vote-buttons">
                                <button class={upvote_class} onclick={on_upvote}>
                                    {format!("👍 {}", displayed_upvotes)}
                                </button>
                                <button class={downvote_class} onclick={on_downvote}>
                                    {format!("👎 {}", displayed_downvotes)}
                                </button>
                            </div>

                            <div class="support-heatmap">
                                <p class="support-label">{"Community Support"}</p>
                                <div class="support-bar">
                                    <span>{format!("{}% support", proposal.support_percentage())}</span>
                                </div>
                            </div>
                        </div>

                        {if proposal.has_image {
                            html! { <div class="proposal-image-placeholder large">{"🖼"}</div> }
                        } else {
                            html! {}
                        }}

                        <div class="card">
                            <div class="card-header">
                                <h4 class="card-title">{"Administrative Status"}</h4>
                            </div>
                            <div class="card-body admin-status">
                                <div class="admin-row">
                                    <span>{"Review Status:"}</span>
                                    <span class={status_badge_class(proposal.status)}>
                                        {proposal.status.label()}
                                    </span>
                                </div>
                                <div class="admin-row">
                                    <span>{"Department:"}</span>
                                    <span>{"Traffic & Safety"}</span>
                                </div>
                                <div class="admin-row">
                                    <span>{"Expected Timeline:"}</span>
                                    <span>{"2-4 weeks"}</span>
                                </div>
                                <div class="admin-row">
                                    <span>{"Budget Required:"}</span>
                                    <span>{"₹2,50,000"}</span>
                                </div>
                            </div>
                        </div>
                    </div>

                    <div class="proposal-modal-right">
                        <div class="card">
                            <div class="card-header">
                                <h4 class="card-title">{"Area Sentiment Map"}</h4>
                            </div>
                            <div class="card-body">
                                <div class="sentiment-map">
                                    <span class="sentiment-zone support"></span>
                                    <span class="sentiment-zone neutral"></span>
                                    <span class="sentiment-zone opposition"></span>
                                    <span class="proposal-site-marker">{"Proposal Site"}</span>
                                </div>
                                <div class="sentiment-legend">
                                    <span class="positive">{"Support (67%)"}</span>
                                    <span class="neutral">{"Neutral (23%)"}</span>
                                    <span class="negative">{"Opposition (10%)"}</span>
                                </div>
                            </div>
                        </div>

                        <div class="card">
                            <div class="card-header">
                                <h4 class="card-title">
                                    {format!("Official Response ({})", official_comments.len())}
                                </h4>
                            </div>
                            <div class="card-body comment-list official">
                                {for official_comments.iter().map(|comment| html! {
                                    <div class="comment-item official">
                                        <div class="comment-head">
                                            <span class="comment-author">{comment.author}</span>
                                            <span class="badge badge-primary">{"Official"}</span>
                                            <span class="comment-time">{comment.time_ago}</span>
                                        </div>
                                        <p class="comment-content">{comment.content}</p>
                                        <span class="comment-upvotes">{format!("▲ {}", comment.upvotes)}</span>
                                    </div>
                                })}
                            </div>
                        </div>

                        <div class="card">
                            <div class="card-header">
                                <h4 class="card-title">
                                    {format!("Citizen Comments ({})", citizen_comments.len())}
                                </h4>
                            </div>
                            <div class="card-body comment-list">
                                {for citizen_comments.iter().map(|comment| html! {
                                    <div class="comment-item">
                                        <div class="comment-head">
                                            <span class="comment-author">{comment.author}</span>
                                            <span class="comment-time">{comment.time_ago}</span>
                                        </div>
                                        <p class="comment-content">{comment.content}</p>
                                        <span class="comment-upvotes">{format!("▲ {}", comment.upvotes)}</span>
                                    </div>
                                })}
                            </div>
                        </div>

                        <div class="card">
                            <div class="card-header">
                                <h4 class="card-title">{"Add Your Comment"}</h4>
                            </div>
                            <div class="card-body add-comment">
                                <textarea
                                    placeholder="Share your thoughts on this proposal..."
                                    rows="3"
                                    value={(*new_comment).clone()}
                                    oninput={on_comment_input}
                                />
                                <div class="add-comment-actions">
                                    <button
                                        class="btn btn-primary"
                                        disabled={comment_empty}
                                        onclick={post_comment}
                                    >
                                        {"Post Comment"}
                                    </button>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
