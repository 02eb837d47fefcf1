use shared::{fixtures, Discussion};
use web_sys::{HtmlTextAreaElement, MouseEvent};
use yew::prelude::*;

use crate::services::logging::Logger;

#[derive(Clone, Copy, PartialEq, Eq)]
enum VoteDirection {
    Up,
    Down,
}

#[derive(Properties, PartialEq)]
pub struct DiscussionDetailModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    pub discussion: Option<Discussion>,
}

/// Discussion thread dialog: sentiment split, the comment list, a local
/// one-shot vote, and the draft comment box.
#[function_component(DiscussionDetailModal)]
pub fn discussion_detail_modal(props: &DiscussionDetailModalProps) -> Html {
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

    let discussion = match &props.discussion {
        Some(discussion) => discussion,
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
                Logger::info_with_component("discussion", "Comment submitted");
                new_comment.set(String::new());
            }
        })
    };

    let displayed_upvotes = if *vote == Some(VoteDirection::Up) {
        discussion.upvotes + 1
    } else {
        discussion.upvotes
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

    let comments = fixtures::discussion_comments();
    let sentiment = discussion.sentiment;

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal discussion-modal" onclick={on_modal_click}>
                <h3 class="modal-title">{discussion.title}</h3>

                <div class="discussion-summary">
                    <div class="discussion-summary-head">
                        <div>
                            <p class="discussion-byline">
                                {"Started by "}
                                <strong>{discussion.author}</strong>
                                {format!(" • {}", discussion.time_ago)}
                            </p>
                            <p class="discussion-body">{discussion.description}</p>
                        </div>
                        <div class="vote-buttons">
                            <button class={upvote_class} onclick={on_upvote}>
                                {format!("▲ {}", displayed_upvotes)}
                            </button>
                            <button class={downvote_class} onclick={on_downvote}>
                                {"▼"}
                            </button>
                        </div>
                    </div>

                    <div class="sentiment-block">
                        <p class="sentiment-label">{"Community Sentiment"}</p>
                        <div class="sentiment-bar">
                            <div class="sentiment-positive" style={format!("width: {}%;", sentiment.positive)}></div>
                            <div class="sentiment-neutral" style={format!("width: {}%;", sentiment.neutral)}></div>
                            <div class="sentiment-negative" style={format!("width: {}%;", sentiment.negative)}></div>
                        </div>
                        <div class="sentiment-legend">
                            <span class="positive">{format!("{}% Positive", sentiment.positive)}</span>
                            <span class="neutral">{format!("{}% Neutral", sentiment.neutral)}</span>
                            <span class="negative">{format!("{}% Negative", sentiment.negative)}</span>
                        </div>
                    </div>
                </div>

                <div class="comment-section">
                    <h4>{format!("Comments ({})", comments.len())}</h4>

                    <div class="comment-list">
                        {for comments.iter().map(|comment| html! {
                            <div class="comment-item">
                                <div class="comment-head">
                                    <span class="comment-author">{comment.author}</span>
                                    <span class="comment-time">{comment.time_ago}</span>
                                    {if comment.official {
                                        html! { <span class="badge badge-secondary">{"Official"}</span> }
                                    } else {
                                        html! {}
                                    }}
                                </div>
                                <p class="comment-content">{comment.content}</p>
                                <span class="comment-upvotes">{format!("▲ {}", comment.upvotes)}</span>
                            </div>
                        })}
                    </div>
                </div>

                <div class="add-comment">
                    <h4>{"Add your comment"}</h4>
                    <textarea
                        placeholder="Share your thoughts on this issue..."
                        rows="3"
                        value={(*new_comment).clone()}
                        oninput={on_comment_input}
                    />
                    <div class="add-comment-actions">
                        <button class="btn btn-primary" disabled={comment_empty} onclick={post_comment}>
                            {"Post Comment"}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
