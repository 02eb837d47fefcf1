use shared::{fixtures, Discussion, MeetingKind};
use yew::prelude::*;

use crate::components::modals::calendar_modal::CalendarModal;
use crate::components::modals::create_townhall_modal::CreateTownhallModal;
use crate::components::modals::discussion_detail_modal::DiscussionDetailModal;

#[derive(Clone, Copy, PartialEq, Eq)]
enum TownhallView {
    Meetings,
    Discussions,
}

/// Town-hall tab: upcoming meetings or active discussions, plus the
/// calendar and creation flows.
#[function_component(TownhallTab)]
pub fn townhall_tab() -> Html {
    let active_view = use_state(|| TownhallView::Meetings);
    let calendar_open = use_state(|| false);
    let discussion_open = use_state(|| false);
    let create_open = use_state(|| false);
    let selected_discussion = use_state(|| Option::<Discussion>::None);

    let meetings = fixtures::meetings();
    let discussions = fixtures::discussions();

    let show_meetings = {
        let active_view = active_view.clone();
        Callback::from(move |_: MouseEvent| active_view.set(TownhallView::Meetings))
    };
    let show_discussions = {
        let active_view = active_view.clone();
        Callback::from(move |_: MouseEvent| active_view.set(TownhallView::Discussions))
    };
    let open_create = {
        let create_open = create_open.clone();
        Callback::from(move |_: MouseEvent| create_open.set(true))
    };
    let open_calendar = {
        let calendar_open = calendar_open.clone();
        Callback::from(move |_: MouseEvent| calendar_open.set(true))
    };

    let close_calendar = {
        let calendar_open = calendar_open.clone();
        Callback::from(move |_| calendar_open.set(false))
    };
    let close_create = {
        let create_open = create_open.clone();
        Callback::from(move |_| create_open.set(false))
    };
    let close_discussion = {
        let discussion_open = discussion_open.clone();
        let selected_discussion = selected_discussion.clone();
        Callback::from(move |_| {
            discussion_open.set(false);
            selected_discussion.set(None);
        })
    };

    let meetings_class = if *active_view == TownhallView::Meetings {
        "btn btn-sm btn-primary"
    } else {
        "btn btn-sm btn-ghost"
    };
    let discussions_class = if *active_view == TownhallView::Discussions {
        "btn btn-sm btn-primary"
    } else {
        "btn btn-sm btn-ghost"
    };

    html! {
        <div class="tab-content townhall-tab">
            <div class="townhall-controls">
                <div class="view-toggle">
                    <button class={meetings_class} onclick={show_meetings}>
                        {"Meetings"}
                    </button>
                    <button class={discussions_class} onclick={show_discussions}>
                        {"Discussions"}
                    </button>
                </div>
                <button class="btn btn-sm btn-primary" onclick={open_create}>
                    {"+ Create"}
                </button>
            </div>

            {if *active_view == TownhallView::Meetings {
                html! {
                    <>
                        <section class="card">
                            <div class="card-body">
                                <button class="btn btn-outline full-width" onclick={open_calendar}>
                                    {"View Full Calendar"}
                                </button>
                            </div>
                        </section>

                        <section class="card">
                            <div class="card-header">
                                <h3 class="card-title">{"Upcoming Meetings"}</h3>
                            </div>
                            <div class="card-body meeting-list">
                                {for meetings.iter().map(|meet| {
                                    let kind_class = if meet.kind == MeetingKind::Virtual {
                                        "badge badge-secondary"
                                    } else {
                                        "badge badge-primary"
                                    };
                                    html! {
                                        <div class="meeting-item">
                                            <div class="meeting-head">
                                                <h4>{meet.title}</h4>
                                                <span class="badge badge-outline">{meet.organizer}</span>
                                            </div>
                                            <div class="meeting-meta">
                                                <span>{meet.date}</span>
                                                <span>{meet.time}</span>
                                                {if let (MeetingKind::InPerson, Some(location)) = (meet.kind, meet.location) {
                                                    html! {
                                                        <>
                                                            <span>{location}</span>
                                                            {if let Some(distance) = meet.distance {
                                                                html! { <span>{distance}</span> }
                                                            } else {
                                                                html! {}
                                                            }}
                                                        </>
                                                    }
                                                } else {
                                                    html! {}
                                                }}
                                            </div>
                                            <div class="meeting-footer">
                                                <span class="meeting-attendees">
                                                    <strong>{meet.attendees}</strong>{" interested"}
                                                </span>
                                                <span class={kind_class}>{meet.kind.label()}</span>
                                                <button class="btn btn-sm btn-primary">{"Join Meeting"}</button>
                                            </div>
                                        </div>
                                    }
                                })}
                            </div>
                        </section>
                    </>
                }
            } else {
                html! {
                    <section class="card">
                        <div class="card-header">
                            <h3 class="card-title">{"Active Discussions"}</h3>
                        </div>
                        <div class="card-body discussion-list">
                            {for discussions.iter().map(|discussion| {
                                let open = {
                                    let discussion = discussion.clone();
                                    let selected_discussion = selected_discussion.clone();
                                    let discussion_open = discussion_open.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        selected_discussion.set(Some(discussion.clone()));
                                        discussion_open.set(true);
                                    })
                                };
                                let sentiment = discussion.sentiment;
                                html! {
                                    <div class="discussion-item" onclick={open}>
                                        <div class="discussion-head">
                                            <h4>{discussion.title}</h4>
                                            <span class="discussion-time">{discussion.time_ago}</span>
                                        </div>
                                        <p class="discussion-author">{"by "}{discussion.author}</p>

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

                                        <div class="discussion-footer">
                                            <span>{format!("{} upvotes", discussion.upvotes)}</span>
                                            <span>{format!("{} comments", discussion.comments)}</span>
                                        </div>
                                    </div>
                                }
                            })}
                        </div>
                    </section>
                }
            }}

            <CalendarModal is_open={*calendar_open} on_close={close_calendar} />

            <DiscussionDetailModal
                is_open={*discussion_open}
                on_close={close_discussion}
                discussion={(*selected_discussion).clone()}
            />

            <CreateTownhallModal is_open={*create_open} on_close={close_create} />
        </div>
    }
}
