use shared::{
    filter_proposals, fixtures, CategoryFilter, Proposal, ProposalStatus, StatusFilter,
};
use yew::prelude::*;

use crate::components::modals::proposal_detail_modal::ProposalDetailModal;
use crate::components::modals::share_proposal_modal::ShareProposalModal;
use crate::components::modals::submit_proposal_modal::SubmitProposalModal;

pub fn status_badge_class(status: ProposalStatus) -> &'static str {
    match status {
        ProposalStatus::Approved => "badge badge-success",
        ProposalStatus::UnderReview => "badge badge-warning",
        ProposalStatus::Pending => "badge badge-muted",
        ProposalStatus::Rejected => "badge badge-destructive",
    }
}

/// Proposals tab: two-key conjunctive filter over the fixture list, with
/// detail, submit, and share flows.
#[function_component(ProposalsTab)]
pub fn proposals_tab() -> Html {
    let status_filter = use_state(|| StatusFilter::All);
    let category_filter = use_state(|| CategoryFilter::All);
    let selected_proposal = use_state(|| Option::<Proposal>::None);
    let detail_open = use_state(|| false);
    let submit_open = use_state(|| false);
    let share_open = use_state(|| false);
    let proposal_to_share = use_state(|| Option::<Proposal>::None);

    let proposals = fixtures::proposals();
    let filtered = filter_proposals(&proposals, *status_filter, *category_filter);

    let open_submit = {
        let submit_open = submit_open.clone();
        Callback::from(move |_: MouseEvent| submit_open.set(true))
    };
    let close_submit = {
        let submit_open = submit_open.clone();
        Callback::from(move |_| submit_open.set(false))
    };
    let close_detail = {
        let detail_open = detail_open.clone();
        let selected_proposal = selected_proposal.clone();
        Callback::from(move |_| {
            detail_open.set(false);
            selected_proposal.set(None);
        })
    };
    let close_share = {
        let share_open = share_open.clone();
        let proposal_to_share = proposal_to_share.clone();
        Callback::from(move |_| {
            share_open.set(false);
            proposal_to_share.set(None);
        })
    };

    html! {
        <div class="tab-content proposals-tab">
            <div class="proposals-header">
                <h2>{"Community Proposals"}</h2>
                <button class="btn btn-sm btn-primary" onclick={open_submit}>
                    {"+ Submit Proposal"}
                </button>
            </div>

            <div class="filters">
                <div class="filter-row">
                    <p class="filter-label">{"Status"}</p>
                    <div class="filter-buttons">
                        {for StatusFilter::all().into_iter().map(|filter| {
                            let status_filter = status_filter.clone();
                            let class = if *status_filter == filter {
                                "btn btn-sm btn-primary"
                            } else {
                                "btn btn-sm btn-outline"
                            };
                            let onclick = Callback::from(move |_: MouseEvent| status_filter.set(filter));
                            html! { <button {class} {onclick}>{filter.label()}</button> }
                        })}
                    </div>
                </div>

                <div class="filter-row">
                    <p class="filter-label">{"Category"}</p>
                    <div class="filter-buttons">
                        {for CategoryFilter::all().into_iter().map(|filter| {
                            let category_filter = category_filter.clone();
                            let class = if *category_filter == filter {
                                "btn btn-sm btn-primary"
                            } else {
                                "btn btn-sm btn-outline"
                            };
                            let onclick = Callback::from(move |_: MouseEvent| category_filter.set(filter));
                            html! { <button {class} {onclick}>{filter.label()}</button> }
                        })}
                    </div>
                </div>
            </div>

            <div class="proposal-list">
                {for filtered.iter().map(|proposal| {
                    let view_details = {
                        let proposal = proposal.clone();
                        let selected_proposal = selected_proposal.clone();
                        let detail_open = detail_open.clone();
                        Callback::from(move |_: MouseEvent| {
                            selected_proposal.set(Some(proposal.clone()));
                            detail_open.set(true);
                        })
                    };
                    let share = {
                        let proposal = proposal.clone();
                        let proposal_to_share = proposal_to_share.clone();
                        let share_open = share_open.clone();
                        Callback::from(move |_: MouseEvent| {
                            proposal_to_share.set(Some(proposal.clone()));
                            share_open.set(true);
                        })
                    };
                    html! {
                        <div class="card proposal-card">
                            <div class="card-body">
                                <h3>{proposal.title}</h3>
                                <p class="proposal-description">{proposal.description}</p>

                                {if proposal.has_image {
                                    html! { <div class="proposal-image-placeholder">{"🖼"}</div> }
                                } else {
                                    html! {}
                                }}

                                <div class="proposal-tags">
                                    <span class="proposal-location">{proposal.location}</span>
                                    <span class="badge badge-outline">{proposal.category.label()}</span>
                                    <span class={status_badge_class(proposal.status)}>
                                        {proposal.status.label()}
                                    </span>
                                </div>

                                <div class="proposal-actions">
                                    <div class="vote-counts">
                                        <span class="upvotes">{format!("👍 {}", proposal.upvotes)}</span>
                                        <span class="downvotes">{format!("👎 {}", proposal.downvotes)}</span>
                                        <span class="comment-count">
                                            {format!("{} comments", proposal.comments)}
                                        </span>
                                    </div>
                                    <div class="proposal-buttons">
                                        {if proposal.is_yours {
                                            html! {
                                                <button class="btn btn-sm btn-outline" onclick={share}>
                                                    {"Share"}
                                                </button>
                                            }
                                        } else {
                                            html! {}
                                        }}
                                        <button class="btn btn-sm btn-outline" onclick={view_details}>
                                            {"View Details"}
                                        </button>
                                    </div>
                                </div>

                                <div class="support-heatmap">
                                    <p class="support-label">{"Community Support Heatmap"}</p>
                                    <div class="support-bar">
                                        <span>{format!("{}% support", proposal.support_percentage())}</span>
                                    </div>
                                </div>

                                <div class="proposal-meta">
                                    {format!(
                                        "Submitted by {} on {}",
                                        proposal.submitted_by, proposal.submitted_date
                                    )}
                                </div>
                            </div>
                        </div>
                    }
                })}
            </div>

            <ProposalDetailModal
                is_open={*detail_open}
                on_close={close_detail}
                proposal={(*selected_proposal).clone()}
            />

            <SubmitProposalModal is_open={*submit_open} on_close={close_submit} />

            <ShareProposalModal
                is_open={*share_open}
                on_close={close_share}
                proposal={(*proposal_to_share).clone()}
            />
        </div>
    }
}
