use shared::{fixtures, QueueStatus};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::services::share::{maps_search_url, tel_url, INDIA_POST_URL};

#[derive(Properties, PartialEq)]
pub struct PostOfficeModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

fn queue_class(queue: QueueStatus) -> &'static str {
    match queue {
        QueueStatus::Short => "queue-wait short",
        QueueStatus::Moderate => "queue-wait moderate",
        QueueStatus::Long => "queue-wait long",
        QueueStatus::Closed => "queue-wait closed",
    }
}

/// Post office directory: hours, live queue state for open branches, the
/// service list, and call/directions actions.
#[function_component(PostOfficeModal)]
pub fn post_office_modal(props: &PostOfficeModalProps) -> Html {
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

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal post-office-modal" onclick={on_modal_click}>
                <h3 class="modal-title">{"Post Office Services - Real-time Information"}</h3>

                <div class="post-office-list">
                    {for fixtures::post_offices().iter().map(|office| {
                        let status_class = if office.open {
                            "badge badge-success"
                        } else {
                            "badge badge-destructive"
                        };
                        let status_label = if office.open { "Open" } else { "Closed" };
                        html! {
                            <div class="card post-office-card">
                                <div class="card-body">
                                    <div class="post-office-head">
                                        <div>
                                            <h4>{office.name}</h4>
                                            <p class="post-office-area">
                                                {format!("{} • {}", office.area, office.distance)}
                                            </p>
                                            <p class="post-office-address">{office.address}</p>
                                        </div>
                                        <span class={status_class}>{status_label}</span>
                                    </div>

                                    <div class="post-office-hours">
                                        <p><strong>{"Timing: "}</strong>{office.timing}</p>
                                        <p><strong>{"Postal Code: "}</strong>{office.postal_code}</p>
                                    </div>

                                    {if office.open {
                                        html! {
                                            <div class="queue-status">
                                                <p class="queue-title">{"Current Queue Status"}</p>
                                                <div class="queue-grid">
                                                    <div>
                                                        <p class="cell-label">{"People in Queue"}</p>
                                                        <p class="cell-value">
                                                            {format!("{} people", office.current_queue)}
                                                        </p>
                                                    </div>
                                                    <div>
                                                        <p class="cell-label">{"Expected Wait"}</p>
                                                        <p class={queue_class(office.queue)}>
                                                            {office.avg_wait_time}
                                                        </p>
                                                    </div>
                                                </div>
                                            </div>
                                        }
                                    } else {
                                        html! {}
                                    }}

                                    <div class="post-office-services">
                                        <p class="cell-label">{"Services Available"}</p>
                                        <div class="service-tags">
                                            {for office.services.iter().map(|service| html! {
                                                <span class="badge badge-outline">{*service}</span>
                                            })}
                                        </div>
                                    </div>

                                    <div class="post-office-actions">
                                        <a class="btn btn-sm btn-outline" href={tel_url(office.contact)}>
                                            {"Call Office"}
                                        </a>
                                        <a
                                            class="btn btn-sm btn-outline"
                                            href={maps_search_url(office.address)}
                                            target="_blank"
                                            rel="noopener noreferrer"
                                        >
                                            {"Get Directions"}
                                        </a>
                                    </div>
                                </div>
                            </div>
                        }
                    })}

                    <div class="card info-card">
                        <div class="card-body">
                            <h4>{"Online Services Available"}</h4>
                            <ul class="info-list">
                                <li>{"Track your Speed Post & Registered Post online"}</li>
                                <li>{"Book parcels and schedule pickup from home"}</li>
                                <li>{"Apply for new Post Office Savings Account online"}</li>
                                <li>{"Check passport application status"}</li>
                            </ul>
                            <a
                                class="btn btn-sm btn-ghost"
                                href={INDIA_POST_URL}
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                {"Visit India Post Website →"}
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
