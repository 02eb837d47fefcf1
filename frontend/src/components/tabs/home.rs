use shared::{fixtures, markers_for, MapMarker, MapOverlay, Survey};
use yew::prelude::*;

use crate::components::modals::survey_modal::SurveyModal;

#[derive(Properties, PartialEq)]
pub struct HomeTabProps {
    /// Leaves the portal back to the municipal landing page.
    pub on_exit: Callback<()>,
}

/// Dashboard tab: interactive map with overlays, trending topics from
/// local social media, and the active surveys.
#[function_component(HomeTab)]
pub fn home_tab(props: &HomeTabProps) -> Html {
    let active_overlay = use_state(|| MapOverlay::Traffic);
    let selected_marker = use_state(|| Option::<MapMarker>::None);
    let selected_survey = use_state(|| Option::<Survey>::None);
    let survey_modal_open = use_state(|| false);

    let markers = markers_for(&fixtures::map_markers(), *active_overlay);
    let topics = fixtures::trending_topics();
    let surveys = fixtures::surveys();

    let on_exit = {
        let cb = props.on_exit.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let close_survey_modal = {
        let survey_modal_open = survey_modal_open.clone();
        let selected_survey = selected_survey.clone();
        Callback::from(move |_| {
            survey_modal_open.set(false);
            selected_survey.set(None);
        })
    };

    html! {
        <div class="tab-content home-tab">
            <div class="return-row">
                <button class="btn btn-outline btn-sm" onclick={on_exit}>
                    {"← Return to BMC Website"}
                </button>
            </div>

            // Interactive map with selectable overlays
            <section class="card map-card">
                <div class="card-header">
                    <div class="overlay-buttons">
                        {for MapOverlay::ALL.iter().map(|overlay| {
                            let overlay = *overlay;
                            let active_overlay = active_overlay.clone();
                            let selected_marker = selected_marker.clone();
                            let class = if *active_overlay == overlay {
                                "btn btn-sm btn-primary"
                            } else {
                                "btn btn-sm btn-outline"
                            };
                            let onclick = Callback::from(move |_: MouseEvent| {
                                active_overlay.set(overlay);
                                selected_marker.set(None);
                            });
                            html! {
                                <button {class} {onclick}>{overlay.label()}</button>
                            }
                        })}
                    </div>
                </div>
                <div class="card-body">
                    <div class="map-area">
                        <div class="user-marker" style="left: 45%; top: 55%;">
                            <span class="user-marker-dot"></span>
                            <span class="user-marker-label">{"You are here"}</span>
                        </div>

                        {for markers.iter().map(|marker| {
                            let marker = marker.clone();
                            let is_selected = selected_marker
                                .as_ref()
                                .map(|m| m.id == marker.id)
                                .unwrap_or(false);
                            let selected_marker = selected_marker.clone();
                            let style = format!("left: {}%; top: {}%;", marker.x, marker.y);
                            let class = if is_selected {
                                "map-marker selected"
                            } else {
                                "map-marker"
                            };
                            let toggled = marker.clone();
                            let onclick = Callback::from(move |_: MouseEvent| {
                                if is_selected {
                                    selected_marker.set(None);
                                } else {
                                    selected_marker.set(Some(toggled.clone()));
                                }
                            });
                            html! {
                                <button {class} {style} {onclick} title={marker.title}>
                                    {"📍"}
                                </button>
                            }
                        })}

                        {if let Some(marker) = selected_marker.as_ref() {
                            let dismiss = {
                                let selected_marker = selected_marker.clone();
                                Callback::from(move |_: MouseEvent| selected_marker.set(None))
                            };
                            html! {
                                <div class="marker-popup" style={popup_style(marker)}>
                                    <h4>{marker.title}</h4>
                                    <p>{marker.description}</p>
                                    <button class="marker-popup-close" onclick={dismiss}>
                                        {"×"}
                                    </button>
                                </div>
                            }
                        } else {
                            html! {}
                        }}
                    </div>
                </div>
            </section>

            // Social media pulse for the neighbourhood
            <section class="card">
                <div class="card-header">
                    <h3 class="card-title">{"Trending in Your Area"}</h3>
                    <p class="card-subtitle">
                        {"Real-time conversations from Instagram, Twitter, Reddit, and Facebook \
                          about your local area"}
                    </p>
                </div>
                <div class="card-body trending-list">
                    {for topics.iter().map(|topic| {
                        let sentiment_class = if topic.positive {
                            "sentiment-chip positive"
                        } else {
                            "sentiment-chip negative"
                        };
                        let sentiment_label = if topic.positive { "positive" } else { "negative" };
                        html! {
                            <div class="trending-item">
                                <div class="trending-head">
                                    <div>
                                        <h4>{topic.title}</h4>
                                        <span class="badge badge-secondary">{topic.category}</span>
                                        <span class={sentiment_class}>{sentiment_label}</span>
                                    </div>
                                    <div class="trending-total">
                                        <span class="trending-total-value">{topic.total_engagement}</span>
                                        <span class="trending-total-label">{"total mentions"}</span>
                                    </div>
                                </div>

                                <div class="platform-grid">
                                    {for topic.platforms.iter().map(|stats| html! {
                                        <div class="platform-cell">
                                            <div class="platform-engagement">
                                                {stats.engagement}
                                                {if stats.trending {
                                                    html! { <span class="trending-arrow">{"↑"}</span> }
                                                } else {
                                                    html! {}
                                                }}
                                            </div>
                                            <div class="platform-name">{stats.platform.label()}</div>
                                        </div>
                                    })}
                                </div>

                                <div class="top-posts">
                                    <p class="top-posts-label">{"Popular Posts:"}</p>
                                    {for topic.top_posts.iter().map(|post| html! {
                                        <div class="top-post">
                                            <span class="top-post-platform">{post.platform.label()}</span>
                                            <p>{post.text}</p>
                                            <span class="top-post-engagement">{post.engagement}</span>
                                        </div>
                                    })}
                                </div>
                            </div>
                        }
                    })}
                </div>
            </section>

            // Surveys open for participation
            <section class="card">
                <div class="card-header">
                    <h3 class="card-title">{"Active Surveys"}</h3>
                </div>
                <div class="card-body survey-list">
                    {for surveys.iter().map(|survey| {
                        let participate = {
                            let survey = survey.clone();
                            let selected_survey = selected_survey.clone();
                            let survey_modal_open = survey_modal_open.clone();
                            Callback::from(move |_: MouseEvent| {
                                selected_survey.set(Some(survey.clone()));
                                survey_modal_open.set(true);
                            })
                        };
                        html! {
                            <div class="survey-item">
                                <h4>{survey.title}</h4>
                                <p class="survey-description">{survey.description}</p>
                                <div class="survey-footer">
                                    <span class="survey-meta">
                                        <strong>{survey.responses}</strong>
                                        {" responses • "}
                                        {survey.time_left}
                                    </span>
                                    <button class="btn btn-sm btn-primary" onclick={participate}>
                                        {"Participate"}
                                    </button>
                                </div>
                            </div>
                        }
                    })}
                </div>
            </section>

            <SurveyModal
                is_open={*survey_modal_open}
                on_close={close_survey_modal}
                survey={(*selected_survey).clone()}
            />
        </div>
    }
}

/// Keeps the detail popup inside the map: anchor it on the side of the
/// marker with the most room.
fn popup_style(marker: &MapMarker) -> String {
    let horizontal = if marker.x > 50 {
        format!("right: {}%;", (100 - marker.x as i32).max(5))
    } else {
        format!("left: {}%;", (marker.x as i32).max(5))
    };
    let vertical = if marker.y > 50 {
        format!("bottom: {}%;", (100 - marker.y as i32 + 5).max(5))
    } else {
        format!("top: {}%;", (marker.y as i32 + 5).max(5))
    };
    format!("{} {}", horizontal, vertical)
}
