use chrono::{Datelike, NaiveDate};
use shared::{fixtures, meetings_on, MeetingKind};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::services::logging::Logger;
use crate::services::share::google_calendar_url;

#[derive(Properties, PartialEq)]
pub struct CalendarModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

// The fixture meetings all fall in this month.
const CALENDAR_YEAR: i32 = 2024;
const CALENDAR_MONTH: u32 = 12;

fn days_in_month(year: i32, month: u32) -> u32 {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next.and_then(|d| d.pred_opt()).map(|d| d.day()).unwrap_or(30)
}

fn kind_badge_class(kind: MeetingKind) -> &'static str {
    match kind {
        MeetingKind::Virtual => "badge badge-secondary",
        MeetingKind::InPerson => "badge badge-primary",
        MeetingKind::Hybrid => "badge badge-outline",
    }
}

/// Month view over the town-hall schedule with a Google Calendar export.
#[function_component(CalendarModal)]
pub fn calendar_modal(props: &CalendarModalProps) -> Html {
    let selected_date = use_state(|| Option::<NaiveDate>::None);

    use_effect_with(props.is_open, {
        let selected_date = selected_date.clone();
        move |is_open| {
            if *is_open {
                selected_date.set(None);
            }
            || ()
        }
    });

    if !props.is_open {
        return html! {};
    }

    let events = fixtures::calendar_events();

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };
    let on_modal_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    let sync_to_google = {
        let events = events.clone();
        Callback::from(move |_: MouseEvent| {
            // Export the first scheduled meeting; the template covers one
            // event per navigation.
            let first = events
                .iter()
                .find_map(|e| e.meetings.first().map(|m| (e.date, m.clone())));
            if let Some((date, meeting)) = first {
                match google_calendar_url(&meeting, date) {
                    Some(url) => {
                        if let Some(window) = web_sys::window() {
                            let _ = window.open_with_url_and_target(&url, "_blank");
                        }
                    }
                    None => Logger::warn_with_component(
                        "calendar",
                        "Meeting time did not parse; skipping calendar export",
                    ),
                }
            }
        })
    };

    let first_of_month = NaiveDate::from_ymd_opt(CALENDAR_YEAR, CALENDAR_MONTH, 1)
        .expect("fixture calendar month is valid");
    let lead_days = first_of_month.weekday().num_days_from_sunday();
    let day_count = days_in_month(CALENDAR_YEAR, CALENDAR_MONTH);

    let day_cells = (1..=day_count).filter_map(|day| {
        NaiveDate::from_ymd_opt(CALENDAR_YEAR, CALENDAR_MONTH, day).map(|date| {
            let has_events = events.iter().any(|e| e.date == date);
            let is_selected = *selected_date == Some(date);
            let class = match (has_events, is_selected) {
                (_, true) => "calendar-day selected",
                (true, false) => "calendar-day has-events",
                (false, false) => "calendar-day",
            };
            let selected_date = selected_date.clone();
            let onclick = Callback::from(move |_: MouseEvent| {
                selected_date.set(Some(date));
            });
            html! {
                <button {class} {onclick}>{day}</button>
            }
        })
    });

    let detail_heading = match *selected_date {
        Some(date) => format!("Events on {}", date.format("%B %-d, %Y")),
        None => "All Upcoming Meetings".to_string(),
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal calendar-modal" onclick={on_modal_click}>
                <h3 class="modal-title">{"Town Hall Meeting Calendar"}</h3>

                <div class="calendar-layout">
                    <div class="calendar-pane">
                        <p class="calendar-month">{"December 2024"}</p>
                        <div class="calendar-weekdays">
                            {for ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]
                                .iter()
                                .map(|d| html! { <span class="weekday">{*d}</span> })}
                        </div>
                        <div class="calendar-grid">
                            {for (0..lead_days).map(|_| html! { <span class="calendar-day empty"></span> })}
                            {for day_cells}
                        </div>

                        <button class="btn btn-primary full-width" onclick={sync_to_google}>
                            {"Sync to Google Calendar"}
                        </button>
                    </div>

                    <div class="calendar-events-pane">
                        <h4>{detail_heading}</h4>

                        {match *selected_date {
                            Some(date) => {
                                let meetings = meetings_on(&events, date);
                                html! {
                                    <div class="calendar-event-list">
                                        {for meetings.iter().map(|meeting| html! {
                                            <div class="calendar-event">
                                                <div class="calendar-event-head">
                                                    <h5>{meeting.title}</h5>
                                                    <span class={kind_badge_class(meeting.kind)}>
                                                        {meeting.kind.label()}
                                                    </span>
                                                </div>
                                                <div class="calendar-event-meta">
                                                    <span>{meeting.time}</span>
                                                    <span>{format!("{} attending", meeting.attendees)}</span>
                                                </div>
                                            </div>
                                        })}
                                        {if meetings.is_empty() {
                                            html! { <p class="calendar-no-events">{"No meetings on this date"}</p> }
                                        } else {
                                            html! {}
                                        }}
                                    </div>
                                }
                            }
                            None => html! {
                                <div class="calendar-event-list">
                                    {for events.iter().map(|event| html! {
                                        <div class="calendar-event-group">
                                            <h5 class="calendar-event-date">
                                                {event.date.format("%B %-d, %Y").to_string()}
                                            </h5>
                                            {for event.meetings.iter().map(|meeting| html! {
                                                <div class="calendar-event">
                                                    <div class="calendar-event-head">
                                                        <h5>{meeting.title}</h5>
                                                        <span class={kind_badge_class(meeting.kind)}>
                                                            {meeting.kind.label()}
                                                        </span>
                                                    </div>
                                                    <div class="calendar-event-meta">
                                                        <span>{meeting.time}</span>
                                                        <span>{meeting.attendees}</span>
                                                    </div>
                                                </div>
                                            })}
                                        </div>
                                    })}
                                </div>
                            },
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
}
