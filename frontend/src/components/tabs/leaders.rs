use shared::{fixtures, search_leaders, ContactTier};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::share::tel_url;

fn contact_badge_class(contact: ContactTier) -> &'static str {
    match contact {
        ContactTier::Available => "badge badge-success",
        ContactTier::Limited => "badge badge-warning",
    }
}

/// Five star slots: full for each whole point, a half marker for a
/// fractional remainder, hollow for the rest.
fn render_stars(rating: f32) -> Html {
    let full = rating.floor() as usize;
    let has_half = rating.fract() != 0.0;
    let mut stars: Vec<Html> = Vec::with_capacity(5);
    for _ in 0..full.min(5) {
        stars.push(html! { <span class="star full">{"★"}</span> });
    }
    if has_half && stars.len() < 5 {
        stars.push(html! { <span class="star half">{"☆"}</span> });
    }
    while stars.len() < 5 {
        stars.push(html! { <span class="star empty">{"☆"}</span> });
    }
    html! { <>{for stars.into_iter()}</> }
}

/// Leaders directory tab with free-text search over the representative
/// list.
#[function_component(LeadersTab)]
pub fn leaders_tab() -> Html {
    let search_term = use_state(String::new);

    let leaders = fixtures::leaders();
    let filtered = search_leaders(&leaders, &search_term);

    let on_search_input = {
        let search_term = search_term.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search_term.set(input.value());
        })
    };

    html! {
        <div class="tab-content leaders-tab">
            <section class="card">
                <div class="card-body">
                    <input
                        type="search"
                        class="search-input"
                        placeholder="Search by name, position, or specialization..."
                        value={(*search_term).clone()}
                        oninput={on_search_input}
                    />
                </div>
            </section>

            <section class="card">
                <div class="card-header">
                    <h3 class="card-title">
                        {format!("Your Representatives ({})", filtered.len())}
                    </h3>
                </div>
                <div class="card-body leader-list">
                    {for filtered.iter().map(|leader| {
                        let limited = leader.contact == ContactTier::Limited;
                        html! {
                            <div class="leader-item">
                                <div class="leader-head">
                                    <div>
                                        <h3>{leader.name}</h3>
                                        <p class="leader-position">{leader.position}</p>
                                    </div>
                                    <span class={contact_badge_class(leader.contact)}>
                                        {leader.contact.label()}
                                    </span>
                                </div>

                                <div class="leader-grid">
                                    <div>
                                        <p class="cell-label">{"Party"}</p>
                                        <p class="cell-value">{leader.party}</p>
                                    </div>
                                    <div>
                                        <p class="cell-label">{"Experience"}</p>
                                        <p class="cell-value">{leader.experience}</p>
                                    </div>
                                    <div class="span-two">
                                        <p class="cell-label">{"Coverage Area"}</p>
                                        <p class="cell-value">{leader.area}</p>
                                    </div>
                                </div>

                                <div class="leader-specializations">
                                    <p class="cell-label">{"Specializations"}</p>
                                    <div class="specialization-tags">
                                        {for leader.specializations.iter().map(|spec| html! {
                                            <span class="badge badge-outline">{*spec}</span>
                                        })}
                                    </div>
                                </div>

                                <div class="leader-rating-row">
                                    <div>
                                        <p class="cell-label">{"Community Rating"}</p>
                                        <div class="leader-stars">
                                            {render_stars(leader.rating)}
                                            <span class="rating-value">{leader.rating}</span>
                                        </div>
                                    </div>
                                    <div class="response-time">
                                        <p class="cell-label">{"Avg. Response Time"}</p>
                                        <p class="cell-value">{leader.response_time}</p>
                                    </div>
                                </div>

                                <div class="leader-actions">
                                    {if limited {
                                        html! {
                                            <button class="btn btn-sm btn-primary" disabled=true>
                                                {"Call"}
                                            </button>
                                        }
                                    } else {
                                        html! {
                                            <a class="btn btn-sm btn-primary" href={tel_url("+91-1800-022-1955")}>
                                                {"Call"}
                                            </a>
                                        }
                                    }}
                                    <button class="btn btn-sm btn-outline">{"Message"}</button>
                                    <button class="btn btn-sm btn-outline">{"Email"}</button>
                                </div>

                                <p class="privacy-note">
                                    {"Your identity remains anonymous during communication"}
                                </p>
                            </div>
                        }
                    })}
                </div>
            </section>
        </div>
    }
}
