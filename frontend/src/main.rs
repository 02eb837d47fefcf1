use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::bottom_nav::{BottomNavigation, Tab};
use components::header::Header;
use components::landing::LandingPage;
use components::modals::interest_modal::InterestModal;
use components::modals::notification_modal::NotificationModal;
use components::tabs::{BudgetTab, HomeTab, LeadersTab, ProposalsTab, TownhallTab, YourCityTab};
use services::logging::Logger;
use shared::fixtures;

/// Top-level page: the static municipal landing page or the portal shell.
#[derive(Clone, Copy, PartialEq, Eq)]
enum View {
    Landing,
    Portal,
}

#[function_component(App)]
fn app() -> Html {
    let view = use_state(|| View::Landing);
    let active_tab = use_state(|| Tab::Home);
    let interest_open = use_state(|| false);
    let notification_open = use_state(|| false);
    let language_index = use_state(|| 0usize);

    let languages = fixtures::languages();
    let language = languages[*language_index % languages.len()];

    let enter_portal = {
        let view = view.clone();
        Callback::from(move |_| view.set(View::Portal))
    };
    let exit_portal = {
        let view = view.clone();
        Callback::from(move |_| view.set(View::Landing))
    };

    let on_tab_change = {
        let active_tab = active_tab.clone();
        Callback::from(move |tab: Tab| active_tab.set(tab))
    };

    let open_interests = {
        let interest_open = interest_open.clone();
        Callback::from(move |_| interest_open.set(true))
    };
    let close_interests = {
        let interest_open = interest_open.clone();
        Callback::from(move |_| interest_open.set(false))
    };
    let open_notifications = {
        let notification_open = notification_open.clone();
        Callback::from(move |_| notification_open.set(true))
    };
    let close_notifications = {
        let notification_open = notification_open.clone();
        Callback::from(move |_| notification_open.set(false))
    };

    let cycle_language = {
        let language_index = language_index.clone();
        let count = languages.len();
        Callback::from(move |_| {
            language_index.set((*language_index + 1) % count);
        })
    };

    let on_profile = Callback::from(|_| {
        Logger::debug_with_component("header", "Profile view is not available yet");
    });

    let unread_notifications = fixtures::notifications().iter().any(|n| n.unread);

    if *view == View::Landing {
        return html! { <LandingPage on_enter={enter_portal} /> };
    }

    // Exactly one tab component renders at a time.
    let tab_content = match *active_tab {
        Tab::Home => html! { <HomeTab on_exit={exit_portal} /> },
        Tab::Townhall => html! { <TownhallTab /> },
        Tab::Proposals => html! { <ProposalsTab /> },
        Tab::Budget => html! { <BudgetTab /> },
        Tab::Leaders => html! { <LeadersTab /> },
        Tab::City => html! { <YourCityTab /> },
    };

    html! {
        <div class="app">
            <Header
                on_notification_click={open_notifications}
                on_interest_click={open_interests}
                on_language_click={cycle_language}
                on_profile_click={on_profile}
                {unread_notifications}
            />

            <main class="main-content">
                {tab_content}
            </main>

            <BottomNavigation active={*active_tab} on_change={on_tab_change} />

            <InterestModal is_open={*interest_open} on_close={close_interests} />

            <NotificationModal
                is_open={*notification_open}
                on_close={close_notifications}
            />

            {if language != "English" {
                html! { <div class="language-indicator">{language}</div> }
            } else {
                html! {}
            }}
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
