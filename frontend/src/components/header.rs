use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub on_notification_click: Callback<()>,
    pub on_interest_click: Callback<()>,
    pub on_language_click: Callback<()>,
    pub on_profile_click: Callback<()>,
    pub unread_notifications: bool,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_interest = {
        let cb = props.on_interest_click.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_language = {
        let cb = props.on_language_click.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_notification = {
        let cb = props.on_notification_click.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_profile = {
        let cb = props.on_profile_click.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <header class="header">
            <div class="header-inner">
                <h1 class="header-title">{"Citizen Engagement Services"}</h1>
                <div class="header-actions">
                    <button class="header-btn" title="Interests" onclick={on_interest}>
                        {"⚙"}
                    </button>
                    <button class="header-btn" title="Language" onclick={on_language}>
                        {"🌐"}
                    </button>
                    <button class="header-btn notification-btn" title="Notifications" onclick={on_notification}>
                        {"🔔"}
                        {if props.unread_notifications {
                            html! { <span class="notification-dot"></span> }
                        } else {
                            html! {}
                        }}
                    </button>
                    <button class="header-btn" title="Profile" onclick={on_profile}>
                        {"👤"}
                    </button>
                </div>
            </div>
        </header>
    }
}
