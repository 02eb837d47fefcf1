use shared::{fixtures, NotificationKind};
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NotificationModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

fn kind_class(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Meeting => "notification-icon meeting",
        NotificationKind::Proposal => "notification-icon proposal",
        NotificationKind::Infrastructure => "notification-icon infrastructure",
        NotificationKind::Budget => "notification-icon budget",
    }
}

#[function_component(NotificationModal)]
pub fn notification_modal(props: &NotificationModalProps) -> Html {
    if !props.is_open {
        return html! {};
    }

    let notifications = fixtures::notifications();

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
            <div class="modal notification-modal" onclick={on_modal_click}>
                <h3 class="modal-title">{"Notifications"}</h3>

                <div class="notification-list">
                    {for notifications.iter().map(|notification| {
                        let item_class = if notification.unread {
                            "notification-item unread"
                        } else {
                            "notification-item"
                        };
                        html! {
                            <div class={item_class}>
                                <span class={kind_class(notification.kind)}></span>
                                <div class="notification-body">
                                    <div class="notification-head">
                                        <h4>{notification.title}</h4>
                                        {if notification.unread {
                                            html! { <span class="unread-dot"></span> }
                                        } else {
                                            html! {}
                                        }}
                                    </div>
                                    <p>{notification.message}</p>
                                    <span class="notification-time">{notification.time_ago}</span>
                                </div>
                            </div>
                        }
                    })}

                    {if notifications.is_empty() {
                        html! {
                            <div class="notification-empty">
                                <p>{"No new notifications"}</p>
                            </div>
                        }
                    } else {
                        html! {}
                    }}
                </div>
            </div>
        </div>
    }
}
