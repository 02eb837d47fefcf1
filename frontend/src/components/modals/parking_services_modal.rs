use shared::{fixtures, ParkingStatus};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::services::share::maps_search_url;

#[derive(Properties, PartialEq)]
pub struct ParkingServicesModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

fn parking_status_class(status: ParkingStatus) -> &'static str {
    match status {
        ParkingStatus::Available => "badge badge-success",
        ParkingStatus::Limited => "badge badge-warning",
        ParkingStatus::Full => "badge badge-destructive",
    }
}

/// Parking directory: occupancy bars, pricing, hours, and directions.
#[function_component(ParkingServicesModal)]
pub fn parking_services_modal(props: &ParkingServicesModalProps) -> Html {
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
            <div class="modal parking-modal" onclick={on_modal_click}>
                <h3 class="modal-title">{"Parking Services - Real-time Information"}</h3>

                <div class="parking-list">
                    {for fixtures::parking_locations().iter().map(|parking| {
                        let occupancy = parking.occupancy_percentage();
                        html! {
                            <div class="card parking-card">
                                <div class="card-body">
                                    <div class="parking-head">
                                        <div>
                                            <h4>{parking.name}</h4>
                                            <p class="parking-address">
                                                {format!("{} • {}", parking.distance, parking.address)}
                                            </p>
                                        </div>
                                        <span class={parking_status_class(parking.status)}>
                                            {parking.status.label()}
                                        </span>
                                    </div>

                                    <div class="bar-block">
                                        <div class="bar-caption">
                                            <span>{"Spot Availability"}</span>
                                            <span>{format!("{} / {}", parking.spots, parking.total)}</span>
                                        </div>
                                        <div class="bar-track">
                                            <div
                                                class="bar-fill primary"
                                                style={format!("width: {}%;", occupancy)}
                                            ></div>
                                        </div>
                                    </div>

                                    <div class="parking-pricing">
                                        <div class="pricing-cell">
                                            <p class="cell-label">{"Two Wheeler"}</p>
                                            <p class="cell-value">
                                                {format!("₹{}/hr", parking.pricing.two_wheeler)}
                                            </p>
                                        </div>
                                        <div class="pricing-cell">
                                            <p class="cell-label">{"Four Wheeler"}</p>
                                            <p class="cell-value">
                                                {format!("₹{}/hr", parking.pricing.four_wheeler)}
                                            </p>
                                        </div>
                                    </div>

                                    <div class="parking-hours">
                                        <span>{"Operating Hours"}</span>
                                        <span class="hours-value">{parking.hours}</span>
                                    </div>

                                    <div class="parking-features">
                                        {for parking.features.iter().map(|feature| html! {
                                            <span class="badge badge-secondary">{*feature}</span>
                                        })}
                                    </div>

                                    <a
                                        class="btn btn-sm btn-outline full-width"
                                        href={maps_search_url(parking.address)}
                                        target="_blank"
                                        rel="noopener noreferrer"
                                    >
                                        {"Get Directions"}
                                    </a>
                                </div>
                            </div>
                        }
                    })}
                </div>
            </div>
        </div>
    }
}
