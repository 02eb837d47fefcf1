use shared::{bed_tier, AvailabilityTier, Hospital};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::services::share::tel_url;

#[derive(Properties, PartialEq)]
pub struct HealthServicesModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum HospitalSection {
    Availability,
    Departments,
    Pricing,
}

fn availability_badge_class(tier: AvailabilityTier) -> &'static str {
    match tier {
        AvailabilityTier::Ok => "badge badge-success",
        AvailabilityTier::Tight => "badge badge-warning",
        AvailabilityTier::Critical => "badge badge-destructive",
    }
}

#[derive(Properties, PartialEq)]
struct HospitalCardProps {
    hospital: Hospital,
}

#[function_component(HospitalCard)]
fn hospital_card(props: &HospitalCardProps) -> Html {
    let section = use_state(|| HospitalSection::Availability);
    let hospital = &props.hospital;

    let section_button = |value: HospitalSection, label: &'static str| {
        let class = if *section == value {
            "btn btn-sm btn-primary"
        } else {
            "btn btn-sm btn-ghost"
        };
        let section = section.clone();
        let onclick = Callback::from(move |_: MouseEvent| section.set(value));
        html! { <button {class} {onclick}>{label}</button> }
    };

    html! {
        <div class="card hospital-card">
            <div class="card-header">
                <div class="hospital-head">
                    <div>
                        <h4>{hospital.name}</h4>
                        <p class="hospital-distance">{hospital.distance}</p>
                    </div>
                    <a class="btn btn-sm btn-outline" href={tel_url(hospital.contact)}>
                        {"Call"}
                    </a>
                </div>
            </div>
            <div class="card-body">
                <div class="hospital-sections">
                    {section_button(HospitalSection::Availability, "Availability")}
                    {section_button(HospitalSection::Departments, "Departments")}
                    {section_button(HospitalSection::Pricing, "Pricing")}
                </div>

                {match *section {
                    HospitalSection::Availability => html! {
                        <div class="hospital-availability">
                            <div class="availability-row">
                                <span>{"Bed Availability"}</span>
                                <span class={availability_badge_class(bed_tier(
                                    hospital.beds.available,
                                    hospital.beds.total,
                                ))}>
                                    {format!("{} Available", hospital.beds.available)}
                                </span>
                            </div>
                            <p class="availability-detail">
                                {format!("Total Beds: {}", hospital.beds.total)}
                            </p>
                            <p class="availability-detail">
                                {format!("ICU Beds Available: {}", hospital.beds.icu)}
                            </p>

                            <div class="availability-row">
                                <span>{"Doctors on Duty"}</span>
                                <span class="badge badge-secondary">
                                    {format!("{} Active", hospital.doctors.on_duty)}
                                </span>
                            </div>
                            <p class="availability-detail">
                                {format!("Total Staff: {} doctors", hospital.doctors.total)}
                            </p>

                            <div class="availability-row">
                                <span>{"Est. Wait Time"}</span>
                                <span class="wait-time">{hospital.wait_time}</span>
                            </div>
                        </div>
                    },
                    HospitalSection::Departments => html! {
                        <div class="hospital-departments">
                            {for hospital.departments.iter().map(|dept| html! {
                                <span class="badge badge-outline">{*dept}</span>
                            })}
                        </div>
                    },
                    HospitalSection::Pricing => html! {
                        <div class="hospital-pricing">
                            {for hospital.services.iter().map(|service| html! {
                                <div class="pricing-row">
                                    <span>{service.name}</span>
                                    <span class="price">{format!("₹{}", service.price)}</span>
                                </div>
                            })}
                        </div>
                    },
                }}

                <p class="hospital-address">{hospital.address}</p>
            </div>
        </div>
    }
}

/// Hospital directory with per-hospital availability, departments, and
/// pricing sections.
#[function_component(HealthServicesModal)]
pub fn health_services_modal(props: &HealthServicesModalProps) -> Html {
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
            <div class="modal health-modal" onclick={on_modal_click}>
                <h3 class="modal-title">{"Health Services - Real-time Information"}</h3>

                <div class="hospital-list">
                    {for shared::fixtures::hospitals().into_iter().map(|hospital| html! {
                        <HospitalCard {hospital} />
                    })}
                </div>
            </div>
        </div>
    }
}
