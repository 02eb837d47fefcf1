use shared::{fixtures, format_inr, ServiceId};
use yew::prelude::*;

use crate::components::modals::health_services_modal::HealthServicesModal;
use crate::components::modals::parking_services_modal::ParkingServicesModal;
use crate::components::modals::post_office_modal::PostOfficeModal;
use crate::services::share::tel_url;

fn aqi_value_class(aqi: u32) -> &'static str {
    if aqi <= 50 {
        "stat-value good"
    } else if aqi <= 100 {
        "stat-value moderate"
    } else {
        "stat-value unhealthy"
    }
}

fn service_status_class(status: &str) -> &'static str {
    match status {
        "Active" | "Open" => "badge badge-success",
        "Limited" => "badge badge-warning",
        "Disruption" => "badge badge-destructive",
        _ => "badge badge-muted",
    }
}

/// City services tab: live-looking city stats, schedules, the three
/// service directories, development projects, and department handles.
#[function_component(YourCityTab)]
pub fn your_city_tab() -> Html {
    let health_open = use_state(|| false);
    let parking_open = use_state(|| false);
    let post_office_open = use_state(|| false);

    let stats = fixtures::city_stats();
    let schedules = fixtures::service_schedules();
    let services = fixtures::public_services();
    let projects = fixtures::city_projects();
    let departments = fixtures::department_handles();
    let nearby = fixtures::nearby_services();

    let close_health = {
        let health_open = health_open.clone();
        Callback::from(move |_| health_open.set(false))
    };
    let close_parking = {
        let parking_open = parking_open.clone();
        Callback::from(move |_| parking_open.set(false))
    };
    let close_post_office = {
        let post_office_open = post_office_open.clone();
        Callback::from(move |_| post_office_open.set(false))
    };

    html! {
        <div class="tab-content your-city-tab">
            {if let Some(alert) = &stats.monsoon_alert {
                html! {
                    <section class="card alert-card">
                        <div class="card-body">
                            <p class="alert-title">{format!("Monsoon Alert - {}", alert.level)}</p>
                            <p class="alert-message">{alert.message}</p>
                            <div class="alert-actions">
                                <button class="btn btn-sm btn-outline">{"Flood-prone Areas"}</button>
                                <button class="btn btn-sm btn-outline">{"Emergency Shelters"}</button>
                            </div>
                        </div>
                    </section>
                }
            } else {
                html! {}
            }}

            <div class="stat-grid">
                <section class="card stat-card">
                    <div class="card-body">
                        <p class="stat-value">{format!("{}°C", stats.temperature_c)}</p>
                        <p class="stat-label">{format!("Feels like {}°C", stats.feels_like_c)}</p>
                    </div>
                </section>
                <section class="card stat-card">
                    <div class="card-body">
                        <p class={aqi_value_class(stats.aqi)}>{stats.aqi}</p>
                        <p class="stat-label">{format!("AQI • {}", stats.aqi_status)}</p>
                    </div>
                </section>
            </div>

            <section class="card">
                <div class="card-body">
                    <p class="card-title">{"Traffic Status"}</p>
                    <div class="traffic-grid">
                        <div>
                            <p class="cell-label">{"Current Status"}</p>
                            <p class="traffic-level">{stats.traffic_level}</p>
                        </div>
                        <div>
                            <p class="cell-label">{"Peak Hours (Extended due to monsoon)"}</p>
                            <p class="cell-value">{stats.traffic_description}</p>
                        </div>
                    </div>
                </div>
            </section>

            <section class="card">
                <div class="card-header">
                    <h3 class="card-title">{"Service Information"}</h3>
                </div>
                <div class="card-body schedule-list">
                    {for schedules.iter().map(|schedule| html! {
                        <div class="schedule-item">
                            <p class="schedule-name">{schedule.service}</p>
                            <p class="schedule-next">{schedule.next_date}</p>
                            <p class="schedule-detail">
                                {format!("{} • {}", schedule.frequency, schedule.area)}
                            </p>
                        </div>
                    })}
                </div>
            </section>

            <section class="card">
                <div class="card-header">
                    <h3 class="card-title">{"Public Services - Real-time Information"}</h3>
                </div>
                <div class="card-body public-service-list">
                    {for services.iter().map(|service| {
                        let open = {
                            let id = service.id;
                            let health_open = health_open.clone();
                            let parking_open = parking_open.clone();
                            let post_office_open = post_office_open.clone();
                            Callback::from(move |_: MouseEvent| match id {
                                ServiceId::Health => health_open.set(true),
                                ServiceId::Parking => parking_open.set(true),
                                ServiceId::PostOffice => post_office_open.set(true),
                            })
                        };
                        html! {
                            <div class="public-service-item" onclick={open}>
                                <div>
                                    <p class="service-name">{service.name}</p>
                                    <p class="service-description">{service.description}</p>
                                    <p class="service-stats">{service.stats}</p>
                                </div>
                                <div class="service-side">
                                    <span class={service_status_class(service.status)}>
                                        {service.status}
                                    </span>
                                    <span class="chevron">{"›"}</span>
                                </div>
                            </div>
                        }
                    })}
                </div>
            </section>

            <section class="card">
                <div class="card-header">
                    <h3 class="card-title">{"Development Projects Near You"}</h3>
                </div>
                <div class="card-body project-list">
                    {for projects.iter().map(|project| html! {
                        <div class="project-item">
                            <h4>{project.name}</h4>
                            <p class="project-description">{project.description}</p>

                            <div class="project-grid">
                                <div>
                                    <p class="cell-label">{"Budget"}</p>
                                    <p class="cell-value">{format_inr(project.cost)}</p>
                                </div>
                                <div>
                                    <p class="cell-label">{"Duration"}</p>
                                    <p class="cell-value">{project.duration}</p>
                                </div>
                                <div class="span-two">
                                    <p class="cell-label">{"Contractor"}</p>
                                    <p class="cell-value">{project.contractor}</p>
                                </div>
                            </div>

                            <div class="bar-block">
                                <div class="bar-caption">
                                    <span>{"Progress"}</span>
                                    <span>{format!("{}% Complete", project.completion)}</span>
                                </div>
                                <div class="bar-track">
                                    <div
                                        class="bar-fill primary"
                                        style={format!("width: {}%;", project.completion)}
                                    ></div>
                                </div>
                            </div>

                            <p class="project-start">{format!("Started: {}", project.start_date)}</p>
                        </div>
                    })}
                </div>
            </section>

            <section class="card">
                <div class="card-header">
                    <h3 class="card-title">{"Follow Service Departments"}</h3>
                </div>
                <div class="card-body department-list">
                    {for departments.iter().map(|dept| html! {
                        <div class="department-item">
                            <p class="department-name">{dept.department}</p>
                            <div class="department-handles">
                                {for dept.handles.iter().map(|handle| html! {
                                    <a
                                        class="btn btn-sm btn-outline"
                                        href={handle.url}
                                        target="_blank"
                                        rel="noopener noreferrer"
                                    >
                                        {handle.platform}
                                    </a>
                                })}
                            </div>
                        </div>
                    })}
                </div>
            </section>

            <section class="card">
                <div class="card-header">
                    <h3 class="card-title">{"Nearby Emergency Services"}</h3>
                </div>
                <div class="card-body nearby-list">
                    {for nearby.iter().map(|service| html! {
                        <div class="nearby-item">
                            <div>
                                <p class="service-name">{service.name}</p>
                                <p class="service-description">
                                    {format!("{} • {}", service.kind, service.distance)}
                                </p>
                            </div>
                            <a class="btn btn-sm btn-outline" href={tel_url(service.contact)}>
                                {service.contact}
                            </a>
                        </div>
                    })}
                </div>
            </section>

            <HealthServicesModal is_open={*health_open} on_close={close_health} />
            <ParkingServicesModal is_open={*parking_open} on_close={close_parking} />
            <PostOfficeModal is_open={*post_office_open} on_close={close_post_office} />
        </div>
    }
}
