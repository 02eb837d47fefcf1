use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::services::logging::Logger;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoFix {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoFix {
    /// Display label in lieu of reverse geocoding.
    pub fn label(&self) -> String {
        format!(
            "Current Location ({:.4}, {:.4})",
            self.latitude, self.longitude
        )
    }
}

#[derive(Clone, PartialEq)]
pub struct GeolocationState {
    pub position: Option<GeoFix>,
    pub error: Option<String>,
}

/// One-shot browser geolocation request on mount. Resolves or errors once;
/// no retry and no timeout policy. A denied permission leaves `position`
/// empty and the location card simply does not render.
#[hook]
pub fn use_geolocation() -> GeolocationState {
    let position = use_state(|| Option::<GeoFix>::None);
    let error = use_state(|| Option::<String>::None);

    use_effect_with((), {
        let position = position.clone();
        let error = error.clone();

        move |_| {
            if let Some(window) = web_sys::window() {
                match window.navigator().geolocation() {
                    Ok(geolocation) => {
                        let on_success = Closure::wrap(Box::new(move |pos: web_sys::Position| {
                            let coords = pos.coords();
                            position.set(Some(GeoFix {
                                latitude: coords.latitude(),
                                longitude: coords.longitude(),
                            }));
                        })
                            as Box<dyn FnMut(web_sys::Position)>);

                        let on_error = Closure::wrap(Box::new(move |err: web_sys::PositionError| {
                            let notice = format!("Location access denied: {}", err.message());
                            Logger::warn_with_component("geolocation", &notice);
                            error.set(Some(notice));
                        })
                            as Box<dyn FnMut(web_sys::PositionError)>);

                        if geolocation
                            .get_current_position_with_error_callback(
                                on_success.as_ref().unchecked_ref(),
                                Some(on_error.as_ref().unchecked_ref()),
                            )
                            .is_err()
                        {
                            Logger::error_with_component(
                                "geolocation",
                                "Failed to issue geolocation request",
                            );
                        }

                        // One-shot request; the closures outlive the effect.
                        on_success.forget();
                        on_error.forget();
                    }
                    Err(_) => {
                        error.set(Some("Geolocation is not available".to_string()));
                    }
                }
            }

            || ()
        }
    });

    GeolocationState {
        position: *position,
        error: (*error).clone(),
    }
}
