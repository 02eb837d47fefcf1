pub mod use_geolocation;
pub mod use_voice_input;
