//! Backend URL baked in at build time.

use busline::ApiConfig;
use busline::config::API_URL_VAR;

/// `API_URL` as seen by the compiler, falling back to the default backend
/// when unset or malformed.
pub fn api_config() -> ApiConfig {
    let compiled = option_env!("API_URL");
    match ApiConfig::from_lookup(|key| (key == API_URL_VAR).then_some(compiled).flatten().map(str::to_owned)) {
        Ok(config) => config,
        Err(e) => {
            leptos::logging::warn!("{e}; using {}", ApiConfig::default().base_url);
            ApiConfig::default()
        }
    }
}
