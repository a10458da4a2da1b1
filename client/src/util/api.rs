//! Page-side access to the REST client.

use busline::ApiClient;
use busline::ApiConfig;
use busline::net::error::ApiError;
use leptos::prelude::*;

use crate::state::auth::AuthHandle;
use crate::state::notices::Toasts;

/// Client for the configured backend. Cheap to build; pages make one per
/// request task.
pub fn use_api() -> ApiClient {
    ApiClient::new(&expect_context::<ApiConfig>())
}

/// Surface a failed call: a rejected token ends the session (the guards
/// then redirect), and the user sees a toast either way.
pub fn report_failure(auth: AuthHandle, toasts: Toasts, action: &str, err: &ApiError) {
    auth.handle_api_error(err);
    toasts.api_error(action, err);
}
