//! Toast stack state.
//!
//! Newest notices go last; the stack keeps at most [`MAX_VISIBLE`] and
//! drops the oldest beyond that. In the browser each notice also dismisses
//! itself after [`AUTO_DISMISS_MS`].

#[cfg(test)]
#[path = "notices_test.rs"]
mod notices_test;

use busline::net::error::ApiError;
use busline::notice::Notice;
use leptos::prelude::*;

pub const MAX_VISIBLE: usize = 4;
pub const AUTO_DISMISS_MS: u32 = 4_000;

#[derive(Clone, Debug, Default)]
pub struct Notices {
    next_id: u64,
    items: Vec<(u64, Notice)>,
}

impl Notices {
    /// Add a notice and return its id.
    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push((id, notice));
        if self.items.len() > MAX_VISIBLE {
            self.items.remove(0);
        }
        id
    }

    /// Remove notice `id`; `false` when it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|(item_id, _)| *item_id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[(u64, Notice)] {
        &self.items
    }
}

/// `Copy` handle pages capture to raise toasts from async tasks.
#[derive(Clone, Copy)]
pub struct Toasts(RwSignal<Notices>);

impl Toasts {
    pub fn new() -> Self {
        Self(RwSignal::new(Notices::default()))
    }

    pub fn signal(self) -> RwSignal<Notices> {
        self.0
    }

    pub fn show(self, notice: Notice) {
        let Some(id) = self.0.try_update(|n| n.push(notice)) else {
            return;
        };
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(AUTO_DISMISS_MS).await;
            self.dismiss(id);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
        }
    }

    pub fn dismiss(self, id: u64) {
        self.0.try_update(|n| n.dismiss(id));
    }

    /// Toast for a failed API call, titled with what the user was doing.
    pub fn api_error(self, action: &str, err: &ApiError) {
        self.show(Notice::from_api_error(action, err));
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}
