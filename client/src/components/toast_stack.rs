//! Bottom-right stack of transient notices.

use busline::notice::Notice;
use leptos::prelude::*;

use crate::state::notices::use_toasts;

#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = use_toasts();
    let notices = toasts.signal();

    view! {
        <div class="toast-stack">
            <For
                each=move || notices.get().items().to_vec()
                key=|(id, _)| *id
                children=move |(id, notice): (u64, Notice)| {
                    view! {
                        <div class=format!("toast {}", notice.level.css_class())>
                            <strong class="toast__title">{notice.title}</strong>
                            {notice.description.map(|text| view! { <p class="toast__description">{text}</p> })}
                            <button class="toast__close" on:click=move |_| toasts.dismiss(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
