//! Profile page: account details and identity-document upload.
//!
//! SYSTEM CONTEXT
//! ==============
//! A successful upload merges only the new document URL into the session
//! user; the token and every other field stay as they were.

use busline::net::types::UserPatch;
use busline::notice::Notice;
use busline::routes::Page;
use leptos::prelude::*;

use crate::components::guard::RequirePage;
use crate::state::auth::use_auth;
use crate::state::notices::use_toasts;
use crate::util::api::{report_failure, use_api};

/// File picked in the browser, already read into memory.
#[derive(Clone, Debug, PartialEq, Eq)]
struct PendingUpload {
    name: String,
    mime: String,
    bytes: Vec<u8>,
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <RequirePage page=Page::Profile>
            <ProfileCard/>
        </RequirePage>
    }
}

#[component]
fn ProfileCard() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let api = use_api();
    let state = auth.state();
    let pending = RwSignal::new(None::<PendingUpload>);
    let busy = RwSignal::new(false);

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            use crate::util::form::is_image_mime;
            use wasm_bindgen::JsCast;

            let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let mime = file.type_();
            if !is_image_mime(&mime) {
                toasts.show(Notice::warning("Choose an image file"));
                return;
            }
            let name = file.name();
            leptos::task::spawn_local(async move {
                match wasm_bindgen_futures::JsFuture::from(file.array_buffer()).await {
                    Ok(buffer) => {
                        let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
                        pending.set(Some(PendingUpload { name, mime, bytes }));
                    }
                    Err(e) => toasts.show(Notice::error("Could not read the file").with_description(format!("{e:?}"))),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
    };

    let on_save = move |_: leptos::ev::MouseEvent| {
        let Some(upload) = pending.get_untracked() else {
            return;
        };
        let (Some(token), Some(user_id)) = (auth.token(), auth.user_id()) else {
            return;
        };
        busy.set(true);

        let api = api.clone();
        leptos::task::spawn_local(async move {
            let result =
                api.upload_identity_document(&token, &user_id, &upload.name, &upload.mime, upload.bytes).await;
            match result {
                Ok(updated) => match updated.identity_document_url {
                    Some(url) => match auth.update_user(UserPatch::identity_document(url)) {
                        Ok(_) => {
                            pending.set(None);
                            toasts.show(Notice::success("Document updated"));
                        }
                        Err(e) => toasts.show(Notice::error("Could not save the profile").with_description(e.to_string())),
                    },
                    None => toasts.show(
                        Notice::error("Upload failed").with_description("The server did not return a document URL."),
                    ),
                },
                Err(e) => report_failure(auth, toasts, "Upload failed", &e),
            }
            busy.set(false);
        });
    };

    view! {
        <section class="profile">
            {move || {
                state
                    .get()
                    .user
                    .map(|user| {
                        let roles = if user.roles.is_empty() { "none".to_owned() } else { user.roles.join(", ") };
                        view! {
                            <div class="profile__card">
                                <h1>{user.full_name.clone()}</h1>
                                <p class="profile__email">{user.email.clone()}</p>
                                <p class="profile__roles">"Roles: " {roles}</p>
                                {user
                                    .identity_document_url
                                    .map(|url| {
                                        view! { <img class="profile__document" src=url alt="Identity document"/> }
                                    })}
                            </div>
                        }
                    })
            }}
            <div class="profile__upload">
                <label class="profile__upload-label">
                    "Identity document"
                    <input type="file" accept="image/*" on:change=on_file_change/>
                </label>
                <Show when=move || pending.get().is_some()>
                    <button class="profile__save" on:click=on_save.clone() disabled=move || busy.get()>
                        "Save document"
                    </button>
                </Show>
            </div>
        </section>
    }
}
