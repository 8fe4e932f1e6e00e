//! Composition root.

use yew::prelude::*;

use memories_client::ApiClient;
use memories_core::{MemoryId, Route};

use crate::components::{MemoryList, NameList, NewMemory};
use crate::hooks::{use_hash, ApiContext};

/// Resolve the page-relative API location against the document URL, since
/// the client needs an absolute base.
fn api_base() -> String {
    let href = gloo::utils::document()
        .base_uri()
        .ok()
        .flatten()
        .unwrap_or_default();

    web_sys::Url::new_with_base("../api", &href)
        .map(|url| url.href())
        .unwrap_or_else(|_| "../api".to_owned())
}

/// Two-state view machine driven solely by the hash router: no name
/// selected shows the name list; `#<name>` (with any trailing path) shows
/// that person's memories and the new-memory form. Any hash change
/// re-evaluates on the next render.
#[function_component(App)]
pub fn app() -> Html {
    let hash = use_hash();
    let api = use_memo((), |_| ApiClient::new(api_base()));
    let reload = use_state(|| 0u64);

    let (title, body) = match Route::from_fragment(&hash) {
        Route::Person { name, memory } => {
            let on_new_memory = {
                let reload = reload.clone();
                Callback::from(move |_id: MemoryId| reload.set(*reload + 1))
            };

            (
                format!("Memories of {name}"),
                html! {
                    <>
                        <MemoryList name={name.clone()} reload={*reload} highlight={memory} />
                        <NewMemory name={name} on_new_memory={on_new_memory} />
                    </>
                },
            )
        }
        Route::NameSelection => ("Memories of...".to_owned(), html! { <NameList /> }),
    };

    html! {
        <ContextProvider<ApiContext> context={ApiContext(api)}>
            <header>
                <h1>{ title }</h1>
            </header>
            { body }
        </ContextProvider<ApiContext>>
    }
}
