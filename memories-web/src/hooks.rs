//! Reactive hooks: the hash router and the data-fetching units.
//!
//! Each data hook owns its local [`FetchState`] and nothing else; there is
//! no cross-component store. Reads resolve to tagged outcomes so loading,
//! success, and failure are all renderable, and `use_memories` carries a
//! [`RequestGeneration`] guard so an out-of-order completion from a
//! superseded request is discarded instead of applied.

use std::ops::Deref;
use std::rc::Rc;

use tracing::warn;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use gloo::events::EventListener;
use memories_client::{ApiClient, FetchState, RequestGeneration};
use memories_core::{Memory, Name};

/// The shared [`ApiClient`], provided once at the composition root.
#[derive(Clone)]
pub struct ApiContext(pub Rc<ApiClient>);

impl PartialEq for ApiContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for ApiContext {
    type Target = ApiClient;

    fn deref(&self) -> &ApiClient {
        &self.0
    }
}

/// The [`ApiClient`] from context.
#[hook]
pub fn use_api() -> ApiContext {
    use_context::<ApiContext>().expect("ApiContext not provided")
}

fn location_hash() -> String {
    gloo::utils::window().location().hash().unwrap_or_default()
}

/// The current URL fragment as reactive state.
///
/// Subscribes to `hashchange` on mount (covering back/forward navigation,
/// link clicks, and programmatic assignment) and unsubscribes on unmount.
#[hook]
pub fn use_hash() -> String {
    let hash = use_state(location_hash);

    {
        let hash = hash.clone();
        use_effect_with((), move |_: &()| {
            let listener =
                EventListener::new(&gloo::utils::window(), "hashchange", move |_event| {
                    hash.set(location_hash());
                });
            move || drop(listener)
        });
    }

    (*hash).clone()
}

/// The list of names known to the API.
///
/// Issues a single read on first activation and never re-fetches on its
/// own; only a re-mounted consumer triggers a new request.
#[hook]
pub fn use_names() -> FetchState<Vec<Name>> {
    let api = use_api();
    let state = use_state(FetchState::default);

    {
        let state = state.clone();
        use_effect_with((), move |_: &()| {
            spawn_local(async move {
                let result = api.names().await;
                if let Err(err) = &result {
                    warn!(error = %err, "failed to load names");
                }
                state.set(FetchState::from_result(result));
            });
        });
    }

    (*state).clone()
}

/// The memory list for `name`, re-fetched whenever `name` or the reload
/// token changes.
///
/// State resets to `Loading` on input change and unmount, so stale data
/// for a previous name is never shown; the generation guard additionally
/// rejects a late completion from a superseded request.
#[hook]
pub fn use_memories(name: Name, reload: u64) -> FetchState<Vec<Memory>> {
    let api = use_api();
    let state = use_state(FetchState::default);
    let generation = use_mut_ref(RequestGeneration::new);

    {
        let state = state.clone();
        use_effect_with((name, reload), move |(name, _): &(Name, u64)| {
            let token = generation.borrow_mut().begin();
            let name = name.clone();

            {
                let api = api.clone();
                let state = state.clone();
                let generation = generation.clone();
                spawn_local(async move {
                    let result = api.memories(&name).await;
                    if !generation.borrow().is_current(token) {
                        // Superseded while in flight; discard.
                        return;
                    }
                    if let Err(err) = &result {
                        warn!(error = %err, person = %name, "failed to load memories");
                    }
                    state.set(FetchState::from_result(result));
                });
            }

            move || state.set(FetchState::Loading)
        });
    }

    (*state).clone()
}
