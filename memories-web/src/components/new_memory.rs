//! The new-memory form.

use tracing::error;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use memories_core::{MemoryId, Name, NewMemory as NewMemoryPayload, Route};

use crate::components::navigate;
use crate::hooks::use_api;

/// Props for [`NewMemory`].
#[derive(Properties, PartialEq)]
pub struct NewMemoryProps {
    /// Who the memory is about.
    pub name: Name,
    /// Fired with the new memory's id after a successful create; the
    /// composition root uses it to bump the reload counter.
    pub on_new_memory: Callback<MemoryId>,
}

/// Form for entering a new memory: a date (default today), a free-text
/// note, and a submit control.
///
/// On success the router navigates to `#<name>/<id>` and the form resets;
/// on failure a blocking alert is shown and the fields keep their values so
/// the user can retry without re-entering anything. Nothing is retried
/// automatically.
#[function_component(NewMemory)]
pub fn new_memory(props: &NewMemoryProps) -> Html {
    let api = use_api();
    let date = use_state(today_iso);
    let note = use_state(String::new);

    let on_date_input = {
        let date = date.clone();
        Callback::from(move |event: InputEvent| {
            date.set(event.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_note_input = {
        let note = note.clone();
        Callback::from(move |event: InputEvent| {
            note.set(event.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_submit = {
        let api = api.clone();
        let date = date.clone();
        let note = note.clone();
        let name = props.name.clone();
        let on_new_memory = props.on_new_memory.clone();

        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let payload = match NewMemoryPayload::parse(&date, &note) {
                Ok(payload) => payload,
                Err(err) => {
                    gloo::dialogs::alert(&err.to_string());
                    return;
                }
            };

            let api = api.clone();
            let date = date.clone();
            let note = note.clone();
            let name = name.clone();
            let on_new_memory = on_new_memory.clone();

            spawn_local(async move {
                match api.create_memory(&name, &payload).await {
                    Ok(id) => {
                        navigate(&Route::Person {
                            name,
                            memory: Some(id),
                        });
                        date.set(today_iso());
                        note.set(String::new());
                        on_new_memory.emit(id);
                    }
                    Err(err) => {
                        // The form keeps its values for a retry.
                        error!(error = %err, person = %name, "saving memory failed");
                        gloo::dialogs::alert(
                            "Something went wrong saving the memory... Try again later.",
                        );
                    }
                }
            });
        })
    };

    html! {
        <form class="NewMemory" onsubmit={on_submit}>
            <input
                type="date"
                name="date"
                value={(*date).clone()}
                oninput={on_date_input}
                required=true
            />
            <input
                type="text"
                name="note"
                placeholder={format!("What did {} do?", props.name)}
                value={(*note).clone()}
                oninput={on_note_input}
            />
            <input type="submit" value="Add" />
        </form>
    }
}

/// Today's date in the form's `YYYY-MM-DD` wire format.
fn today_iso() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}
