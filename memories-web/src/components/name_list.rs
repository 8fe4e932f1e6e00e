//! The name-selection view.

use yew::prelude::*;

use memories_client::FetchState;
use memories_core::{Name, Route};

use crate::components::navigate;
use crate::hooks::use_names;

/// List of known names, each linking to that person's detail view, plus an
/// "Add new person" action backed by a blocking prompt.
///
/// No backend call creates the person; their first submitted memory does.
#[function_component(NameList)]
pub fn name_list() -> Html {
    let names = use_names();

    let on_add_new = Callback::from(|event: MouseEvent| {
        event.prevent_default();

        if let Some(input) = gloo::dialogs::prompt("Enter new name:", None) {
            if let Ok(name) = Name::parse(&input) {
                navigate(&Route::Person { name, memory: None });
            }
        }
    });

    match names {
        FetchState::Loading => html! { {"Loading..."} },
        FetchState::Failed(message) => html! {
            <p class="error">{ format!("Could not load names: {message}") }</p>
        },
        FetchState::Loaded(names) => html! {
            <ul class="NameList">
                { for names.iter().map(|name| html! {
                    <li key={name.as_str().to_owned()}>
                        <a href={Route::Person { name: name.clone(), memory: None }.fragment()}>
                            { name.to_string() }
                        </a>
                    </li>
                }) }
                <li class="new">
                    <a href="#" onclick={on_add_new}>{ "Add new person" }</a>
                </li>
            </ul>
        },
    }
}
