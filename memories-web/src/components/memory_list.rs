//! The age-bucketed memory list.

use yew::prelude::*;

use memories_client::FetchState;
use memories_core::{group_by_age, Memory, MemoryId, Name};

use crate::hooks::use_memories;

/// Props for [`MemoryList`].
#[derive(Properties, PartialEq)]
pub struct MemoryListProps {
    /// Whose memories to show.
    pub name: Name,
    /// Opaque reload token; a change forces a re-fetch.
    pub reload: u64,
    /// A deep-linked memory to highlight once the list renders.
    #[prop_or_default]
    pub highlight: Option<MemoryId>,
}

/// Memories for one person, grouped into contiguous runs of equal
/// `(years, months)` age, in the order the backend returned them.
#[function_component(MemoryList)]
pub fn memory_list(props: &MemoryListProps) -> Html {
    let memories = use_memories(props.name.clone(), props.reload);

    match memories {
        FetchState::Loading => html! { {"Loading memories..."} },
        FetchState::Failed(message) => html! {
            <p class="error">{ format!("Could not load memories: {message}") }</p>
        },
        FetchState::Loaded(memories) => {
            let groups = group_by_age(&memories);
            html! {
                <div class="MemoryList">
                    { for groups.iter().map(|group| html! {
                        <div key={format!("{}-{}", group.age.years, group.age.months)}>
                            <h2>{ group.age.to_string() }</h2>
                            <ul>
                                { for group.memories.iter().map(|memory| html! {
                                    <li key={memory.id.0}
                                        class={(props.highlight == Some(memory.id)).then_some("highlight")}>
                                        <MemoryItem memory={memory.clone()} />
                                    </li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div>
            }
        }
    }
}

/// Props for [`MemoryItem`].
#[derive(Properties, PartialEq)]
struct MemoryItemProps {
    memory: Memory,
}

/// One memory. The date and age fields travel with the record but only the
/// note body is rendered here; the age is already the section header.
#[function_component(MemoryItem)]
fn memory_item(props: &MemoryItemProps) -> Html {
    html! { { props.memory.note.clone() } }
}
