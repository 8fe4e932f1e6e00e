//! Presentation components.

mod memory_list;
mod name_list;
mod new_memory;

pub use memory_list::MemoryList;
pub use name_list::NameList;
pub use new_memory::NewMemory;

use memories_core::Route;

/// Navigate the hash router to `route`.
pub(crate) fn navigate(route: &Route) {
    let _ = gloo::utils::window().location().set_hash(&route.fragment());
}
