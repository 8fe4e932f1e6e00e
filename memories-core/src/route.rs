//! URL-fragment routing.
//!
//! View selection is driven entirely by the fragment: an explicit matcher
//! table is evaluated top to bottom on every route-state change, and a
//! fragment no matcher claims falls through to the name-selection view.
//! There is no malformed-route error state.

use crate::types::{MemoryId, Name};

/// Which view the app is showing, derived from the URL fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// No name selected: the list of known names.
    NameSelection,
    /// Detail view for one person.
    Person {
        /// The selected person.
        name: Name,
        /// A memory deep-linked by `#<name>/<id>`, highlighted once the
        /// list renders. Non-numeric trailing segments are ignored.
        memory: Option<MemoryId>,
    },
}

/// The route table. First matcher to claim the fragment wins; the
/// name-selection view is the fallthrough.
const MATCHERS: &[fn(&str) -> Option<Route>] = &[match_person];

impl Route {
    /// Resolve a URL fragment (with or without its leading `#`) to a route.
    #[must_use]
    pub fn from_fragment(fragment: &str) -> Self {
        let path = fragment.strip_prefix('#').unwrap_or(fragment);
        MATCHERS
            .iter()
            .find_map(|matcher| matcher(path))
            .unwrap_or(Route::NameSelection)
    }

    /// The canonical fragment for this route, suitable for links and for
    /// assigning to `location.hash`.
    #[must_use]
    pub fn fragment(&self) -> String {
        match self {
            Route::NameSelection => "#".to_owned(),
            Route::Person { name, memory: None } => format!("#{name}"),
            Route::Person {
                name,
                memory: Some(id),
            } => format!("#{name}/{id}"),
        }
    }
}

/// `<name>` or `<name>/<anything>`: the name is everything before the first
/// slash, and the trailing path only contributes an optional memory id.
fn match_person(path: &str) -> Option<Route> {
    let (name, rest) = match path.split_once('/') {
        Some((name, rest)) => (name, Some(rest)),
        None => (path, None),
    };

    if name.is_empty() {
        return None;
    }

    let memory = rest
        .and_then(|rest| rest.split('/').next())
        .and_then(|segment| segment.parse().ok());

    Some(Route::Person {
        name: Name::from(name),
        memory,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_bare_fragments_select_names() {
        assert_eq!(Route::from_fragment(""), Route::NameSelection);
        assert_eq!(Route::from_fragment("#"), Route::NameSelection);
    }

    #[test]
    fn plain_name_selects_person() {
        assert_eq!(
            Route::from_fragment("#Alice"),
            Route::Person {
                name: Name::from("Alice"),
                memory: None,
            }
        );
    }

    #[test]
    fn trailing_path_is_ignored_for_name_extraction() {
        let route = Route::from_fragment("#Alice/42");
        assert_eq!(
            route,
            Route::Person {
                name: Name::from("Alice"),
                memory: Some(MemoryId(42)),
            }
        );

        // New-person links end in a bare slash; no memory is selected.
        assert_eq!(
            Route::from_fragment("#Bob/"),
            Route::Person {
                name: Name::from("Bob"),
                memory: None,
            }
        );

        // Deeper paths still resolve to the same person.
        assert_eq!(
            Route::from_fragment("#Alice/42/extra"),
            Route::Person {
                name: Name::from("Alice"),
                memory: Some(MemoryId(42)),
            }
        );
    }

    #[test]
    fn non_numeric_trailing_segment_selects_no_memory() {
        assert_eq!(
            Route::from_fragment("#Alice/latest"),
            Route::Person {
                name: Name::from("Alice"),
                memory: None,
            }
        );
    }

    #[test]
    fn fragments_round_trip() {
        let routes = [
            Route::NameSelection,
            Route::Person {
                name: Name::from("Alice"),
                memory: None,
            },
            Route::Person {
                name: Name::from("Bob"),
                memory: Some(MemoryId(7)),
            },
        ];

        for route in routes {
            assert_eq!(Route::from_fragment(&route.fragment()), route);
        }
    }
}
