use crate::components::empty_state::EmptyState;
use crate::Route;
use dioxus::prelude::*;

#[allow(non_snake_case)]
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        EmptyState {
            title: "Page not found".to_string(),
            description: Some(format!("Nothing lives at {path}.")),
            action: rsx! {
                Link { to: Route::Home {}, "Go home" }
            },
        }
    }
}
