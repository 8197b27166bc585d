use crate::access::home_access;
use crate::components::pico::Spinner;
use crate::hooks::use_access_guard;
use dioxus::prelude::*;

/// Sends the visitor to the landing screen for their role.
#[allow(non_snake_case)]
#[component]
pub fn Home() -> Element {
    use_access_guard(home_access);

    rsx! {
        Spinner {}
    }
}
