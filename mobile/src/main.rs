use dioxus::prelude::*;
use dioxus_logger::tracing::info;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    info!("starting pharmacy history (mobile)");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::App()
}
