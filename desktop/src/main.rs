use dioxus::prelude::*;
use dioxus_logger::tracing::info;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");

    let config = api::config::StoreConfig::from_env();
    let kind: &'static str = config.kind.into();
    info!("starting pharmacy history (desktop), {} store", kind);

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::App()
}
