// The client-side Dioxus application logic.

use dioxus::prelude::*;

pub mod access;
pub mod auth;
mod components;
pub mod hooks;
mod screens;

use auth::AuthProvider;
use components::pico::Container;
use screens::dashboard::Dashboard;
use screens::history::PharmacyHistory;
use screens::home::Home;
use screens::login::Login;
use screens::not_found::NotFound;
use screens::pharmacy_dashboard::PharmacyDashboard;
use screens::request_detail::PharmacyRequest;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

/// Every screen in the app. Each variant renders the component of the same name.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/pharmacy/dashboard")]
    PharmacyDashboard {},
    #[route("/pharmacy/history")]
    PharmacyHistory {},
    #[route("/pharmacy/request/:request_id")]
    PharmacyRequest { request_id: String },
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let app_css = r#"
    /* --- LOADING --- */
    .spinner {
        display: flex;
        justify-content: center;
        padding: 3rem 0;
    }

    /* --- SCREEN HEADER --- */
    .screen-header {
        display: flex;
        align-items: center;
        gap: 1rem;
        padding: 1rem 0;
        border-bottom: 1px solid var(--pico-muted-border-color);
        margin-bottom: 1.5rem;
    }
    .screen-header h1 { font-size: 1.25rem; margin: 0; }
    .screen-header p { margin: 0; color: var(--pico-muted-color); font-size: 0.875rem; }
    .back-button {
        width: auto;
        margin: 0;
        padding: 0.5rem 0.75rem;
        border-radius: 999px;
        background: transparent;
        color: var(--pico-color);
        border: none;
    }

    /* --- SUMMARY TILES --- */
    .stat-tile {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        margin-bottom: 1.5rem;
    }
    .stat-icon {
        width: 2.5rem;
        height: 2.5rem;
        border-radius: 0.5rem;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .stat-icon.positive { background: #dcfce7; color: #16a34a; }
    .stat-icon.muted { background: #f3f4f6; color: #4b5563; }
    .stat-value { font-size: 1.5rem; font-weight: bold; margin: 0; }
    .stat-label { font-size: 0.875rem; color: var(--pico-muted-color); margin: 0; }

    /* --- HISTORY LIST --- */
    .history-list { display: flex; flex-direction: column; gap: 0.75rem; }
    .history-card {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        width: 100%;
        margin: 0;
        padding: 1rem;
        text-align: left;
        background: var(--pico-card-background-color);
        color: var(--pico-color);
        border: 1px solid var(--pico-muted-border-color);
        border-radius: 0.75rem;
    }
    .history-card:hover { border-color: var(--pico-secondary-border); }
    .history-card-icon {
        flex-shrink: 0;
        width: 2.5rem;
        height: 2.5rem;
        border-radius: 999px;
        background: #f3f4f6;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .history-card-body { flex: 1; min-width: 0; }
    .history-card-body p { margin: 0; }
    .history-card-title { font-weight: 500; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; }
    .history-card-subtitle { font-size: 0.875rem; color: var(--pico-muted-color); }
    .history-card-meta { display: flex; align-items: center; gap: 0.5rem; margin-top: 0.25rem; }
    .history-card-chevron { flex-shrink: 0; color: var(--pico-muted-color); font-size: 1.25rem; }

    .badge {
        display: inline-flex;
        align-items: center;
        gap: 0.25rem;
        padding: 0.125rem 0.5rem;
        border-radius: 999px;
        font-size: 0.75rem;
        font-weight: 500;
    }
    .badge.available { color: #16a34a; background: #f0fdf4; }
    .badge.not-available { color: #4b5563; background: #f3f4f6; }

    /* --- EMPTY STATE --- */
    .empty-state {
        display: flex;
        flex-direction: column;
        align-items: center;
        text-align: center;
        padding: 3rem 1rem;
        color: var(--pico-muted-color);
    }
    .empty-state-icon {
        width: 5rem;
        height: 5rem;
        margin-bottom: 1rem;
        border-radius: 999px;
        background: var(--pico-card-sectioning-background-color);
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 2.5rem;
    }
    .empty-state h4 { margin-bottom: 0.5rem; }

    .error { color: var(--pico-del-color); }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: PICO_CSS,
        }
        style {
            "{app_css}"
        }
        AuthProvider {
            Container {
                Router::<Route> {}
            }
        }
    }
}
