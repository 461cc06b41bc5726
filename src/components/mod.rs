//! UI components for the Lookalike client.
//!
//! The app is two views behind a [`View`] switch: the search entry view
//! (upload, controls, status banner, random browse) and the results view,
//! which renders purely from the one-shot handoff payload.
//!
//! # Context Providers
//!
//! Components use Dioxus context for shared state:
//!
//! ```ignore
//! // Backend readiness, set once by the startup health check
//! let status = use_server_status();
//!
//! // One-shot result handoff between views
//! let handoff = use_handoff();
//! ```

mod browse;
mod result_card;
mod results_view;
mod search_view;
mod status_banner;
mod upload_card;

pub use results_view::ResultsView;
pub use search_view::SearchView;

use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::api::types::ServerStatus;
use crate::api::ApiClient;
use crate::handoff::HandoffSlot;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// View selection enum for navigation. The results view is reachable only
/// through an in-app transition; there is no URL routing to it.
#[derive(Clone, Copy, PartialEq)]
pub enum View {
    Search,
    Results,
}

/// Backend readiness context provider
pub fn use_server_status() -> Signal<ServerStatus> {
    use_context::<Signal<ServerStatus>>()
}

/// Handoff slot context provider
pub fn use_handoff() -> Signal<HandoffSlot> {
    use_context::<Signal<HandoffSlot>>()
}

#[component]
pub fn App() -> Element {
    let server_status = use_signal(|| ServerStatus::Unknown);
    use_context_provider(|| server_status);

    let handoff = use_signal(HandoffSlot::default);
    use_context_provider(|| handoff);

    // Readiness check: once at startup, no polling loop
    let mut status_signal = server_status;
    use_effect(move || {
        if *status_signal.read() == ServerStatus::Unknown {
            spawn(async move {
                let outcome = ApiClient::default().health().await;
                let status = ServerStatus::from_health(outcome);
                info!("🩺 Backend status: {:?}", status);
                status_signal.set(status);
            });
        }
    });

    let mut current_view = use_signal(|| View::Search);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "ll-app",
            if current_view() == View::Search {
                SearchView {
                    on_navigate: move |view| current_view.set(view)
                }
            } else {
                ResultsView {
                    on_navigate: move |view| current_view.set(view)
                }
            }
        }
    }
}
