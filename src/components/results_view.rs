use dioxus::prelude::*;

use crate::handoff::HandoffPayload;

use super::result_card::ResultCard;
use super::{use_handoff, View};

/// Results view, rendered entirely from the handoff payload; no network
/// calls happen here.
///
/// The payload is consumed on first read, so entering this view without a
/// prior search (or reloading it) shows the empty state with a way back,
/// never an error.
#[component]
pub fn ResultsView(on_navigate: EventHandler<View>) -> Element {
    let mut handoff = use_handoff();
    let payload = use_hook(|| handoff.write().take());

    let Some(HandoffPayload { annotated, preview }) = payload else {
        return rsx! {
            div { class: "ll-container",
                div { class: "ll-empty-state",
                    p { "No results to display" }
                    button {
                        class: "ll-btn ll-btn--primary",
                        onclick: move |_| on_navigate.call(View::Search),
                        "Go Back"
                    }
                }
            }
        };
    };

    let count = annotated.response.count;

    rsx! {
        div { class: "ll-container",
            header {
                h1 { "🎨 Search Results" }
                button {
                    class: "ll-btn ll-btn--secondary",
                    onclick: move |_| on_navigate.call(View::Search),
                    "← Back to Search"
                }
            }

            main {
                if let Some(uri) = preview {
                    section { class: "ll-query-section",
                        h2 { "Query Image" }
                        img { class: "ll-query-image", src: "{uri}", alt: "Query" }
                    }
                }

                section { class: "ll-results-section",
                    if annotated.exact_match {
                        div { class: "ll-exact-banner",
                            "✓ Exact match found! This image exists in the database."
                        }
                    }

                    h2 {
                        "Similar Images "
                        span { class: "ll-results-count", "({count} results)" }
                    }

                    div { class: "ll-results-grid",
                        for (idx, result) in annotated.response.results.iter().enumerate() {
                            ResultCard {
                                key: "{result.path}",
                                rank: idx + 1,
                                result: result.clone(),
                            }
                        }
                    }
                }
            }
        }
    }
}
