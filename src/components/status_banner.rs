use dioxus::prelude::*;

use crate::api::types::ServerStatus;

use super::use_server_status;

/// Tri-state readiness banner fed by the startup health check.
///
/// Nothing is rendered while the check is still in flight; each terminal
/// state gets its own message and severity.
#[component]
pub fn StatusBanner() -> Element {
    let status = use_server_status();

    let rendered = match status.read().clone() {
        ServerStatus::Unknown => rsx! {
            Fragment {}
        },
        ServerStatus::Ready { total_images } => rsx! {
            div { class: "ll-status ll-status--success",
                "✓ System ready! {total_images} images indexed."
            }
        },
        ServerStatus::NotIndexed => rsx! {
            div { class: "ll-status ll-status--warning",
                "⚠ No image index found. Run the indexer, then reload this page."
            }
        },
        ServerStatus::Unreachable => rsx! {
            div { class: "ll-status ll-status--error",
                "✗ Unable to connect to server."
            }
        },
    };
    rendered
}
