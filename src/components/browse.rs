use dioxus::logger::tracing::error;
use dioxus::prelude::*;

use crate::api::types::RandomImage;
use crate::api::ApiClient;

const BROWSE_COUNT: usize = 20;

/// Random-sample browser for exploring the index without a query image.
///
/// Fully independent of the search session: a failed fetch is logged and
/// leaves the grid unchanged.
#[component]
pub fn BrowseImages() -> Element {
    let mut images = use_signal(Vec::<RandomImage>::new);
    let mut loading = use_signal(|| false);

    let load = move |_| {
        if loading() {
            return;
        }
        spawn(async move {
            loading.set(true);
            match ApiClient::default().random(BROWSE_COUNT).await {
                Ok(sample) => images.set(sample.results),
                Err(e) => error!("❌ Failed to load random images: {e}"),
            }
            loading.set(false);
        });
    };

    rsx! {
        section { class: "ll-browse-section",
            h2 { "Browse Random Images" }
            button {
                class: "ll-btn ll-btn--secondary",
                disabled: loading(),
                onclick: load,
                if loading() {
                    "Loading..."
                } else {
                    "Load Random Images"
                }
            }
            div { class: "ll-results-grid",
                for image in images.read().iter() {
                    div { class: "ll-result-item", key: "{image.path}",
                        img {
                            src: "/{image.path}",
                            alt: "Indexed image",
                            loading: "lazy",
                        }
                    }
                }
            }
        }
    }
}
