use dioxus::prelude::*;

use crate::api::types::SearchResult;
use crate::classify::similarity_pct;

/// One match in the results grid: the image plus a similarity badge, with the
/// exact match (top rank only) visually distinguished.
#[component]
pub fn ResultCard(rank: usize, result: SearchResult) -> Element {
    let pct = similarity_pct(result.similarity);

    let item_class = if result.is_exact_match {
        "ll-result-item ll-result-item--exact"
    } else {
        "ll-result-item"
    };
    let badge_class = if result.is_exact_match {
        "ll-similarity-badge ll-similarity-badge--exact"
    } else {
        "ll-similarity-badge"
    };

    rsx! {
        div { class: item_class,
            img {
                src: "/{result.path}",
                alt: "Similar image {rank}",
                loading: "lazy",
            }
            div { class: badge_class,
                if result.is_exact_match {
                    "⭐ {pct}%"
                } else {
                    "{pct}%"
                }
            }
        }
    }
}
