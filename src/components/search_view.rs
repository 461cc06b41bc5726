use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedReceiver;
use futures_util::StreamExt;

use crate::api::ApiClient;
use crate::candidate::UploadCandidate;
use crate::classify::classify;
use crate::handoff::HandoffPayload;
use crate::session::{
    CandidateId, SearchParams, SearchSession, SessionState, TOP_K_DEFAULT, TOP_K_MAX, TOP_K_MIN,
};

use super::browse::BrowseImages;
use super::status_banner::StatusBanner;
use super::upload_card::UploadCard;
use super::{use_handoff, View};

/// Messages for the search coroutine
enum SearchMessage {
    Submit {
        id: CandidateId,
        candidate: UploadCandidate,
        params: SearchParams,
    },
}

/// Search entry view: upload zone, top-k control, status banner, random
/// browse. Owns the [`SearchSession`] and the coroutine that drives it; on
/// success the annotated response is handed off and the app navigates to the
/// results view.
#[component]
pub fn SearchView(on_navigate: EventHandler<View>) -> Element {
    let mut session = use_signal(SearchSession::new);
    let mut candidate = use_signal(|| Option::<(CandidateId, UploadCandidate)>::None);
    let mut preview = use_signal(|| Option::<String>::None);
    let mut top_k = use_signal(|| TOP_K_DEFAULT);
    let mut handoff = use_handoff();

    // Search coroutine - runs in background. Each submission carries the
    // candidate id it belongs to; `finish` drops completions whose candidate
    // was superseded while the request was in flight.
    let search_task = use_coroutine({
        let mut session = session;
        let mut handoff = handoff;
        let preview = preview;

        move |mut rx: UnboundedReceiver<SearchMessage>| async move {
            while let Some(SearchMessage::Submit {
                id,
                candidate,
                params,
            }) = rx.next().await
            {
                info!(
                    "🔍 Searching with '{}' ({} bytes, top_k {})",
                    candidate.name(),
                    candidate.size(),
                    params.top_k()
                );

                let outcome = ApiClient::default()
                    .search(&candidate, params)
                    .await
                    .map(classify);
                match &outcome {
                    Ok(annotated) => {
                        info!("✅ Search completed: {} results", annotated.response.count)
                    }
                    Err(e) => error!("❌ Search failed: {e}"),
                }

                if !session.write().finish(id, outcome) {
                    info!("Discarding completion for a superseded candidate");
                    continue;
                }

                if let Some(annotated) = session.peek().success().cloned() {
                    handoff.write().put(HandoffPayload {
                        annotated,
                        preview: preview.peek().clone(),
                    });
                    on_navigate.call(View::Results);
                }
            }
        }
    });

    let handle_select = move |accepted: UploadCandidate| {
        info!("📂 Selected '{}' ({} bytes)", accepted.name(), accepted.size());
        // Selecting a new image invalidates any prior or in-flight result
        let id = session.write().select_candidate();
        preview.set(Some(accepted.preview_data_uri()));
        candidate.set(Some((id, accepted)));
    };

    let handle_submit = move |_| {
        // The trigger is disabled without a candidate; ignore defensively
        let Some((id, accepted)) = candidate.peek().clone() else {
            return;
        };
        let params = SearchParams::new(top_k());
        // Ignored while a search is already loading
        if !session.write().begin(id) {
            return;
        }
        search_task.send(SearchMessage::Submit {
            id,
            candidate: accepted,
            params,
        });
    };

    let searching = session.read().is_loading();
    let failure = match session.read().state() {
        SessionState::Failed(msg) => Some(msg.clone()),
        _ => None,
    };

    rsx! {
        div { class: "ll-container",
            header {
                h1 { "🎨 Lookalike" }
                p { class: "ll-subtitle",
                    "Upload an image to find visually similar images"
                }
                StatusBanner {}
            }

            main {
                UploadCard { busy: searching, on_select: handle_select }

                div { class: "ll-controls",
                    label { r#for: "top-k", "Number of similar images:" }
                    input {
                        id: "top-k",
                        r#type: "number",
                        min: "{TOP_K_MIN}",
                        max: "{TOP_K_MAX}",
                        value: "{top_k}",
                        oninput: move |evt| {
                            if let Ok(value) = evt.value().parse() {
                                top_k.set(value);
                            }
                        },
                    }
                    button {
                        class: "ll-btn ll-btn--primary",
                        disabled: candidate.read().is_none() || searching,
                        onclick: handle_submit,
                        "Search Similar Images"
                    }
                }

                if let Some(uri) = preview.read().clone() {
                    section { class: "ll-query-section",
                        h2 { "Query Image" }
                        img { class: "ll-query-image", src: "{uri}", alt: "Query" }
                    }
                }

                if searching {
                    div { class: "ll-loader",
                        div { class: "ll-spinner" }
                        p { "Analyzing image and finding similar matches..." }
                    }
                }

                if let Some(msg) = failure {
                    div { class: "ll-status ll-status--error", "Error: {msg}" }
                }

                BrowseImages {}
            }
        }
    }
}
