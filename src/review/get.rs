// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use maud::Markup;
use maud::PreEscaped;
use maud::html;

use crate::review::state::ServerState;
use crate::review::template::page_template;

pub async fn get_handler(State(state): State<ServerState>) -> (StatusCode, Html<String>) {
    let mutable = state.mutable.lock().unwrap();
    let header = html! {
        div.header {
            h1 { "Review" }
            div.progress {
                (state.total_notes - mutable.queue.remaining()) " / " (state.total_notes)
            }
        }
    };
    let body: Markup = match &mutable.card {
        Some(card) => {
            let surface = card.surface();
            let style = format!(
                "--swipe-amount: {}; --rotation-amount: {};",
                surface.swipe_amount(),
                surface.rotation_amount()
            );
            html! {
                div.root {
                    (header)
                    div.display-card data-action=(surface.marker().as_str()) style=(style) {
                        div.note-title {
                            h2 { (card.note().title()) }
                        }
                        div.content .rich-text {
                            (PreEscaped(surface.content_html()))
                        }
                    }
                    div.hint {
                        "drag left to archive, right to keep, double-click to open"
                    }
                }
            }
        }
        None if state.total_notes == 0 => {
            // Nothing matched the review filter at open. The header is
            // still rendered; there is just no card under it.
            html! {
                div.root {
                    (header)
                }
            }
        }
        None => html! {
            div.root {
                (header)
                div.finished {
                    h2 { "All caught up" }
                }
            }
        },
    };
    let html = page_template(body);
    (StatusCode::OK, Html(html.into_string()))
}
