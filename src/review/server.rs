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

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use axum::Router;
use axum::http::HeaderName;
use axum::http::StatusCode;
use axum::http::header::CACHE_CONTROL;
use axum::http::header::CONTENT_TYPE;
use axum::response::Html;
use axum::routing::get;
use axum::routing::post;
use tokio::net::TcpListener;
use tokio::net::TcpStream;
use tokio::time::sleep;

use crate::card::CardController;
use crate::config::Config;
use crate::error::Fallible;
use crate::queue::build_queue;
use crate::review::get::get_handler;
use crate::review::post::pointer_handler;
use crate::review::state::MutableState;
use crate::review::state::ServerState;
use crate::vault::Vault;

pub async fn start_server(directory: PathBuf, port: u16) -> Fallible<()> {
    let vault = Vault::new(directory)?;
    let config = Config::load(vault.root())?;
    log::debug!(
        "Reviewing #{} notes under {:?} in {}.",
        config.review_tag,
        config.review_folder,
        vault.root().display()
    );

    let queue = build_queue(&vault, &config)?;
    let card = match queue.current().cloned() {
        Some(note) => Some(CardController::mount(&vault, note)?),
        None => {
            // Expected terminal state for the session, not an error: the
            // header is served with no card under it.
            log::warn!(
                "no notes tagged #{} under {:?}.",
                config.review_tag,
                config.review_folder
            );
            None
        }
    };

    let state = ServerState {
        config,
        vault,
        total_notes: queue.remaining(),
        mutable: Arc::new(Mutex::new(MutableState { queue, card })),
    };
    let app = Router::new();
    let app = app.route("/", get(get_handler));
    let app = app.route("/pointer", post(pointer_handler));
    let app = app.route("/script.js", get(script));
    let app = app.route("/style.css", get(stylesheet));
    let app = app.fallback(not_found_handler);
    let app = app.with_state(state);
    let bind = format!("0.0.0.0:{port}");

    // Start a separate task to open the browser.
    let url = format!("http://{bind}/");
    let poll = bind.clone();
    tokio::spawn(async move {
        loop {
            if let Ok(stream) = TcpStream::connect(&poll).await {
                drop(stream);
                break;
            }
            sleep(Duration::from_millis(1)).await;
        }
        let _ = open::that(url);
    });

    // Start the server.
    log::debug!("Starting server on {bind}");
    let listener = TcpListener::bind(&bind).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn script() -> (StatusCode, [(HeaderName, &'static str); 1], &'static str) {
    (
        StatusCode::OK,
        [(CONTENT_TYPE, "text/javascript")],
        include_str!("script.js"),
    )
}

async fn stylesheet() -> (StatusCode, [(HeaderName, &'static str); 2], &'static [u8]) {
    let bytes = include_bytes!("style.css");
    (
        StatusCode::OK,
        [
            (CONTENT_TYPE, "text/css"),
            (CACHE_CONTROL, "public, max-age=604800, immutable"),
        ],
        bytes,
    )
}

async fn not_found_handler() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html("Not Found".to_string()))
}
