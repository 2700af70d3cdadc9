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

use std::path::Path;

use axum::Json;
use axum::extract::State;
use serde::Deserialize;
use serde::Serialize;

use crate::card::CardHandlers;
use crate::error::Fallible;
use crate::gesture::Action;
use crate::note::NoteRef;
use crate::review::state::MutableState;
use crate::review::state::ServerState;
use crate::vault::NoteStore;
use crate::vault::Vault;

/// A raw pointer event forwarded by the browser script. Coordinates are
/// client pixels; `t` is the script's `performance.now()` reading in
/// milliseconds.
#[derive(Debug, Deserialize)]
pub struct PointerEvent {
    kind: PointerKind,
    #[serde(default)]
    x: f64,
    #[serde(default)]
    y: f64,
    #[serde(default)]
    t: f64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum PointerKind {
    Down,
    Move,
    Up,
    Leave,
    DblClick,
}

/// What the script applies back to the card: the two custom properties, the
/// action marker, and whether the page must reload because the bound note
/// changed.
#[derive(Debug, Serialize)]
pub struct Feedback {
    swipe: String,
    rotation: String,
    marker: &'static str,
    advanced: bool,
}

impl Feedback {
    fn neutral() -> Self {
        Self {
            swipe: "0px".to_string(),
            rotation: "0deg".to_string(),
            marker: Action::None.as_str(),
            advanced: false,
        }
    }
}

/// The meaning of committed actions: left archives the note file, right
/// keeps it, double-click opens it in the system editor. Queue movement is
/// not done here; that belongs to the commit path below.
struct VaultHandlers<'a> {
    vault: &'a Vault,
    archive_folder: &'a str,
}

impl CardHandlers for VaultHandlers<'_> {
    fn on_left(&mut self, note: &NoteRef) -> Fallible<()> {
        let target = Path::new(self.archive_folder).join(note.file_name());
        let moved = self.vault.move_note(note, &target)?;
        log::debug!("archived {}", moved.path().display());
        Ok(())
    }

    fn on_right(&mut self, note: &NoteRef) -> Fallible<()> {
        log::debug!("kept {}", note.path().display());
        Ok(())
    }

    fn on_double_click(&mut self, note: &NoteRef) -> Fallible<()> {
        open::that(self.vault.absolute_path(note))?;
        Ok(())
    }
}

pub async fn pointer_handler(
    State(state): State<ServerState>,
    Json(event): Json<PointerEvent>,
) -> Json<Feedback> {
    let mut mutable = state.mutable.lock().unwrap();
    match pointer_event(&state, &mut mutable, event) {
        Ok(feedback) => Json(feedback),
        Err(e) => {
            // The action did not take effect; the card stays on the same
            // note and the next gesture can retry.
            log::error!("{e}");
            Json(Feedback::neutral())
        }
    }
}

fn pointer_event(
    state: &ServerState,
    mutable: &mut MutableState,
    event: PointerEvent,
) -> Fallible<Feedback> {
    let mut handlers = VaultHandlers {
        vault: &state.vault,
        archive_folder: &state.config.archive_folder,
    };
    let mut advanced = false;
    let mut exhausted = false;
    {
        let MutableState { queue, card } = &mut *mutable;
        let Some(card) = card.as_mut() else {
            return Ok(Feedback::neutral());
        };
        match event.kind {
            PointerKind::Down => {
                card.pointer_down(event.x, event.y, event.t);
            }
            PointerKind::Move => {
                card.pointer_move(event.x, event.y, event.t);
            }
            PointerKind::Up => {
                let committed = card.pointer_up(&mut handlers)?;
                match committed {
                    Action::None => {}
                    Action::Left => {
                        queue.archive_current();
                        advanced = true;
                    }
                    Action::Right => {
                        queue.advance();
                        advanced = true;
                    }
                }
                if advanced {
                    match queue.current().cloned() {
                        Some(next) => card.set_note(&state.vault, next),
                        None => exhausted = true,
                    }
                }
            }
            PointerKind::Leave => {
                card.pointer_leave();
            }
            PointerKind::DblClick => {
                card.double_click(&mut handlers)?;
            }
        }
    }
    if exhausted {
        mutable.card = None;
    }
    let feedback = match &mutable.card {
        Some(card) => {
            let surface = card.surface();
            Feedback {
                swipe: surface.swipe_amount(),
                rotation: surface.rotation_amount(),
                marker: surface.marker().as_str(),
                advanced,
            }
        }
        None => Feedback {
            advanced,
            ..Feedback::neutral()
        },
    };
    Ok(feedback)
}
