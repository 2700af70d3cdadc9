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

use crate::config::Config;
use crate::error::Fallible;
use crate::note::NoteRef;
use crate::vault::NoteStore;

/// The notes tagged for review, in order, with a cursor at the current one.
///
/// Built once when the view opens; the store is not re-queried afterwards.
/// Advancing moves the cursor; archiving removes the current entry from the
/// reviewable set, which leaves the cursor on the next note.
pub struct ReviewQueue {
    notes: Vec<NoteRef>,
    cursor: usize,
}

/// Queries the store once: every note under the review folder (the folder
/// itself or any descendant) carrying the review tag.
pub fn build_queue(store: &dyn NoteStore, config: &Config) -> Fallible<ReviewQueue> {
    let mut notes = Vec::new();
    for note in store.list_notes()? {
        if !note.is_under(&config.review_folder) {
            continue;
        }
        if store.tags(&note)?.contains(&config.review_tag) {
            notes.push(note);
        }
    }
    Ok(ReviewQueue { notes, cursor: 0 })
}

impl ReviewQueue {
    pub fn current(&self) -> Option<&NoteRef> {
        self.notes.get(self.cursor)
    }

    /// The note that becomes current after the next advance or archive.
    pub fn peek_next(&self) -> Option<&NoteRef> {
        self.notes.get(self.cursor + 1)
    }

    pub fn advance(&mut self) {
        if self.cursor < self.notes.len() {
            self.cursor += 1;
        }
    }

    /// Drops the current entry from the reviewable set. The cursor then
    /// addresses what was the next note.
    pub fn archive_current(&mut self) -> Option<NoteRef> {
        if self.cursor < self.notes.len() {
            Some(self.notes.remove(self.cursor))
        } else {
            None
        }
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.notes.len()
    }

    /// Notes not yet reviewed in this session, the current one included.
    pub fn remaining(&self) -> usize {
        self.notes.len() - self.cursor
    }
}
