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

//! Test helpers: an in-memory note store and fixture plumbing.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::collections::HashSet;
use std::fs::create_dir_all;
use std::path::Path;
use std::path::PathBuf;

use crate::error::Fallible;
use crate::error::fail;
use crate::note::NoteRef;
use crate::tags::extract_tags;
use crate::vault::NoteStore;

/// Writes a note file under `root`, creating parent folders.
pub fn write_note(root: &Path, relative: &str, content: &str) -> Fallible<()> {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// An in-memory `NoteStore` for tests that don't need a real filesystem.
pub struct MemStore {
    notes: RefCell<BTreeMap<PathBuf, String>>,
}

impl MemStore {
    pub fn new(notes: &[(&str, &str)]) -> Self {
        let notes = notes
            .iter()
            .map(|(path, content)| (PathBuf::from(path), content.to_string()))
            .collect();
        Self {
            notes: RefCell::new(notes),
        }
    }

    /// Simulates a note deleted out from under the card.
    pub fn delete(&self, note: &NoteRef) {
        self.notes.borrow_mut().remove(note.path());
    }

    pub fn contains(&self, path: &str) -> bool {
        self.notes.borrow().contains_key(Path::new(path))
    }
}

impl NoteStore for MemStore {
    fn list_notes(&self) -> Fallible<Vec<NoteRef>> {
        Ok(self.notes.borrow().keys().map(NoteRef::new).collect())
    }

    fn read_content(&self, note: &NoteRef) -> Fallible<String> {
        match self.notes.borrow().get(note.path()) {
            Some(content) => Ok(content.clone()),
            None => fail(format!("no such note: {}", note.path().display())),
        }
    }

    fn tags(&self, note: &NoteRef) -> Fallible<HashSet<String>> {
        let content = self.read_content(note)?;
        Ok(extract_tags(&content))
    }

    fn move_note(&self, note: &NoteRef, new_path: &Path) -> Fallible<NoteRef> {
        let mut notes = self.notes.borrow_mut();
        if notes.contains_key(new_path) {
            return fail(format!("{} already exists.", new_path.display()));
        }
        match notes.remove(note.path()) {
            Some(content) => {
                notes.insert(new_path.to_path_buf(), content);
                Ok(NoteRef::new(new_path))
            }
            None => fail(format!("no such note: {}", note.path().display())),
        }
    }
}
