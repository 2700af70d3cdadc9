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

use std::collections::HashSet;
use std::fs::create_dir_all;
use std::fs::read_to_string;
use std::fs::rename;
use std::path::Path;
use std::path::PathBuf;

use walkdir::WalkDir;

use crate::error::Fallible;
use crate::error::fail;
use crate::note::NoteRef;
use crate::tags::extract_tags;

/// The note store the queue and card controller are handed. Kept narrow so
/// the review logic never depends on where notes actually live.
pub trait NoteStore {
    /// Every markdown note in the store, sorted by path.
    fn list_notes(&self) -> Fallible<Vec<NoteRef>>;

    fn read_content(&self, note: &NoteRef) -> Fallible<String>;

    fn tags(&self, note: &NoteRef) -> Fallible<HashSet<String>>;

    /// Moves a note to a new store-relative path, creating intermediate
    /// folders. Fails rather than clobber an existing note.
    fn move_note(&self, note: &NoteRef, new_path: &Path) -> Fallible<NoteRef>;
}

/// A filesystem-backed note store: a directory tree of markdown files.
#[derive(Clone)]
pub struct Vault {
    root: PathBuf,
}

impl Vault {
    pub fn new(root: impl Into<PathBuf>) -> Fallible<Self> {
        let root: PathBuf = root.into();
        if !root.exists() {
            return fail("directory does not exist.");
        }
        let root = root.canonicalize()?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn absolute_path(&self, note: &NoteRef) -> PathBuf {
        self.root.join(note.path())
    }
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

impl NoteStore for Vault {
    fn list_notes(&self) -> Fallible<Vec<NoteRef>> {
        let mut notes = Vec::new();
        // Hidden directories hold host-application internals, not notes.
        let walker = WalkDir::new(&self.root)
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));
        for entry in walker {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "md") {
                let relative = path.strip_prefix(&self.root)?;
                notes.push(NoteRef::new(relative));
            }
        }
        notes.sort_by(|a, b| a.path().cmp(b.path()));
        Ok(notes)
    }

    fn read_content(&self, note: &NoteRef) -> Fallible<String> {
        Ok(read_to_string(self.absolute_path(note))?)
    }

    fn tags(&self, note: &NoteRef) -> Fallible<HashSet<String>> {
        let content = self.read_content(note)?;
        Ok(extract_tags(&content))
    }

    fn move_note(&self, note: &NoteRef, new_path: &Path) -> Fallible<NoteRef> {
        let source = self.absolute_path(note);
        let target = self.root.join(new_path);
        if target.exists() {
            return fail(format!("{} already exists.", target.display()));
        }
        if let Some(parent) = target.parent() {
            create_dir_all(parent)?;
        }
        rename(&source, &target)?;
        Ok(NoteRef::new(new_path))
    }
}
