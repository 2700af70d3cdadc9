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
use std::path::PathBuf;

/// A reference to a markdown note, as a vault-relative path.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NoteRef {
    path: PathBuf,
}

impl NoteRef {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The file name, e.g. `groceries.md`.
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
    }

    /// The note title: the file name without its extension.
    pub fn title(&self) -> &str {
        self.path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default()
    }

    /// Whether the note is the given folder itself or any descendant of it.
    pub fn is_under(&self, folder: &str) -> bool {
        self.path.starts_with(folder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        let note = NoteRef::new("Inbox/groceries.md");
        assert_eq!(note.file_name(), "groceries.md");
        assert_eq!(note.title(), "groceries");
    }

    #[test]
    fn test_is_under() {
        let note = NoteRef::new("Inbox/deep/note.md");
        assert!(note.is_under("Inbox"));
        assert!(note.is_under("Inbox/deep"));
        assert!(!note.is_under("Archive"));
        // Folder matching is by path component, not string prefix.
        assert!(!note.is_under("In"));
    }
}
