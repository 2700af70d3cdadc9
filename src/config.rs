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

use std::fs::read_to_string;
use std::path::Path;

use serde::Deserialize;

use crate::error::Fallible;

pub const CONFIG_FILE_NAME: &str = "noteswipe.toml";

/// Vault-level configuration, read once at startup from `noteswipe.toml` in
/// the vault root. Missing file or missing keys fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Folder whose notes are considered for review.
    pub review_folder: String,
    /// Tag a note must carry to enter the review queue.
    pub review_tag: String,
    /// Folder that left-swiped notes are moved into.
    pub archive_folder: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            review_folder: "Inbox".to_string(),
            review_tag: "review".to_string(),
            archive_folder: "Archive".to_string(),
        }
    }
}

impl Config {
    pub fn load(vault_root: &Path) -> Fallible<Self> {
        let path = vault_root.join(CONFIG_FILE_NAME);
        if !path.exists() {
            log::debug!("No {CONFIG_FILE_NAME} found, using defaults.");
            return Ok(Self::default());
        }
        let content = read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
