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

use std::sync::Arc;
use std::sync::Mutex;

use crate::card::CardController;
use crate::config::Config;
use crate::queue::ReviewQueue;
use crate::vault::Vault;

#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub vault: Vault,
    pub total_notes: usize,
    pub mutable: Arc<Mutex<MutableState>>,
}

/// Everything a pointer event may touch, behind one lock: each event is
/// processed to completion before the next, so the up-handler always sees
/// the marker left by the last move.
pub struct MutableState {
    pub queue: ReviewQueue,
    /// `None` when the queue was empty at open, or once it is exhausted.
    pub card: Option<CardController>,
}
