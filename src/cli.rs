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

use clap::Parser;

use crate::config::Config;
use crate::error::Fallible;
use crate::queue::build_queue;
use crate::review::server::start_server;
use crate::vault::Vault;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Review tagged notes in the browser.
    Review {
        /// Optional path to the vault directory.
        vault: Option<String>,
        /// Port to serve the review view on.
        #[arg(long, default_value_t = 8000)]
        port: u16,
    },
    /// List the notes currently tagged for review.
    List {
        /// Optional path to the vault directory.
        vault: Option<String>,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Review { vault, port } => {
            let directory = resolve_directory(vault)?;
            start_server(directory, port).await
        }
        Command::List { vault } => {
            let directory = resolve_directory(vault)?;
            let vault = Vault::new(directory)?;
            let config = Config::load(vault.root())?;
            let mut queue = build_queue(&vault, &config)?;
            if queue.is_empty() {
                println!(
                    "No notes tagged #{} under {:?}.",
                    config.review_tag, config.review_folder
                );
            } else {
                println!("{} notes to review:", queue.remaining());
                while let Some(note) = queue.current() {
                    println!("  {}", note.path().display());
                    queue.advance();
                }
            }
            Ok(())
        }
    }
}

fn resolve_directory(vault: Option<String>) -> Fallible<PathBuf> {
    match vault {
        Some(dir) => Ok(PathBuf::from(dir)),
        None => Ok(std::env::current_dir()?),
    }
}
