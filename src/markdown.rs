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

use pulldown_cmark::Parser;
use pulldown_cmark::html::push_html;

use crate::tags::split_frontmatter;

/// Renders note content to HTML for the card surface. The frontmatter block
/// is metadata, not prose, so it is stripped before rendering.
pub fn note_to_html(content: &str) -> String {
    let (_, body) = split_frontmatter(content);
    let parser = Parser::new(body);
    let mut html_output = String::new();
    push_html(&mut html_output, parser);
    html_output
}
