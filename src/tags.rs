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

//! Tag extraction from note text. Tags come from two places: a `tags:` entry
//! in the YAML frontmatter block, and inline `#tag` tokens in the body.

use std::collections::HashSet;

/// Splits a note into its frontmatter block (without the `---` fences) and
/// its body. Notes without frontmatter have the whole text as the body.
pub fn split_frontmatter(content: &str) -> (Option<&str>, &str) {
    let Some(rest) = content.strip_prefix("---\n") else {
        return (None, content);
    };
    match rest.split_once("\n---") {
        Some((frontmatter, body)) => {
            let body = body.strip_prefix('\n').unwrap_or(body);
            (Some(frontmatter), body)
        }
        None => (None, content),
    }
}

/// Collects every tag in the note, without the leading `#`.
pub fn extract_tags(content: &str) -> HashSet<String> {
    let mut tags = HashSet::new();
    let (frontmatter, body) = split_frontmatter(content);
    if let Some(frontmatter) = frontmatter {
        collect_frontmatter_tags(frontmatter, &mut tags);
    }
    collect_inline_tags(body, &mut tags);
    tags
}

/// Parses the `tags:` entry of a frontmatter block. Both the inline form
/// (`tags: [a, b]` or `tags: a, b`) and the list form (`- a` on following
/// lines) are accepted.
fn collect_frontmatter_tags(frontmatter: &str, tags: &mut HashSet<String>) {
    let mut in_list = false;
    for line in frontmatter.lines() {
        if in_list {
            let trimmed = line.trim_start();
            if let Some(item) = trimmed.strip_prefix("- ") {
                push_tag(item, tags);
                continue;
            }
            in_list = false;
        }
        if let Some(value) = line.strip_prefix("tags:") {
            let value = value.trim().trim_start_matches('[').trim_end_matches(']');
            if value.is_empty() {
                in_list = true;
            } else {
                for item in value.split(',') {
                    push_tag(item, tags);
                }
            }
        }
    }
}

/// Scans the body for `#tag` tokens. A token counts as a tag when the `#` is
/// at the start of a line or preceded by whitespace and is followed by at
/// least one tag character, which rules out markdown headings.
fn collect_inline_tags(body: &str, tags: &mut HashSet<String>) {
    let mut prev_is_boundary = true;
    let mut chars = body.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if c == '#' && prev_is_boundary {
            let rest = &body[i + 1..];
            let len = rest
                .chars()
                .take_while(|&c| is_tag_char(c))
                .map(|c| c.len_utf8())
                .sum::<usize>();
            if len > 0 {
                tags.insert(rest[..len].to_string());
                // Skip past the tag so `#a#b` does not parse as two tags.
                while chars.peek().is_some_and(|&(j, _)| j <= i + len) {
                    chars.next();
                }
                prev_is_boundary = false;
                continue;
            }
        }
        prev_is_boundary = c.is_whitespace();
    }
}

fn is_tag_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_' || c == '/'
}

fn push_tag(item: &str, tags: &mut HashSet<String>) {
    let tag = item.trim().trim_matches('"').trim_start_matches('#');
    if !tag.is_empty() {
        tags.insert(tag.to_string());
    }
}
