// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gphconv-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gphconv and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Best-effort scanner for the one-tag-per-line graphml dialect.
//!
//! The dialect is not parsed as XML. Each `<node .../>` or `<edge .../>` is expected on a line
//! of its own, after a line opening the `<graph>` element. An optional `<comments>` block holds
//! free text that is carried into the gph output verbatim.

use memchr::memchr;
use tracing::debug;

use crate::model::{TagKind, TaggedGraph, TaggedRecord};

const COMMENTS_OPEN: &str = "<comments>";
const COMMENTS_CLOSE: &str = "</comments>";
const GRAPH_TAG: &str = "graph";

/// Counts of input that was skipped instead of failing the parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseDiagnostics {
    /// Attribute tokens without `=`.
    pub malformed_tokens: usize,
    /// `key=value` pairs whose value was empty after unquoting.
    pub empty_values: usize,
    /// Non-blank lines after the graph marker that are neither `node` nor `edge`.
    pub ignored_lines: usize,
    /// The comment block reached end of input without `</comments>`.
    pub unterminated_comments: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedGraphml {
    pub comments: Vec<String>,
    pub records: Vec<TaggedRecord>,
    pub diagnostics: ParseDiagnostics,
}

impl ParsedGraphml {
    pub fn into_tagged_graph(self) -> (TaggedGraph, ParseDiagnostics) {
        (
            TaggedGraph::from_records(self.comments, self.records),
            self.diagnostics,
        )
    }
}

/// Scans `input` for the comment block and the node/edge tag lines.
///
/// Never fails: anything that does not look like a record is counted in
/// [`ParseDiagnostics`] and skipped.
pub fn parse_graphml(input: &str) -> ParsedGraphml {
    let mut diagnostics = ParseDiagnostics::default();
    let comments = collect_comments(input, &mut diagnostics);

    let mut records = Vec::new();
    let mut lines = input.lines();
    for line in lines.by_ref() {
        if first_token(strip_tag_chars(line)) == Some(GRAPH_TAG) {
            break;
        }
    }

    for line in lines {
        let mut tokens = strip_tag_chars(line).split_whitespace();
        let Some(tag) = tokens.next() else {
            continue;
        };
        let Some(kind) = TagKind::from_tag(tag) else {
            diagnostics.ignored_lines += 1;
            continue;
        };

        let mut record = TaggedRecord::new(kind);
        for token in tokens {
            match split_attribute(token) {
                AttributeToken::Pair(name, value) => record.push(name, value),
                AttributeToken::Malformed => diagnostics.malformed_tokens += 1,
                AttributeToken::EmptyValue => diagnostics.empty_values += 1,
            }
        }
        records.push(record);
    }

    debug!(
        comments = comments.len(),
        records = records.len(),
        malformed_tokens = diagnostics.malformed_tokens,
        empty_values = diagnostics.empty_values,
        ignored_lines = diagnostics.ignored_lines,
        "parsed graphml input"
    );

    ParsedGraphml {
        comments,
        records,
        diagnostics,
    }
}

fn collect_comments(input: &str, diagnostics: &mut ParseDiagnostics) -> Vec<String> {
    let mut lines = input.lines();
    if !lines
        .by_ref()
        .any(|line| first_token(line) == Some(COMMENTS_OPEN))
    {
        return Vec::new();
    }

    let mut comments = Vec::new();
    for line in lines {
        if first_token(line) == Some(COMMENTS_CLOSE) {
            return comments;
        }
        comments.push(line.trim().to_owned());
    }

    diagnostics.unterminated_comments = true;
    comments
}

fn first_token(line: &str) -> Option<&str> {
    line.split_whitespace().next()
}

fn strip_tag_chars(line: &str) -> &str {
    line.trim().trim_matches(|ch| matches!(ch, '<' | '/' | '>'))
}

enum AttributeToken<'a> {
    Pair(&'a str, &'a str),
    Malformed,
    EmptyValue,
}

// The value runs from the first `=` to the next one, so `a=b=c` yields `b`.
fn split_attribute(token: &str) -> AttributeToken<'_> {
    let Some(eq) = memchr(b'=', token.as_bytes()) else {
        return AttributeToken::Malformed;
    };
    let name = &token[..eq];
    let rest = &token[eq + 1..];
    let raw = match memchr(b'=', rest.as_bytes()) {
        Some(end) => &rest[..end],
        None => rest,
    };

    let value = raw.trim_matches('"');
    if value.is_empty() {
        return AttributeToken::EmptyValue;
    }
    AttributeToken::Pair(name, value)
}

#[cfg(test)]
mod tests;
