// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gphconv-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gphconv and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! gph text rendering.
//!
//! ```text
//! c <comment line>
//! g <node count> <edge count>
//! n <id> <x> <y> [<weight>]
//! e <source> <target> <weight>
//! ```

use crate::model::{GphDocument, GphNodeLine};

/// Renders `doc` to a newline-terminated gph string.
pub fn render_gph<N: GphNodeLine>(doc: &GphDocument<N>) -> String {
    let mut out = String::with_capacity(estimate_len(doc));
    let mut ints = itoa::Buffer::new();

    for comment in doc.comments() {
        out.push_str("c ");
        out.push_str(comment);
        out.push('\n');
    }

    out.push('g');
    push_int(&mut out, &mut ints, doc.nodes().len() as i64);
    push_int(&mut out, &mut ints, doc.edges().len() as i64);
    out.push('\n');

    for node in doc.nodes() {
        out.push('n');
        for field in node.fields() {
            push_int(&mut out, &mut ints, field);
        }
        out.push('\n');
    }

    for edge in doc.edges() {
        out.push('e');
        push_int(&mut out, &mut ints, edge.source);
        push_int(&mut out, &mut ints, edge.target);
        push_int(&mut out, &mut ints, edge.weight);
        out.push('\n');
    }

    out
}

fn push_int(out: &mut String, ints: &mut itoa::Buffer, value: i64) {
    out.push(' ');
    out.push_str(ints.format(value));
}

fn estimate_len<N: GphNodeLine>(doc: &GphDocument<N>) -> usize {
    let comments = doc
        .comments()
        .iter()
        .map(|comment| comment.len() + 3)
        .sum::<usize>();
    comments + 24 + doc.nodes().len() * 24 + doc.edges().len() * 20
}
