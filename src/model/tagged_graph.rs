// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gphconv-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gphconv and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::record::{TagKind, TaggedRecord};

/// Parsed graph before defaults are applied: comments plus node and edge records in input
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaggedGraph {
    comments: Vec<String>,
    nodes: Vec<TaggedRecord>,
    edges: Vec<TaggedRecord>,
}

impl TaggedGraph {
    /// Splits an interleaved record sequence into nodes and edges, keeping relative order.
    pub fn from_records(
        comments: Vec<String>,
        records: impl IntoIterator<Item = TaggedRecord>,
    ) -> Self {
        let mut nodes = Vec::new();
        let mut edges = Vec::new();
        for record in records {
            match record.kind() {
                TagKind::Node => nodes.push(record),
                TagKind::Edge => edges.push(record),
            }
        }

        Self {
            comments,
            nodes,
            edges,
        }
    }

    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    pub fn nodes(&self) -> &[TaggedRecord] {
        &self.nodes
    }

    pub fn edges(&self) -> &[TaggedRecord] {
        &self.edges
    }
}
