// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gphconv-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gphconv and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Node line shape rendered as `n <id> <x> <y> <weight>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedNode {
    pub id: i64,
    pub x: i64,
    pub y: i64,
    pub weight: i64,
}

/// Node line shape rendered as `n <id> <x> <y>` (no weight field).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedNode {
    pub id: i64,
    pub x: i64,
    pub y: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GphEdge {
    pub source: i64,
    pub target: i64,
    pub weight: i64,
}

/// Integer fields that follow the `n` tag on a node line.
pub trait GphNodeLine {
    fn fields(&self) -> impl Iterator<Item = i64>;
}

impl GphNodeLine for WeightedNode {
    fn fields(&self) -> impl Iterator<Item = i64> {
        [self.id, self.x, self.y, self.weight].into_iter()
    }
}

impl GphNodeLine for PlacedNode {
    fn fields(&self) -> impl Iterator<Item = i64> {
        [self.id, self.x, self.y].into_iter()
    }
}

/// A fully resolved gph graph, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GphDocument<N> {
    comments: Vec<String>,
    nodes: Vec<N>,
    edges: Vec<GphEdge>,
}

impl<N> Default for GphDocument<N> {
    fn default() -> Self {
        Self {
            comments: Vec::new(),
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }
}

impl<N: GphNodeLine> GphDocument<N> {
    pub fn new(comments: Vec<String>, nodes: Vec<N>, edges: Vec<GphEdge>) -> Self {
        Self {
            comments,
            nodes,
            edges,
        }
    }

    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    pub fn edges(&self) -> &[GphEdge] {
        &self.edges
    }
}
