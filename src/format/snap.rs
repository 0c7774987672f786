// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gphconv-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gphconv and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! SNAP edge lists with random placement.
//!
//! Every non-comment line is an edge given as two vertex ids. Vertices get random coordinates
//! on first sight and every edge gets a random weight, so the result can be fed to tools that
//! need a drawable, weighted graph.

use std::collections::HashSet;
use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::model::{GphDocument, GphEdge, PlacedNode};

pub const DEFAULT_MIN_EDGE_WEIGHT: i64 = 1;
pub const DEFAULT_MAX_EDGE_WEIGHT: i64 = 99;
pub const DEFAULT_MAX_COORDINATE: i64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapOptions {
    pub min_edge_weight: i64,
    pub max_edge_weight: i64,
    /// Coordinates are drawn from `1..=max_coordinate`.
    pub max_coordinate: i64,
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SnapOptions {
    fn default() -> Self {
        Self {
            min_edge_weight: DEFAULT_MIN_EDGE_WEIGHT,
            max_edge_weight: DEFAULT_MAX_EDGE_WEIGHT,
            max_coordinate: DEFAULT_MAX_COORDINATE,
            seed: None,
        }
    }
}

impl SnapOptions {
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.max_coordinate < 1 {
            return Err(OptionsError::EmptyCoordinateRange {
                max_coordinate: self.max_coordinate,
            });
        }
        if self.min_edge_weight > self.max_edge_weight {
            return Err(OptionsError::InvertedEdgeWeightRange {
                min: self.min_edge_weight,
                max: self.max_edge_weight,
            });
        }
        Ok(())
    }

    /// The configured seed, or a fresh one drawn from OS entropy.
    ///
    /// Unseeded runs still go through a concrete seed so it can be reported and replayed.
    pub fn draw_seed(&self) -> u64 {
        self.seed
            .unwrap_or_else(|| StdRng::from_entropy().gen::<u64>())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsError {
    EmptyCoordinateRange { max_coordinate: i64 },
    InvertedEdgeWeightRange { min: i64, max: i64 },
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCoordinateRange { max_coordinate } => write!(
                f,
                "maximum coordinate must be at least 1 (got {max_coordinate})"
            ),
            Self::InvertedEdgeWeightRange { min, max } => write!(
                f,
                "minimum edge weight {min} is greater than maximum edge weight {max}"
            ),
        }
    }
}

impl std::error::Error for OptionsError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapParseError {
    InvalidOptions(OptionsError),
    MissingEndpoint { line_no: usize, line: String },
    InvalidVertexId { line_no: usize, token: String },
}

impl fmt::Display for SnapParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOptions(err) => write!(f, "invalid snap options: {err}"),
            Self::MissingEndpoint { line_no, line } => write!(
                f,
                "expected two vertex ids on line {line_no}: {line:?}"
            ),
            Self::InvalidVertexId { line_no, token } => {
                write!(f, "invalid vertex id on line {line_no}: {token:?}")
            }
        }
    }
}

impl std::error::Error for SnapParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidOptions(err) => Some(err),
            Self::MissingEndpoint { .. } | Self::InvalidVertexId { .. } => None,
        }
    }
}

impl From<OptionsError> for SnapParseError {
    fn from(err: OptionsError) -> Self {
        Self::InvalidOptions(err)
    }
}

/// Parses a SNAP edge list, drawing coordinates and weights from `rng`.
///
/// Draw order is fixed (source x, source y, target x, target y, edge weight, skipping the
/// coordinates of vertices already placed), so a seeded generator reproduces the same output.
pub fn parse_snap<R: Rng>(
    input: &str,
    options: &SnapOptions,
    rng: &mut R,
) -> Result<GphDocument<PlacedNode>, SnapParseError> {
    options.validate()?;

    let mut comments = Vec::new();
    let mut nodes = Vec::new();
    let mut seen = HashSet::new();
    let mut edges = Vec::new();

    for (idx, raw_line) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw_line.trim();
        if line.is_empty() {
            comments.push(String::new());
            continue;
        }
        if let Some(comment) = line.strip_prefix('#') {
            comments.push(comment.to_owned());
            continue;
        }

        let mut tokens = line.split_whitespace();
        let (Some(source), Some(target)) = (tokens.next(), tokens.next()) else {
            return Err(SnapParseError::MissingEndpoint {
                line_no,
                line: line.to_owned(),
            });
        };
        let source = parse_vertex_id(line_no, source)?;
        let target = parse_vertex_id(line_no, target)?;

        for id in [source, target] {
            if seen.insert(id) {
                let x = rng.gen_range(1..=options.max_coordinate);
                let y = rng.gen_range(1..=options.max_coordinate);
                nodes.push(PlacedNode { id, x, y });
            }
        }

        let weight = rng.gen_range(options.min_edge_weight..=options.max_edge_weight);
        edges.push(GphEdge {
            source,
            target,
            weight,
        });
    }

    debug!(
        comments = comments.len(),
        nodes = nodes.len(),
        edges = edges.len(),
        "parsed snap input"
    );

    Ok(GphDocument::new(comments, nodes, edges))
}

fn parse_vertex_id(line_no: usize, token: &str) -> Result<i64, SnapParseError> {
    token
        .parse::<i64>()
        .map_err(|_| SnapParseError::InvalidVertexId {
            line_no,
            token: token.to_owned(),
        })
}
