// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gphconv-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gphconv and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! End-to-end conversions from input text to gph text.
//!
//! Each pipeline takes its options by parameter, builds the whole document in memory and renders it
//! once. Nothing is written until every record has been resolved.

use std::fmt;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::format::{parse_graphml, parse_snap, render_gph, SnapOptions, SnapParseError};
use crate::model::{GphDocument, GphEdge, TagKind, TaggedGraph, TaggedRecord, WeightedNode};

pub mod report;

pub use report::{ConversionReport, SourceFormat};

pub const DEFAULT_NODE_WEIGHT: i64 = 1;
pub const DEFAULT_EDGE_WEIGHT: i64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphmlOptions {
    pub default_node_weight: i64,
    pub default_edge_weight: i64,
}

impl Default for GraphmlOptions {
    fn default() -> Self {
        Self {
            default_node_weight: DEFAULT_NODE_WEIGHT,
            default_edge_weight: DEFAULT_EDGE_WEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    MissingAttribute {
        kind: TagKind,
        index: usize,
        name: &'static str,
    },
    InvalidInteger {
        kind: TagKind,
        index: usize,
        name: &'static str,
        value: String,
    },
    InvalidWeight {
        kind: TagKind,
        index: usize,
        value: String,
    },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingAttribute { kind, index, name } => {
                write!(f, "{kind} #{index} has no '{name}' attribute")
            }
            Self::InvalidInteger {
                kind,
                index,
                name,
                value,
            } => write!(
                f,
                "{kind} #{index} has a non-integer '{name}' attribute: {value:?}"
            ),
            Self::InvalidWeight { kind, index, value } => write!(
                f,
                "{kind} #{index} has a weight that is not a finite number in range: {value:?}"
            ),
        }
    }
}

impl std::error::Error for ResolveError {}

#[derive(Debug)]
pub enum ConvertError {
    Resolve(ResolveError),
    Snap(SnapParseError),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolve(err) => write!(f, "cannot convert graphml record: {err}"),
            Self::Snap(err) => write!(f, "cannot convert snap edge list: {err}"),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Resolve(err) => Some(err),
            Self::Snap(err) => Some(err),
        }
    }
}

impl From<ResolveError> for ConvertError {
    fn from(err: ResolveError) -> Self {
        Self::Resolve(err)
    }
}

impl From<SnapParseError> for ConvertError {
    fn from(err: SnapParseError) -> Self {
        Self::Snap(err)
    }
}

/// Rendered gph text plus the report describing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub gph: String,
    pub report: ConversionReport,
}

pub fn convert_graphml(input: &str, options: &GraphmlOptions) -> Result<Conversion, ConvertError> {
    let (graph, diagnostics) = parse_graphml(input).into_tagged_graph();
    let doc = resolve_weighted_gph(&graph, options)?;
    let report = ConversionReport::graphml(
        doc.comments().len(),
        doc.nodes().len(),
        doc.edges().len(),
        diagnostics,
    );

    Ok(Conversion {
        gph: render_gph(&doc),
        report,
    })
}

pub fn convert_snap(input: &str, options: &SnapOptions) -> Result<Conversion, ConvertError> {
    let seed = options.draw_seed();
    debug!(seed, "seeding snap placement");
    let mut rng = StdRng::seed_from_u64(seed);
    let doc = parse_snap(input, options, &mut rng)?;
    let report = ConversionReport::snap(
        doc.comments().len(),
        doc.nodes().len(),
        doc.edges().len(),
        seed,
    );

    Ok(Conversion {
        gph: render_gph(&doc),
        report,
    })
}

/// Applies defaults and integer casts to every record.
///
/// `id`, `source` and `target` are required; `x`/`y` default to 0; weights default to the
/// caller's values and are truncated from floats (`"3.7"` becomes 3).
pub fn resolve_weighted_gph(
    graph: &TaggedGraph,
    options: &GraphmlOptions,
) -> Result<GphDocument<WeightedNode>, ResolveError> {
    let nodes = graph
        .nodes()
        .iter()
        .enumerate()
        .map(|(idx, record)| resolve_node(idx + 1, record, options.default_node_weight))
        .collect::<Result<Vec<_>, _>>()?;
    let edges = graph
        .edges()
        .iter()
        .enumerate()
        .map(|(idx, record)| resolve_edge(idx + 1, record, options.default_edge_weight))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(GphDocument::new(graph.comments().to_vec(), nodes, edges))
}

fn resolve_node(
    index: usize,
    record: &TaggedRecord,
    default_weight: i64,
) -> Result<WeightedNode, ResolveError> {
    Ok(WeightedNode {
        id: required_int(index, record, "id")?,
        x: optional_int(index, record, "x")?.unwrap_or(0),
        y: optional_int(index, record, "y")?.unwrap_or(0),
        weight: weight(index, record)?.unwrap_or(default_weight),
    })
}

fn resolve_edge(
    index: usize,
    record: &TaggedRecord,
    default_weight: i64,
) -> Result<GphEdge, ResolveError> {
    Ok(GphEdge {
        source: required_int(index, record, "source")?,
        target: required_int(index, record, "target")?,
        weight: weight(index, record)?.unwrap_or(default_weight),
    })
}

fn required_int(
    index: usize,
    record: &TaggedRecord,
    name: &'static str,
) -> Result<i64, ResolveError> {
    optional_int(index, record, name)?.ok_or(ResolveError::MissingAttribute {
        kind: record.kind(),
        index,
        name,
    })
}

fn optional_int(
    index: usize,
    record: &TaggedRecord,
    name: &'static str,
) -> Result<Option<i64>, ResolveError> {
    let Some(value) = record.get(name) else {
        return Ok(None);
    };
    value
        .parse::<i64>()
        .map(Some)
        .map_err(|_| ResolveError::InvalidInteger {
            kind: record.kind(),
            index,
            name,
            value: value.to_owned(),
        })
}

fn weight(index: usize, record: &TaggedRecord) -> Result<Option<i64>, ResolveError> {
    let Some(value) = record.get("weight") else {
        return Ok(None);
    };
    truncate_to_int(value)
        .map(Some)
        .ok_or_else(|| ResolveError::InvalidWeight {
            kind: record.kind(),
            index,
            value: value.to_owned(),
        })
}

// Goes through f64 so `"2.0"` and `"3.7"` are accepted; rounds toward zero.
fn truncate_to_int(value: &str) -> Option<i64> {
    if let Ok(exact) = value.parse::<i64>() {
        return Some(exact);
    }
    let parsed = value.parse::<f64>().ok()?;
    if !parsed.is_finite() {
        return None;
    }
    let truncated = parsed.trunc();
    // i64::MAX as f64 rounds up to 2^63, which is already out of range.
    if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return None;
    }
    Some(truncated as i64)
}
