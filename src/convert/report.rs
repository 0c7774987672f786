// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gphconv-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gphconv and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::Serialize;
use tracing::{debug, warn};

use crate::format::ParseDiagnostics;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceFormat {
    Graphml,
    Snap,
}

/// What a conversion produced and what it skipped along the way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    pub format: SourceFormat,
    pub comments: usize,
    pub nodes: usize,
    pub edges: usize,
    pub malformed_tokens: usize,
    pub empty_values: usize,
    pub ignored_lines: usize,
    pub unterminated_comments: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl ConversionReport {
    pub(super) fn graphml(
        comments: usize,
        nodes: usize,
        edges: usize,
        diagnostics: ParseDiagnostics,
    ) -> Self {
        Self {
            format: SourceFormat::Graphml,
            comments,
            nodes,
            edges,
            malformed_tokens: diagnostics.malformed_tokens,
            empty_values: diagnostics.empty_values,
            ignored_lines: diagnostics.ignored_lines,
            unterminated_comments: diagnostics.unterminated_comments,
            seed: None,
        }
    }

    pub(super) fn snap(comments: usize, nodes: usize, edges: usize, seed: u64) -> Self {
        Self {
            format: SourceFormat::Snap,
            comments,
            nodes,
            edges,
            malformed_tokens: 0,
            empty_values: 0,
            ignored_lines: 0,
            unterminated_comments: false,
            seed: Some(seed),
        }
    }

    pub fn dropped_attributes(&self) -> usize {
        self.malformed_tokens + self.empty_values
    }

    /// Emits the summary at debug level and anything that was silently skipped as a warning.
    pub fn log(&self) {
        debug!(
            format = ?self.format,
            comments = self.comments,
            nodes = self.nodes,
            edges = self.edges,
            ignored_lines = self.ignored_lines,
            seed = ?self.seed,
            "conversion finished"
        );

        if self.dropped_attributes() > 0 {
            warn!(
                malformed_tokens = self.malformed_tokens,
                empty_values = self.empty_values,
                "dropped attribute tokens"
            );
        }
        if self.unterminated_comments {
            warn!("comment block has no closing </comments>; read comments to end of input");
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
