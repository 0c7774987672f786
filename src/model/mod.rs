// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gphconv-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gphconv and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! In-memory graph representations shared by the parsers and the gph writer.

pub mod gph;
pub mod record;
pub mod tagged_graph;

pub use gph::{GphDocument, GphEdge, GphNodeLine, PlacedNode, WeightedNode};
pub use record::{Attribute, TagKind, TaggedRecord};
pub use tagged_graph::TaggedGraph;
