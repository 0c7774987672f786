// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gphconv-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gphconv and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Graph text formats: the graphml dialect and SNAP edge lists on the way in, gph on the way
//! out.

pub mod gph;
pub mod graphml;
pub mod snap;

pub use gph::render_gph;
pub use graphml::{parse_graphml, ParseDiagnostics, ParsedGraphml};
pub use snap::{parse_snap, OptionsError, SnapOptions, SnapParseError};
