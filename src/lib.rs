// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gphconv-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gphconv and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Gphconv: converters from the graphml dialect and SNAP edge lists to gph.
//!
//! Each conversion is a linear pipeline (parse, build, resolve, render) over text held fully in
//! memory. See [`convert`] for the entry points.

pub mod convert;
pub mod format;
pub mod model;
pub mod store;
