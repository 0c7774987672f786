// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gphconv-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gphconv and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Reading conversion inputs and writing outputs.
//!
//! Inputs come from a file or stdin and are read whole. Outputs go to stdout or to a file that is
//! replaced atomically (temp file plus rename).

pub mod files;

pub use files::{write_atomic, InputSource, OutputTarget, StoreError, WriteDurability};
