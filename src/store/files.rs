// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gphconv-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gphconv and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::fs;
use std::io;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

const STDIN_SENTINEL: &str = "-";
const GPH_EXTENSION: &str = "gph";

#[derive(Debug)]
pub enum StoreError {
    InputNotFound { path: PathBuf },
    Io { path: PathBuf, source: io::Error },
    SymlinkRefused { path: PathBuf },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputNotFound { path } => write!(f, "input file not found: {path:?}"),
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::SymlinkRefused { path } => {
                write!(f, "refusing to write through symlink at {path:?}")
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::InputNotFound { .. } | Self::SymlinkRefused { .. } => None,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WriteDurability {
    /// Fast, best-effort persistence.
    ///
    /// - Writes a temp file and renames atomically into place.
    /// - Does not perform per-file fsync/sync.
    #[default]
    BestEffort,

    /// Slower, best-effort durability.
    ///
    /// Attempts to flush written file contents and rename operations to stable storage where
    /// possible. Exact guarantees are platform/filesystem-dependent.
    Durable,
}

/// Where a conversion reads its input from. `-` on the command line means stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    pub fn parse(arg: &str) -> Self {
        if arg == STDIN_SENTINEL {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    pub fn read_to_string(&self) -> Result<String, StoreError> {
        match self {
            Self::Stdin => {
                let mut input = String::new();
                io::stdin()
                    .lock()
                    .read_to_string(&mut input)
                    .map_err(|source| StoreError::Io {
                        path: PathBuf::from("<stdin>"),
                        source,
                    })?;
                Ok(input)
            }
            Self::File(path) => fs::read_to_string(path).map_err(|source| {
                if source.kind() == io::ErrorKind::NotFound {
                    StoreError::InputNotFound { path: path.clone() }
                } else {
                    StoreError::Io {
                        path: path.clone(),
                        source,
                    }
                }
            }),
        }
    }

    /// The input path with its extension replaced by `.gph`; `None` for stdin.
    pub fn gph_sibling(&self) -> Option<PathBuf> {
        match self {
            Self::Stdin => None,
            Self::File(path) => Some(path.with_extension(GPH_EXTENSION)),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("<stdin>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputTarget {
    #[default]
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// Writes all of `contents`; files are replaced atomically so a failed run never leaves a
    /// truncated output behind.
    pub fn write(&self, contents: &[u8], durability: WriteDurability) -> Result<(), StoreError> {
        match self {
            Self::Stdout => {
                let stdout = io::stdout();
                let mut out = stdout.lock();
                out.write_all(contents)
                    .and_then(|()| out.flush())
                    .map_err(|source| StoreError::Io {
                        path: PathBuf::from("<stdout>"),
                        source,
                    })
            }
            Self::File(path) => write_atomic(path, contents, durability),
        }
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("<stdout>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

include!("files/helpers.rs");
