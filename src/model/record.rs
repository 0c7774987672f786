// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gphconv-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gphconv and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use smallvec::SmallVec;
use smol_str::SmolStr;

/// Which declaration a tagged line carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    Node,
    Edge,
}

impl TagKind {
    /// Maps the first token of a tag line to a kind; anything else is not a record.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "node" => Some(Self::Node),
            "edge" => Some(Self::Edge),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::Edge => "edge",
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    name: SmolStr,
    value: SmolStr,
}

impl Attribute {
    pub fn new(name: impl Into<SmolStr>, value: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// One `node` or `edge` declaration with its attributes in source order.
///
/// Most declarations carry a handful of attributes (`id`, `x`, `y`, `weight`), so they stay
/// inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedRecord {
    kind: TagKind,
    attributes: SmallVec<[Attribute; 4]>,
}

impl TaggedRecord {
    pub fn new(kind: TagKind) -> Self {
        Self {
            kind,
            attributes: SmallVec::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<SmolStr>, value: impl Into<SmolStr>) -> Self {
        self.push(name, value);
        self
    }

    pub fn push(&mut self, name: impl Into<SmolStr>, value: impl Into<SmolStr>) {
        self.attributes.push(Attribute::new(name, value));
    }

    pub fn kind(&self) -> TagKind {
        self.kind
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Looks up an attribute by name. A repeated name resolves to its last occurrence.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .rev()
            .find(|attr| attr.name() == name)
            .map(Attribute::value)
    }
}
