use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Node kind tag. Fixed at construction.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Kind {
    Element,
    Attribute,
    Text,
    ProcessingInstruction,
    Comment,
    Document,
}

impl Kind {
    pub const ALL: [Kind; 6] = [
        Kind::Element,
        Kind::Attribute,
        Kind::Text,
        Kind::ProcessingInstruction,
        Kind::Comment,
        Kind::Document,
    ];

    /// Stable one-byte identifier used by the storage layer to tag records.
    pub fn id(self) -> u8 {
        match self {
            Kind::Element => 1,
            Kind::Attribute => 2,
            Kind::Text => 3,
            Kind::ProcessingInstruction => 7,
            Kind::Comment => 8,
            Kind::Document => 9,
        }
    }

    pub fn from_id(id: u8) -> Option<Kind> {
        Kind::ALL.into_iter().find(|k| k.id() == id)
    }

    /// Whether nodes of this kind may have children.
    pub fn is_container(self) -> bool {
        matches!(self, Kind::Element | Kind::Document)
    }

    pub fn is_leaf(self) -> bool {
        !self.is_container()
    }

    /// Whether nodes of this kind own a raw value.
    pub fn has_value(self) -> bool {
        matches!(
            self,
            Kind::Attribute | Kind::Text | Kind::ProcessingInstruction | Kind::Comment
        )
    }

    /// Whether nodes of this kind carry name keys.
    pub fn has_name(self) -> bool {
        matches!(
            self,
            Kind::Element | Kind::Attribute | Kind::ProcessingInstruction
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            Kind::Element => "element",
            Kind::Attribute => "attribute",
            Kind::Text => "text",
            Kind::ProcessingInstruction => "processing-instruction",
            Kind::Comment => "comment",
            Kind::Document => "document",
        }
    }

    pub(crate) fn expect(self, expected: Kind) -> Result<()> {
        if self == expected {
            Ok(())
        } else {
            Err(Error::KindMismatch {
                expected,
                found: self,
            })
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
