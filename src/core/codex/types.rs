//! Core value types for class/subclass content resolution.
//!
//! This module defines:
//!
//! - [`Origin`]: tag distinguishing base-class content from subclass content
//! - [`Section`]: a titled, leveled, origin-tagged block of parsed ability text
//! - [`AbilityRequest`]: parameters for a combined class + subclass load
//! - [`AbilitySections`]: result wrapper for an ability load
//! - [`ClassContent`]: full bundle returned by the combined loader
//!
//! All types use `#[serde(rename_all = "camelCase")]` for UI-facing
//! serialization. Sections are immutable value objects that live for the
//! duration of one resolution call; nothing here is persisted.

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Origin - Content provenance tag
// ============================================================================

/// Provenance of a parsed section.
///
/// Ordering matters: when two sections share a level, class-origin content
/// sorts before subclass-origin content, so `Class` is declared first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Origin {
    /// Content retrieved from the base class document.
    Class,
    /// Content retrieved from a subclass document.
    Subclass,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Class => write!(f, "class"),
            Origin::Subclass => write!(f, "subclass"),
        }
    }
}

// ============================================================================
// Section - Parsed ability block
// ============================================================================

/// One titled, leveled block of ability text.
///
/// Sections are only ever constructed through [`Section::new`], which
/// enforces the invariant that at least one of `title` / `content` is
/// non-empty after trimming. `level` is 0 when the heading carried no
/// recognizable level phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Character level the ability unlocks at; 0 for general content.
    pub level: u32,
    /// Heading text, stripped of markers and trailing colons.
    pub title: String,
    /// Body text of the section, trimmed.
    pub content: String,
    /// Whether this came from the class or a subclass document.
    pub origin: Origin,
}

impl Section {
    /// Build a section, trimming title and content.
    ///
    /// Returns `None` when both title and content are empty after trimming;
    /// such sections carry no information and are dropped by the parser.
    pub fn new(
        level: u32,
        title: impl AsRef<str>,
        content: impl AsRef<str>,
        origin: Origin,
    ) -> Option<Self> {
        let title = title.as_ref().trim().to_string();
        let content = content.as_ref().trim().to_string();
        if title.is_empty() && content.is_empty() {
            return None;
        }
        Some(Self {
            level,
            title,
            content,
            origin,
        })
    }
}

// ============================================================================
// AbilityRequest - Combined load parameters
// ============================================================================

/// Parameters for loading the merged ability sections of a character.
///
/// `character_level` is accepted for API compatibility with sheet callers
/// but is not used to filter sections; level-based filtering is the
/// caller's responsibility.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityRequest {
    /// Free-form class name; canonicalized before resolution.
    pub class_name: String,

    /// Optional free-form subclass name. Blank or absent skips subclass
    /// resolution entirely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subclass_name: Option<String>,

    /// Current character level, carried through untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_level: Option<u32>,
}

impl AbilityRequest {
    /// Request for a class with no subclass.
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            subclass_name: None,
            character_level: None,
        }
    }

    /// Builder method to set the subclass name.
    pub fn with_subclass(mut self, subclass_name: impl Into<String>) -> Self {
        self.subclass_name = Some(subclass_name.into());
        self
    }

    /// Builder method to set the character level.
    pub fn with_character_level(mut self, level: u32) -> Self {
        self.character_level = Some(level);
        self
    }
}

// ============================================================================
// Result bundles
// ============================================================================

/// Result of an ability sections load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilitySections {
    /// Merged, deterministically ordered sections. Empty when nothing
    /// resolved for either content type.
    pub sections: Vec<Section>,
}

/// Full content bundle for a class and a set of subclasses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassContent {
    /// Canonical display name of the class.
    pub class_name: String,
    /// Merged, sorted class + subclass sections.
    pub sections: Vec<Section>,
    /// Class-origin sections only, in parse order.
    pub class_sections: Vec<Section>,
    /// Subclass-origin sections in subclass request order, then parse order.
    pub subclass_sections: Vec<Section>,
}
