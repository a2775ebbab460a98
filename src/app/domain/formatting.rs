use serde::{Deserialize, Serialize};

pub const DEFAULT_FONT_FAMILY: &str = "Arial";
pub const DEFAULT_FONT_SIZE: u32 = 12;
pub const DEFAULT_FOREGROUND: &str = "#000000";

/// Horizontal paragraph alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Serialized name, as stored in the sidecar file
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|a| a.as_str() == name)
    }

    pub fn all() -> &'static [Alignment] {
        &[Self::Left, Self::Center, Self::Right]
    }
}

/// List decoration applied to a paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    #[default]
    None,
    Bullet,
    Numbered,
}

impl ListType {
    /// Serialized name, as stored in the sidecar file
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Bullet => "bullet",
            Self::Numbered => "numbered",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|l| l.as_str() == name)
    }

    pub fn all() -> &'static [ListType] {
        &[Self::None, Self::Bullet, Self::Numbered]
    }
}

/// Block-level formatting attributed to one paragraph.
///
/// A plain `Copy` value: every holder owns its own snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct ParagraphStyleSnapshot {
    pub alignment: Alignment,
    pub indent: u32,
    pub list_type: ListType,
}

impl ParagraphStyleSnapshot {
    pub fn new(alignment: Alignment, indent: u32, list_type: ListType) -> Self {
        Self {
            alignment,
            indent,
            list_type,
        }
    }
}

/// Inline toggles plus the paragraph fields the toolbar edits alongside them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattingState {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub font_family: String,
    pub font_size: u32,
    pub foreground: String,
    pub alignment: Alignment,
    pub indent: u32,
    pub list_type: ListType,
}

impl Default for FormattingState {
    fn default() -> Self {
        Self {
            bold: false,
            italic: false,
            underline: false,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            foreground: DEFAULT_FOREGROUND.to_string(),
            alignment: Alignment::default(),
            indent: 0,
            list_type: ListType::default(),
        }
    }
}

impl FormattingState {
    /// The paragraph-level part of this state
    pub fn paragraph_snapshot(&self) -> ParagraphStyleSnapshot {
        ParagraphStyleSnapshot::new(self.alignment, self.indent, self.list_type)
    }
}
