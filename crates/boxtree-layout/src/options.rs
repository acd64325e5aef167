//! Layout configuration.

use std::collections::HashMap;

use boxtree_core::Size;
use glam::DVec2;

/// Intrinsic box size per node category.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextSizeTable {
    /// Size used for categories without an entry
    pub fallback: Size,
    /// Per-category overrides
    pub categories: HashMap<String, Size>,
}

impl Default for TextSizeTable {
    /// Solver boxes are 100 wide; `fieldsplit` boxes are 50 tall, all others 30.
    fn default() -> Self {
        Self::uniform(Size::new(100.0, 30.0)).with_category("fieldsplit", Size::new(100.0, 50.0))
    }
}

impl TextSizeTable {
    /// Every category gets the same size.
    pub fn uniform(size: Size) -> Self {
        Self {
            fallback: size,
            categories: HashMap::new(),
        }
    }

    /// Set the size for one category.
    pub fn with_category(mut self, category: impl Into<String>, size: Size) -> Self {
        self.categories.insert(category.into(), size);
        self
    }

    /// Look up the text size of a category.
    pub fn text_size(&self, category: &str) -> Size {
        self.categories.get(category).copied().unwrap_or(self.fallback)
    }
}

/// Options for the layout passes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutOptions {
    /// Text size lookup
    pub text_sizes: TextSizeTable,
    /// Top-left corner of the root's footprint
    pub origin: DVec2,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            text_sizes: TextSizeTable::default(),
            origin: DVec2::ZERO,
        }
    }
}

impl LayoutOptions {
    pub fn with_text_sizes(mut self, text_sizes: TextSizeTable) -> Self {
        self.text_sizes = text_sizes;
        self
    }

    pub fn with_origin(mut self, x: f64, y: f64) -> Self {
        self.origin = DVec2::new(x, y);
        self
    }
}
