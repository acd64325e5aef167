//! Core value types for box trees.

use std::fmt;
use std::str::FromStr;

use crate::errors::TreeError;

/// Unique identifier for a node inside a [`BoxTree`](crate::BoxTree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub usize);

impl NodeId {
    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where a node places its own children.
///
/// Parsed from text only through [`FromStr`], so every input path accepts
/// the same spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Children to the east, stacked top to bottom
    EastWest,
    /// Children to the south, stacked left to right
    NorthSouth,
}

impl Direction {
    /// Category tag whose children grow eastward in solver trees.
    pub const EAST_CATEGORY: &'static str = "mg";

    /// Map a solver category tag to a direction.
    ///
    /// Multigrid (`mg`) nodes grow east; every other category grows south.
    pub fn from_category(category: &str) -> Self {
        if category == Self::EAST_CATEGORY {
            Direction::EastWest
        } else {
            Direction::NorthSouth
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::EastWest => "east_west",
            Direction::NorthSouth => "north_south",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "east" | "east_west" | "eastwest" => Ok(Direction::EastWest),
            "south" | "north_south" | "northsouth" => Ok(Direction::NorthSouth),
            _ => Err(TreeError::UnknownDirection {
                key: None,
                value: s.to_string(),
            }),
        }
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when both dimensions are at least those of `other`.
    pub fn covers(&self, other: &Size) -> bool {
        self.width >= other.width && self.height >= other.height
    }
}

/// A color value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create from 8-bit RGB values.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Convert to 8-bit RGBA tuple.
    pub fn to_rgba8(&self) -> (u8, u8, u8, u8) {
        (
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.a.clamp(0.0, 1.0) * 255.0).round() as u8,
        )
    }

    // Common colors
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_category() {
        assert_eq!(Direction::from_category("mg"), Direction::EastWest);
        assert_eq!(Direction::from_category("fieldsplit"), Direction::NorthSouth);
        assert_eq!(Direction::from_category("jacobi"), Direction::NorthSouth);
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!("east".parse::<Direction>().unwrap(), Direction::EastWest);
        assert_eq!("North_South".parse::<Direction>().unwrap(), Direction::NorthSouth);
        assert_eq!("EastWest".parse::<Direction>().unwrap(), Direction::EastWest);
        let err = "west-ish".parse::<Direction>().unwrap_err();
        assert!(matches!(
            err,
            TreeError::UnknownDirection { key: None, ref value } if value == "west-ish"
        ));
    }

    #[test]
    fn test_size_covers() {
        let size = Size::new(100.0, 30.0);
        assert!(size.covers(&Size::new(100.0, 30.0)));
        assert!(!size.covers(&Size::new(100.5, 1.0)));
    }

    #[test]
    fn test_color_rgba8() {
        assert_eq!(Color::BLUE.to_rgba8(), (0, 0, 255, 255));
        assert_eq!(Color::from_rgb8(255, 127, 0).to_rgba8(), (255, 127, 0, 255));
    }
}
