//! Draw primitives emitted by the renderer.

use boxtree_core::types::Color;

/// A draw command representing something to paint.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawCommand {
    /// Draw a filled, stroked rectangle
    Rect(RectPrimitive),
    /// Draw a text label
    Label(LabelPrimitive),
}

/// Stroke style for outlines.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

impl Stroke {
    pub fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

/// A rectangle primitive.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Color,
    pub stroke: Stroke,
}

impl RectPrimitive {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill: Color::BLUE,
            stroke: Stroke::new(Color::BLACK, 2.0),
        }
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = stroke;
        self
    }
}

/// A text label anchored at its baseline start.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabelPrimitive {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub color: Color,
}

impl LabelPrimitive {
    pub fn new(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            color: Color::BLACK,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

/// An ordered list of draw commands with the extent they cover.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scene {
    pub commands: Vec<DrawCommand>,
    /// Top-left corner of the drawing; negative when the layout origin is
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            commands: Vec::new(),
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }

    pub fn with_origin(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn rect(&mut self, rect: RectPrimitive) {
        self.commands.push(DrawCommand::Rect(rect));
    }

    pub fn label(&mut self, label: LabelPrimitive) {
        self.commands.push(DrawCommand::Label(label));
    }

    /// Rectangles in paint order.
    pub fn rects(&self) -> impl Iterator<Item = &RectPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Rect(rect) => Some(rect),
            DrawCommand::Label(_) => None,
        })
    }

    /// Labels in paint order.
    pub fn labels(&self) -> impl Iterator<Item = &LabelPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Label(label) => Some(label),
            DrawCommand::Rect(_) => None,
        })
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
