//! SVG export for box tree scenes.

use std::fmt::Write;

use boxtree_core::{types::Color, ExportError};
use boxtree_render_2d::{DrawCommand, LabelPrimitive, RectPrimitive, Scene};

/// Export a scene as a standalone SVG document.
pub fn export(scene: &Scene) -> Result<String, ExportError> {
    let width = scene.width.max(1.0);
    let height = scene.height.max(1.0);

    let mut svg = String::new();

    // XML declaration and SVG root
    write!(
        svg,
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="{} {} {} {}">
"#,
        width, height, scene.x, scene.y, width, height
    )?;

    for command in &scene.commands {
        svg.push_str("  ");
        write_command(&mut svg, command)?;
        svg.push('\n');
    }

    svg.push_str("</svg>\n");

    Ok(svg)
}

/// Export a scene as inline elements with no separators or root element.
pub fn export_fragment(scene: &Scene) -> Result<String, ExportError> {
    let mut svg = String::new();
    for command in &scene.commands {
        write_command(&mut svg, command)?;
    }
    Ok(svg)
}

fn write_command(out: &mut String, command: &DrawCommand) -> Result<(), ExportError> {
    match command {
        DrawCommand::Rect(rect) => write_rect(out, rect),
        DrawCommand::Label(label) => write_label(out, label),
    }
}

fn write_rect(out: &mut String, rect: &RectPrimitive) -> Result<(), ExportError> {
    write!(
        out,
        r#"<rect x="{}" y="{}" width="{}" height="{}" style="fill:{};stroke-width:{};stroke:{}"#,
        rect.x,
        rect.y,
        rect.width,
        rect.height,
        color_to_svg(&rect.fill),
        rect.stroke.width,
        color_to_svg(&rect.stroke.color),
    )?;
    if rect.fill.a < 1.0 {
        write!(out, ";fill-opacity:{}", rect.fill.a)?;
    }
    out.push_str(r#"" />"#);
    Ok(())
}

fn write_label(out: &mut String, label: &LabelPrimitive) -> Result<(), ExportError> {
    write!(
        out,
        r#"<text x="{}" y="{}" fill="{}">{}</text>"#,
        label.x,
        label.y,
        color_name(&label.color),
        escape_xml(&label.text),
    )?;
    Ok(())
}

// Helper functions

fn color_to_svg(color: &Color) -> String {
    let (r, g, b, _) = color.to_rgba8();
    format!("rgb({},{},{})", r, g, b)
}

fn color_name(color: &Color) -> String {
    match color.to_rgba8() {
        (0, 0, 0, 255) => "black".to_string(),
        (255, 255, 255, 255) => "white".to_string(),
        _ => color_to_svg(color),
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
