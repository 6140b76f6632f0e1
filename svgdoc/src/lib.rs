//! SVG document template for the vault icon.
//!
//! This crate owns the document representation. It takes the serialized
//! outline from `shape` and wraps it in a standalone SVG 1.1 file with a
//! three-stop vertical gradient fill. The `sodipodi` namespace is kept so the
//! per-node types survive a round trip through Inkscape.

use shape::{CommandStyle, IconConfig, IconError, PathResult};

/// Offset of the middle gradient stop, from the bottom.
pub const GRADIENT_MIDDLE_OFFSET: f64 = 0.762_061_95;

/// Error returned by [`generate_document`].
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// The icon parameters were rejected before any geometry was built.
    #[error(transparent)]
    Icon(#[from] IconError),
    /// The outline was generated for a different canvas size than the config.
    #[error("outline size {outline} does not match config size {config}")]
    SizeMismatch { outline: u32, config: u32 },
}

/// Build the outline for `config` and render the full document.
///
/// `docname` is recorded as `sodipodi:docname`, usually the output file name.
///
/// # Errors
///
/// Returns [`DocumentError::Icon`] if `config` fails validation.
pub fn generate_document(
    config: &IconConfig,
    docname: &str,
    style: CommandStyle,
) -> Result<String, DocumentError> {
    let outline = shape::assemble(config, style)?;
    render_document(&outline, config, docname)
}

/// Render an already-built outline into a document.
///
/// # Errors
///
/// Returns [`DocumentError::SizeMismatch`] if `outline` was built for another size.
pub fn render_document(
    outline: &PathResult,
    config: &IconConfig,
    docname: &str,
) -> Result<String, DocumentError> {
    if outline.size != config.size {
        return Err(DocumentError::SizeMismatch { outline: outline.size, config: config.size });
    }

    let size = outline.size;
    let g = outline.gradient;
    let docname = escape_attr(docname);
    let commands = escape_attr(&outline.commands);
    let node_types = escape_attr(&outline.node_types);
    let stroke = &config.stroke_color;
    let thickness = config.thickness;
    let bottom = &config.gradient.bottom;
    let middle = &config.gradient.middle;
    let top = &config.gradient.top;

    Ok(format!(
        r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<svg
   width="{size}"
   height="{size}"
   viewBox="0 0 {size} {size}"
   version="1.1"
   id="SVGRoot"
   sodipodi:docname="{docname}"
   xml:space="preserve"
   xmlns:sodipodi="http://sodipodi.sourceforge.net/DTD/sodipodi-0.dtd"
   xmlns:xlink="http://www.w3.org/1999/xlink"
   xmlns="http://www.w3.org/2000/svg"
   xmlns:svg="http://www.w3.org/2000/svg"><sodipodi:namedview
     id="namedview14"
     pagecolor="#ffffff"
     bordercolor="#666666"
     borderopacity="1.0"
     showgrid="true" /><defs
     id="defs9"><linearGradient
       id="linearGradient4109"><stop
         style="stop-color:#{bottom};stop-opacity:1;"
         offset="0"
         id="stop4113" /><stop
         style="stop-color:#{middle};stop-opacity:1;"
         offset="{GRADIENT_MIDDLE_OFFSET}"
         id="stop14282" /><stop
         style="stop-color:#{top};stop-opacity:1;"
         offset="1"
         id="stop4115" /></linearGradient><linearGradient
       xlink:href="#linearGradient4109"
       id="linearGradient4111"
       x1="{x1}"
       y1="{y1}"
       x2="{x2}"
       y2="{y2}"
       gradientUnits="userSpaceOnUse" /></defs><g
     id="layer1"><path
       id="Combined"
       fill="none"
       stroke="#000000"
       stroke-width="1"
       d="{commands}"
       style="fill:url(#linearGradient4111);fill-opacity:1;fill-rule:evenodd;stroke:#{stroke};stroke-width:{thickness};stroke-linecap:round;stroke-linejoin:miter;stroke-dasharray:none;stroke-opacity:1"
       sodipodi:nodetypes="{node_types}" /></g></svg>"##,
        x1 = g.x1,
        y1 = g.y1,
        x2 = g.x2,
        y2 = g.y2,
    ))
}

/// Escape a value for use inside a double-quoted XML attribute.
#[must_use]
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
