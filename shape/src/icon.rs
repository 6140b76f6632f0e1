//! Icon assembly: frame, outer arch, inner arch, serialization.
//!
//! The outline is one path with two closed sub-paths. The first is the
//! rounded frame with the outer arch carved into its bottom edge; the second
//! is the inner arch on its own. Filled with the even-odd rule, the inner arch
//! shows as a hole inside the vault opening.

#[cfg(test)]
#[path = "icon_test.rs"]
mod icon_test;

use serde::Serialize;

use crate::arch::{ArchGeometry, ArchSpec};
use crate::border::{BorderQuarter, compose_border};
use crate::config::IconConfig;
use crate::consts::{INNER_ARCH_MID_PCT, OUTER_ARCH_MID_PCT};
use crate::error::IconError;
use crate::node::{CommandStyle, Path};
use crate::point::round_coord;

/// Serialized outline, ready for templating into a document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    /// Path-command string (`d` attribute).
    pub commands: String,
    /// One node-type code per node, parallel to `commands`.
    pub node_types: String,
    /// Canvas width and height.
    pub size: u32,
    pub node_count: usize,
    pub gradient: GradientAnchors,
}

/// Endpoints of the fill gradient: bottom margin up to top margin, centered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradientAnchors {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Scalars every part of the icon is derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub size: f64,
    pub margin: f64,
    pub inner_size: f64,
    /// Distance along each edge covered by a rounded corner.
    pub border_reach: f64,
}

impl Layout {
    #[must_use]
    pub fn new(config: &IconConfig) -> Self {
        let size = f64::from(config.size);
        let margin = size * config.margin_pct;
        let inner_size = size - margin * 2.0;
        let border_reach = inner_size * config.corner_size_pct;
        Self { size, margin, inner_size, border_reach }
    }

    #[must_use]
    pub fn gradient(&self) -> GradientAnchors {
        let center = round_coord(self.size / 2.0);
        GradientAnchors {
            x1: center,
            y1: round_coord(self.size - self.margin),
            x2: center,
            y2: round_coord(self.margin),
        }
    }

    /// Y of the floor both arches stand on.
    #[must_use]
    pub fn floor_y(&self) -> f64 {
        self.size - self.margin
    }
}

/// Derive the outer and inner arches.
///
/// # Errors
///
/// Returns [`IconError::InvalidParameter`] if either arch would have a
/// non-positive ratio or width.
pub fn arches(
    config: &IconConfig,
    layout: &Layout,
) -> Result<(ArchGeometry, ArchGeometry), IconError> {
    let center_x = layout.size / 2.0;
    let outer = ArchSpec {
        floor_y: layout.floor_y(),
        ratio: config.outer_arch_ratio,
        mid_pct: OUTER_ARCH_MID_PCT,
        width: (layout.inner_size - layout.border_reach * 2.0) * config.outer_arch_width_pct,
        center_x,
    }
    .geometry()?;
    let inner = ArchSpec {
        floor_y: layout.floor_y(),
        ratio: config.inner_arch_ratio,
        mid_pct: INNER_ARCH_MID_PCT,
        width: outer.width() * config.inner_arch_width_pct,
        center_x,
    }
    .geometry()?;
    Ok((outer, inner))
}

/// Build the node list for `config`.
///
/// # Errors
///
/// Returns [`IconError::InvalidParameter`] for any out-of-range parameter.
/// Nothing is built in that case.
pub fn build_path(config: &IconConfig) -> Result<Path, IconError> {
    config.validate()?;
    let layout = Layout::new(config);
    let (outer, inner) = arches(config, &layout)?;
    tracing::debug!(
        size = layout.size,
        margin = layout.margin,
        border_reach = layout.border_reach,
        outer_width = outer.width(),
        inner_width = inner.width(),
        "icon layout derived"
    );

    let quarter = BorderQuarter::new(
        layout.size,
        layout.margin,
        layout.border_reach,
        config.corner_roundness,
    );
    let mut path = Path::new();
    compose_border(&mut path, &quarter, layout.size, Some(&outer));
    inner.render(&mut path, layout.size, false);
    Ok(path)
}

/// Build and serialize the outline with the given command style.
///
/// # Errors
///
/// Returns [`IconError::InvalidParameter`] for any out-of-range parameter.
pub fn assemble(config: &IconConfig, style: CommandStyle) -> Result<PathResult, IconError> {
    let path = build_path(config)?;
    let layout = Layout::new(config);
    Ok(PathResult {
        commands: path.commands(style),
        node_types: path.node_types(),
        size: config.size,
        node_count: path.len(),
        gradient: layout.gradient(),
    })
}

/// Generate the icon outline with compressed commands.
///
/// # Errors
///
/// Returns [`IconError::InvalidParameter`] for any out-of-range parameter.
pub fn generate_icon_path(config: &IconConfig) -> Result<PathResult, IconError> {
    assemble(config, CommandStyle::Compressed)
}
