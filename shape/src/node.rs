//! Path node model and the path-command serializer.
//!
//! A [`Path`] is an ordered, append-only list of [`PathNode`]s. Insertion order
//! is draw order. Each node pairs a [`PathStep`] (the geometry) with a
//! [`NodeType`] (editor metadata that is carried through to the document but
//! never interpreted here).
//!
//! Serialization produces two parallel strings: the `d` attribute command list
//! and the node-type code list, one code per node.

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;

use crate::point::Point;

/// Editor node classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeType {
    /// Independent incoming and outgoing tangents.
    #[default]
    Cusp,
    Smooth,
    Symmetric,
    Auto,
}

impl NodeType {
    /// Single-character code used in the node-type string.
    #[must_use]
    pub fn code(self) -> char {
        match self {
            Self::Cusp => 'c',
            Self::Smooth => 's',
            Self::Symmetric => 'z',
            Self::Auto => 'a',
        }
    }
}

/// One drawing step. Only absolute coordinates are supported.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathStep {
    MoveTo(Point),
    LineTo(Point),
    /// Cubic Bézier from the current point to `to`.
    CurveTo { to: Point, ctrl_start: Point, ctrl_end: Point },
    ClosePath,
}

impl PathStep {
    /// Command letter for this step.
    #[must_use]
    pub fn command(&self) -> char {
        match self {
            Self::MoveTo(_) => 'M',
            Self::LineTo(_) => 'L',
            Self::CurveTo { .. } => 'C',
            Self::ClosePath => 'Z',
        }
    }

    /// Operand points in the order they are written.
    #[must_use]
    pub fn operands(&self) -> Vec<Point> {
        match *self {
            Self::MoveTo(p) | Self::LineTo(p) => vec![p],
            Self::CurveTo { to, ctrl_start, ctrl_end } => vec![ctrl_start, ctrl_end, to],
            Self::ClosePath => Vec::new(),
        }
    }

    /// Where the pen ends up after this step, if the step moves it explicitly.
    #[must_use]
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            Self::MoveTo(p) | Self::LineTo(p) | Self::CurveTo { to: p, .. } => Some(p),
            Self::ClosePath => None,
        }
    }
}

/// A step plus its node-type tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathNode {
    pub step: PathStep,
    pub node_type: NodeType,
}

impl PathNode {
    #[must_use]
    pub fn new(step: PathStep, node_type: NodeType) -> Self {
        Self { step, node_type }
    }

    /// Render this node, omitting the command letter when it repeats `prev`'s.
    #[must_use]
    pub fn render(&self, prev: Option<&PathNode>, style: CommandStyle) -> String {
        let command = self.step.command();
        let mut parts = Vec::with_capacity(4);
        let repeated = prev.is_some_and(|p| p.step.command() == command);
        if style == CommandStyle::Explicit || !repeated {
            parts.push(command.to_string());
        }
        parts.extend(self.step.operands().into_iter().map(Point::render));
        parts.join(" ")
    }
}

/// How repeated command letters are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommandStyle {
    /// Omit a command letter equal to the previous node's.
    #[default]
    Compressed,
    /// Write every command letter.
    Explicit,
}

/// Ordered list of path nodes, built by appending.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    nodes: Vec<PathNode>,
    node_type: NodeType,
}

impl Path {
    /// An empty path whose builder methods tag nodes as [`NodeType::Cusp`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty path whose builder methods tag nodes with `node_type`.
    #[must_use]
    pub fn with_node_type(node_type: NodeType) -> Self {
        Self { nodes: Vec::new(), node_type }
    }

    pub fn push(&mut self, node: PathNode) {
        self.nodes.push(node);
    }

    pub fn move_to(&mut self, to: Point) {
        self.push_step(PathStep::MoveTo(to));
    }

    pub fn line_to(&mut self, to: Point) {
        self.push_step(PathStep::LineTo(to));
    }

    pub fn curve_to(&mut self, to: Point, ctrl_start: Point, ctrl_end: Point) {
        self.push_step(PathStep::CurveTo { to, ctrl_start, ctrl_end });
    }

    pub fn close(&mut self) {
        self.push_step(PathStep::ClosePath);
    }

    fn push_step(&mut self, step: PathStep) {
        self.nodes.push(PathNode::new(step, self.node_type));
    }

    #[must_use]
    pub fn nodes(&self) -> &[PathNode] {
        &self.nodes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The `d` attribute string: nodes separated by single spaces.
    #[must_use]
    pub fn commands(&self, style: CommandStyle) -> String {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut prev: Option<&PathNode> = None;
        for node in &self.nodes {
            out.push(node.render(prev, style));
            prev = Some(node);
        }
        out.join(" ")
    }

    /// One node-type code per node, in path order.
    #[must_use]
    pub fn node_types(&self) -> String {
        self.nodes.iter().map(|n| n.node_type.code()).collect()
    }

    /// Split into sub-paths, each starting at a `MoveTo`.
    ///
    /// Nodes before the first `MoveTo` form a leading sub-path of their own.
    #[must_use]
    pub fn subpaths(&self) -> Vec<&[PathNode]> {
        let mut out = Vec::new();
        let mut start = 0;
        for (i, node) in self.nodes.iter().enumerate() {
            if i > start && matches!(node.step, PathStep::MoveTo(_)) {
                out.push(&self.nodes[start..i]);
                start = i;
            }
        }
        if start < self.nodes.len() {
            out.push(&self.nodes[start..]);
        }
        out
    }

    /// True when every sub-path is closed and none ends on a curve.
    ///
    /// A sub-path is closed when its last node is `ClosePath`, or a `LineTo`
    /// landing exactly on the sub-path's opening `MoveTo`.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        !self.nodes.is_empty() && self.subpaths().into_iter().all(subpath_is_closed)
    }
}

fn subpath_is_closed(nodes: &[PathNode]) -> bool {
    let (Some(first), Some(last)) = (nodes.first(), nodes.last()) else {
        return false;
    };
    let PathStep::MoveTo(origin) = first.step else {
        return false;
    };
    match last.step {
        PathStep::ClosePath => true,
        PathStep::LineTo(p) => nodes.len() > 1 && p == origin,
        PathStep::MoveTo(_) | PathStep::CurveTo { .. } => false,
    }
}
