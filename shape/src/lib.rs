//! Path construction engine for the vault icon.
//!
//! This crate turns a small set of numeric parameters into one closed vector
//! path: a rounded square whose bottom edge is carved by a pointed arch, plus a
//! second, smaller arch as its own sub-path. It has no I/O; callers receive a
//! [`icon::PathResult`] holding the path-command string and the parallel
//! node-type string, and template those into a document themselves.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`point`] | Point value type and the closed set of plane transforms |
//! | [`node`] | Path steps, node types, and the command serializer |
//! | [`arch`] | Arch geometry derivation and rendering |
//! | [`border`] | Rounded-square frame built from one rotated quarter |
//! | [`icon`] | Top-level assembly into a [`icon::PathResult`] |
//! | [`config`] | Parameter set, defaults, and range validation |
//! | [`error`] | Error type shared by all of the above |
//! | [`consts`] | Fixed shape constants (roundness, midpoint blends) |

pub mod arch;
pub mod border;
pub mod config;
pub mod consts;
pub mod error;
pub mod icon;
pub mod node;
pub mod point;

pub use config::{HexColor, IconConfig};
pub use error::IconError;
pub use icon::{PathResult, assemble, generate_icon_path};
pub use node::CommandStyle;
