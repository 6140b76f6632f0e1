//! Shared numeric constants for the shape crate.

// ── Arches ──────────────────────────────────────────────────────

/// Blend fraction pulling the arch control points toward their neighbours.
pub const ARCH_ROUNDNESS: f64 = 0.33;

/// Outer arch midpoint, as (x, y) fractions between the apex and the floor corner.
pub const OUTER_ARCH_MID_PCT: (f64, f64) = (0.40, 0.14);

/// Inner arch midpoint, as (x, y) fractions between the apex and the floor corner.
pub const INNER_ARCH_MID_PCT: (f64, f64) = (0.29, 0.07);

// ── Serialization ───────────────────────────────────────────────

/// Decimal places kept when writing coordinates.
pub const COORD_DECIMALS: i32 = 5;
