//! Tolerance defaults (crate-wide).
//!
//! Policy
//! - Defaults are fixed constants so call sites never juggle tolerances. If a
//!   caller needs different thresholds, compare against the raw metrics
//!   (`sq_length_3d`, `Transform3::determinant`) directly.

/// Per-component threshold for `is_zero` and the degenerate-length cutoff used
/// by normalization.
pub const ZERO_EPS: f64 = 1e-6;
/// Relative singularity threshold: `|det M| < DET_EPS * max|m_ij|³`.
pub const DET_EPS: f64 = 1e-12;
