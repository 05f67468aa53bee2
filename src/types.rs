//! Domain type aliases shared across the crate.
//!
//! Keeping these as aliases rather than newtypes mirrors the teacher
//! crate's `types` module (`Date`, `Duration`, `NodeID`): arithmetic between
//! ETAs, windows, and rates happens constantly in the routing hot path, and
//! a newtype would force `.0` noise or operator-overload boilerplate for no
//! behavioral gain here.

/// Integer identifier for a node (sender or receiver of a contact).
pub type NodeId = i64;

/// Stable integer identifier for a contact, unique within a contact set.
pub type ContactId = i64;

/// An absolute or relative point in time, in seconds.
pub type Seconds = f64;

/// A quantity of bytes.
pub type Bytes = f64;

/// A channel capacity, in bits per second.
pub type BitsPerSecond = f64;

/// Absolute tolerance applied to all temporal comparisons, in seconds.
///
/// Absorbs floating-point drift in the ETA kernel's comparisons (window
/// positivity, window-end checks, stale-label discards). Must be applied
/// uniformly everywhere the same comparisons occur (spec §4.3, §9).
pub const EPS_T: Seconds = 1e-12;

/// Absolute tolerance applied to all capacity comparisons, in bytes.
pub const EPS_B: Bytes = 1e-9;
