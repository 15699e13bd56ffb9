//! Prime Law Domain Types
//!
//! The Prime Law derives each prime from its predecessor and describes the
//! step symbolically: every prime gap is classified into a **motif** label,
//! motifs group into coarser **domains**, and the first appearance of either
//! is a **regime innovation**.
//!
//! # Key Concepts
//!
//! - **Motif**: the canonical two-part label for a gap (`U1`, `E1.0`,
//!   `E2.3`). Labels and gaps are in one-to-one correspondence.
//! - **Domain**: a motif with its sub-index stripped (`E2.3` -> `E2`).
//! - **PrimeRecord**: one emitted step — index, prime, gap, motif,
//!   consecutive-run length, domain.
//! - **RegimeInnovation**: the index at which a motif or domain was seen
//!   for the first time.
//!
//! # Design Principles
//!
//! 1. Labels are symbols, not strings. They parse, display, and serialize
//!    as their canonical text form but carry their structure.
//! 2. Every reachable motif decodes back to exactly one gap; a label that
//!    cannot decode is rejected at the parsing boundary.
//! 3. Errors are typed and carry the failing index plus the offending
//!    values. Nothing is swallowed.

#![deny(unsafe_code)]

mod errors;
mod innovation;
mod motif;
mod record;

pub use errors::*;
pub use innovation::*;
pub use motif::*;
pub use record::*;
