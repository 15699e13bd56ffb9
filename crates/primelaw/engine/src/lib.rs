//! Prime Law Engine
//!
//! The recursive core of the Prime Law: an exact primality witness, the
//! gap classifier and its append-only motif alphabet, the domain mapper,
//! run tracking, regime innovation detection, and the generator that
//! orchestrates them into an ordered stream of `PrimeRecord`s.
//!
//! # Architecture
//!
//! ```text
//! witness walk ──▶ gap ──▶ GapClassifier ──▶ RunTracker
//!                              │                  │
//!                         DomainMapper            ▼
//!                              │          PrimeRecord out
//!                              ▼                  ▲
//!                   RegimeInnovationDetector ─────┘
//! ```
//!
//! The engine does no I/O: caches come in as parsed rows, snapshots go
//! out as values. Persistence lives in `primelaw-store`, presentation
//! in the CLI.

#![deny(unsafe_code)]

mod classifier;
mod config;
mod domains;
mod generator;
mod innovations;
mod runs;
mod snapshot;
pub mod witness;

pub use classifier::{AlphabetEntry, GapClassifier, GapHistory, MotifTable};
pub use config::{LawConfig, DEFAULT_HISTORY_WINDOW, DEFAULT_SEARCH_SPAN};
pub use domains::DomainMapper;
pub use generator::{LawStream, PrimeLaw, RunStatus};
pub use innovations::RegimeInnovationDetector;
pub use runs::{RunState, RunTracker};
pub use snapshot::{LawSnapshot, SNAPSHOT_VERSION};
