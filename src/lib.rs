//! # baudoc
//!
//! Automatic document classification for construction-project document
//! management.
//!
//! Given an uploaded file's name, extension, and optionally its text
//! content, baudoc assigns a taxonomy category, an optional subcategory,
//! and a 0–100 confidence score, using a fixed table of weighted
//! pattern/keyword rules. The engine is a set of pure functions over an
//! immutable taxonomy: no I/O, no learning, no network. "No match" is a
//! normal outcome, represented as `None` and never as a sentinel value.
//!
//! ## Pipeline
//!
//! ```text
//! (filename, extension, content?)
//!        │
//!        ▼
//! ┌────────────┐   ┌──────────────┐   ┌─────────────┐
//! │  Matcher    │──▶│ Subcategory  │──▶│ Confidence  │──▶ Suggestion
//! │ classify()  │   │ suggester    │   │ calculator  │
//! └────────────┘   └──────────────┘   └─────────────┘
//! ```
//!
//! The output is always a suggestion; the calling workflow decides
//! whether to auto-apply it or ask a human first.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`taxonomy`] | Immutable category registry |
//! | [`classify`] | Weighted category matcher |
//! | [`subcategory`] | Curated subcategory refinement |
//! | [`confidence`] | 0–100 confidence scoring |
//! | [`analyze`] | Batch pipeline with aggregate statistics |
//! | [`models`] | Shared data types |
//! | [`config`] | TOML configuration for the CLI |
//! | [`scan`] | Directory walker feeding batch analysis |
//! | [`report`] | Table and JSON report rendering |

pub mod analyze;
pub mod classify;
pub mod config;
pub mod confidence;
pub mod models;
pub mod report;
pub mod scan;
pub mod subcategory;
pub mod taxonomy;

pub use analyze::analyze_files;
pub use classify::classify;
pub use confidence::confidence;
pub use subcategory::suggest_subcategory;
