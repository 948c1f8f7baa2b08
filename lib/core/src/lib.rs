//! # reqdelta Core
//!
//! Core library for the reqdelta requirements comparison engine.
//!
//! This crate provides the deterministic, I/O-free heart of a comparison run:
//!
//! - [`Feature`] - One requirement item extracted from a source document
//! - [`Embedding`] - Fixed-dimension vector representation of a feature's text
//! - [`cosine_score`] - Normalized [0,1] similarity between two embeddings
//! - [`Classifier`] - Greedy best-match partitioning into exact/similar/delta
//! - [`Statistics`] - Counts, percentages and the weighted reusability score
//! - [`ComparisonResult`] - Immutable output record of a full comparison
//!
//! Embedding computation and gap-analysis text generation are external
//! capabilities; this crate only consumes their output.
//!
//! ## Example
//!
//! ```rust
//! use reqdelta_core::{Classifier, CompareConfig, Embedding, Feature};
//!
//! let new = vec![Feature::new("a_1", "Realtime charging", "Charge in realtime", "a")];
//! let existing = vec![Feature::new("b_1", "Realtime charging", "Charge in realtime", "b")];
//! let new_emb = vec![Embedding::new(vec![1.0, 0.0])];
//! let existing_emb = vec![Embedding::new(vec![1.0, 0.0])];
//!
//! let classifier = Classifier::new(CompareConfig::default()).unwrap();
//! let partition = classifier
//!     .classify(&new, &existing, &new_emb, &existing_emb)
//!     .unwrap();
//! assert_eq!(partition.exact.len(), 1);
//! ```

pub mod classify;
pub mod embedding;
pub mod error;
pub mod feature;
pub mod result;
pub mod score;
pub mod stats;

pub use classify::{Classifier, CompareConfig, Partition};
pub use embedding::Embedding;
pub use error::{Error, Result};
pub use feature::{Category, Feature, MatchPair};
pub use result::ComparisonResult;
pub use score::cosine_score;
pub use stats::Statistics;
