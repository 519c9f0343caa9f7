//! Text Processing Module
//!
//! Turns the raw text of a talk into the word tokens that get counted.
//!
//! ## Submodules
//! - **`tokenizer`**: Normalization (lowercasing, contraction collapsing, number stripping)
//!   and splitting into tokens.
//! - **`stopwords`**: The static rejection set and the optional filtering stage.

pub mod stopwords;
pub mod tokenizer;
