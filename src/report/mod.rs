//! Report Module
//!
//! Persists a finished ranking as a JSON array of display lines, e.g.
//! `"1  : Christ                  : 412"`, in a file named
//! `{core|all}-{year}-{month}-conference.json`.

pub mod writer;

#[cfg(test)]
mod tests;
