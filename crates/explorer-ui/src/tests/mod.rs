//! Behavioral tests for the browser shell
//!
//! BDD-style tests using the given-when-then naming convention. They cover
//! the pieces that run without a browser; the data pipeline itself is
//! tested in `explorer-core`.
