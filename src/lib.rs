//! Crustadf is a construction and query engine for Abstract Dialectical Frameworks (ADFs).
//!
//! An ADF is a set of arguments, each one carrying an acceptance condition that names the arguments it depends on.
//! The dependencies induce links (parent to child), classified by a [`LinkType`](link::LinkType) computed by a pluggable [`LinkStrategy`](link::LinkStrategy).
//!
//! Frameworks are staged in a [`Builder`](adf::Builder), which either computes every link at construction time (eager mode),
//! computes them on first query (lazy mode), or requires all of them to be given explicitly (provided mode).
//! Once built, frameworks are immutable and may be queried concurrently.

#![warn(missing_docs)]

pub mod adf;

pub mod link;

pub mod utils;
