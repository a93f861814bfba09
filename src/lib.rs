//! Helper tools for graph coloring experiments
//! (instance statistics, best-known-solution merging, bound extraction)

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// errors shared by all tools
pub mod error;

/// read instance catalogs (tables mapping instance names to file paths)
pub mod catalog;

/// read/write instance records (graph data & best known coloring)
pub mod instance;

/// read/write solution files (candidate colorings)
pub mod solution;

/// coloring checker (structural validity & actual color count)
pub mod checker;

/// merge a candidate coloring into an instance's best known coloring
pub mod merge;

/// lenient parsing of solver bound output blobs
pub mod bounds;
