//! Artifact generators: pure `(TypeScale) → String` functions.
//!
//! Every generator iterates tokens in the scale's declared order — never
//! alphabetical — because generated rule order affects cascade semantics.
//! Re-running any generator with unchanged input yields byte-identical
//! output (timestamp header lines aside, see [`overrides::semantic_lines`]).

pub mod demo;
pub mod overrides;
pub mod plugin;
pub mod settings;
pub mod styles;
