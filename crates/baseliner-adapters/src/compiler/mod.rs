//! Stylesheet compiler adapters.

mod fake;
mod sass;

pub use fake::FakeCompiler;
pub use sass::SassCompiler;
