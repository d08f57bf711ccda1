//! Checker runners with one module per supported tool

pub mod pep8;
pub mod pyflakes;
pub mod todo;
pub mod traits;

// Re-export main types
pub use pep8::Pep8Runner;
pub use pyflakes::PyflakesRunner;
pub use todo::TodoRunner;
pub use traits::CheckRunner;
