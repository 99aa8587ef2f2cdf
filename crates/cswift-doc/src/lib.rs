//! # cswift-doc
//!
//! Doc comments for generated declarations:
//!
//! - [`lexer`] finds doc comments in C sources by their marker (`///`, `/**`, ...).
//! - [`cache`] indexes them per file and line and associates them with declarations.
//! - [`flavor`] rewrites comment commands (Doxygen) into Swift markup, resolving
//!   `\ref` targets through the generated symbol lookup.
//! - [`manager`] runs collection and formatting over a declaration list.

pub mod cache;
pub mod cursor;
pub mod error;
pub mod flavor;
pub mod formatter;
pub mod lexer;
pub mod manager;

pub use error::DocError;
pub use manager::DocCommentManager;
