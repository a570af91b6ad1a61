//! Literal text patching primitives for verification stub files.
//!
//! `vfpatch-core` provides the two operations the contract driver is built
//! from: inserting a line at a one-based position and replacing every
//! occurrence of a literal substring. Both operate on files resolved relative
//! to a [`Workspace`] root, read the whole file, and rewrite it in full.
//!
//! The payloads are treated as opaque text. Nothing here parses C headers,
//! contract annotations, or manifest directives.
//!
//! ```rust,no_run
//! use vfpatch_core::{LinePosition, Workspace};
//!
//! # fn main() -> Result<(), vfpatch_core::PatchError> {
//! let workspace = Workspace::open_ambient(".")?;
//! let position = LinePosition::new(5).unwrap_or(LinePosition::FIRST);
//! workspace.insert_line("string.h", position, "//@ #include <crypto.gh>\r\n")?;
//! let replacement = workspace.replace_text("string.h", "chars(", "crypto_chars(")?;
//! println!("{} matches", replacement.matches());
//! # Ok(()) }
//! ```

mod directive;
mod error;
mod insert;
mod position;
mod replace;
mod workspace;

#[cfg(test)]
mod tests;

pub use directive::{Directive, DirectiveOutcome, InsertLine, ReplaceText};
pub use error::PatchError;
pub use insert::{InsertedText, LineInsertion, insert_into};
pub use position::LinePosition;
pub use replace::{ReplacedText, Replacement, replace_all};
pub use workspace::Workspace;
