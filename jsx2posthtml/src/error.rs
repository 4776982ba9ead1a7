//! Error type.

use facet::Facet;

/// Errors that can occur while building a tree.
#[derive(Facet, Debug)]
#[facet(derive(Error))]
#[repr(u8)]
pub enum Error {
    /// tag must be a string name or a component, got {kind}
    InvalidTagKind { kind: &'static str },

    /// could not serialize node to JSON: {message}
    Json { message: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
