// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

//! Error types and utilities.

use crate::template::Rule;
pub use failure::Error;
use failure::*;

/// Either `Ok(T)` or `Err(failure::Error)`.
///
/// The underlying cause is always a [`BuilderError`] and can be recovered with
/// `Error::downcast_ref`.
pub type Result<T> = ::std::result::Result<T, failure::Error>;

/// A link building error.
#[derive(Clone, Eq, PartialEq, Debug, Fail)]
pub enum BuilderError {
    /// A required argument was blank or held a value the builder cannot use.
    #[fail(display = "{} (Parameter '{}')", reason, param)]
    InvalidArgument { param: &'static str, reason: String },

    /// The operation is not valid for the current builder state.
    #[fail(display = "{}", _0)]
    InvalidState(String),

    /// The relative URL template is malformed.
    #[fail(display = "Invalid template: {}", _0)]
    InvalidTemplate(String),

    /// A template placeholder refers to an argument that was not supplied.
    #[fail(
        display = "Template placeholder {{{}}} has no argument ({} supplied)",
        index, count
    )]
    MissingArgument { index: usize, count: usize },

    /// Given invalid `Rule` variant to `from_rule`
    #[fail(display = "Expected a rule of type {} but given {} instead", _0, _1)]
    InvalidRule(Rule, Rule),

    /// No link carries the requested rel label.
    #[fail(display = "No link labelled '{}'", _0)]
    RelNotFound(String),

    /// More than one link carries the requested rel label.
    #[fail(display = "More than one link labelled '{}'", _0)]
    DuplicateRel(String),
}

impl BuilderError {
    pub(crate) fn blank(param: &'static str) -> BuilderError {
        BuilderError::InvalidArgument {
            param,
            reason: "Parameter cannot be null, empty, or whitespace.".into(),
        }
    }
}

/// Trims `value` and fails with [`BuilderError::InvalidArgument`] naming `param`
/// when nothing is left.
pub(crate) fn check_not_blank(value: &str, param: &'static str) -> Result<String> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(BuilderError::blank(param).into());
    }

    Ok(trimmed.to_string())
}
