// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

use crate::error::{check_not_blank, BuilderError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// The HTTP method a link is followed with unless told otherwise.
pub const DEFAULT_METHOD: &str = "GET";

fn default_method() -> String {
    DEFAULT_METHOD.to_string()
}

/// A resolved hypermedia link, ready to be serialized into a response body.
///
/// Two links are equal when their rel, href and method are equal.
///
/// ```
/// use hateoas_builder::link::Link;
///
/// let link = Link::new("self", "https://foo.bar/weatherforecast");
///
/// assert_eq!(link.method(), "GET");
/// assert_eq!(link.to_string(), "self: https://foo.bar/weatherforecast");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    rel: String,
    href: String,
    #[serde(default = "default_method")]
    method: String,
}

impl Link {
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Link {
        Link {
            rel: rel.into(),
            href: href.into(),
            method: default_method(),
        }
    }

    /// Consumes the link and returns it with `method` in place of `GET`.
    pub fn with_method(self, method: impl Into<String>) -> Link {
        Link {
            method: method.into(),
            ..self
        }
    }

    pub fn rel(&self) -> &str {
        &self.rel
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn method(&self) -> &str {
        &self.method
    }
}

impl Display for Link {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}: {}", self.rel, self.href)
    }
}

/// Lookups over a built set of links.
pub trait LinkSlice {
    /// The href of the only link labelled `rel`.
    ///
    /// Fails when `rel` is blank, when no link carries it or when more than one
    /// does.
    fn to_href(&self, rel: &str) -> Result<&str>;

    fn to_self_href(&self) -> Result<&str> {
        self.to_href("self")
    }
}

impl LinkSlice for [Link] {
    fn to_href(&self, rel: &str) -> Result<&str> {
        let rel = check_not_blank(rel, "rel")?;
        let mut matches = self.iter().filter(|link| link.rel == rel);

        match (matches.next(), matches.next()) {
            (Some(link), None) => Ok(link.href()),
            (None, _) => Err(BuilderError::RelNotFound(rel).into()),
            (Some(_), Some(_)) => Err(BuilderError::DuplicateRel(rel).into()),
        }
    }
}
