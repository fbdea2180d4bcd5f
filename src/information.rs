// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

//! Deferred construction of the relative part of a link.

use crate::encode::{encode_component, encode_relative};
use crate::error::{BuilderError, Result};
use crate::token::Token;

/// How the relative URL of one pending link is made.
///
/// A `Literal` is used verbatim. A `Composed` recipe keeps its route segments
/// and query pairs apart until it is resolved, so that encoding can be applied
/// per component.
#[derive(Debug, Clone, PartialEq)]
pub enum LinkInformation {
    Literal(String),
    Composed {
        prefix: String,
        route_items: Vec<Token>,
        query_items: Vec<Token>,
    },
}

impl LinkInformation {
    /// A literal relative URL. Surrounding whitespace is dropped.
    pub fn literal(raw_relative_url: &str) -> LinkInformation {
        LinkInformation::Literal(raw_relative_url.trim().to_string())
    }

    /// A recipe made of route segments and flattened `name, value` query items.
    ///
    /// Null route items are rejected, and so are blank or null query names.
    pub fn composed(route_items: Vec<Token>, query_items: Vec<Token>) -> Result<LinkInformation> {
        check_route_items(&route_items)?;
        check_query_pairs(&query_items)?;

        Ok(LinkInformation::Composed {
            prefix: String::new(),
            route_items,
            query_items,
        })
    }

    /// A literal relative URL followed by flattened `name, value` query items.
    ///
    /// Resolves like [`literal`](#method.literal) with the pairs pushed on top,
    /// so a multi-segment `relative_url` keeps its `/` when encoded.
    pub fn query(relative_url: &str, query_items: Vec<Token>) -> Result<LinkInformation> {
        check_query_pairs(&query_items)?;

        Ok(LinkInformation::Composed {
            prefix: relative_url.trim().to_string(),
            route_items: vec![],
            query_items,
        })
    }

    /// Appends query pairs, turning a literal into a composed recipe that keeps
    /// the literal as its prefix.
    pub(crate) fn push_query_pairs(&mut self, pairs: Vec<Token>) {
        match self {
            LinkInformation::Literal(url) => {
                *self = LinkInformation::Composed {
                    prefix: std::mem::replace(url, String::new()),
                    route_items: vec![],
                    query_items: pairs,
                };
            }

            LinkInformation::Composed { query_items, .. } => query_items.extend(pairs),
        }
    }

    /// Resolves the relative URL. Pure: the same state always yields the same
    /// string.
    ///
    /// ```
    /// use hateoas_builder::information::LinkInformation;
    ///
    /// let info = LinkInformation::composed(
    ///     hateoas_builder::tokens!["weather forecast", 2],
    ///     hateoas_builder::tokens!["page", 3],
    /// ).unwrap();
    ///
    /// assert_eq!(info.resolve(false), "weather forecast/2?page=3");
    /// assert_eq!(info.resolve(true), "weather+forecast/2?page=3");
    /// ```
    pub fn resolve(&self, encode: bool) -> String {
        match self {
            LinkInformation::Literal(url) if encode => encode_relative(url),

            LinkInformation::Literal(url) => url.clone(),

            LinkInformation::Composed {
                prefix,
                route_items,
                query_items,
            } => {
                let mut output = if encode {
                    encode_relative(prefix.trim())
                } else {
                    prefix.trim().to_string()
                };

                let route = route_items
                    .iter()
                    .filter(|item| !item.is_blank())
                    .map(|item| component(item.as_str().trim(), encode))
                    .collect::<Vec<_>>()
                    .join("/");

                if !route.is_empty() {
                    if !output.is_empty() && !output.ends_with('/') {
                        output.push('/');
                    }
                    output.push_str(&route);
                }

                let query = query_string(query_items, encode);

                if !query.trim().is_empty() {
                    output.push(if output.contains('?') { '&' } else { '?' });
                    output.push_str(&query);
                }

                output
            }
        }
    }
}

fn component(value: &str, encode: bool) -> String {
    if encode {
        encode_component(value)
    } else {
        value.to_string()
    }
}

/// Joins flattened `name, value, name, value, ...` items into `name=value`
/// tokens separated by `&`. A missing final value reads as empty.
fn query_string(items: &[Token], encode: bool) -> String {
    items
        .chunks(2)
        .map(|pair| {
            let name = pair[0].as_str().trim();
            let value = pair.get(1).map(|value| value.as_str().trim()).unwrap_or("");

            format!("{}={}", component(name, encode), component(value, encode))
        })
        .collect::<Vec<_>>()
        .join("&")
}

fn check_route_items(items: &[Token]) -> Result<()> {
    if items.iter().any(Token::is_null) {
        return Err(BuilderError::InvalidArgument {
            param: "route_items",
            reason: "No elements in the collection can be null.".into(),
        }
        .into());
    }

    Ok(())
}

/// Every name position in a flattened query list must hold a non-blank value.
pub(crate) fn check_query_pairs(items: &[Token]) -> Result<()> {
    if items.iter().step_by(2).any(Token::is_blank) {
        return Err(BuilderError::InvalidArgument {
            param: "query_pairs",
            reason: "Parameter names cannot be null, empty, or whitespace.".into(),
        }
        .into());
    }

    Ok(())
}
