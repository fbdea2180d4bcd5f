// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

//! The link accumulator.
//!
//! A [`LinkBuilder`] collects `(rel, recipe)` entries in the order they are added
//! and resolves them against a shared base URL when built:
//!
//! ```
//! # #[macro_use] extern crate hateoas_builder;
//! # fn main() -> hateoas_builder::error::Result<()> {
//! use hateoas_builder::builder::LinkBuilder;
//! use hateoas_builder::link::Link;
//!
//! let page = 1;
//! let links = LinkBuilder::new("https://foo.bar")?
//!     .add_link("self", "weatherforecast")?
//!     .add_link_if(page > 1, "previous", "weatherforecast")?
//!     .add_parameters(tokens!["page", page - 1])?
//!     .add_query_link("next", "weatherforecast", tokens!["page", page + 1])?
//!     .build();
//!
//! assert_eq!(
//!     links,
//!     vec![
//!         Link::new("self", "https://foo.bar/weatherforecast"),
//!         Link::new("next", "https://foo.bar/weatherforecast?page=2"),
//!     ]
//! );
//! # Ok(())
//! # }
//! ```

use crate::context::BaseUrl;
use crate::error::{check_not_blank, BuilderError, Result};
use crate::information::{check_query_pairs, LinkInformation};
use crate::link::Link;
use crate::template::format as render_template;
use crate::token::Token;
use tracing::{debug, trace};

/// Outcome of the most recent `add_*` call.
///
/// Only [`LinkBuilder::add_parameters`] looks at it: after a suppressed add the
/// parameters have nowhere to go and are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    Active,
    SuppressedSinceLastAdd,
}

impl Default for LinkState {
    fn default() -> Self {
        LinkState::Active
    }
}

/// Accumulates named links for one response.
#[derive(Debug, Clone)]
pub struct LinkBuilder {
    base_url: String,
    entries: Vec<(String, LinkInformation)>,
    state: LinkState,
}

impl LinkBuilder {
    /// Starts an empty builder. `base_url` must not be blank; surrounding
    /// whitespace and trailing slashes are removed.
    pub fn new(base_url: &str) -> Result<LinkBuilder> {
        let base_url = check_not_blank(base_url, "base_url")?;
        let base_url = base_url.trim_end_matches('/').to_string();

        if base_url.is_empty() {
            return Err(BuilderError::blank("base_url").into());
        }

        Ok(LinkBuilder {
            base_url,
            entries: vec![],
            state: LinkState::default(),
        })
    }

    /// Starts an empty builder whose base URL is taken from an inbound request.
    pub fn from_request<R: BaseUrl + ?Sized>(request: &R) -> Result<LinkBuilder> {
        LinkBuilder::new(&request.to_base_url()?)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn state(&self) -> LinkState {
        self.state
    }

    /// Number of entries added so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn add_link(&mut self, rel_label: &str, raw_relative_url: &str) -> Result<&mut Self> {
        self.add_link_if(true, rel_label, raw_relative_url)
    }

    pub fn add_link_if(
        &mut self,
        condition: bool,
        rel_label: &str,
        raw_relative_url: &str,
    ) -> Result<&mut Self> {
        let rel_label = check_not_blank(rel_label, "rel_label")?;

        self.append_entry(condition, rel_label, || {
            Ok(LinkInformation::literal(raw_relative_url))
        })
    }

    /// Adds a link whose relative URL is `route_items` joined with `/`.
    ///
    /// Null items are rejected; blank ones are left out of the route. When
    /// `condition` is false only `rel_label` is checked.
    pub fn add_route_link<I>(&mut self, rel_label: &str, route_items: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<Token>,
    {
        self.add_route_link_if(true, rel_label, route_items)
    }

    pub fn add_route_link_if<I>(
        &mut self,
        condition: bool,
        rel_label: &str,
        route_items: I,
    ) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<Token>,
    {
        let rel_label = check_not_blank(rel_label, "rel_label")?;

        self.append_entry(condition, rel_label, || {
            LinkInformation::composed(collect(route_items), vec![])
        })
    }

    /// Adds a link to `relative_url` carrying the flattened `name, value, ...`
    /// `query_pairs`.
    ///
    /// The same as [`add_link`](#method.add_link) followed by
    /// [`add_parameters`](#method.add_parameters), except that nothing is added
    /// when either half is invalid.
    pub fn add_query_link<I>(
        &mut self,
        rel_label: &str,
        relative_url: &str,
        query_pairs: I,
    ) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<Token>,
    {
        self.add_query_link_if(true, rel_label, relative_url, query_pairs)
    }

    pub fn add_query_link_if<I>(
        &mut self,
        condition: bool,
        rel_label: &str,
        relative_url: &str,
        query_pairs: I,
    ) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<Token>,
    {
        let rel_label = check_not_blank(rel_label, "rel_label")?;

        self.append_entry(condition, rel_label, || {
            LinkInformation::query(relative_url, collect(query_pairs))
        })
    }

    /// Adds a link whose relative URL is `template` with its `{0}`, `{1}`, ...
    /// placeholders replaced by `arguments`.
    pub fn add_formatted_link<I>(
        &mut self,
        rel_label: &str,
        template: &str,
        arguments: I,
    ) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<Token>,
    {
        self.add_formatted_link_if(true, rel_label, template, arguments)
    }

    pub fn add_formatted_link_if<I>(
        &mut self,
        condition: bool,
        rel_label: &str,
        template: &str,
        arguments: I,
    ) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<Token>,
    {
        let rel_label = check_not_blank(rel_label, "rel_label")?;

        self.append_entry(condition, rel_label, || {
            let template = check_not_blank(template, "template")?;
            let relative_url = render_template(&template, &collect(arguments))?;

            Ok(LinkInformation::literal(&relative_url))
        })
    }

    /// Appends flattened `name, value, ...` query pairs to the most recently
    /// added link, whatever its rel.
    ///
    /// Does nothing when the last `add_*` call was suppressed by its condition.
    /// Fails when no link has been added yet.
    pub fn add_parameters<I>(&mut self, query_pairs: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: Into<Token>,
    {
        if self.state == LinkState::SuppressedSinceLastAdd {
            debug!("skipping query parameters for a suppressed link");
            return Ok(self);
        }

        let pairs = collect(query_pairs);
        check_query_pairs(&pairs)?;

        let (rel, info) = self.entries.last_mut().ok_or_else(|| {
            BuilderError::InvalidState(
                "At least one link must be added before query parameters can be added.".into(),
            )
        })?;

        trace!(rel = rel.as_str(), pairs = pairs.len() / 2, "adding query parameters");
        info.push_query_pairs(pairs);

        Ok(self)
    }

    /// Resolves every entry, in insertion order, into a link under the base
    /// URL. Percent-encodes the relative part when `encode` is set.
    pub fn build_with(&self, encode: bool) -> Vec<Link> {
        trace!(links = self.entries.len(), encode, "building links");

        self.entries
            .iter()
            .map(|(rel, info)| Link::new(rel.as_str(), self.href(&info.resolve(encode))))
            .collect()
    }

    pub fn build(&self) -> Vec<Link> {
        self.build_with(false)
    }

    pub fn build_encoded(&self) -> Vec<Link> {
        self.build_with(true)
    }

    fn href(&self, relative_url: &str) -> String {
        let relative_url = relative_url.trim_start_matches('/');

        if relative_url.is_empty() {
            self.base_url.clone()
        } else {
            format!("{}/{}", self.base_url, relative_url)
        }
    }

    /// The one place entries are added. `rel_label` is already validated;
    /// `info` runs, and may fail, only when `condition` holds.
    fn append_entry<F>(&mut self, condition: bool, rel_label: String, info: F) -> Result<&mut Self>
    where
        F: FnOnce() -> Result<LinkInformation>,
    {
        if !condition {
            debug!(rel = rel_label.as_str(), "link suppressed by condition");
            self.state = LinkState::SuppressedSinceLastAdd;
            return Ok(self);
        }

        let info = info()?;

        trace!(rel = rel_label.as_str(), "adding link");
        self.entries.push((rel_label, info));
        self.state = LinkState::Active;

        Ok(self)
    }
}

fn collect<I>(items: I) -> Vec<Token>
where
    I: IntoIterator,
    I::Item: Into<Token>,
{
    items.into_iter().map(Into::into).collect()
}
