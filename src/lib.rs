// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

//! Fluent construction of `rel` / `href` link collections for API responses.
//!
//! Start a [`LinkBuilder`] from a base URL (or from a request through
//! [`BaseUrl`]), chain `add_*` calls and [`build`](LinkBuilder::build) the
//! links once the response is ready.

#[macro_use]
extern crate failure;

extern crate pest;
#[macro_use]
extern crate pest_derive;

#[macro_use]
pub mod token;

pub mod builder;
pub mod context;
pub mod encode;
pub mod error;
pub mod information;
pub mod link;
pub mod template;

pub use builder::{LinkBuilder, LinkState};
pub use context::{BaseUrl, RequestParts};
pub use link::{Link, LinkSlice};
pub use token::Token;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BuilderError;

    const BASE_URL: &str = "https://foo.bar";

    fn builder() -> LinkBuilder {
        LinkBuilder::new(BASE_URL).expect("Expect a valid base url")
    }

    #[test]
    fn order_is_preserved() {
        let links = builder()
            .add_link("self", "weatherforecast")
            .and_then(|b| b.add_route_link("item", tokens!["weatherforecast", 1]))
            .and_then(|b| b.add_query_link("next", "weatherforecast", tokens!["page", 2]))
            .and_then(|b| b.add_formatted_link("day", "weatherforecast/days/{0}", tokens!["monday"]))
            .expect("Expect links")
            .build();

        let expected = vec![
            Link::new("self", "https://foo.bar/weatherforecast"),
            Link::new("item", "https://foo.bar/weatherforecast/1"),
            Link::new("next", "https://foo.bar/weatherforecast?page=2"),
            Link::new("day", "https://foo.bar/weatherforecast/days/monday"),
        ];

        assert_eq!(links, expected);
    }

    #[test]
    fn conditional_suppression() {
        let mut builder = builder();
        builder.add_link("self", "a").unwrap();
        let before = builder.build();

        builder
            .add_link_if(false, "next", "b")
            .and_then(|b| b.add_parameters(tokens!["page", 2]))
            .expect("Expect a suppressed link");

        assert_eq!(builder.build(), before);
    }

    #[test]
    fn route_composition() {
        let links = builder()
            .add_route_link("r", tokens!["a", "b", "c"])
            .unwrap()
            .build();

        assert_eq!(links, vec![Link::new("r", "https://foo.bar/a/b/c")]);
    }

    #[test]
    fn query_composition_is_not_sorted() {
        let links = builder()
            .add_query_link("r", "base", tokens!["k1", "v1", "k2", "v2"])
            .and_then(|b| b.add_query_link("r", "base", tokens!["k2", "v2", "k1", "v1"]))
            .unwrap()
            .build();

        assert_eq!(links[0].href(), "https://foo.bar/base?k1=v1&k2=v2");
        assert_eq!(links[1].href(), "https://foo.bar/base?k2=v2&k1=v1");
    }

    #[test]
    fn encoding_only_on_request_and_build_is_repeatable() {
        let mut builder = builder();
        builder.add_link("r", "weather forecast").unwrap();

        assert_eq!(builder.build_encoded()[0].href(), "https://foo.bar/weather+forecast");
        assert_eq!(builder.build()[0].href(), "https://foo.bar/weather forecast");
        assert_eq!(builder.build(), builder.build());
    }

    #[test]
    fn blank_rel_is_rejected_by_every_add() {
        for rel in &["", "\t"] {
            let mut builder = builder();
            builder.add_link("self", "a").unwrap();

            let results = vec![
                builder.add_link(rel, "b").map(|_| ()),
                builder.add_link_if(true, rel, "b").map(|_| ()),
                builder.add_link_if(false, rel, "b").map(|_| ()),
                builder.add_route_link(rel, tokens!["b"]).map(|_| ()),
                builder.add_route_link_if(false, rel, tokens!["b"]).map(|_| ()),
                builder.add_query_link(rel, "b", tokens!["k", "v"]).map(|_| ()),
                builder.add_query_link_if(false, rel, "b", tokens!["k", "v"]).map(|_| ()),
                builder.add_formatted_link(rel, "b{0}", tokens![1]).map(|_| ()),
                builder.add_formatted_link_if(false, rel, "b{0}", tokens![1]).map(|_| ()),
            ];

            for result in results {
                let error = result.unwrap_err();

                assert_eq!(
                    error.downcast_ref::<BuilderError>(),
                    Some(&BuilderError::blank("rel_label"))
                );
            }

            assert_eq!(builder.build().len(), 1);
            assert_eq!(builder.state(), LinkState::Active);
        }
    }

    #[test]
    fn parameters_target_the_last_entry_only() {
        let links = builder()
            .add_link("self", "a")
            .and_then(|b| b.add_link("self", "b"))
            .and_then(|b| b.add_parameters(tokens!["k", "v"]))
            .unwrap()
            .build();

        assert_eq!(
            links,
            vec![
                Link::new("self", "https://foo.bar/a"),
                Link::new("self", "https://foo.bar/b?k=v"),
            ]
        );
    }

    #[test]
    fn null_route_item_is_rejected() {
        let mut builder = builder();
        let error = builder
            .add_route_link("r", tokens!["a", None::<&str>, "c"])
            .unwrap_err();

        match error.downcast_ref::<BuilderError>() {
            Some(BuilderError::InvalidArgument { param, .. }) => assert_eq!(*param, "route_items"),
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(builder.build().is_empty());
    }

    #[test]
    fn response_body() {
        let request = RequestParts::new("https", "foo.bar");
        let links = LinkBuilder::from_request(&request)
            .and_then(|mut builder| {
                builder
                    .add_link("self", "weatherforecast")?
                    .add_query_link_if(false, "previous", "weatherforecast", tokens!["page", 0])?
                    .add_query_link("next", "weatherforecast", tokens!["page", 2])?;

                Ok(builder.build())
            })
            .expect("Expect links");

        assert_eq!(links.to_self_href().unwrap(), "https://foo.bar/weatherforecast");

        let actual = serde_json::to_string(&links).expect("Expect serializable links");
        let expected = concat!(
            r#"[{"rel":"self","href":"https://foo.bar/weatherforecast","method":"GET"},"#,
            r#"{"rel":"next","href":"https://foo.bar/weatherforecast?page=2","method":"GET"}]"#
        );

        assert_eq!(actual, expected);
    }
}
