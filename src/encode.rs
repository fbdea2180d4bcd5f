// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

//! Percent-encoding of relative URLs.
//!
//! Only the RFC 3986 unreserved characters (`A-Z a-z 0-9 - . _ ~`) are kept as
//! they are. A space becomes `+` and every other byte is percent-encoded.

use percent_encoding::{utf8_percent_encode, EncodeSet};

/// Everything but the unreserved characters and the space, which is handled
/// separately.
#[derive(Clone, Copy, Debug)]
struct ComponentEncodeSet;

impl EncodeSet for ComponentEncodeSet {
    fn contains(&self, byte: u8) -> bool {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' | b' ' => false,
            _ => true,
        }
    }
}

/// Encodes a single URL component (a route segment, a query name or a query
/// value).
///
/// ```
/// use hateoas_builder::encode::encode_component;
///
/// assert_eq!(encode_component("a b/c"), "a+b%2Fc");
/// ```
pub fn encode_component(input: &str) -> String {
    // '+' is already escaped by the set so the replacement cannot collide.
    utf8_percent_encode(input, ComponentEncodeSet)
        .to_string()
        .replace(' ', "+")
}

/// Encodes a relative URL keeping its structure: path segments split on `/`,
/// the query split from the path on the first `?`, pairs split on `&` and each
/// name split from its value on the first `=`.
pub fn encode_relative(input: &str) -> String {
    let mut parts = input.splitn(2, '?');
    let path = parts.next().unwrap_or_default();
    let mut output = encode_path(path);

    if let Some(query) = parts.next() {
        output.push('?');
        output.push_str(&encode_query(query));
    }

    output
}

fn encode_path(path: &str) -> String {
    path.split('/')
        .map(encode_component)
        .collect::<Vec<_>>()
        .join("/")
}

fn encode_query(query: &str) -> String {
    query
        .split('&')
        .map(|pair| {
            let mut parts = pair.splitn(2, '=');
            let name = encode_component(parts.next().unwrap_or_default());

            match parts.next() {
                Some(value) => format!("{}={}", name, encode_component(value)),
                None => name,
            }
        })
        .collect::<Vec<_>>()
        .join("&")
}
