// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

//! Base URLs from inbound requests.
//!
//! Whatever the HTTP framework, links are rooted at the scheme and authority
//! of the request that is being answered. Path, query and fragment are dropped.

use crate::error::{check_not_blank, BuilderError, Result};
use url::Url;

/// Something a base URL (`scheme://host[:port]`) can be read from.
pub trait BaseUrl {
    fn to_base_url(&self) -> Result<String>;
}

/// The scheme and `Host` header of a request, as most frameworks expose them.
///
/// ```
/// use hateoas_builder::context::{BaseUrl, RequestParts};
///
/// let parts = RequestParts::new("https", "foo.bar:8443");
///
/// assert_eq!(parts.to_base_url().unwrap(), "https://foo.bar:8443");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestParts {
    scheme: String,
    host: String,
}

impl RequestParts {
    pub fn new(scheme: impl Into<String>, host: impl Into<String>) -> RequestParts {
        RequestParts {
            scheme: scheme.into(),
            host: host.into(),
        }
    }
}

impl BaseUrl for RequestParts {
    fn to_base_url(&self) -> Result<String> {
        let scheme = check_not_blank(&self.scheme, "scheme")?;
        let host = check_not_blank(&self.host, "host")?;

        Ok(format!("{}://{}", scheme, host))
    }
}

/// The absolute URL of the request, e.g. `https://foo.bar/api/orders?page=2`.
impl BaseUrl for Url {
    fn to_base_url(&self) -> Result<String> {
        let host = self.host_str().ok_or_else(|| BuilderError::InvalidArgument {
            param: "url",
            reason: format!("URL has no host: {}", self),
        })?;

        let base_url = match self.port() {
            Some(port) => format!("{}://{}:{}", self.scheme(), host, port),
            None => format!("{}://{}", self.scheme(), host),
        };

        Ok(base_url)
    }
}

/// An absolute URL in text form.
impl BaseUrl for str {
    fn to_base_url(&self) -> Result<String> {
        let url = Url::parse(self.trim()).map_err(|err| BuilderError::InvalidArgument {
            param: "url",
            reason: err.to_string(),
        })?;

        url.to_base_url()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::LinkBuilder;
    use crate::link::Link;

    fn param(error: failure::Error) -> &'static str {
        match error.downcast::<BuilderError>() {
            Ok(BuilderError::InvalidArgument { param, .. }) => param,
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn url_drops_path_and_query() {
        let url = Url::parse("https://foo.bar/weatherforecast?page=2#top").unwrap();

        assert_eq!(url.to_base_url().unwrap(), "https://foo.bar");
    }

    #[test]
    fn url_keeps_explicit_port() {
        let url = Url::parse("http://localhost:7071/api/orders").unwrap();

        assert_eq!(url.to_base_url().unwrap(), "http://localhost:7071");
    }

    #[test]
    fn url_drops_default_port() {
        let url = Url::parse("https://foo.bar:443/api").unwrap();

        assert_eq!(url.to_base_url().unwrap(), "https://foo.bar");
    }

    #[test]
    fn url_without_host() {
        let url = Url::parse("mailto:someone@foo.bar").unwrap();

        assert_eq!(param(url.to_base_url().unwrap_err()), "url");
    }

    #[test]
    fn text_url() {
        assert_eq!(
            " https://foo.bar/weatherforecast ".to_base_url().unwrap(),
            "https://foo.bar"
        );
        assert_eq!(param("not a url".to_base_url().unwrap_err()), "url");
    }

    #[test]
    fn request_parts_need_scheme_and_host() {
        assert_eq!(param(RequestParts::new("", "foo.bar").to_base_url().unwrap_err()), "scheme");
        assert_eq!(param(RequestParts::new("https", " ").to_base_url().unwrap_err()), "host");
    }

    #[test]
    fn builder_from_request() {
        let request = Url::parse("https://foo.bar/weatherforecast").unwrap();
        let links = LinkBuilder::from_request(&request)
            .unwrap()
            .add_link("self", "weatherforecast")
            .unwrap()
            .build();

        assert_eq!(
            links,
            vec![Link::new("self", "https://foo.bar/weatherforecast")]
        );
    }

    #[test]
    fn builder_from_request_parts() {
        let request = RequestParts::new("https", "foo.bar");
        let builder = LinkBuilder::from_request(&request).unwrap();

        assert_eq!(builder.base_url(), "https://foo.bar");
    }
}
