// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

use std::fmt::{self, Display};

/// A stringified value used as a route item, a query pair element or a template
/// argument.
///
/// A token is either a value or null. Null tokens exist so that optional values
/// can be passed straight through; each operation decides what null means (route
/// items reject it, query values and template arguments render it as empty).
///
/// ```
/// use hateoas_builder::token::Token;
///
/// assert_eq!(Token::from("ball").to_string(), "ball");
/// assert_eq!(Token::from(2).to_string(), "2");
/// assert!(Token::from(None::<&str>).is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Token(Option<String>);

impl Token {
    pub fn null() -> Token {
        Token(None)
    }

    pub fn is_null(&self) -> bool {
        self.0.is_none()
    }

    /// True when the token is null, empty or only whitespace.
    pub fn is_blank(&self) -> bool {
        self.as_str().trim().is_empty()
    }

    /// The text value, with null read as the empty string.
    pub fn as_str(&self) -> &str {
        match &self.0 {
            Some(value) => value,
            None => "",
        }
    }
}

impl Display for Token {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}", self.as_str())
    }
}

impl From<String> for Token {
    fn from(s: String) -> Self {
        Token(Some(s))
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Token(Some(s.to_string()))
    }
}

impl From<&String> for Token {
    fn from(s: &String) -> Self {
        Token(Some(s.clone()))
    }
}

impl<T: Into<Token>> From<Option<T>> for Token {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Token::null(),
        }
    }
}

macro_rules! token_from_display {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Token {
                fn from(value: $ty) -> Self {
                    Token(Some(value.to_string()))
                }
            }
        )*
    };
}

token_from_display!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

/// Builds a `Vec<Token>` from values of mixed types.
///
/// ```
/// # #[macro_use] extern crate hateoas_builder;
/// # fn main() {
/// use hateoas_builder::token::Token;
///
/// let items = tokens!["relative2", "ball", 2, None::<u32>];
///
/// assert_eq!(items[2], Token::from("2"));
/// assert!(items[3].is_null());
/// # }
/// ```
#[macro_export]
macro_rules! tokens {
    () => {
        ::std::vec::Vec::<$crate::token::Token>::new()
    };
    ($($value:expr),+ $(,)?) => {
        vec![$($crate::token::Token::from($value)),+]
    };
}
