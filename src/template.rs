// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

use crate::error::{BuilderError, Result};
use crate::token::Token;
use pest::{iterators::Pair, Parser};
use std::fmt::{self, Display};

#[derive(Parser)]
#[grammar = "template.pest"]
pub struct TemplateParser;

impl Display for Rule {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{:?}", self)
    }
}

/// A piece of a parsed template.
#[derive(Debug, Clone, PartialEq)]
pub enum Piece {
    Text(String),
    Placeholder(usize),
}

/// A relative URL template with positional placeholders, e.g.
/// `orders/{0}/lines/{1}`.
///
/// ```
/// use hateoas_builder::template::Template;
/// use hateoas_builder::token::Token;
///
/// let template = Template::parse("dingle{0}{1}").unwrap();
/// let actual = template.render(&[Token::from("ball"), Token::from(2)]).unwrap();
///
/// assert_eq!(actual, "dingleball2");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pieces: Vec<Piece>,
}

impl Template {
    pub fn parse(input: &str) -> Result<Template> {
        let rule = TemplateParser::parse(Rule::template, input)
            .map_err(|err| BuilderError::InvalidTemplate(err.to_string()))?
            .next()
            .ok_or_else(|| BuilderError::InvalidTemplate(input.to_string()))?;

        Template::from_rule(rule)
    }

    pub fn from_rule(pair: Pair<Rule>) -> Result<Template> {
        ensure!(
            pair.as_rule() == Rule::template,
            BuilderError::InvalidRule(Rule::template, pair.as_rule())
        );

        let mut pieces = vec![];

        for inner_pair in pair.into_inner() {
            match inner_pair.as_rule() {
                Rule::text => pieces.push(Piece::Text(inner_pair.as_str().into())),

                Rule::open_brace => pieces.push(Piece::Text("{".into())),

                Rule::close_brace => pieces.push(Piece::Text("}".into())),

                Rule::placeholder => {
                    let placeholder = inner_pair.as_str();
                    let index = placeholder
                        .trim_start_matches('{')
                        .trim_end_matches('}')
                        .parse::<usize>()
                        .map_err(|_| BuilderError::InvalidTemplate(placeholder.into()))?;

                    pieces.push(Piece::Placeholder(index));
                }

                Rule::EOI => (),

                _ => unreachable!(),
            }
        }

        Ok(Template { pieces })
    }

    #[cfg(test)]
    pub(crate) fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Substitutes every placeholder with its argument. Null arguments render
    /// as the empty string.
    pub fn render(&self, arguments: &[Token]) -> Result<String> {
        let mut output = String::new();

        for piece in &self.pieces {
            match piece {
                Piece::Text(text) => output.push_str(text),

                Piece::Placeholder(index) => {
                    let argument = arguments.get(*index).ok_or_else(|| {
                        BuilderError::MissingArgument {
                            index: *index,
                            count: arguments.len(),
                        }
                    })?;

                    output.push_str(argument.as_str());
                }
            }
        }

        Ok(output)
    }
}

/// Parses and renders `template` in one go.
pub fn format(template: &str, arguments: &[Token]) -> Result<String> {
    Template::parse(template)?.render(arguments)
}
