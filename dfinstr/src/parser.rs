//! Parser for the textual form of frontend attribute maps.
//!
//! The accepted syntax is the one produced by the `Display` implementation of
//! [`FrontendAttributes`]:
//!
//! ```text
//! {disjoint_read_write_regions="true", origin="frontend.lowering"}
//! ```
//!
//! Keys are bare (`[A-Za-z0-9_.-]+`) or double-quoted. Quoted strings support the `\"`, `\\`, `\n` and `\t` escapes.
use chumsky::prelude::*;

use crate::{
    attributes::{FrontendAttributes, is_bare_key_char},
    utils::{Error, Result},
};

pub fn attribute_key_parser<'src>()
-> impl Parser<'src, &'src str, String, extra::Err<Rich<'src, char>>> + Clone {
    let bare = any()
        .filter(|c: &char| is_bare_key_char(*c))
        .repeated()
        .at_least(1)
        .collect::<String>();

    choice((quoted_string_parser(), bare)).labelled("attribute name")
}

pub fn quoted_string_parser<'src>()
-> impl Parser<'src, &'src str, String, extra::Err<Rich<'src, char>>> + Clone {
    let escape = just('\\')
        .ignore_then(choice((
            just('\\'),
            just('"'),
            just('n').to('\n'),
            just('t').to('\t'),
        )))
        .labelled("escape sequence");

    none_of("\\\"")
        .or(escape)
        .repeated()
        .collect::<String>()
        .delimited_by(just('"'), just('"'))
        .labelled("string literal")
}

/// Parses `{key="value", ...}` into its entries, in source order.
///
/// Duplicate keys are accepted here and rejected by
/// [`parse_frontend_attributes`].
pub fn frontend_attributes_parser<'src>()
-> impl Parser<'src, &'src str, Vec<(String, String)>, extra::Err<Rich<'src, char>>> + Clone {
    attribute_key_parser()
        .then_ignore(just('=').padded())
        .then(quoted_string_parser())
        .padded()
        .separated_by(just(','))
        .allow_trailing()
        .collect::<Vec<_>>()
        .delimited_by(just('{').padded(), just('}').padded())
        .padded()
        .labelled("frontend attributes")
}

/// Parse a single frontend attribute map from its textual form.
pub fn parse_frontend_attributes(src: &str) -> Result<FrontendAttributes> {
    let entries = frontend_attributes_parser()
        .then_ignore(end())
        .parse(src)
        .into_result()
        .map_err(|errs| Error::Parse {
            errors: errs.into_iter().map(|err| err.to_string()).collect(),
        })?;

    let mut attrs = FrontendAttributes::new();
    for (key, value) in entries {
        if attrs.contains_key(&key) {
            return Err(Error::DuplicateAttribute { key });
        }
        attrs.insert(key, value);
    }
    Ok(attrs)
}
