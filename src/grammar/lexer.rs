//! Lexer for template text using logos

use logos::Logos;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token {
    // Closing tags must be tried before opening tags
    #[regex(r"</[^<>/ \t\r\n][^<>/ \t\r\n]*>", |lex| {
        let s = lex.slice();
        s[2..s.len()-1].to_string()
    })]
    ClosingTag(String),

    #[regex(r"<[^<>/ \t\r\n][^<> \t\r\n]*>", |lex| {
        let s = lex.slice();
        s[1..s.len()-1].to_string()
    })]
    Tag(String),

    // Anything that cannot start a tag
    #[regex(r"[^<]+")]
    Text,
}

/// Lex template text into tokens with spans
///
/// A stray `<` that does not open a well-formed tag is skipped, so the
/// iterator only yields tags and runs of literal text.
pub fn lex(input: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    Token::lexer(input)
        .spanned()
        .filter_map(|(tok, span)| tok.ok().map(|t| (t, span)))
}

/// Every opening tag in `input`, in order of appearance
pub fn scan_tags(input: &str) -> Vec<(String, Span)> {
    lex(input)
        .filter_map(|(tok, span)| match tok {
            Token::Tag(name) => Some((name, span)),
            _ => None,
        })
        .collect()
}

/// Whether `<name>` lexes as exactly one opening tag named `name`
///
/// Names that fail this check could be rendered but never found again by
/// [`scan_tags`], so they cannot take part in catalog sync.
pub fn is_tag_name(name: &str) -> bool {
    let tag = format!("<{}>", name);
    let mut tokens = lex(&tag);
    match (tokens.next(), tokens.next()) {
        (Some((Token::Tag(found), span)), None) => found == name && span == (0..tag.len()),
        _ => false,
    }
}
