//! Lexer for the cps language.
//!
//! Produces span-based tokens without storing text - text is sliced from source only when needed.
//!
//! ## Error handling
//!
//! The lexer never stops early. Problems become error tokens that the parser reports
//! as lexical diagnostics:
//!
//! - consecutive unrecognized characters coalesce into one `Garbage` token
//! - a number glued to identifier characters, digits, or dots becomes one `MalformedNumber`
//! - `/*` without a matching `*/` becomes an `UnterminatedComment` running to end of file

use logos::Logos;
use rowan::{TextRange, TextSize};
use std::ops::Range;

use super::cst::SyntaxKind;

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: SyntaxKind, span: TextRange) -> Self {
        Self { kind, span }
    }
}

fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

/// Tokenizes source into a vector of span-based tokens.
///
/// Every byte of `source` is covered by exactly one token.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = SyntaxKind::lexer(source);
    let mut error_start: Option<usize> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some(start) = error_start.take() {
                    let end = lexer.span().start;
                    tokens.push(Token::new(
                        SyntaxKind::Garbage,
                        range_to_text_range(start..end),
                    ));
                }
                tokens.push(Token::new(kind, range_to_text_range(lexer.span())));
            }
            Some(Err(())) => {
                if error_start.is_none() {
                    error_start = Some(lexer.span().start);
                }
            }
            None => {
                if let Some(start) = error_start.take() {
                    tokens.push(Token::new(
                        SyntaxKind::Garbage,
                        range_to_text_range(start..source.len()),
                    ));
                }
                break;
            }
        }
    }

    merge_malformed(source, tokens)
}

/// Folds adjacent token runs that only make sense as one broken lexeme.
fn merge_malformed(source: &str, tokens: Vec<Token>) -> Vec<Token> {
    let eof = TextSize::from(source.len() as u32);
    let mut out = Vec::with_capacity(tokens.len());
    let mut iter = tokens.into_iter().peekable();

    while let Some(token) = iter.next() {
        // A terminated block comment always wins the longest match, so a bare `/` `*`
        // pair means the comment never closes.
        let opens_comment = match token.kind {
            SyntaxKind::Slash | SyntaxKind::Garbage => {
                let text = token_text(source, &token);
                text.starts_with("/*")
                    || (text == "/"
                        && iter.peek().is_some_and(|next| {
                            next.kind == SyntaxKind::Star && next.span.start() == token.span.end()
                        }))
            }
            _ => false,
        };
        if opens_comment {
            out.push(Token::new(
                SyntaxKind::UnterminatedComment,
                TextRange::new(token.span.start(), eof),
            ));
            break;
        }

        if !token.kind.is_number() {
            out.push(token);
            continue;
        }

        let mut end = token.span.end();
        while let Some(next) = iter.peek()
            && next.span.start() == end
            && glues_to_number(next.kind)
        {
            end = next.span.end();
            iter.next();
        }

        if end == token.span.end() {
            out.push(token);
        } else {
            out.push(Token::new(
                SyntaxKind::MalformedNumber,
                TextRange::new(token.span.start(), end),
            ));
        }
    }

    out
}

fn glues_to_number(kind: SyntaxKind) -> bool {
    kind.is_number() || kind.is_keyword() || kind == SyntaxKind::Id || kind == SyntaxKind::Dot
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'src>(source: &'src str, token: &Token) -> &'src str {
    &source[std::ops::Range::<usize>::from(token.span)]
}
