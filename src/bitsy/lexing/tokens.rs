//! Token definitions for argument lists
//!
//! Tokens are produced by the logos derive macro. The grammar inside a line is
//! tiny: words, commas and the whitespace that separates fields.

use logos::Logos;

#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    #[regex(r"[ \t]+")]
    Whitespace,

    #[token(",")]
    Comma,

    // Anything up to the next separator
    #[regex(r"[^ \t,]+")]
    Word,
}

/// Tokenize a line, keeping the source span of every token.
pub fn tokenize(text: &str) -> Vec<(Token, logos::Span)> {
    let mut lexer = Token::lexer(text);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }

    tokens
}

/// Split a line into fields of comma-separated parts.
///
/// Whitespace separates fields unless it follows a comma, so `1, 2` is still a
/// single field. Empty parts (`1,,2` or a trailing comma) are kept as `""`.
pub fn fields(text: &str) -> Vec<Vec<&str>> {
    let mut fields = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut after_comma = false;

    for (token, span) in tokenize(text) {
        match token {
            Token::Word => {
                current.push(&text[span]);
                after_comma = false;
            }
            Token::Comma => {
                if current.is_empty() || after_comma {
                    current.push("");
                }
                after_comma = true;
            }
            Token::Whitespace => {
                if !after_comma && !current.is_empty() {
                    fields.push(std::mem::take(&mut current));
                }
            }
        }
    }

    if after_comma {
        current.push("");
    }
    if !current.is_empty() {
        fields.push(current);
    }

    fields
}
