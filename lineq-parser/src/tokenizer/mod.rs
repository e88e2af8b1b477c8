pub mod token;

use logos::Logos;
pub use token::{Token, TokenKind};

/// Splits the input into tokens, all at once, so that the parser can backtrack freely.
///
/// A character that is not part of the grammar becomes a [`TokenKind::Stray`] token instead of
/// stopping the tokenizer. The parser then reports it with its span.
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    TokenKind::lexer(input)
        .spanned()
        .map(|(kind, span)| Token {
            kind: kind.unwrap_or(TokenKind::Stray),
            lexeme: &input[span.clone()],
            span,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn kinds_and_lexemes(input: &str) -> Vec<(TokenKind, &str)> {
        tokenize_complete(input)
            .iter()
            .filter(|token| !token.is_space())
            .map(|token| (token.kind, token.lexeme))
            .collect()
    }

    #[test]
    fn sum_of_integers() {
        assert_eq!(kinds_and_lexemes("1 + 2"), [
            (TokenKind::Integer, "1"),
            (TokenKind::Plus, "+"),
            (TokenKind::Integer, "2"),
        ]);
    }

    #[test]
    fn generated_fragments() {
        assert_eq!(kinds_and_lexemes("(7/3)x - 2(x + 4.5) = 10"), [
            (TokenKind::LeftParen, "("),
            (TokenKind::Integer, "7"),
            (TokenKind::Slash, "/"),
            (TokenKind::Integer, "3"),
            (TokenKind::RightParen, ")"),
            (TokenKind::Name, "x"),
            (TokenKind::Minus, "-"),
            (TokenKind::Integer, "2"),
            (TokenKind::LeftParen, "("),
            (TokenKind::Name, "x"),
            (TokenKind::Plus, "+"),
            (TokenKind::Decimal, "4.5"),
            (TokenKind::RightParen, ")"),
            (TokenKind::Equals, "="),
            (TokenKind::Integer, "10"),
        ]);
    }

    #[test]
    fn spaces_are_single_tokens() {
        let tokens = tokenize_complete("3 *\n\t x");

        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[3].kind, TokenKind::Space);
        assert_eq!(tokens[3].span, 3..6);
    }

    #[test]
    fn stray_characters() {
        let tokens = tokenize_complete("3x $");
        let kinds = tokens.iter().map(|token| token.kind).collect::<Vec<_>>();

        assert_eq!(kinds, [TokenKind::Integer, TokenKind::Name, TokenKind::Space, TokenKind::Stray]);
        assert_eq!(tokens[3].span, 3..4);
        assert_eq!(TokenKind::Stray.to_string(), "an unknown character");
    }
}
