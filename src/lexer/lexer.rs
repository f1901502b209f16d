use super::{
    token::{KEYWORDS, ONE_SYMBOL_TOKENS, TWO_SYMBOLS_TOKENS},
    LexError, Span, Token, TokenKind,
};

#[derive(Debug)]
pub struct Lexer {
    chars: Vec<char>,
    tokens: Vec<Token>,
    errors: Vec<LexError>,
    index: usize,
    offset: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    fn new(s: &str) -> Self {
        Self {
            chars: s.chars().collect(),
            tokens: vec![],
            errors: vec![],
            index: 0,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    fn span(&self) -> Span {
        Span {
            offset: self.offset,
            line: self.line,
            column: self.column,
        }
    }

    fn advance(&mut self, count: usize) {
        for &c in &self.chars[self.index..self.index + count] {
            self.offset += c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.index += count;
    }

    fn new_token(&mut self, kind: TokenKind, s: &str) {
        self.tokens.push(Token {
            kind,
            text: s.to_string(),
            span: self.span(),
        });
        self.advance(s.chars().count());
    }

    fn parse_number(&mut self) {
        let s: String = self.chars[self.index..]
            .iter()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        let value = match s.parse::<i64>() {
            Ok(value) => value,
            Err(_) => {
                // Keep going with the wrapped value, but say so.
                self.errors.push(LexError::IntegerOverflow {
                    literal: s.clone(),
                    span: self.span(),
                });
                s.bytes().fold(0i64, |acc, b| {
                    acc.wrapping_mul(10).wrapping_add(i64::from(b - b'0'))
                })
            }
        };
        self.new_token(TokenKind::Num(value), &s);
    }

    fn parse_identifier(&mut self) {
        let s: String = self.chars[self.index..]
            .iter()
            .take_while(|&&c| c.is_ascii_alphanumeric() || c == '_')
            .collect();

        if let Some(kind) = KEYWORDS.get(s.as_str()) {
            self.new_token(kind.clone(), &s);
        } else {
            self.new_token(TokenKind::Ident(s.clone()), &s);
        }
    }

    fn _tokenize(&mut self) {
        while self.index < self.chars.len() {
            let c = self.chars[self.index];
            let c2 = self.chars[self.index..].iter().take(2).collect::<String>();

            if matches!(c, ' ' | '\t' | '\r' | '\n') {
                self.advance(1);
            } else if c.is_ascii_digit() {
                self.parse_number();
            } else if c.is_ascii_alphabetic() || c == '_' {
                self.parse_identifier();
            } else if let Some(kind) = TWO_SYMBOLS_TOKENS.get(c2.as_str()) {
                self.new_token(kind.clone(), &c2);
            } else if let Some(kind) = ONE_SYMBOL_TOKENS.get(&c) {
                self.new_token(kind.clone(), &c.to_string());
            } else {
                self.errors.push(LexError::UnexpectedCharacter {
                    character: c,
                    span: self.span(),
                });
                self.advance(1);
            }
        }
    }

    /// Splits `s` into tokens. Unknown characters are skipped and reported
    /// alongside the tokens instead of stopping the scan.
    pub fn tokenize(s: &str) -> (Vec<Token>, Vec<LexError>) {
        let mut lexer = Lexer::new(s);
        lexer._tokenize();

        (lexer.tokens, lexer.errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(s: &str) -> Vec<TokenKind> {
        let (tokens, errors) = Lexer::tokenize(s);
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
        tokens.into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn keywords_and_identifiers() {
        assert_eq!(
            kinds("INICIO a_1 MONITOR _b EXECUTE TERMINO"),
            vec![
                TokenKind::Inicio,
                TokenKind::Ident("a_1".to_string()),
                TokenKind::Monitor,
                TokenKind::Ident("_b".to_string()),
                TokenKind::Execute,
                TokenKind::Termino,
            ]
        );
    }

    #[test]
    fn keywords_are_case_sensitive() {
        assert_eq!(
            kinds("inicio FIMX FIM"),
            vec![
                TokenKind::Ident("inicio".to_string()),
                TokenKind::Ident("FIMX".to_string()),
                TokenKind::Fim,
            ]
        );
    }

    #[test]
    fn double_equal_wins_over_equal() {
        assert_eq!(
            kinds("x = y == 3"),
            vec![
                TokenKind::Ident("x".to_string()),
                TokenKind::Equal,
                TokenKind::Ident("y".to_string()),
                TokenKind::DoubleEqual,
                TokenKind::Num(3),
            ]
        );
        assert_eq!(
            kinds("a===b"),
            vec![
                TokenKind::Ident("a".to_string()),
                TokenKind::DoubleEqual,
                TokenKind::Equal,
                TokenKind::Ident("b".to_string()),
            ]
        );
    }

    #[test]
    fn operators() {
        assert_eq!(
            kinds("+-*/()<>"),
            vec![
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::OpenParen,
                TokenKind::CloseParen,
                TokenKind::LessThan,
                TokenKind::GreaterThan,
            ]
        );
    }

    #[test]
    fn number_then_identifier() {
        assert_eq!(
            kinds("12ab"),
            vec![TokenKind::Num(12), TokenKind::Ident("ab".to_string())]
        );
    }

    #[test]
    fn illegal_character_is_skipped() {
        let (tokens, errors) = Lexer::tokenize("x # = 1");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Ident("x".to_string()),
                TokenKind::Equal,
                TokenKind::Num(1),
            ]
        );
        assert_eq!(
            errors,
            vec![LexError::UnexpectedCharacter {
                character: '#',
                span: Span {
                    offset: 2,
                    line: 1,
                    column: 3,
                },
            }]
        );
    }

    #[test]
    fn oversized_literal_is_reported() {
        let (tokens, errors) = Lexer::tokenize("18446744073709551617 9223372036854775807");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "18446744073709551617");
        assert_eq!(tokens[1].kind, TokenKind::Num(i64::MAX));
        assert_eq!(
            errors,
            vec![LexError::IntegerOverflow {
                literal: "18446744073709551617".to_string(),
                span: Span {
                    offset: 0,
                    line: 1,
                    column: 1,
                },
            }]
        );
    }

    #[test]
    fn spans_track_lines() {
        let (tokens, _) = Lexer::tokenize("INICIO\n  x");
        assert_eq!(tokens[1].text, "x");
        assert_eq!(
            tokens[1].span,
            Span {
                offset: 9,
                line: 2,
                column: 3,
            }
        );
    }
}
