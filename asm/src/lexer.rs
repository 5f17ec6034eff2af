use crate::error::LexError;
use crate::token::{Pos, Token, TokenKind};
use std::iter::Peekable;
use std::str::CharIndices;

/// Split the whole source into tokens.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).parse()
}

pub struct Lexer<'a> {
    iter: Peekable<CharIndices<'a>>,
    line: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            iter: source.char_indices().peekable(),
            line: 1,
        }
    }
}

// ----------------------------------------------------------------------------
// Helpers
// ----------------------------------------------------------------------------

impl<'a> Lexer<'a> {
    fn peek_nth(&self, n: usize) -> Option<(usize, char)> {
        self.iter.clone().nth(n)
    }
    fn consume(&mut self) -> Option<(usize, char)> {
        self.iter.next()
    }
}

// ----------------------------------------------------------------------------
// Lexer
// ----------------------------------------------------------------------------

impl<'a> Lexer<'a> {
    pub fn parse(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        while let Some((offset, ch0)) = self.peek_nth(0) {
            // 0. Skip whitespaces
            if ch0 == ' ' || ch0 == '\t' {
                self.consume();
                continue;
            }

            let pos = Pos {
                line: self.line,
                offset,
            };

            // 1. Identifier
            if ch0.is_ascii_alphabetic() || ch0 == '_' {
                tokens.push(Token::new(self.parse_name(), pos));
                continue;
            }

            // 2. Integer literal
            if ch0.is_ascii_digit() {
                tokens.push(Token::new(self.parse_integer(), pos));
                continue;
            }
            if ch0 == '-' {
                if let Some((_, ch1)) = self.peek_nth(1) {
                    if ch1.is_ascii_digit() {
                        tokens.push(Token::new(self.parse_integer(), pos));
                        continue;
                    }
                }
            }

            // 3. Line terminator
            if ch0 == '\n' {
                self.consume();
                tokens.push(Token::new(TokenKind::NewLine, pos));
                self.line += 1;
                continue;
            }
            if ch0 == '\r' && matches!(self.peek_nth(1), Some((_, '\n'))) {
                self.consume(); // consume '\r'
                self.consume(); // consume '\n'
                tokens.push(Token::new(TokenKind::NewLine, pos));
                self.line += 1;
                continue;
            }

            // 4. Colon
            if ch0 == ':' {
                self.consume();
                tokens.push(Token::new(TokenKind::Colon, pos));
                continue;
            }

            // Error
            return Err(LexError { ch: ch0, pos });
        }
        Ok(tokens)
    }

    fn parse_name(&mut self) -> TokenKind {
        let mut lexeme = String::new();
        while let Some((_, ch)) = self
            .iter
            .next_if(|(_, ch)| matches!(ch, '_' | '0'..='9' | 'a'..='z' | 'A'..='Z'))
        {
            lexeme.push(ch);
        }
        TokenKind::Name(lexeme)
    }

    // Wraps modulo 256, so `-1` is 0xFF and `300` is 0x2C.
    fn parse_integer(&mut self) -> TokenKind {
        let negative = self.iter.next_if(|(_, ch)| *ch == '-').is_some();
        let mut value: u8 = 0;
        while let Some((_, ch)) = self.iter.next_if(|(_, ch)| ch.is_ascii_digit()) {
            let digit = ch as u8 - b'0';
            value = value.wrapping_mul(10).wrapping_add(digit);
        }
        if negative {
            value = value.wrapping_neg();
        }
        TokenKind::Integer(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|token| token.kind)
            .collect()
    }

    #[test]
    fn test_positions() {
        let tokens = tokenize("loop:\n  push loop").unwrap();
        let pos: Vec<_> = tokens.iter().map(|t| (t.pos.line, t.pos.offset)).collect();
        assert_eq!(pos, vec![(1, 0), (1, 4), (1, 5), (2, 8), (2, 13)]);
    }

    #[test]
    fn test_crlf_is_one_newline() {
        assert_eq!(
            kinds("nop\r\nnop\n"),
            vec![
                TokenKind::Name(format!("nop")),
                TokenKind::NewLine,
                TokenKind::Name(format!("nop")),
                TokenKind::NewLine,
            ]
        );
    }

    #[test]
    fn test_lone_cr_is_rejected() {
        let err = tokenize("nop\rnop").unwrap_err();
        assert_eq!(err.ch, '\r');
        assert_eq!(err.pos.offset, 3);
    }
}
