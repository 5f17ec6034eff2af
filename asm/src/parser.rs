use crate::ast::{Code, Line, Operand, Stmt};
use crate::error::ParseError;
use crate::token::{Token, TokenKind};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use std::iter::Peekable;

// ----------------------------------------------------------------------------
// Mnemonic table

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// No operand.
    Zero,
    /// An integer, a label, or nothing at all.
    Optional,
}

pub struct Mnemonic {
    pub arity: Arity,
    build: fn(Option<Operand>) -> Code,
}

impl Mnemonic {
    fn new(arity: Arity, build: fn(Option<Operand>) -> Code) -> Self {
        Mnemonic { arity, build }
    }

    pub fn build(&self, operand: Option<Operand>) -> Code {
        (self.build)(operand)
    }
}

// Order is the recognition priority.
static MNEMONICS: Lazy<IndexMap<&'static str, Mnemonic>> = Lazy::new(|| {
    use Arity::*;
    IndexMap::from([
        ("nop", Mnemonic::new(Zero, |_| Code::Nop)),
        (
            "push",
            Mnemonic::new(Optional, |operand| match operand {
                Some(operand) => Code::Push(operand),
                None => Code::PushNothing,
            }),
        ),
        ("pop", Mnemonic::new(Zero, |_| Code::Pop)),
        ("add", Mnemonic::new(Zero, |_| Code::Add)),
        ("cmp", Mnemonic::new(Zero, |_| Code::Cmp)),
        ("jl", Mnemonic::new(Zero, |_| Code::Jl)),
        ("jle", Mnemonic::new(Zero, |_| Code::Jle)),
        ("jeq", Mnemonic::new(Zero, |_| Code::Jeq)),
        ("jge", Mnemonic::new(Zero, |_| Code::Jge)),
        ("jg", Mnemonic::new(Zero, |_| Code::Jg)),
        ("jne", Mnemonic::new(Zero, |_| Code::Jne)),
        ("jmp", Mnemonic::new(Zero, |_| Code::Jmp)),
        ("dup", Mnemonic::new(Zero, |_| Code::Dup)),
        ("out", Mnemonic::new(Zero, |_| Code::Out)),
        ("ddup", Mnemonic::new(Zero, |_| Code::Ddup)),
        ("store", Mnemonic::new(Zero, |_| Code::Store)),
        ("load", Mnemonic::new(Zero, |_| Code::Load)),
        ("call", Mnemonic::new(Zero, |_| Code::Call)),
        ("ret", Mnemonic::new(Zero, |_| Code::Ret)),
    ])
});

pub fn lookup(name: &str) -> Option<&'static Mnemonic> {
    MNEMONICS.get(name)
}

// ----------------------------------------------------------------------------
// Parser

/// Parse a token stream into lines, checking that every referenced label
/// is declared somewhere.
pub fn parse(tokens: Vec<Token>) -> Result<Vec<Line>, ParseError> {
    Parser::new(tokens.into_iter()).parse()
}

pub struct Parser<I: Iterator<Item = Token>> {
    tokens: Peekable<I>,
    // name -> line of declaration
    labels: IndexMap<String, usize>,
    // referenced before declaration
    forward: Vec<String>,
}

impl<I: Iterator<Item = Token>> Parser<I> {
    pub fn new(tokens: I) -> Self {
        Parser {
            tokens: tokens.peekable(),
            labels: IndexMap::new(),
            forward: Vec::new(),
        }
    }
}

impl<I: Iterator<Item = Token>> Parser<I> {
    /// Next : Consume next token and return it
    pub fn next(&mut self) -> Option<Token> {
        self.tokens.next()
    }

    /// Consume if next token is match with condition
    pub fn consume_if<F: Fn(&Token) -> bool>(&mut self, cond: F) -> Option<Token> {
        self.tokens.next_if(|token| cond(token))
    }

    /// A line ends with a newline or with the end of input
    fn end_of_line(&mut self, line: usize) -> Result<(), ParseError> {
        match self.next() {
            None => Ok(()),
            Some(Token {
                kind: TokenKind::NewLine,
                ..
            }) => Ok(()),
            Some(_) => Err(ParseError::InvalidInstruction(line)),
        }
    }
}

impl<I: Iterator<Item = Token>> Parser<I> {
    pub fn parse(mut self) -> Result<Vec<Line>, ParseError> {
        let mut lines = Vec::new();
        while let Some(token) = self.next() {
            let line = token.pos.line;
            match token.kind {
                TokenKind::NewLine => continue,
                TokenKind::Name(name) => {
                    let stmt = if self
                        .consume_if(|token| token.kind == TokenKind::Colon)
                        .is_some()
                    {
                        self.end_of_line(line)?;
                        self.declare(&name, line)?;
                        Stmt::Label(name)
                    } else {
                        Stmt::Code(self.instruction(&name, line)?)
                    };
                    lines.push(Line::new(stmt, line));
                }
                _ => return Err(ParseError::InvalidInstruction(line)),
            }
        }
        self.check_labels()?;
        Ok(lines)
    }

    fn instruction(&mut self, name: &str, line: usize) -> Result<Code, ParseError> {
        let mnemonic = lookup(name).ok_or(ParseError::InvalidInstruction(line))?;
        let operand = match mnemonic.arity {
            Arity::Zero => None,
            Arity::Optional => self.operand(),
        };
        self.end_of_line(line)?;
        Ok(mnemonic.build(operand))
    }

    fn operand(&mut self) -> Option<Operand> {
        let token = self.consume_if(|token| {
            matches!(token.kind, TokenKind::Integer(_) | TokenKind::Name(_))
        })?;
        match token.kind {
            TokenKind::Integer(value) => Some(Operand::Imm(value)),
            TokenKind::Name(name) => {
                self.reference(&name);
                Some(Operand::Label(name))
            }
            _ => None,
        }
    }

    fn declare(&mut self, name: &str, line: usize) -> Result<(), ParseError> {
        if self.labels.contains_key(name) {
            return Err(ParseError::DuplicateLabel(name.to_string(), line));
        }
        self.labels.insert(name.to_string(), line);
        Ok(())
    }

    fn reference(&mut self, name: &str) {
        if !self.labels.contains_key(name) {
            self.forward.push(name.to_string());
        }
    }

    fn check_labels(&self) -> Result<(), ParseError> {
        match self
            .forward
            .iter()
            .find(|name| !self.labels.contains_key(name.as_str()))
        {
            Some(name) => Err(ParseError::MissingLabel(name.clone())),
            None => Ok(()),
        }
    }
}
