pub mod ast;
pub mod codegen;
pub mod emit;
pub mod error;
pub mod label;
pub mod lexer;
pub mod msg;
pub mod parser;
pub mod token;

pub use codegen::{generate, Byte, Image};
pub use error::{Error, Fault, LexError, ParseError};
pub use lexer::tokenize;
pub use parser::parse;

/// Assemble a whole source text: tokenize, parse, then generate.
pub fn compile(source: &str) -> Result<Image, Error> {
    let tokens = tokenize(source)?;
    let lines = parse(tokens)?;
    Ok(generate(&lines)?)
}
