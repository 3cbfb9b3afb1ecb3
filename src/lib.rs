pub mod ast;
#[cfg(feature = "cli")]
pub mod cli;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod source;
pub mod value;

pub use ast::{Node, Token};
pub use lexer::Tokenizer;
pub use output::{FlatPrinter, to_flat, write_flat};
pub use parser::Parser;
pub use source::{CharSource, FileSource, StringSource};
pub use value::NodeValue;
