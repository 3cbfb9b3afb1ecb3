use std::path::Path;

use crate::{
    ast::{Node, Token},
    lexer::Tokenizer,
    source::{CharSource, FileSource, StringSource},
    value::NodeValue,
};

/// Recursive-descent parser for larch documents.
///
/// Grammar:
///
/// ```text
/// document := node
/// node     := Name Assign value
/// value    := String | ArrayOpen node* ArrayClose
/// ```
///
/// A parse either yields one fully formed root [`Node`] or nothing; there is
/// no partial-tree recovery and no positional diagnostic. The same parser
/// instance can be reused: each call resets the tokenizer and the id
/// counter, so no identifiers persist across parses.
pub struct Parser {
    tokenizer: Tokenizer,
    last_id: u32,
}

impl Parser {
    pub fn new() -> Self {
        Parser {
            tokenizer: Tokenizer::new(Box::new(StringSource::new(""))),
            last_id: 1,
        }
    }

    /// Parse one document from an in-memory string.
    pub fn parse_str(&mut self, data: &str) -> Option<Node> {
        self.parse_source(Box::new(StringSource::new(data)))
    }

    /// Parse one document from a file.
    ///
    /// An unreadable file fails the same way malformed input does: no
    /// result.
    pub fn parse_file(&mut self, path: &Path) -> Option<Node> {
        let source = FileSource::open(path).ok()?;
        self.parse_source(Box::new(source))
    }

    /// Parse one document from any character source.
    pub fn parse_source(&mut self, source: Box<dyn CharSource>) -> Option<Node> {
        self.tokenizer = Tokenizer::new(source);
        self.last_id = 1;

        self.parse_document()
    }

    fn next_id(&mut self) -> u32 {
        let id = self.last_id;
        self.last_id += 1;
        id
    }

    fn parse_document(&mut self) -> Option<Node> {
        let node = self.parse_node()?;

        // Strict end-of-input: anything still lexable after the root node
        // fails the parse.
        match self.tokenizer.next_token() {
            Token::None => Some(node),
            _ => None,
        }
    }

    fn parse_node(&mut self) -> Option<Node> {
        let name = match self.tokenizer.next_token() {
            Token::Name(name) => name,
            _ => return None,
        };

        if self.tokenizer.next_token() != Token::Assign {
            return None;
        }

        let value = self.parse_value()?;

        // The id is assigned only now, after the whole subtree has been
        // parsed and numbered. The root therefore always carries the
        // largest id.
        Some(Node::with_value(self.next_id(), name, value))
    }

    fn parse_value(&mut self) -> Option<NodeValue> {
        match self.tokenizer.next_token() {
            Token::String(text) => Some(NodeValue::String(text)),
            Token::ArrayOpen => {
                let mut items = Vec::new();

                while self.tokenizer.peek_token() != Token::ArrayClose {
                    items.push(self.parse_node()?);
                }

                self.tokenizer.next_token(); // consume the closing brace

                Some(NodeValue::List(items))
            }
            _ => None,
        }
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}
