#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// End of input, or a lexeme that failed to scan.
    ///
    /// The tokenizer does not distinguish the two cases; the parser treats
    /// either as "no further valid input" and aborts the enclosing parse.
    None,

    /// Declaration name
    ///
    /// Must start with a letter or underscore, followed by letters, digits,
    /// or underscores.
    ///
    /// # Examples
    /// ```text
    /// user
    /// item_count
    /// _internal
    /// ```
    Name(String),

    /// String literal enclosed in double quotes
    ///
    /// No escape sequences: a quote, carriage return, or line feed cannot
    /// appear inside a string.
    ///
    /// # Examples
    /// ```text
    /// "hello"
    /// "item #1"
    /// ```
    String(String),

    /// Assignment between a name and its value
    Assign,

    /// Left brace opening a list of nested declarations
    ArrayOpen,

    /// Right brace closing a list
    ArrayClose,
}
