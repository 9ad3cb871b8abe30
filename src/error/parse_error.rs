#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// No token pattern matched the input at this position.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the source.
        offset:    usize,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// An integer literal does not fit into a 64-bit signed integer.
    IntegerOutOfRange {
        /// The digits as written in the source.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Found a token other than the one the grammar requires here.
    UnexpectedToken {
        /// What the parser was looking for.
        expected: String,
        /// The token encountered.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Reached the end of input while something was still required, such as
    /// the closing `}` of a block.
    UnexpectedEndOfInput {
        /// What the parser was looking for.
        expected: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A type keyword appeared where an expression was expected.
    TypeInExpression {
        /// The type keyword.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl ParseError {
    /// Gets the source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. }
            | Self::IntegerOutOfRange { line, .. }
            | Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line, .. }
            | Self::TypeInExpression { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character,
                                        offset,
                                        line, } => write!(f,
                                                          "Error on line {line}: Unexpected character {character:?} at position {offset}."),

            Self::IntegerOutOfRange { literal, line } => write!(f,
                                                                 "Error on line {line}: Integer literal {literal} is out of range."),

            Self::UnexpectedToken { expected,
                                    found,
                                    line, } => {
                write!(f, "Error on line {line}: Expected {expected}, found {found}.")
            },

            Self::UnexpectedEndOfInput { expected, line } => write!(f,
                                                                    "Error on line {line}: Unexpected end of input, expected {expected}."),

            Self::TypeInExpression { name, line } => write!(f,
                                                            "Error on line {line}: Type keyword '{name}' cannot be used as an expression."),
        }
    }
}

impl std::error::Error for ParseError {}
