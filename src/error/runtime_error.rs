#[derive(Debug)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
    /// Tried to read an undefined variable.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a function that has not been defined (yet).
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted to define a function with the name of a built-in.
    BuiltinFunctionRedefinition {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value had an unexpected or incompatible type.
    TypeMismatch {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// The called function.
        name:     String,
        /// The number of declared parameters.
        expected: usize,
        /// The number of supplied arguments.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Text could not be converted to the requested type.
    ConversionError {
        /// Details about the failed conversion.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An expected value was missing, e.g. a function call whose body
    /// produced nothing was used as an operand.
    MissingValue {
        /// The source line where the error occurred.
        line: usize,
    },
    /// User-defined function calls nested deeper than the interpreter allows.
    RecursionLimit {
        /// The maximum call depth.
        depth: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// `eingabe` was evaluated after the input stream was exhausted.
    InputUnavailable {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Reading from or writing to the console failed.
    Io {
        /// Details reported by the I/O layer.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl RuntimeError {
    /// Gets the source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownVariable { line, .. }
            | Self::UnknownFunction { line, .. }
            | Self::BuiltinFunctionRedefinition { line, .. }
            | Self::TypeMismatch { line, .. }
            | Self::ArgumentCountMismatch { line, .. }
            | Self::ConversionError { line, .. }
            | Self::DivisionByZero { line }
            | Self::Overflow { line }
            | Self::MissingValue { line }
            | Self::RecursionLimit { line, .. }
            | Self::InputUnavailable { line }
            | Self::Io { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: Unknown variable '{name}'.")
            },
            Self::UnknownFunction { name, line } => {
                write!(f, "Error on line {line}: Unknown function '{name}'.")
            },
            Self::BuiltinFunctionRedefinition { name, line } => write!(f,
                                                                       "Error on line {line}: Cannot redefine built-in function '{name}'."),

            Self::TypeMismatch { details, line } => {
                write!(f, "Error on line {line}: Type mismatch: {details}.")
            },
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found,
                                          line, } => write!(f,
                                                            "Error on line {line}: Function '{name}' expects {expected} argument(s), but {found} were given."),
            Self::ConversionError { details, line } => {
                write!(f, "Error on line {line}: Conversion failed: {details}.")
            },
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),
            Self::MissingValue { line } => write!(f, "Error on line {line}: Value missing."),
            Self::RecursionLimit { depth, line } => write!(f,
                                                           "Error on line {line}: Maximum call depth of {depth} exceeded."),
            Self::InputUnavailable { line } => {
                write!(f, "Error on line {line}: No more input available.")
            },
            Self::Io { details, line } => write!(f, "Error on line {line}: I/O error: {details}."),
        }
    }
}

impl std::error::Error for RuntimeError {}
