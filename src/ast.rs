/// Represents a literal value in the language.
///
/// `LiteralValue` covers all raw, constant values that can appear directly in
/// source code. A quoted literal of exactly one character becomes a
/// `Character`, any other quoted literal a `Str`.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Decimal(f64),
    /// A string literal.
    Str(String),
    /// A single-character literal.
    Character(char),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Decimal(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<char> for LiteralValue {
    fn from(value: char) -> Self {
        Self::Character(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// One of the five built-in variable types.
///
/// Used by typed declarations and assignments, and as the optional conversion
/// tag of `eingabe`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// Integer (`num`).
    Num,
    /// Floating point (`dec`).
    Dec,
    /// String (`str`).
    Str,
    /// Single character (`chr`).
    Chr,
    /// Boolean (`bool`).
    Bool,
}

impl std::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Num => "num",
            Self::Dec => "dec",
            Self::Str => "str",
            Self::Chr => "chr",
            Self::Bool => "bool",
        };
        write!(f, "{name}")
    }
}

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// Every variant records the source line it starts on for error reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, string, character or boolean).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation (addition, comparison, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Function call expression (e.g. `square(x)`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// Console input, `eingabe("prompt", num)`.
    Input {
        /// Text written before reading, without a trailing line break.
        prompt: Option<String>,
        /// Conversion applied to the line that was read.
        ty:     Option<TypeTag>,
        /// Line number in the source code.
        line:   usize,
    },
    /// Length of a string, `len(expr)`.
    Length {
        /// The measured expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use lip::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Variable { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::FunctionCall { line, .. }
            | Self::Input { line, .. }
            | Self::Length { line, .. } => *line,
        }
    }
}

/// Represents a user-defined function definition.
///
/// Registered in the function table when the definition statement executes.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names, bound positionally.
    pub params: Vec<String>,
    /// The statements executed when the function is called.
    pub body:   Vec<Statement>,
    /// Line number in the source code.
    pub line:   usize,
}

/// A conditional statement, `if <cond> { ... }` with optional alternatives.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    /// The condition, tested for truthiness.
    pub condition:   Expr,
    /// Statements executed when the condition holds.
    pub body:        Vec<Statement>,
    /// What runs when the condition does not hold.
    pub else_branch: ElseBranch,
    /// Line number in the source code.
    pub line:        usize,
}

/// The alternative of an [`IfStatement`].
#[derive(Debug, Clone, PartialEq)]
pub enum ElseBranch {
    /// No alternative.
    None,
    /// A trailing `el { ... }` block.
    Block(Vec<Statement>),
    /// An `elf` clause, i.e. the next conditional of the chain.
    ElseIf(Box<IfStatement>),
}

/// A counted loop, `for (init; condition; update) { body }`.
#[derive(Debug, Clone, PartialEq)]
pub struct ForLoop {
    /// Executed once before the first test.
    pub init:      Box<Statement>,
    /// Tested before every iteration.
    pub condition: Expr,
    /// Executed after every iteration.
    pub update:    Box<Statement>,
    /// The loop body.
    pub body:      Vec<Statement>,
    /// Line number in the source code.
    pub line:      usize,
}

/// Represents a statement.
///
/// A program is an ordered list of statements; blocks of `if`, `for` and
/// `func` hold nested lists.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A user-defined function declaration, `func name(a, b) { ... }`.
    Function(FunctionDef),
    /// `return <expr>`.
    Return {
        /// The returned value.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `drucken(<expr>)`.
    Print {
        /// The printed value.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// A conditional with an optional `elf`/`el` chain.
    If(IfStatement),
    /// A counted loop.
    For(ForLoop),
    /// A typed declaration without initializer, `num x`.
    Declaration {
        /// The name of the variable.
        name: String,
        /// The declared type.
        ty:   TypeTag,
        /// Line number in the source code.
        line: usize,
    },
    /// A typed declaration with initializer, `num x = 1`.
    TypedAssignment {
        /// The name of the variable.
        name:  String,
        /// The declared type.
        ty:    TypeTag,
        /// The assigned value.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A plain assignment, `x = 1`.
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A standalone expression evaluated for its result or side effects.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic and comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}
