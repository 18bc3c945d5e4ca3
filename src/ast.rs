use std::fmt;

/// A location in the source text.
///
/// Both fields are 1-based. The column counts characters from the start of
/// the line, so a token at the very beginning of a line has column `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Source line.
    pub line:   usize,
    /// Character column within the line.
    pub column: usize,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} column {}", self.line, self.column)
    }
}

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the constants that can appear directly in source
/// code. It is converted into a runtime [`Value`](crate::interpreter::value::core::Value)
/// when the literal is evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal such as `42`.
    Integer(i64),
    /// A floating-point literal such as `3.14` or `1.e-3`.
    Float(f64),
    /// A string literal with its escape sequences already resolved.
    Str(String),
    /// `true` or `false`.
    Bool(bool),
}

/// An abstract syntax tree node for everything that produces a value.
///
/// Plain expressions, comparison chains and boolean expressions share this
/// enum. [`Expr::is_boolean`] tells them apart where the grammar needs to.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal constant.
    Literal {
        /// The constant value.
        value:    LiteralValue,
        /// Location of the literal.
        position: Position,
    },
    /// Reference to a global variable.
    Variable {
        /// Name of the variable.
        name:     String,
        /// Location of the name.
        position: Position,
    },
    /// `name := value`. Yields the assigned value.
    Assign {
        /// Variable being written.
        name:     String,
        /// Right-hand side.
        value:    Box<Self>,
        /// Location of the `:=` token.
        position: Position,
    },
    /// Unary minus.
    Negate {
        /// The operand.
        expr:     Box<Self>,
        /// Location of the `-` token.
        position: Position,
    },
    /// Arithmetic or concatenation.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Location of the operator token.
        position: Position,
    },
    /// `target[index]`.
    Index {
        /// The string being indexed.
        target:   Box<Self>,
        /// The index expression.
        index:    Box<Self>,
        /// Location of the `[` token.
        position: Position,
    },
    /// `target[start:end]`, either bound may be omitted.
    Slice {
        /// The string being sliced.
        target:   Box<Self>,
        /// Inclusive lower bound.
        start:    Option<Box<Self>>,
        /// Exclusive upper bound.
        end:      Option<Box<Self>>,
        /// Location of the `[` token.
        position: Position,
    },
    /// A one-argument builtin such as `len(s)`.
    Call {
        /// Which builtin is called.
        builtin:  Builtin,
        /// The single argument.
        argument: Box<Self>,
        /// Location of the builtin keyword.
        position: Position,
    },
    /// `err()`.
    ErrorFlag {
        /// Location of the `err` keyword.
        position: Position,
    },
    /// `input()` or `input(prompt)`.
    Input {
        /// Optional prompt, written before reading.
        prompt:   Option<Box<Self>>,
        /// Location of the `input` keyword.
        position: Position,
    },
    /// A relational chain `first OP1 e1 OP2 e2 ...` with at least one link.
    Comparison {
        /// Leftmost operand.
        first: Box<Self>,
        /// Operators and right operands, evaluated left to right.
        links: Vec<ComparisonLink>,
    },
    /// `left and right` / `left or right`.
    Logical {
        /// Left operand, always boolean-shaped.
        left:     Box<Self>,
        /// The connective.
        op:       LogicalOperator,
        /// Right operand, always boolean-shaped.
        right:    Box<Self>,
        /// Location of the connective keyword.
        position: Position,
    },
    /// `not expr`.
    Not {
        /// The operand; raw expressions go through truthiness first.
        expr:     Box<Self>,
        /// Location of the `not` keyword.
        position: Position,
    },
    /// `bool expr`, explicit truthiness conversion.
    Truthy {
        /// The operand.
        expr:     Box<Self>,
        /// Location of the `bool` keyword.
        position: Position,
    },
}

impl Expr {
    /// Returns `true` for nodes that always evaluate to a boolean.
    ///
    /// These are the only operands accepted by `and` and `or`.
    ///
    /// # Example
    /// ```
    /// use juicy::ast::{Expr, LiteralValue, Position};
    ///
    /// let flag = Expr::Literal { value:    LiteralValue::Bool(true),
    ///                            position: Position::new(1, 1), };
    /// let number = Expr::Literal { value:    LiteralValue::Integer(1),
    ///                              position: Position::new(1, 1), };
    ///
    /// assert!(flag.is_boolean());
    /// assert!(!number.is_boolean());
    /// ```
    #[must_use]
    pub const fn is_boolean(&self) -> bool {
        matches!(self,
                 Self::Comparison { .. }
                 | Self::Logical { .. }
                 | Self::Not { .. }
                 | Self::Truthy { .. }
                 | Self::Literal { value: LiteralValue::Bool(_),
                                   .. })
    }

    /// Location used when a diagnostic points at this node.
    #[must_use]
    pub fn position(&self) -> Position {
        match self {
            Self::Literal { position, .. }
            | Self::Variable { position, .. }
            | Self::Assign { position, .. }
            | Self::Negate { position, .. }
            | Self::BinaryOp { position, .. }
            | Self::Index { position, .. }
            | Self::Slice { position, .. }
            | Self::Call { position, .. }
            | Self::ErrorFlag { position }
            | Self::Input { position, .. }
            | Self::Logical { position, .. }
            | Self::Not { position, .. }
            | Self::Truthy { position, .. } => *position,
            Self::Comparison { first, .. } => first.position(),
        }
    }
}

/// One `OP right` step of a comparison chain.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonLink {
    /// The relational operator.
    pub op:       ComparisonOperator,
    /// The right-hand operand of this step.
    pub right:    Expr,
    /// Location of the operator token.
    pub position: Position,
}

/// Arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`, also string concatenation.
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, always true division.
    Div,
    /// `^`
    Pow,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{symbol}")
    }
}

/// Relational operators usable in a comparison chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOperator {
    /// `>`
    Greater,
    /// `<`
    Less,
    /// `=`
    Equal,
    /// `<>`
    NotEqual,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
}

impl ComparisonOperator {
    /// Applies the operator's usual relational meaning.
    ///
    /// # Example
    /// ```
    /// use juicy::ast::ComparisonOperator;
    ///
    /// assert!(ComparisonOperator::LessEqual.holds(&2, &2));
    /// assert!(ComparisonOperator::NotEqual.holds(&1.5, &2.0));
    /// assert!(!ComparisonOperator::Greater.holds(&1, &3));
    /// ```
    #[must_use]
    pub fn holds<T: PartialOrd>(self, left: &T, right: &T) -> bool {
        match self {
            Self::Greater => left > right,
            Self::Less => left < right,
            Self::Equal => left == right,
            Self::NotEqual => left != right,
            Self::LessEqual => left <= right,
            Self::GreaterEqual => left >= right,
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Greater => ">",
            Self::Less => "<",
            Self::Equal => "=",
            Self::NotEqual => "<>",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
        };
        write!(f, "{symbol}")
    }
}

/// Boolean connectives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOperator {
    /// `and`
    And,
    /// `or`
    Or,
}

/// Builtins taking exactly one argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    /// `len(s)`
    Len,
    /// `to_str(v)`
    ToStr,
    /// `to_int(v)`
    ToInt,
    /// `to_float(v)`
    ToFloat,
}

/// A statement of the language.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `print(a, b, ...);`
    Print {
        /// Arguments, printed without separator.
        arguments: Vec<Expr>,
        /// Location of the `print` keyword.
        position:  Position,
    },
    /// An expression evaluated for its side effects, terminated by `;`.
    Expression {
        /// The expression.
        expr:     Expr,
        /// Location of the first token.
        position: Position,
    },
    /// `if (condition) { ... } else { ... }`
    If {
        /// The condition.
        condition:   Expr,
        /// Statements run when the condition holds.
        then_branch: Vec<Self>,
        /// Statements run otherwise. `else if` nests another `If` here.
        else_branch: Option<Vec<Self>>,
        /// Location of the `if` keyword.
        position:    Position,
    },
    /// `while (condition) { ... }`
    While {
        /// Re-evaluated before every iteration.
        condition: Expr,
        /// Loop body.
        body:      Vec<Self>,
        /// Location of the `while` keyword.
        position:  Position,
    },
}

/// A parsed program: the top-level statement list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Statements in source order.
    pub statements: Vec<Statement>,
}
