use std::rc::Rc;

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the raw constants that can appear directly in source
/// code: numbers and strings. Lists are built at runtime from
/// [`Expr::ListLiteral`].
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit floating-point literal.
    Number(f64),
    /// A string literal, stored without its quotes.
    Str(String),
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Assignments are expressions: `a = b = 3` assigns right to left and yields
/// the assigned value.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number or string).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// List literal expression such as `[1, 2, 3]`.
    ListLiteral {
        /// Elements of the list.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Assignment to a variable, following the declare-or-mutate-outer rule.
    Assign {
        /// Name of the variable.
        name:  String,
        /// The value being assigned.
        value: Box<Self>,
        /// Line number in the source code.
        line:  usize,
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
    /// Attribute read such as `counter.count`.
    GetAttr {
        /// The expression whose attribute is read.
        target: Box<Self>,
        /// Name of the attribute.
        name:   String,
        /// Line number in the source code.
        line:   usize,
    },
    /// Attribute write such as `self.count = 0`.
    SetAttr {
        /// The expression whose attribute is written.
        target: Box<Self>,
        /// Name of the attribute.
        name:   String,
        /// The value being stored.
        value:  Box<Self>,
        /// Line number in the source code.
        line:   usize,
    },
    /// Call expression (e.g. `f(x)`, `Point(1, 2)` or `p.move(3)`).
    Call {
        /// The expression producing the callee.
        callee:    Box<Self>,
        /// Arguments to the call.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use aurora::ast::Expr;
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
            | Self::ListLiteral { line, .. }
            | Self::Variable { line, .. }
            | Self::Assign { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::GetAttr { line, .. }
            | Self::SetAttr { line, .. }
            | Self::Call { line, .. } => *line,
        }
    }
}

/// Represents a user-defined function or method definition.
///
/// Methods are stored in their class as plain definitions; they only become
/// callable values once looked up through an instance.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names, in declaration order.
    pub params: Vec<String>,
    /// The statements executed when the function is called.
    pub body:   Vec<Statement>,
    /// Line number in the source code.
    pub line:   usize,
}

/// Represents a class definition with its methods.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDef {
    /// The name of the class.
    pub name:    String,
    /// The methods, in source order.
    pub methods: Vec<Rc<FunctionDef>>,
    /// Line number in the source code.
    pub line:    usize,
}

/// Represents a statement.
///
/// Block statements own their bodies as statement sequences.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `say <expr>`: print the display form of a value.
    Say {
        /// The expression to print.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `if <cond> ... [else ...] end`
    If {
        /// The condition.
        condition:   Expr,
        /// Statements executed when the condition is truthy.
        then_branch: Vec<Self>,
        /// Statements executed otherwise, if an `else` is present.
        else_branch: Option<Vec<Self>>,
        /// Line number in the source code.
        line:        usize,
    },
    /// `while <cond> ... end`
    While {
        /// The condition, re-evaluated before every iteration.
        condition: Expr,
        /// The loop body.
        body:      Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// `repeat <count> times ... end`
    Repeat {
        /// The iteration count, evaluated once.
        count: Expr,
        /// The loop body.
        body:  Vec<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A user-defined function declaration.
    Function(Rc<FunctionDef>),
    /// A class declaration.
    Class(ClassDef),
    /// `return <expr>`
    Return {
        /// The returned expression.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Statement {
    /// Gets the line number from `self`.
    #[must_use]
    pub fn line_number(&self) -> usize {
        match self {
            Self::Say { line, .. }
            | Self::Expression { line, .. }
            | Self::If { line, .. }
            | Self::While { line, .. }
            | Self::Repeat { line, .. }
            | Self::Return { line, .. } => *line,
            Self::Function(def) => def.line,
            Self::Class(def) => def.line,
        }
    }
}

/// Represents a binary operator.
///
/// Arithmetic and comparison operators share one precedence level in the
/// grammar, except `*` and `/` which bind tighter.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or string concatenation (`+`)
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
    /// Equal to (`==`)
    Equal,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, Div, Equal, Greater, Less, Mul, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Less => "<",
            Greater => ">",
            Equal => "==",
        };
        write!(f, "{operator}")
    }
}
