use std::fmt;

/// A single function definition, the unit both passes operate on.
///
/// The host is expected to construct this from parsed source. Parameters are
/// simple (non-variadic, non-keyword-only); richer forms are unrepresentable
/// here and must be rejected upstream.
#[derive(Debug, Clone)]
pub struct FunctionDef {
    pub name: String,
    pub params: Vec<Parameter>,
    pub body: Vec<Box<Stmt>>,
    pub returns: Option<Box<Expr>>,
    pub is_async: bool,
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone)]
pub enum Stmt {
    Return {
        value: Option<Box<Expr>>,
        line: usize,
        column: usize,
    },
    Assign {
        targets: Vec<Box<Expr>>,
        value: Box<Expr>,
        line: usize,
        column: usize,
    },
    AugAssign {
        target: Box<Expr>,
        op: Operator,
        value: Box<Expr>,
        line: usize,
        column: usize,
    },
    For {
        target: Box<Expr>,
        iter: Box<Expr>,
        body: Vec<Box<Stmt>>,
        orelse: Vec<Box<Stmt>>,
        line: usize,
        column: usize,
    },
    While {
        test: Box<Expr>,
        body: Vec<Box<Stmt>>,
        orelse: Vec<Box<Stmt>>,
        line: usize,
        column: usize,
    },
    If {
        test: Box<Expr>,
        body: Vec<Box<Stmt>>,
        orelse: Vec<Box<Stmt>>,
        line: usize,
        column: usize,
    },
    Expr {
        value: Box<Expr>,
        line: usize,
        column: usize,
    },
    Pass {
        line: usize,
        column: usize,
    },
    Break {
        line: usize,
        column: usize,
    },
    Continue {
        line: usize,
        column: usize,
    },
}

#[derive(Debug, Clone)]
pub enum Expr {
    BoolOp {
        op: BoolOperator,
        values: Vec<Box<Expr>>,
        line: usize,
        column: usize,
    },
    BinOp {
        left: Box<Expr>,
        op: Operator,
        right: Box<Expr>,
        line: usize,
        column: usize,
    },
    UnaryOp {
        op: UnaryOperator,
        operand: Box<Expr>,
        line: usize,
        column: usize,
    },
    Lambda {
        args: Vec<Parameter>,
        body: Box<Expr>,
        line: usize,
        column: usize,
    },
    IfExp {
        test: Box<Expr>,
        body: Box<Expr>,
        orelse: Box<Expr>,
        line: usize,
        column: usize,
    },
    Dict {
        keys: Vec<Option<Box<Expr>>>,
        values: Vec<Box<Expr>>,
        line: usize,
        column: usize,
    },
    Set {
        elts: Vec<Box<Expr>>,
        line: usize,
        column: usize,
    },
    Compare {
        left: Box<Expr>,
        ops: Vec<CmpOperator>,
        comparators: Vec<Box<Expr>>,
        line: usize,
        column: usize,
    },
    Call {
        func: Box<Expr>,
        args: Vec<Box<Expr>>,
        keywords: Vec<(Option<String>, Box<Expr>)>,
        line: usize,
        column: usize,
    },
    Num {
        value: Number,
        line: usize,
        column: usize,
    },
    Str {
        value: String,
        line: usize,
        column: usize,
    },
    NameConstant {
        value: NameConstant,
        line: usize,
        column: usize,
    },
    Attribute {
        value: Box<Expr>,
        attr: String,
        ctx: ExprContext,
        line: usize,
        column: usize,
    },
    Subscript {
        value: Box<Expr>,
        slice: Box<Expr>,
        ctx: ExprContext,
        line: usize,
        column: usize,
    },
    Name {
        id: String,
        ctx: ExprContext,
        line: usize,
        column: usize,
    },
    List {
        elts: Vec<Box<Expr>>,
        ctx: ExprContext,
        line: usize,
        column: usize,
    },
    Tuple {
        elts: Vec<Box<Expr>>,
        ctx: ExprContext,
        line: usize,
        column: usize,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprContext {
    Load,
    Store,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BoolOperator {
    And,
    Or,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Operator {
    Add,
    Sub,
    Mult,
    Div,
    FloorDiv,
    Mod,
    Pow,
    LShift,
    RShift,
    BitOr,
    BitXor,
    BitAnd,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UnaryOperator {
    Invert,
    Not,
    UAdd,
    USub,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CmpOperator {
    Eq,
    NotEq,
    Lt,
    LtE,
    Gt,
    GtE,
    Is,
    IsNot,
    In,
    NotIn,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub enum NameConstant {
    None,
    True,
    False,
}

#[derive(Debug, Clone)]
pub struct Parameter {
    pub name: String,
    pub typ: Option<Box<Expr>>,
    pub default: Option<Box<Expr>>,
}

impl Parameter {
    pub fn new(name: &str) -> Self {
        Parameter {
            name: name.to_string(),
            typ: None,
            default: None,
        }
    }

    pub fn with_default(name: &str, default: Expr) -> Self {
        Parameter {
            name: name.to_string(),
            typ: None,
            default: Some(Box::new(default)),
        }
    }
}

impl Expr {
    /// Line number of the node, for diagnostics.
    pub fn line(&self) -> usize {
        match self {
            Expr::BoolOp { line, .. }
            | Expr::BinOp { line, .. }
            | Expr::UnaryOp { line, .. }
            | Expr::Lambda { line, .. }
            | Expr::IfExp { line, .. }
            | Expr::Dict { line, .. }
            | Expr::Set { line, .. }
            | Expr::Compare { line, .. }
            | Expr::Call { line, .. }
            | Expr::Num { line, .. }
            | Expr::Str { line, .. }
            | Expr::NameConstant { line, .. }
            | Expr::Attribute { line, .. }
            | Expr::Subscript { line, .. }
            | Expr::Name { line, .. }
            | Expr::List { line, .. }
            | Expr::Tuple { line, .. } => *line,
        }
    }
}

impl fmt::Display for FunctionDef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "FunctionDef: {}", self.name)
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Stmt::Return { .. } => write!(f, "Return"),
            Stmt::Assign { .. } => write!(f, "Assign"),
            Stmt::AugAssign { .. } => write!(f, "AugAssign"),
            Stmt::For { .. } => write!(f, "For"),
            Stmt::While { .. } => write!(f, "While"),
            Stmt::If { .. } => write!(f, "If"),
            Stmt::Expr { .. } => write!(f, "Expr"),
            Stmt::Pass { .. } => write!(f, "Pass"),
            Stmt::Break { .. } => write!(f, "Break"),
            Stmt::Continue { .. } => write!(f, "Continue"),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::BoolOp { .. } => write!(f, "BoolOp"),
            Expr::BinOp { .. } => write!(f, "BinOp"),
            Expr::UnaryOp { .. } => write!(f, "UnaryOp"),
            Expr::Lambda { .. } => write!(f, "Lambda"),
            Expr::IfExp { .. } => write!(f, "IfExp"),
            Expr::Dict { .. } => write!(f, "Dict"),
            Expr::Set { .. } => write!(f, "Set"),
            Expr::Compare { .. } => write!(f, "Compare"),
            Expr::Call { .. } => write!(f, "Call"),
            Expr::Num { value, .. } => write!(f, "Num({:?})", value),
            Expr::Str { value, .. } => write!(f, "Str({})", value),
            Expr::NameConstant { value, .. } => write!(f, "NameConstant({:?})", value),
            Expr::Attribute { value, attr, .. } => write!(f, "Attribute({}.{})", value, attr),
            Expr::Subscript { .. } => write!(f, "Subscript"),
            Expr::Name { id, .. } => write!(f, "Name({})", id),
            Expr::List { .. } => write!(f, "List"),
            Expr::Tuple { .. } => write!(f, "Tuple"),
        }
    }
}
