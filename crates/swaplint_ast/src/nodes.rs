use swaplint_text_size::{Ranged, TextRange};

use crate::name::Symbol;

/// The top-level lexical block of one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    pub body: Vec<Stmt>,
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Assign(StmtAssign),
    AnnAssign(StmtAnnAssign),
    AugAssign(StmtAugAssign),
    FunctionDef(StmtFunctionDef),
    Global(StmtGlobal),
}

/// A plain single-target assignment: `x = y`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtAssign {
    pub target: Expr,
    pub value: Expr,
    pub range: TextRange,
}

/// An annotated single-target assignment: `x: int = y`.
///
/// The value is optional; a bare `x: int` declares without assigning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtAnnAssign {
    pub target: Expr,
    pub annotation: Symbol,
    pub value: Option<Expr>,
    pub range: TextRange,
}

/// An augmented assignment: `x += y`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtAugAssign {
    pub target: Expr,
    pub value: Expr,
    pub range: TextRange,
}

/// A function definition, carrying its own lexical block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtFunctionDef {
    pub name: Symbol,
    pub parameters: Vec<Parameter>,
    pub body: Vec<Stmt>,
    pub range: TextRange,
}

/// A single function parameter, with an optional annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: Symbol,
    pub annotation: Option<Symbol>,
    pub range: TextRange,
}

/// A `global x, y` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StmtGlobal {
    pub names: Vec<Symbol>,
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Name(ExprName),
    NumberLiteral(ExprNumberLiteral),
}

impl Expr {
    /// Returns the inner [`ExprName`] if the expression is a bare name.
    pub const fn as_name_expr(&self) -> Option<&ExprName> {
        match self {
            Expr::Name(name) => Some(name),
            Expr::NumberLiteral(_) => None,
        }
    }

    pub const fn is_name_expr(&self) -> bool {
        matches!(self, Expr::Name(_))
    }
}

/// A bare name in expression position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprName {
    pub id: Symbol,
    pub range: TextRange,
}

/// An integer literal in expression position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprNumberLiteral {
    pub value: i64,
    pub range: TextRange,
}

impl From<StmtAssign> for Stmt {
    fn from(stmt: StmtAssign) -> Self {
        Stmt::Assign(stmt)
    }
}

impl From<StmtAnnAssign> for Stmt {
    fn from(stmt: StmtAnnAssign) -> Self {
        Stmt::AnnAssign(stmt)
    }
}

impl From<StmtAugAssign> for Stmt {
    fn from(stmt: StmtAugAssign) -> Self {
        Stmt::AugAssign(stmt)
    }
}

impl From<StmtFunctionDef> for Stmt {
    fn from(stmt: StmtFunctionDef) -> Self {
        Stmt::FunctionDef(stmt)
    }
}

impl From<StmtGlobal> for Stmt {
    fn from(stmt: StmtGlobal) -> Self {
        Stmt::Global(stmt)
    }
}

impl From<ExprName> for Expr {
    fn from(expr: ExprName) -> Self {
        Expr::Name(expr)
    }
}

impl From<ExprNumberLiteral> for Expr {
    fn from(expr: ExprNumberLiteral) -> Self {
        Expr::NumberLiteral(expr)
    }
}

impl Ranged for Module {
    fn range(&self) -> TextRange {
        self.range
    }
}

impl Ranged for Stmt {
    fn range(&self) -> TextRange {
        match self {
            Stmt::Assign(stmt) => stmt.range,
            Stmt::AnnAssign(stmt) => stmt.range,
            Stmt::AugAssign(stmt) => stmt.range,
            Stmt::FunctionDef(stmt) => stmt.range,
            Stmt::Global(stmt) => stmt.range,
        }
    }
}

impl Ranged for StmtAssign {
    fn range(&self) -> TextRange {
        self.range
    }
}

impl Ranged for StmtAnnAssign {
    fn range(&self) -> TextRange {
        self.range
    }
}

impl Ranged for StmtAugAssign {
    fn range(&self) -> TextRange {
        self.range
    }
}

impl Ranged for StmtFunctionDef {
    fn range(&self) -> TextRange {
        self.range
    }
}

impl Ranged for Parameter {
    fn range(&self) -> TextRange {
        self.range
    }
}

impl Ranged for StmtGlobal {
    fn range(&self) -> TextRange {
        self.range
    }
}

impl Ranged for Expr {
    fn range(&self) -> TextRange {
        match self {
            Expr::Name(expr) => expr.range,
            Expr::NumberLiteral(expr) => expr.range,
        }
    }
}

impl Ranged for ExprName {
    fn range(&self) -> TextRange {
        self.range
    }
}

impl Ranged for ExprNumberLiteral {
    fn range(&self) -> TextRange {
        self.range
    }
}
