//! The syntax-tree node types handed over by the source provider, the name
//! interner that produces their identifier tokens, and the per-file comment
//! index.

pub use comment_ranges::CommentRanges;
pub use name::{Interner, Symbol};
pub use nodes::{
    Expr, ExprName, ExprNumberLiteral, Module, Parameter, Stmt, StmtAnnAssign, StmtAssign,
    StmtAugAssign, StmtFunctionDef, StmtGlobal,
};

mod comment_ranges;
mod name;
mod nodes;
