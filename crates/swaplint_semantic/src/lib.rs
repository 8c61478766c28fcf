//! A light semantic model over one source file: an arena of lexical scopes
//! with index-based parent links, the bindings created in them, and the
//! resolved reads of those bindings.

pub use binding::{Binding, BindingFlags, BindingId, BindingKind, Bindings};
pub use model::SemanticModel;
pub use reference::{ResolvedReference, ResolvedReferenceId, ResolvedReferences};
pub use scope::{Scope, ScopeId, ScopeKind, Scopes};

mod binding;
mod model;
mod reference;
mod scope;
