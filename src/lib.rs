pub mod ast;
pub mod error;
pub mod formatter;
pub mod interpreter;
pub mod rewriter;
pub mod samples;
pub mod subst;
pub mod validator;
pub mod visitor;

pub use error::{TailRecursionError, Violation, ViolationKind};
pub use formatter::unparse;
pub use rewriter::rewrite;
pub use validator::validate;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
