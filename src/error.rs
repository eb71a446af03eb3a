use std::fmt;
use thiserror::Error;

/// A single rule violation found while scanning a function body.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    pub kind: ViolationKind,
    pub message: String,
    pub line: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    NonTailRecursiveCall,
    ArityMismatch,
}

impl Violation {
    pub fn non_tail_call(function_name: &str, line: usize) -> Self {
        Violation {
            kind: ViolationKind::NonTailRecursiveCall,
            message: format!(
                "Recursive call to '{}' is not in tail position. \
                 All recursive calls must be direct return values.",
                function_name
            ),
            line,
        }
    }

    pub fn missing_argument(function_name: &str, param: &str, line: usize) -> Self {
        Violation {
            kind: ViolationKind::ArityMismatch,
            message: format!(
                "Tail call to '{}' provides no value for parameter '{}' and it has no default.",
                function_name, param
            ),
            line,
        }
    }

    pub fn excess_positional(function_name: &str, given: usize, expected: usize, line: usize) -> Self {
        Violation {
            kind: ViolationKind::ArityMismatch,
            message: format!(
                "Tail call to '{}' passes {} positional arguments but the function takes {}.",
                function_name, given, expected
            ),
            line,
        }
    }

    pub fn unknown_keyword(function_name: &str, keyword: &str, line: usize) -> Self {
        Violation {
            kind: ViolationKind::ArityMismatch,
            message: format!(
                "Tail call to '{}' passes unknown or duplicate keyword argument '{}'.",
                function_name, keyword
            ),
            line,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {}", self.line, self.message)
    }
}

/// Errors reported by the tail-position validator.
#[derive(Error, Debug, Clone)]
pub enum TailRecursionError {
    #[error(
        "Async function '{name}' cannot use tail recursion optimization. \
         Async functions are not supported due to potential issues with shared state."
    )]
    UnsupportedDeclaration { name: String },

    #[error(
        "Function '{name}' is not properly tail-recursive:\n{}",
        render_violations(.violations)
    )]
    NotTailRecursive {
        name: String,
        violations: Vec<Violation>,
    },
}

impl TailRecursionError {
    pub fn unsupported_declaration(name: &str) -> Self {
        TailRecursionError::UnsupportedDeclaration {
            name: name.to_string(),
        }
    }

    pub fn not_tail_recursive(name: &str, violations: Vec<Violation>) -> Self {
        TailRecursionError::NotTailRecursive {
            name: name.to_string(),
            violations,
        }
    }

    /// The collected violations, empty for the async case.
    pub fn violations(&self) -> &[Violation] {
        match self {
            TailRecursionError::UnsupportedDeclaration { .. } => &[],
            TailRecursionError::NotTailRecursive { violations, .. } => violations,
        }
    }
}

fn render_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("  - {}", v))
        .collect::<Vec<_>>()
        .join("\n")
}
