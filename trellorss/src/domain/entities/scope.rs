//! Fetch scope
//!
//! Which boards a single generation run looks at.

/// The set of boards/actions one run considers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// Every board visible to the token, fetched one by one
    AllBoards,
    /// A single board; public boards can be read without a token
    Board { id: String, public: bool },
    /// One aggregate call covering all of the token's private activity
    AllPrivate,
}

impl Scope {
    /// Whether this scope can only be served with an auth token
    pub fn requires_token(&self) -> bool {
        !matches!(self, Scope::Board { public: true, .. })
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scope::AllBoards => write!(f, "all boards"),
            Scope::Board { id, public: true } => write!(f, "public board {}", id),
            Scope::Board { id, public: false } => write!(f, "board {}", id),
            Scope::AllPrivate => write!(f, "all private activity"),
        }
    }
}
