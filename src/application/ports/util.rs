// src/application/ports/util.rs
use crate::domain::article::ArticleId;

/// Source of fresh article identifiers. Implementations must never hand out
/// the same id twice, including under concurrent calls.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> ArticleId;
}
