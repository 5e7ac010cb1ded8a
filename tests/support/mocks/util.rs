// tests/support/mocks/util.rs
use std::sync::atomic::{AtomicU64, Ordering};

use blog_core::application::ports::util::IdGenerator;
use blog_core::domain::article::ArticleId;

/// Deterministic ids: `article-1`, `article-2`, ...
#[derive(Default)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> ArticleId {
        let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        ArticleId::new(format!("article-{n}")).unwrap()
    }
}

/// Hands out the same id every time.
pub struct FixedIdGenerator(pub &'static str);

impl IdGenerator for FixedIdGenerator {
    fn next_id(&self) -> ArticleId {
        ArticleId::new(self.0).unwrap()
    }
}
