// tests/support/mocks/mod.rs
pub mod article_repos;
pub mod util;

pub use article_repos::{EmptyArticleRead, FailingArticleWrite, RecordingArticleWrite};
pub use util::{FixedIdGenerator, SequentialIdGenerator};
