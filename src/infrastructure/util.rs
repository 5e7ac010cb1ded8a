use crate::application::ports::util::IdGenerator;
use crate::domain::article::ArticleId;
use uuid::Uuid;

/// Random (v4) UUIDs rendered in hyphenated lowercase form.
#[derive(Default, Clone)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> ArticleId {
        ArticleId::from(Uuid::new_v4())
    }
}
