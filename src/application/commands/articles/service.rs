// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{application::ports::util::IdGenerator, domain::article::ArticleWriteRepository};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) id_generator: Arc<dyn IdGenerator>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        id_generator: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            write_repo,
            id_generator,
        }
    }
}
