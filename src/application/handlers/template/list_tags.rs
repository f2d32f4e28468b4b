//! ListTagsHandler - Query handler for all tags.

use std::sync::Arc;

use crate::domain::template::{Tag, TemplateError};
use crate::ports::TemplateRepository;

/// Handler for listing every tag in store order.
pub struct ListTagsHandler {
    repository: Arc<dyn TemplateRepository>,
}

impl ListTagsHandler {
    pub fn new(repository: Arc<dyn TemplateRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<Tag>, TemplateError> {
        Ok(self.repository.list_tags().await?)
    }
}
