//! NewPost - validated input for the admin create form

use crate::DomainError;

/// A post about to be created.
///
/// Construction guarantees that both the title and the content contain
/// something other than whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    title: String,
    content: String,
    published: bool,
}

impl NewPost {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        published: bool,
    ) -> Result<Self, DomainError> {
        let title = title.into();
        let content = content.into();

        if title.trim().is_empty() {
            return Err(DomainError::validation("Title cannot be empty"));
        }
        if content.trim().is_empty() {
            return Err(DomainError::validation("Content cannot be empty"));
        }

        Ok(Self {
            title,
            content,
            published,
        })
    }

    /// Whether a form holding these values may be submitted.
    pub fn is_submittable(title: &str, content: &str) -> bool {
        !title.trim().is_empty() && !content.trim().is_empty()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn published(&self) -> bool {
        self.published
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_title_and_content() {
        assert!(matches!(
            NewPost::new("  ", "body", false),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            NewPost::new("Title", "\n\t", true),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn keeps_values_verbatim() {
        let post = NewPost::new(" Title ", "# Body", true).unwrap();
        assert_eq!(post.title(), " Title ");
        assert_eq!(post.content(), "# Body");
        assert!(post.published());
    }

    #[test]
    fn submittable_mirrors_validation() {
        assert!(NewPost::is_submittable("a", "b"));
        assert!(!NewPost::is_submittable("a", ""));
        assert!(!NewPost::is_submittable("", "b"));
    }
}
