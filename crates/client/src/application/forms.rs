//! Create-post form state
//!
//! Plain data so the editor logic can be tested without a UI runtime. The
//! view owns one `CreatePostForm` in a signal and calls into it from event
//! handlers.

use blogs_domain::NewPost;

use crate::application::ServiceError;

pub const PREVIEW_TITLE_PLACEHOLDER: &str = "Post Title";
pub const PREVIEW_CONTENT_PLACEHOLDER: &str = "Your content will appear here...";

/// User-facing notification for the create flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Loading(String),
    Success(String),
    Error(String),
}

impl Notice {
    pub fn creating() -> Self {
        Self::Loading("Creating post...".to_string())
    }

    pub fn created() -> Self {
        Self::Success("Post created successfully!".to_string())
    }

    pub fn failed() -> Self {
        Self::Error("Failed to create post. Please try again.".to_string())
    }

    pub fn message(&self) -> &str {
        match self {
            Notice::Loading(m) | Notice::Success(m) | Notice::Error(m) => m,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreatePostForm {
    pub title: String,
    pub content: String,
    pub published: bool,
    pub preview: bool,
    pub submitting: bool,
}

/// Values captured when a submit starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub title: String,
    pub content: String,
    pub published: bool,
}

impl CreatePostForm {
    pub fn can_submit(&self) -> bool {
        !self.submitting && NewPost::is_submittable(&self.title, &self.content)
    }

    pub fn toggle_preview(&mut self) {
        self.preview = !self.preview;
    }

    /// Label of the preview toggle button.
    pub fn preview_button_label(&self) -> &'static str {
        if self.preview {
            "Edit"
        } else {
            "Preview"
        }
    }

    pub fn preview_title(&self) -> &str {
        if self.title.is_empty() {
            PREVIEW_TITLE_PLACEHOLDER
        } else {
            &self.title
        }
    }

    pub fn preview_content(&self) -> &str {
        if self.content.is_empty() {
            PREVIEW_CONTENT_PLACEHOLDER
        } else {
            &self.content
        }
    }

    /// Mark the form as submitting and capture its values, or `None` when a
    /// submit is not allowed.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        if !self.can_submit() {
            return None;
        }
        self.submitting = true;
        Some(Submission {
            title: self.title.clone(),
            content: self.content.clone(),
            published: self.published,
        })
    }

    /// Record the outcome of a submit and return the notice to show.
    pub fn finish_submit(&mut self, result: &Result<(), ServiceError>) -> Notice {
        self.submitting = false;
        match result {
            Ok(()) => Notice::created(),
            Err(e) => {
                tracing::error!(error = %e, "Failed to create post");
                Notice::failed()
            }
        }
    }
}
