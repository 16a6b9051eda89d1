#[cfg(test)]
#[path = "edit_session_test.rs"]
mod tests;

/// Tracks which single step, if any, is being edited and its draft content.
/// Holding a session is mutually exclusive with having a request in flight;
/// that guard lives with the event-loop owner, which also applies the
/// first-step editability policy before calling `begin`.
#[derive(Default)]
pub struct EditSession {
    editing_index: Option<usize>,
    draft_content: String,
}

impl EditSession {
    /// Seeds the draft with the step's current content.
    pub fn begin(&mut self, index: usize, current_content: &str) {
        self.editing_index = Some(index);
        self.draft_content = current_content.to_string();
    }

    /// Clears the session without side effects on anything else.
    pub fn cancel(&mut self) {
        self.editing_index = None;
        self.draft_content.clear();
    }

    /// Consumes the session at submit time, returning the edited index.
    pub fn take(&mut self) -> Option<usize> {
        let index = self.editing_index.take();
        self.draft_content.clear();
        return index;
    }

    pub fn is_active(&self) -> bool {
        return self.editing_index.is_some();
    }

    pub fn editing_index(&self) -> Option<usize> {
        return self.editing_index;
    }

    pub fn draft_content(&self) -> &str {
        return &self.draft_content;
    }
}
