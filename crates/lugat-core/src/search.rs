/// Holds the draft input and the committed search term
#[derive(Debug, Clone)]
pub struct SearchController {
    draft: String,
    committed: String,
}

impl SearchController {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            draft: String::new(),
            committed: initial.into(),
        }
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn committed(&self) -> &str {
        &self.committed
    }

    /// Keystroke level update, never commits
    pub fn edit(&mut self, text: String) {
        self.draft = text;
    }

    /// Commit `text` verbatim. Returns the new term only when it changed.
    pub fn submit(&mut self, text: String) -> Option<String> {
        self.draft = text;
        if self.draft == self.committed {
            return None;
        }
        self.committed = self.draft.clone();
        Some(self.committed.clone())
    }
}
