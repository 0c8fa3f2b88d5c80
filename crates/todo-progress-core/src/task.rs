use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Task {
    pub title: String,
    pub completed: bool,
}

impl Task {
    pub fn new(title: impl Into<String>, completed: bool) -> Self {
        Self {
            title: title.into(),
            completed,
        }
    }

    /// Status literal used by the tabular export.
    pub fn status_label(&self) -> &'static str {
        if self.completed {
            "True"
        } else {
            "False"
        }
    }
}
