//! Properties and fields: a private backing field behind a getter/setter pair.

/// A car whose model is assigned after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Car {
    model: String,
}

impl Car {
    /// Creates a car with an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Replaces the model. Any text is accepted.
    pub fn set_model(&mut self, model: impl Into<String>) {
        self.model = model.into();
    }
}
