//! Builder for creating and configuring Drafter instances.

use super::{Drafter, UpdateStyle};

/// Builder for creating and configuring [`Drafter`] instances.
#[derive(Debug, Clone, Default)]
pub struct DrafterBuilder {
    style: UpdateStyle,
}

impl DrafterBuilder {
    /// Creates a new builder with default settings (delta updates).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the update delivery style.
    pub fn with_update_style(mut self, style: UpdateStyle) -> Self {
        self.style = style;
        self
    }

    /// Builds the configured drafter instance.
    pub fn build(self) -> Drafter {
        Drafter::new(self.style)
    }
}
