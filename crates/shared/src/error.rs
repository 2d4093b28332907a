use thiserror::Error;

/// Wiring and configuration faults. Store operations themselves never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DashboardError {
    #[error("view binding has no element `{0}`")]
    MissingElement(String),
    #[error("unknown section `{0}`")]
    UnknownSection(String),
    #[error("unknown tab `{0}`")]
    UnknownTab(String),
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl DashboardError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Everything except a missing element can be fixed by editing settings.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, Self::MissingElement(_))
    }
}
