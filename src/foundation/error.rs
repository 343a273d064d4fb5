/// Convenience result type used across the crate.
pub type SikkuResult<T> = Result<T, SikkuError>;

/// Top-level error taxonomy used by public APIs.
#[derive(thiserror::Error, Debug)]
pub enum SikkuError {
    /// Invalid user-provided parameters or scene data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while generating or inspecting a scene.
    #[error("scene error: {0}")]
    Scene(String),

    /// Errors while rasterizing a frame plan.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SikkuError {
    /// Build a [`SikkuError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SikkuError::Scene`] value.
    pub fn scene(msg: impl Into<String>) -> Self {
        Self::Scene(msg.into())
    }

    /// Build a [`SikkuError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}
