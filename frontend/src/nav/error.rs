use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavError {
    /// The page doesn't carry this piece of the card nav markup.
    #[error("Missing element: {0}")]
    MissingElement(String),
    #[error("Invalid nav config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
    #[error("DOM call failed: {0}")]
    Js(String),
}

impl NavError {
    pub fn is_missing_element(&self) -> bool {
        matches!(self, NavError::MissingElement(_))
    }
}
