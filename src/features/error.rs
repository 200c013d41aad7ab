/// Error types for feature construction.
#[derive(Debug, thiserror::Error)]
pub enum FeatureError {
    /// Fewer distinct ledger dates than the model window requires.
    /// Short windows are rejected rather than silently fed to the model.
    #[error("insufficient spending history: {have} days available, {need} required")]
    InsufficientHistory { have: usize, need: usize },
}
