#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Invalid metrics specified: {}. Valid metrics are: {}", invalid.join(", "), valid.join(", "))]
    InvalidMetrics {
        invalid: Vec<String>,
        valid: Vec<String>,
    },

    #[error("No pool statistics found in the provided files")]
    NoSections,

    #[error("No matching pools found for the specified filters")]
    NoMatchingPools,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
