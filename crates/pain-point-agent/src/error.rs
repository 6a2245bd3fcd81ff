use solution_core::error::CoreError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("config error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_display_transparently() {
        let err: AppError = CoreError::Validation("Pain point is required".to_string()).into();
        assert!(matches!(err, AppError::Core(_)));
        assert_eq!(err.to_string(), "validation error: Pain point is required");
    }
}
