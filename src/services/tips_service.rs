use crate::utils::AppError;

/// Localized usage tips for the time endpoint. The helper was never
/// specified, so this stays a typed capability slot until real
/// requirements exist.
pub fn learning_tips(language: &str) -> Result<Vec<String>, AppError> {
    log::warn!(
        "⚠️ Learning tips requested for language '{}' but generation is not yet supported",
        language
    );
    Err(AppError::NotSupported("learning tips generation"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tips_slot_reports_not_supported() {
        assert!(matches!(
            learning_tips("en"),
            Err(AppError::NotSupported(_))
        ));
    }
}
