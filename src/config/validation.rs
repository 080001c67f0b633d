use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - At least one team must be formed by default
/// - Separation groups cannot contain blank names
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    default_team_count: usize,
    separation_groups: &[Vec<String>],
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if default_team_count == 0 {
        return Err(AppError::config_error(
            "Default team count must be at least 1",
        ));
    }

    for (i, group) in separation_groups.iter().enumerate() {
        if group.iter().any(|name| name.trim().is_empty()) {
            return Err(AppError::config_error(format!(
                "Separation group {} contains a blank name",
                i + 1
            )));
        }
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
