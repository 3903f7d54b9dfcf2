//! Full configuration validation.
//!
//! Every check pushes onto a shared error list so a single
//! `ConfigError` reports all problems at once.

#[cfg(test)]
mod tests;

use crate::schema::MultiviewConfig;
use multiview_common::ConfigError;

/// Hard ceiling on simultaneously mounted embeds.
pub const MAX_STREAMS: u32 = 16;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &MultiviewConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    let streams = config.session.max_streams;
    if !(1..=MAX_STREAMS).contains(&streams) {
        errors.push(format!(
            "session.max_streams = {streams} must be between 1 and {MAX_STREAMS}"
        ));
    }
    validate_origin(&mut errors, &config.youtube.target_origin);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_origin(errors: &mut Vec<String>, origin: &str) {
    let Some(host) = origin.strip_prefix("https://") else {
        errors.push(format!(
            "youtube.target_origin = {origin:?} must start with https://"
        ));
        return;
    };
    if host.is_empty() || host.contains('/') {
        errors.push(format!(
            "youtube.target_origin = {origin:?} must be a bare origin without a path"
        ));
    }
}
