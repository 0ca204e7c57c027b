//! Configuration validation
//!
//! Validates config consistency:
//! - Processor type is known
//! - `scheme`, when given, is a non-empty string
//! - `parts`, when given, is an array of integers
//!
//! Whether a scheme is registered is checked when the stage is built, since
//! the codec registry lives outside this crate.

use crate::Config;
use crate::error::{ConfigError, Result};
use crate::processor::{KNOWN_PROCESSOR_TYPES, is_known_processor_type};

/// Validate the entire configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_processor(config)?;
    Ok(())
}

/// Validate the processor section
fn validate_processor(config: &Config) -> Result<()> {
    let processor = &config.processor;
    let name = processor.processor_type.as_str();

    if name.is_empty() {
        return Err(ConfigError::invalid_value(
            "processor",
            name,
            "type",
            "must not be empty",
        ));
    }

    if !is_known_processor_type(name) {
        return Err(ConfigError::invalid_value(
            "processor",
            name,
            "type",
            format!("must be one of: {}", KNOWN_PROCESSOR_TYPES.join(", ")),
        ));
    }

    if let Some(scheme) = processor.options.get("scheme") {
        match scheme.as_str() {
            Some(s) if !s.is_empty() => {}
            _ => {
                return Err(ConfigError::invalid_value(
                    "processor",
                    name,
                    "scheme",
                    "must be a non-empty string",
                ));
            }
        }
    }

    if processor.options.contains_key("parts") && processor.get_int_array("parts").is_none() {
        return Err(ConfigError::invalid_value(
            "processor",
            name,
            "parts",
            "must be an array of integers",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProcessorConfig;

    fn config_with(processor: ProcessorConfig) -> Config {
        Config {
            processor,
            ..Default::default()
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_empty_type_rejected() {
        let err = validate_config(&config_with(ProcessorConfig::new(""))).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "type", .. }));
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn test_unknown_type_rejected() {
        let err = validate_config(&config_with(ProcessorConfig::new("compress"))).unwrap_err();
        assert!(err.to_string().contains("compress"));
        assert!(err.to_string().contains("encode, decode"));
    }

    #[test]
    fn test_empty_scheme_rejected() {
        let processor = ProcessorConfig::encode().with_option("scheme", "");
        let err = validate_config(&config_with(processor)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "scheme", .. }));
    }

    #[test]
    fn test_non_string_scheme_rejected() {
        let processor = ProcessorConfig::encode().with_option("scheme", 64_i64);
        assert!(validate_config(&config_with(processor)).is_err());
    }

    #[test]
    fn test_non_integer_parts_rejected() {
        let processor = ProcessorConfig::encode().with_option("parts", "0,1");
        let err = validate_config(&config_with(processor)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "parts", .. }));
    }

    #[test]
    fn test_negative_parts_accepted() {
        let processor = ProcessorConfig::encode()
            .with_option("parts", toml::Value::Array(vec![toml::Value::Integer(-1)]));
        assert!(validate_config(&config_with(processor)).is_ok());
    }
}
