use super::*;

#[test]
fn defaults_match_constants() {
    let config = FormatConfig::default();
    assert_eq!(config.column_limit, 80);
    assert_eq!(config.indent_spaces, 2);
    assert_eq!(config.short_name, 10);
    assert_eq!(config.small_column_limit, 50);
    assert_eq!(config.overflow_margin, 20);
    assert_eq!(config.tolerant_limit(), 100);
}

#[test]
fn default_config_validates() {
    assert_eq!(FormatConfig::default().validate(), Ok(FormatConfig::default()));
}

#[test]
fn narrow_limit_validates() {
    // The small-column threshold may exceed a narrow limit.
    assert!(FormatConfig::with_column_limit(5).validate().is_ok());
}

#[test]
fn zero_column_limit_rejected() {
    assert_eq!(
        FormatConfig::with_column_limit(0).validate(),
        Err(ConfigError::ZeroColumnLimit)
    );
}

#[test]
fn zero_indent_rejected() {
    assert_eq!(
        FormatConfig::with_indent_spaces(0).validate(),
        Err(ConfigError::ZeroIndent)
    );
}

#[test]
fn indent_wider_than_limit_rejected() {
    let config = FormatConfig {
        column_limit: 4,
        indent_spaces: 4,
        ..FormatConfig::default()
    };
    let Err(err) = config.validate() else {
        panic!("indent equal to the limit must be rejected");
    };
    assert_eq!(err, ConfigError::IndentExceedsLimit { indent: 4, limit: 4 });
    assert_eq!(
        err.to_string(),
        "indent width 4 must be smaller than the column limit 4"
    );
}

#[test]
fn zero_short_name_rejected() {
    let config = FormatConfig {
        short_name: 0,
        ..FormatConfig::default()
    };
    assert_eq!(config.validate(), Err(ConfigError::ZeroShortName));
}

#[test]
fn tolerant_limit_saturates() {
    let config = FormatConfig {
        column_limit: usize::MAX,
        ..FormatConfig::default()
    };
    assert_eq!(config.tolerant_limit(), usize::MAX);
}
