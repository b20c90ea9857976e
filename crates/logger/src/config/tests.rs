use super::*;
use logger_sink::MemorySink;

#[test]
fn default_config_is_info_without_overrides() {
    let config = LoggerConfig::default();
    assert!(config.sink_override().is_none());
    assert!(config.initial_level().is_none());
    assert_eq!(config.fallback_threshold(), Threshold::from(Level::Info));
    assert_eq!(config.color_mode(), ColorMode::Auto);
}

#[test]
fn from_sink_wraps_a_bare_sink() {
    let config = LoggerConfig::from(MemorySink::new());
    assert!(config.sink_override().is_some());
    assert!(config.initial_level().is_none());
}

#[test]
fn log_level_uses_silent_for_unknown_names() {
    let config = LoggerConfig::default().log_level("quiet");
    assert_eq!(config.initial_level(), Some(Threshold::SILENT));

    let config = LoggerConfig::default().log_level("Warn");
    assert_eq!(config.initial_level(), Some(Threshold::from(Level::Warn)));

    let config = LoggerConfig::default().log_level(f64::NAN);
    assert_eq!(config.initial_level(), Some(Threshold::SILENT));
}

#[test]
fn env_values_parse_names_and_ranks() {
    assert_eq!(default_threshold_from(Some("WARN")), Threshold::from(Level::Warn));
    assert_eq!(default_threshold_from(Some(" 3 ")), Threshold::from(Level::Debug));
    assert_eq!(default_threshold_from(Some("-1")), Threshold::SILENT);
}

#[test]
fn env_values_fall_back_to_info() {
    let info = Threshold::from(Level::Info);
    assert_eq!(default_threshold_from(None), info);
    assert_eq!(default_threshold_from(Some("")), info);
    assert_eq!(default_threshold_from(Some("silent")), info);
    assert_eq!(default_threshold_from(Some("NaN")), info);
}

#[test]
fn default_variable_name_is_unprefixed() {
    assert_eq!(LOG_LEVEL_ENV, "LOGLEVEL");
}

#[test]
fn from_env_var_reads_absent_variable_as_info() {
    let config = LoggerConfig::from_env_var("LEVELED_LOGGER_TEST_UNSET_VARIABLE");
    assert_eq!(config.fallback_threshold(), Threshold::from(Level::Info));
}

#[test]
fn color_mode_resolution() {
    let plain = MemorySink::new();
    let colored = MemorySink::new().with_color(true);

    assert!(!ColorMode::Auto.enabled_for(&plain));
    assert!(ColorMode::Auto.enabled_for(&colored));
    assert!(ColorMode::Always.enabled_for(&plain));
    assert!(!ColorMode::Never.enabled_for(&colored));
}

#[test]
fn debug_output_hides_the_sink() {
    let config = LoggerConfig::from_sink(MemorySink::new()).color(ColorMode::Never);
    let rendered = format!("{config:?}");
    assert!(rendered.contains("<sink>"));
    assert!(rendered.contains("Never"));
}
