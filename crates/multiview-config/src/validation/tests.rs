use super::*;

#[test]
fn default_config_is_valid() {
    assert!(validate(&MultiviewConfig::default()).is_ok());
}

#[test]
fn max_streams_out_of_range() {
    let mut config = MultiviewConfig::default();
    config.session.max_streams = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("session.max_streams = 0"));

    config.session.max_streams = 17;
    assert!(validate(&config).is_err());

    config.session.max_streams = 16;
    assert!(validate(&config).is_ok());
}

#[test]
fn origin_must_be_https() {
    let mut config = MultiviewConfig::default();
    config.youtube.target_origin = "http://www.youtube.com".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("must start with https://"));
}

#[test]
fn origin_must_not_carry_path() {
    let mut config = MultiviewConfig::default();
    config.youtube.target_origin = "https://www.youtube.com/embed".into();
    assert!(validate(&config).is_err());

    config.youtube.target_origin = "https://".into();
    assert!(validate(&config).is_err());
}

#[test]
fn errors_are_collected() {
    let mut config = MultiviewConfig::default();
    config.session.max_streams = 99;
    config.youtube.target_origin = "youtube".into();
    let err = validate(&config).unwrap_err();
    match err {
        ConfigError::ValidationError(msg) => {
            assert!(msg.contains("session.max_streams"));
            assert!(msg.contains("youtube.target_origin"));
            assert!(msg.contains("; "));
        }
        other => panic!("unexpected error: {other}"),
    }
}
