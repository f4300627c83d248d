//! End-to-end tests: JSON wire form in, resolved configuration out

use cast_receiver::{
    LogLevel, ProviderOptions, ReceiverOptions, StreamPriority, default_stream_priority,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

#[test]
fn test_minimal_json_resolves_to_documented_defaults() {
    init_tracing();

    let resolved = ReceiverOptions::from_json_str(r#"{ "provider": {} }"#)
        .expect("Failed to parse")
        .resolve();

    assert_eq!(resolved.log_level, LogLevel::Off);
    assert_eq!(resolved.stream_priority, default_stream_priority());
    assert!(!resolved.source_options.force_redirect_external_streams);
}

#[test]
fn test_log_level_json_override() {
    let resolved = ReceiverOptions::from_json_str(r#"{ "provider": {}, "logLevel": "DEBUG" }"#)
        .expect("Failed to parse")
        .resolve();

    assert_eq!(resolved.log_level, LogLevel::Debug);
    assert_eq!(resolved.stream_priority, default_stream_priority());
    assert!(!resolved.source_options.force_redirect_external_streams);
}

#[test]
fn test_empty_sources_json_resolves_to_default_options() {
    init_tracing();

    // "sources" present but "options" absent still resolves to defaults
    let resolved = ReceiverOptions::from_json_str(r#"{ "provider": {}, "sources": {} }"#)
        .expect("Failed to parse")
        .resolve();

    assert!(!resolved.source_options.force_redirect_external_streams);
    assert!(resolved.source_options.extra.is_empty());
}

#[test]
fn test_single_entry_priority_json_replaces_defaults() {
    let json = r#"{
        "provider": {},
        "playback": {
            "streamPriority": [ { "engine": "html5", "format": "progressive" } ]
        }
    }"#;

    let resolved = ReceiverOptions::from_json_str(json)
        .expect("Failed to parse")
        .resolve();

    assert_eq!(
        resolved.stream_priority,
        vec![StreamPriority::new("html5", "progressive")]
    );
}

#[test]
fn test_full_wire_example() {
    // The documented full default configuration, spelled out on the wire
    let json = r#"{
        "provider": { "partnerId": 1234, "vs": "djJ8MTIzNHw", "uiConfId": 42 },
        "logLevel": "OFF",
        "playback": {
            "streamPriority": [
                { "engine": "cast", "format": "hls" },
                { "engine": "cast", "format": "dash" },
                { "engine": "cast", "format": "progressive" }
            ]
        },
        "sources": {
            "options": { "forceRedirectExternalStreams": false }
        }
    }"#;

    let options = ReceiverOptions::from_json_str(json).expect("Failed to parse");
    let resolved = options.clone().resolve();

    // Spelling out the defaults resolves identically to omitting them
    let minimal = ReceiverOptions::new(options.provider.clone()).resolve();
    assert_eq!(resolved.stream_priority, minimal.stream_priority);
    assert_eq!(resolved.log_level, minimal.log_level);
    assert_eq!(resolved.source_options, minimal.source_options);

    // And the fully-specified value round-trips with the same field set
    let reparsed = ReceiverOptions::from_json_str(&options.to_json_string().unwrap()).unwrap();
    assert_eq!(reparsed, options);
}

#[test]
fn test_builder_matches_wire_form() {
    let built = ReceiverOptions::builder()
        .provider(ProviderOptions::new(1234))
        .log_level(LogLevel::Warn)
        .build()
        .expect("Failed to build options");

    let parsed =
        ReceiverOptions::from_json_str(r#"{ "provider": { "partnerId": 1234 }, "logLevel": "WARN" }"#)
            .expect("Failed to parse");

    assert_eq!(built, parsed);
}
