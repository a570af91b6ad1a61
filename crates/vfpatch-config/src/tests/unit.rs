//! Accessor defaults and case-insensitive enum parsing.

use camino::{Utf8Path, Utf8PathBuf};
use rstest::rstest;

use crate::{Config, DEFAULT_HEADER_PATH, LogFormat, MatchPolicy};

#[test]
fn unset_fields_resolve_to_defaults() {
    let config = Config::default();
    assert_eq!(config.root(), Utf8Path::new("."));
    assert_eq!(config.header_path(), Utf8Path::new("string.h"));
    assert_eq!(config.manifest_path(), Utf8Path::new("crt.dll.vfmanifest"));
    assert_eq!(config.match_policy(), MatchPolicy::Warn);
    assert_eq!(config.log_filter(), "info");
    assert_eq!(config.log_format(), LogFormat::Compact);
}

#[test]
fn set_fields_override_defaults() {
    let config = Config {
        root: Some(Utf8PathBuf::from("bin/stdlib")),
        match_policy: Some(MatchPolicy::Require),
        log_format: Some(LogFormat::Json),
        ..Config::default()
    };
    assert_eq!(config.root(), Utf8Path::new("bin/stdlib"));
    assert!(config.match_policy().is_strict());
    assert_eq!(config.log_format(), LogFormat::Json);
    assert_eq!(config.header_path(), Utf8Path::new(DEFAULT_HEADER_PATH));
}

#[test]
fn accessors_borrow_from_the_config() {
    let config = Config {
        header_path: Some(Utf8PathBuf::from("include/string.h")),
        ..Config::default()
    };
    let header: &Utf8Path = config.header_path();
    assert_eq!(header.file_name(), Some("string.h"));
}

#[rstest]
#[case("JSON", LogFormat::Json)]
#[case("compact", LogFormat::Compact)]
fn log_formats_parse_case_insensitively(#[case] text: &str, #[case] expected: LogFormat) {
    assert_eq!(text.parse::<LogFormat>(), Ok(expected));
}

#[rstest]
#[case("Require", MatchPolicy::Require)]
#[case("warn", MatchPolicy::Warn)]
fn match_policies_parse_case_insensitively(#[case] text: &str, #[case] expected: MatchPolicy) {
    assert_eq!(text.parse::<MatchPolicy>(), Ok(expected));
}

#[test]
fn unknown_policy_is_rejected() {
    assert!("loud".parse::<MatchPolicy>().is_err());
    assert_eq!(MatchPolicy::Warn.to_string(), "warn");
}

#[rstest]
#[case(LogFormat::Compact, true, true)]
#[case(LogFormat::Compact, false, false)]
#[case(LogFormat::Json, true, false)]
fn colour_follows_format_and_terminal(
    #[case] format: LogFormat,
    #[case] terminal: bool,
    #[case] expected: bool,
) {
    assert_eq!(format.uses_colour(terminal), expected);
}
