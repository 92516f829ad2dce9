//! Settings loading and mapping onto parser options.

use sandglass_test::app::Cli;
use sandglass_test::config::{Settings, TextFormat, parse_options};
use sandglass_test::ical::{ParseOptions, Strictness, ValueFormat};

use super::helpers::settings_from_toml;

#[test]
fn defaults_give_lenient_extended_parsing() {
    let settings = settings_from_toml("");
    assert!(!settings.parsing.strict);
    assert_eq!(settings.parsing.format, TextFormat::Extended);
    assert_eq!(settings.logging.level, "warn");

    assert_eq!(parse_options(&settings.parsing, &Cli::default()), ParseOptions::new());
}

#[test]
fn file_settings_flow_into_parse_options() {
    let settings = settings_from_toml(
        r#"
[parsing]
strict = true
format = "basic"

[logging]
level = "sandglass_rfc=trace"
"#,
    );

    let options = parse_options(&settings.parsing, &Cli::default());
    assert_eq!(options.strictness, Strictness::Strict);
    assert_eq!(options.format, ValueFormat::Basic);
    assert_eq!(settings.logging.level, "sandglass_rfc=trace");
}

#[test]
fn invalid_settings_are_rejected() {
    let builder = Settings::defaults()
        .unwrap()
        .add_source(config::File::from_str(
            "[parsing]\nformat = \"compact\"\n",
            config::FileFormat::Toml,
        ));
    assert!(Settings::from_builder(builder).is_err());
}
