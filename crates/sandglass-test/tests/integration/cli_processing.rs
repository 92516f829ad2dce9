//! Line processing as performed by the `sandglass` binary.

use clap::Parser;
use sandglass_test::app::{Cli, Processor, Summary};
use sandglass_test::config::parse_options;

use super::helpers::{run_processor, settings_from_toml};

fn processor_for(args: &[&str], toml: &str) -> Processor {
    let cli = Cli::try_parse_from(std::iter::once("sandglass").chain(args.iter().copied())).unwrap();
    let settings = settings_from_toml(toml);
    Processor::new(parse_options(&settings.parsing, &cli), cli.ical)
}

#[test_log::test]
fn reports_each_value_on_its_own_line() {
    let output = run_processor(
        processor_for(&[], ""),
        &[
            "1997-01-01T18:30:20Z/1997-01-02T07:00:00Z",
            "1997-01-01T18:00:00Z/PT5H30M",
        ],
    );

    assert_eq!(
        output.summary,
        Summary {
            processed: 2,
            failed: 0
        }
    );
    assert_eq!(
        output.stdout,
        "1997-01-01T18:30:20Z/1997-01-02T07:00:00Z\tPT12H29M40S\n\
         1997-01-01T18:00:00Z/PT5H30M\tPT5H30M\n"
    );
    assert!(output.stderr.is_empty());
}

#[test]
fn failures_go_to_stderr_and_are_counted() {
    let output = run_processor(
        processor_for(&[], ""),
        &[
            "1997-01-01T18:30:20Z1997-01-02T07:00:00Z",
            "   ",
            "1997-01-01/P1D",
            "some time before/1997-01-02T07:00:00Z",
        ],
    );

    assert_eq!(output.summary.processed, 3);
    assert_eq!(output.summary.failed, 2);
    assert_eq!(output.stdout, "1997-01-01/P1D\tP1D\n");

    let errors: Vec<&str> = output.stderr.lines().collect();
    assert_eq!(errors.len(), 2);
    assert!(errors[0].starts_with("error: Parse error: invalid period value"));
    assert!(errors[1].starts_with("error: Parse error: invalid date-time value for period start"));
}

#[test]
fn strict_flag_overrides_lenient_settings() {
    let lenient = run_processor(processor_for(&[], ""), &["1997-02-30/P1D"]);
    assert_eq!(lenient.summary.failed, 0);
    assert_eq!(lenient.stdout, "1997-02-30/P1D\tP1D\n");

    let strict = run_processor(processor_for(&["--strict"], ""), &["1997-02-30/P1D"]);
    assert_eq!(strict.summary.failed, 1);
    assert!(strict.stderr.contains("day out of range for month"));
}

#[test]
fn settings_file_selects_basic_format() {
    let toml = "[parsing]\nformat = \"basic\"\n";
    let output = run_processor(
        processor_for(&["--ical"], toml),
        &["19970101T180000Z/19970102T070000Z"],
    );

    assert_eq!(
        output.stdout,
        "1997-01-01T18:00:00Z/1997-01-02T07:00:00Z\tPT13H\t19970101T180000Z/19970102T070000Z\n"
    );
}
