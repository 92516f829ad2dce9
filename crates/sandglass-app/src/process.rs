use std::io::{self, BufRead, Write};

use sandglass_rfc::error::RfcResult;
use sandglass_rfc::rfc::ical::core::Interval;
use sandglass_rfc::rfc::ical::parse::ParseOptions;

use crate::error::AppResult;

/// Turns period texts into report lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct Processor {
    pub options: ParseOptions,
    /// Append the iCalendar content-line form to each report line.
    pub ical: bool,
}

/// Counts from one [`Processor::run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub processed: usize,
    pub failed: usize,
}

impl Processor {
    #[must_use]
    pub const fn new(options: ParseOptions, ical: bool) -> Self {
        Self { options, ical }
    }

    /// ## Summary
    /// Parses one period and renders `<canonical>\t<duration>`, followed by
    /// `\t<content-line form>` when enabled.
    ///
    /// ## Errors
    /// Returns the parse error if the text is not a valid period.
    pub fn process_line(&self, line: &str) -> RfcResult<String> {
        let period = Interval::parse_with(line.trim(), self.options)?;
        let mut report = format!("{period}\t{}", period.get_duration());
        if self.ical {
            report.push('\t');
            report.push_str(&period.to_ical_string());
        }
        Ok(report)
    }

    /// ## Summary
    /// Processes every non-blank input, writing reports to `out` and
    /// failures to `err` as `error: <message>`. A failure does not stop the
    /// remaining inputs.
    ///
    /// ## Errors
    /// Returns an error only if writing to either stream fails.
    pub fn run<I, S, O, E>(&self, inputs: I, out: &mut O, err: &mut E) -> AppResult<Summary>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        O: Write,
        E: Write,
    {
        let mut summary = Summary::default();
        for input in inputs {
            self.report(input.as_ref(), &mut summary, out, err)?;
        }
        Ok(finish(summary))
    }

    /// ## Summary
    /// Like [`Processor::run`], reading one input per line from `reader` as
    /// it goes. A line that is not valid UTF-8 counts as a failure and the
    /// following lines are still processed.
    ///
    /// ## Errors
    /// Returns an error if reading fails for any other reason, or if
    /// writing to either stream fails.
    pub fn run_reader<R, O, E>(&self, reader: R, out: &mut O, err: &mut E) -> AppResult<Summary>
    where
        R: BufRead,
        O: Write,
        E: Write,
    {
        let mut summary = Summary::default();
        for line in reader.lines() {
            match line {
                Ok(line) => self.report(&line, &mut summary, out, err)?,
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    summary.processed += 1;
                    summary.failed += 1;
                    tracing::debug!(error = %e, "Unreadable input line");
                    writeln!(err, "error: {e}")?;
                }
                Err(e) => return Err(e.into()),
            }
        }
        Ok(finish(summary))
    }

    fn report<O, E>(&self, input: &str, summary: &mut Summary, out: &mut O, err: &mut E) -> AppResult<()>
    where
        O: Write,
        E: Write,
    {
        if input.trim().is_empty() {
            return Ok(());
        }

        summary.processed += 1;
        match self.process_line(input) {
            Ok(report) => writeln!(out, "{report}")?,
            Err(e) => {
                summary.failed += 1;
                tracing::debug!(input = %input, error = %e, "Period rejected");
                writeln!(err, "error: {e}")?;
            }
        }
        Ok(())
    }
}

fn finish(summary: Summary) -> Summary {
    tracing::info!(
        processed = summary.processed,
        failed = summary.failed,
        "Finished processing periods"
    );
    summary
}
