use clap::Parser;

/// Parse iCalendar PERIOD values and print their canonical form and length.
///
/// Values are taken from the arguments, or read one per line from standard
/// input when none are given.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "sandglass", version)]
pub struct Cli {
    /// Period values such as `1997-01-01T18:00:00Z/PT5H30M`
    pub values: Vec<String>,

    /// Reject calendar fields that do not name a real date or time of day
    #[arg(long)]
    pub strict: bool,

    /// Parse the basic format (`19970101T180000Z/PT5H30M`)
    #[arg(long)]
    pub basic: bool,

    /// Also print the iCalendar content-line form
    #[arg(long)]
    pub ical: bool,
}
