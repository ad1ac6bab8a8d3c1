use std::ffi::OsString;
use std::path::PathBuf;

use structopt::clap::AppSettings;
use structopt::StructOpt;

use crate::presentation::Layout;
use crate::sink::Sink;
use crate::source::Source;

#[derive(StructOpt, Debug)]
pub struct Opts {
    /// HP-71B .BIN image to convert [default: standard input]
    #[structopt(parse(from_os_str))]
    pub input: Option<PathBuf>,

    /// File to write the listing to [default: standard output]
    #[structopt(parse(from_os_str))]
    pub output: Option<PathBuf>,

    /// Anything after the output path is accepted and ignored
    #[structopt(parse(from_os_str), hidden = true, allow_hyphen_values = true)]
    pub ignored: Vec<OsString>,

    /// Log progress to standard error (repeat for more detail)
    #[structopt(short, long, parse(from_occurrences))]
    pub verbose: u8,
}

impl Opts {
    pub fn source(&self) -> Source {
        match &self.input {
            Some(path) => Source::File(path.clone()),
            None => Source::Stdin,
        }
    }

    pub fn sink(&self) -> Sink {
        match &self.output {
            Some(path) => Sink::File(path.clone()),
            None => Sink::Stdout,
        }
    }
}

/// Parse the process arguments for the tool that writes `layout` listings.
pub fn parse_args(layout: Layout) -> Opts {
    parse_from(layout, std::env::args_os())
}

pub fn parse_from<I>(layout: Layout, args: I) -> Opts
where
    I: IntoIterator,
    I::Item: Into<OsString> + Clone,
{
    let about = format!(
        "Convert an HP-71B .BIN ROM image into a {} listing",
        layout
    );
    // Paths may start with '-' and trailing arguments are never validated;
    // only clusters made entirely of known flags are read as options.
    let app = Opts::clap()
        .name(layout.program_name())
        .about(about.as_str())
        .setting(AppSettings::AllowLeadingHyphen)
        .setting(AppSettings::TrailingVarArg);
    Opts::from_clap(&app.get_matches_from(args))
}
