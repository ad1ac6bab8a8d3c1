//! Convert an HP-71B .BIN image into an assembler .INC listing.

use anyhow::{Context, Result};
use hp71dump::{cli, logging, Layout};

fn main() -> Result<()> {
    let opts = cli::parse_args(Layout::Inc);
    logging::init(opts.verbose)?;

    hp71dump::run(Layout::Inc, &opts)
        .with_context(|| format!("converting {} to {}", opts.source(), opts.sink()))
}
