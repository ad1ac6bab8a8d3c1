//! Convert an HP-71B .BIN image into a .DAT listing.

use anyhow::{Context, Result};
use hp71dump::{cli, logging, Layout};

fn main() -> Result<()> {
    let opts = cli::parse_args(Layout::Dat);
    logging::init(opts.verbose)?;

    hp71dump::run(Layout::Dat, &opts)
        .with_context(|| format!("converting {} to {}", opts.source(), opts.sink()))
}
