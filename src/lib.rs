//! Convert HP-71B `.BIN` ROM images into ASCII hex listings.
//!
//! A `.BIN` file is a raw ROM image with the nibbles packed into bytes, low
//! nibble first. Two listings can be made from it: a `.DAT` file with sixteen
//! space separated bytes per carriage-return terminated line, and an `.INC`
//! file of `db` directives for an assembler.

pub mod cli;
pub mod error;
pub mod logging;
pub mod parsing;
pub mod presentation;
pub mod sink;
pub mod source;

pub use crate::cli::Opts;
pub use crate::error::{Error, Result};
pub use crate::presentation::{format_dat, format_inc, Layout};
pub use crate::sink::Sink;
pub use crate::source::Source;

/// Read the image named by `opts`, render it as `layout` and write it out.
pub fn run(layout: Layout, opts: &Opts) -> Result<()> {
    let source = opts.source();
    let sink = opts.sink();
    log::info!("converting {} into a {} listing on {}", source, layout, sink);

    let bytes = source::read_all_bytes(&source)?;
    let text = layout.render(&bytes);
    sink::write_text(&sink, &text)?;

    log::info!(
        "rendered {} bytes as {} characters of {} listing",
        bytes.len(),
        text.len(),
        layout
    );
    Ok(())
}
