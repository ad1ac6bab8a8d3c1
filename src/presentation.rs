//! Text layouts for ROM images.
//!
//! Both layouts break the image into rows of [`BYTES_PER_LINE`] bytes. A DAT
//! listing is meant to be read by people, an INC listing is fed to an
//! assembler as a series of `db` directives.

use std::fmt;

use crate::error::Result;
use crate::parsing;

pub const BYTES_PER_LINE: usize = 16;

const INC_HEADER: &str = "    radix hex\n";
const INC_DIRECTIVE: &str = "\n    db  ";

/// The two listing formats a `.BIN` image can be converted into.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Layout {
    Dat,
    Inc,
}

impl Layout {
    pub fn render(&self, bytes: &[u8]) -> String {
        match self {
            Layout::Dat => format_dat(bytes),
            Layout::Inc => format_inc(bytes),
        }
    }

    /// Decode a listing in this layout back into the bytes it was made from.
    pub fn parse(&self, text: &str) -> Result<Vec<u8>> {
        match self {
            Layout::Dat => parsing::parse_dat(text),
            Layout::Inc => parsing::parse_inc(text),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Layout::Dat => "DAT",
            Layout::Inc => "INC",
        }
    }

    pub fn program_name(&self) -> &'static str {
        match self {
            Layout::Dat => "bin2dat",
            Layout::Inc => "bin2inc",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ".{}", self.extension())
    }
}

/// Render `bytes` as a DAT listing.
///
/// Rows hold up to sixteen two-digit tokens separated by a space. A carriage
/// return follows every sixteenth byte and one more always closes the listing,
/// so an empty image renders as `"\r"`.
pub fn format_dat(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3 + bytes.len() / BYTES_PER_LINE + 1);
    write_dat(bytes, &mut out).expect("writing to a String cannot fail");
    out
}

pub fn write_dat<W: fmt::Write>(bytes: &[u8], output: &mut W) -> fmt::Result {
    for row in bytes.chunks(BYTES_PER_LINE) {
        for (i, byte) in row.iter().enumerate() {
            if i > 0 {
                output.write_char(' ')?;
            }
            write!(output, "{:02X}", byte)?;
        }
        if row.len() == BYTES_PER_LINE {
            output.write_char('\r')?;
        }
    }
    output.write_char('\r')
}

/// Render `bytes` as an assembler include listing.
///
/// Bytes are written three hex digits wide (`00A`), comma separated, one `db`
/// directive per row. The listing always ends with a newline after the last
/// row, so an empty image renders as the `radix` header and a blank line.
pub fn format_inc(bytes: &[u8]) -> String {
    let rows = (bytes.len() + BYTES_PER_LINE - 1) / BYTES_PER_LINE;
    let mut out =
        String::with_capacity(INC_HEADER.len() + rows * INC_DIRECTIVE.len() + bytes.len() * 4 + 1);
    write_inc(bytes, &mut out).expect("writing to a String cannot fail");
    out
}

pub fn write_inc<W: fmt::Write>(bytes: &[u8], output: &mut W) -> fmt::Result {
    output.write_str(INC_HEADER)?;

    for row in bytes.chunks(BYTES_PER_LINE) {
        output.write_str(INC_DIRECTIVE)?;
        for (i, byte) in row.iter().enumerate() {
            if i > 0 {
                output.write_char(',')?;
            }
            write!(output, "{:03X}", byte)?;
        }
    }

    output.write_char('\n')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dat_empty() {
        assert_eq!(format_dat(&[]), "\r");
    }

    #[test]
    fn test_dat_single_byte() {
        assert_eq!(format_dat(&[0x00]), "00\r");
        assert_eq!(format_dat(&[0xAB]), "AB\r");
    }

    #[test]
    fn test_dat_uses_uppercase_and_padding() {
        assert_eq!(format_dat(&[0x01, 0x0f, 0xa0, 0xff]), "01 0F A0 FF\r");
    }

    #[test]
    fn test_dat_full_row() {
        let expected = format!("{}\r\r", vec!["00"; 16].join(" "));
        let result = format_dat(&[0u8; 16]);

        assert_eq!(result, expected);
        assert!(!result.contains(" \r"));
    }

    #[test]
    fn test_dat_wraps_after_sixteen_bytes() {
        let bytes: Vec<u8> = (0..18).collect();
        let result = format_dat(&bytes);

        assert_eq!(
            result,
            "00 01 02 03 04 05 06 07 08 09 0A 0B 0C 0D 0E 0F\r10 11\r"
        );
    }

    #[test]
    fn test_inc_empty() {
        assert_eq!(format_inc(&[]), "    radix hex\n\n");
    }

    #[test]
    fn test_inc_single_byte() {
        assert_eq!(format_inc(&[0x0A]), "    radix hex\n\n    db  00A\n");
    }

    #[test]
    fn test_inc_starts_new_directive_at_seventeenth_byte() {
        let result = format_inc(&[0u8; 17]);
        let row = vec!["000"; 16].join(",");

        assert_eq!(
            result,
            format!("    radix hex\n\n    db  {}\n    db  000\n", row)
        );
    }

    #[test]
    fn test_inc_has_no_trailing_comma() {
        let result = format_inc(&[1, 2, 3]);

        assert_eq!(result, "    radix hex\n\n    db  001,002,003\n");
    }

    #[test]
    fn test_dat_short_row_has_single_terminator() {
        let bytes: Vec<u8> = (0..20).collect();
        let result = format_dat(&bytes);

        assert!(result.ends_with("12 13\r"));
        assert!(!result.ends_with("\r\r"));
    }

    #[test]
    fn test_writers_pad_every_value() {
        let mut dat = String::new();
        let mut inc = String::new();

        write_dat(&[0x00, 0x05, 0x50, 0xff], &mut dat).unwrap();
        write_inc(&[0x00, 0x05, 0x50, 0xff], &mut inc).unwrap();

        assert_eq!(dat, "00 05 50 FF\r");
        assert_eq!(inc, "    radix hex\n\n    db  000,005,050,0FF\n");
    }

    #[test]
    fn test_layout_dispatch() {
        let bytes = [0xde, 0xad];

        assert_eq!(Layout::Dat.render(&bytes), format_dat(&bytes));
        assert_eq!(Layout::Inc.render(&bytes), format_inc(&bytes));
        assert_eq!(Layout::Inc.to_string(), ".INC");
        assert_eq!(Layout::Dat.program_name(), "bin2dat");
    }
}
