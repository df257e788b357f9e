//! Interactive range menu.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use date_range::RangeSelector;

pub const PROMPT: &str = "Choose the date range to report on: ";

/// Print the prompt and one `(index) label` line per range.
pub fn write_choices<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{PROMPT}")?;
    for range in RangeSelector::ALL {
        writeln!(out, "({}) {}", range.index(), range.label())?;
    }
    out.flush()?;
    Ok(())
}

/// Read one line and parse it as a menu index.
///
/// The index is not range-checked here; an unknown index surfaces as
/// `UnsupportedRange` when it is turned into a selector.
pub fn read_choice<R: BufRead>(input: &mut R) -> Result<i64> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read range selection")?;
    if read == 0 {
        bail!("no range selected: input closed");
    }
    let trimmed = line.trim();
    trimmed
        .parse::<i64>()
        .with_context(|| format!("invalid range selection {trimmed:?}: expected a number"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_menu_lists_every_range_in_order() {
        let mut out = Vec::new();
        write_choices(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), RangeSelector::ALL.len() + 1);
        assert_eq!(lines[0], PROMPT);
        assert_eq!(lines[1], "(0) Last 7 Days");
        assert_eq!(lines[3], "(2) Last Quarter");
        assert_eq!(lines[6], "(5) Quarter to Date");
    }

    #[test]
    fn test_every_menu_index_is_accepted() {
        let mut out = Vec::new();
        write_choices(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        for line in text.lines().skip(1) {
            let index: i64 = line[1..line.find(')').unwrap()].parse().unwrap();
            let range = RangeSelector::try_from(index).unwrap();
            assert!(line.ends_with(range.label()), "{line}");
        }
    }

    #[test]
    fn test_read_choice_trims_newline() {
        let mut input = Cursor::new("3\n");
        assert_eq!(read_choice(&mut input).unwrap(), 3);
    }

    #[test]
    fn test_read_choice_passes_out_of_menu_numbers_through() {
        let mut input = Cursor::new("6\n");
        assert_eq!(read_choice(&mut input).unwrap(), 6);
    }

    #[test]
    fn test_read_choice_rejects_text() {
        let mut input = Cursor::new("last quarter\n");
        let err = read_choice(&mut input).unwrap_err();
        assert!(err.to_string().contains("invalid range selection"), "got: {err}");
    }

    #[test]
    fn test_read_choice_rejects_empty_input() {
        let mut input = Cursor::new("");
        let err = read_choice(&mut input).unwrap_err();
        assert!(err.to_string().contains("input closed"), "got: {err}");
    }
}
