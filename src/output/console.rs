//! Colored console output for rendered listings

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use super::utils::{is_dir_label, split_line_prefix};

const SUMMARY_MARKER: &str = "📊";

/// Print a rendered listing to stdout, coloring directories and the summary.
///
/// The text is printed unchanged; only color codes are added.
pub fn print_rendered(text: &str, use_color: bool) -> io::Result<()> {
    let choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    write_rendered(&mut stdout, text)
}

/// Write rendered text to any color-capable writer.
pub fn write_rendered<W: WriteColor>(out: &mut W, text: &str) -> io::Result<()> {
    for line in text.lines() {
        if line.starts_with(SUMMARY_MARKER) {
            out.set_color(ColorSpec::new().set_bold(true))?;
            write!(out, "{}", line)?;
            out.reset()?;
            writeln!(out)?;
            continue;
        }

        let (prefix, label) = split_line_prefix(line);
        write!(out, "{}", prefix)?;
        if is_dir_label(label) {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        } else {
            out.set_color(ColorSpec::new().set_fg(Some(Color::White)))?;
        }
        write!(out, "{}", label)?;
        out.reset()?;
        writeln!(out)?;
    }
    Ok(())
}
