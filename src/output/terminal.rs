//! Terminal output utilities.
//!
//! Status lines go to the diagnostic stream as `[+][title:][message]` for
//! results, `[.][title:][message]` for notices and `[HEADING]` for sections.

use colored::Colorize;
use std::fmt::Display;
use std::io::{self, Stderr, Write};

/// Move the cursor up one line and clear it.
pub const ERASE_LINE: &str = "\x1B[1A\x1B[2K";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Marker {
    Result,
    Notice,
    Failure,
}

impl Marker {
    pub fn symbol(&self) -> &'static str {
        match self {
            Marker::Result => "+",
            Marker::Notice => ".",
            Marker::Failure => "-",
        }
    }
}

/// Format a status line with an already rendered marker.
pub fn format_line<M: Display, T: Display>(marker: M, title: &str, message: T) -> String {
    format!("[{marker}][{title}:][{message}]")
}

pub fn format_heading(title: &str) -> String {
    format!("[{}]", title.trim_end().to_uppercase())
}

/// Diagnostic stream writer.
///
/// In live mode each [`Console::progress`] call overwrites the lines written
/// by the previous one instead of scrolling.
pub struct Console<W: Write> {
    out: W,
    color: bool,
    live: bool,
    progress_lines: usize,
}

impl Console<Stderr> {
    pub fn stderr(color: bool, live: bool) -> Self {
        Console::new(io::stderr(), color, live)
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W, color: bool, live: bool) -> Self {
        Console {
            out,
            color,
            live,
            progress_lines: 0,
        }
    }

    fn paint(&self, marker: Marker) -> String {
        let symbol = marker.symbol();
        if !self.color {
            return symbol.to_string();
        }
        match marker {
            Marker::Result => symbol.green().to_string(),
            Marker::Notice => symbol.blue().to_string(),
            Marker::Failure => symbol.red().to_string(),
        }
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.progress_lines = 0;
        writeln!(self.out, "{line}")
    }

    pub fn message<T: Display>(&mut self, title: &str, message: T) -> io::Result<()> {
        let line = format_line(self.paint(Marker::Result), title, message);
        self.write_line(&line)
    }

    pub fn notice<T: Display>(&mut self, title: &str, message: T) -> io::Result<()> {
        let line = format_line(self.paint(Marker::Notice), title, message);
        self.write_line(&line)
    }

    pub fn failure<T: Display>(&mut self, title: &str, message: T) -> io::Result<()> {
        let line = format_line(self.paint(Marker::Failure), title, message);
        self.write_line(&line)
    }

    pub fn heading(&mut self, title: &str) -> io::Result<()> {
        let heading = format_heading(title);
        if self.color {
            self.write_line(&heading.bold().to_string())
        } else {
            self.write_line(&heading)
        }
    }

    pub fn blank(&mut self) -> io::Result<()> {
        self.write_line("")
    }

    /// Write one progress step: a result line for the network and a running notice.
    pub fn progress<T: Display, U: Display>(
        &mut self,
        (title, message): (&str, T),
        (notice_title, notice): (&str, U),
    ) -> io::Result<()> {
        if self.live {
            for _ in 0..self.progress_lines {
                write!(self.out, "{ERASE_LINE}")?;
            }
        }
        let result = format_line(self.paint(Marker::Result), title, message);
        let running = format_line(self.paint(Marker::Notice), notice_title, notice);
        writeln!(self.out, "{result}")?;
        writeln!(self.out, "{running}")?;
        self.progress_lines = 2;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
