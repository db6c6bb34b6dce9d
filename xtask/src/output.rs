//! Terminal output for xtask commands.
//!
//! Everything goes through `anstream`, which drops the color codes when
//! stdout is not a terminal.

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Prints progress unless the command runs with `--quiet`.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    quiet: bool,
}

impl Reporter {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// A labelled fact, e.g. `Table: Adverts`.
    pub fn field(&self, label: &str, value: impl std::fmt::Display) {
        if !self.quiet {
            anstream::println!("{BOLD}{label}:{RESET} {value}");
        }
    }

    pub fn step(&self, text: &str) {
        if !self.quiet {
            anstream::println!("{CYAN}==>{RESET} {text}");
        }
    }

    pub fn done(&self, text: &str) {
        if !self.quiet {
            anstream::println!("{GREEN}{text}{RESET}");
        }
    }

    /// Plan lines, colored by their leading marker.
    pub fn plan(&self, lines: &[String]) {
        if self.quiet {
            return;
        }
        for line in lines {
            anstream::println!("    {}{line}{RESET}", marker_color(line));
        }
    }
}

/// Always printed, even with `--quiet`.
pub fn report_error(err: &dyn std::error::Error) {
    anstream::eprintln!("{RED}{BOLD}error:{RESET} {err}");
}

fn marker_color(line: &str) -> &'static str {
    match line.chars().next() {
        Some('+') => GREEN,
        Some('-') => RED,
        Some('~') => YELLOW,
        _ => "",
    }
}
