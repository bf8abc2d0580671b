use crossterm::style::{Color, Stylize};
use std::io::{self, IsTerminal, Stderr, Stdout, Write};

/// Operator-facing output, modelled on WP-CLI's log/success/warning/error.
///
/// Plain lines and successes go to `out`; warnings and errors go to `err`.
/// Every write reports failure, so a closed pipe stops the command.
pub struct Console<O: Write = Stdout, E: Write = Stderr> {
    out: O,
    err: E,
    color: bool,
}

impl Console<Stdout, Stderr> {
    /// Console on the process streams. Colour is only used on a terminal.
    pub fn stdio(color: bool) -> Self {
        let color = color && io::stdout().is_terminal() && io::stderr().is_terminal();
        Self::new(io::stdout(), io::stderr(), color)
    }
}

impl<O: Write, E: Write> Console<O, E> {
    pub fn new(out: O, err: E, color: bool) -> Self {
        Self { out, err, color }
    }

    pub fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }

    fn label(&self, label: &str, color: Color) -> String {
        if self.color {
            label.with(color).bold().to_string()
        } else {
            label.to_string()
        }
    }

    pub fn log(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", message)
    }

    pub fn success(&mut self, message: &str) -> io::Result<()> {
        let label = self.label("Success:", Color::Green);
        writeln!(self.out, "{} {}", label, message)
    }

    pub fn warning(&mut self, message: &str) -> io::Result<()> {
        let label = self.label("Warning:", Color::Yellow);
        writeln!(self.err, "{} {}", label, message)
    }

    pub fn error(&mut self, message: &str) -> io::Result<()> {
        let label = self.label("Error:", Color::Red);
        writeln!(self.err, "{} {}", label, message)
    }

    /// Push buffered output through, surfacing any pending write error
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_streams() {
        let mut console = Console::new(Vec::new(), Vec::new(), false);
        console.log("plain").unwrap();
        console.success("done").unwrap();
        console.warning("careful").unwrap();
        console.error("broken").unwrap();

        let (out, err) = console.into_parts();
        assert_eq!(String::from_utf8(out).unwrap(), "plain\nSuccess: done\n");
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "Warning: careful\nError: broken\n"
        );
    }

    #[test]
    fn test_color_wraps_label_only() {
        let mut console = Console::new(Vec::new(), Vec::new(), true);
        console.success("done").unwrap();
        let (out, _) = console.into_parts();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("\u{1b}["));
        assert!(out.ends_with(" done\n"));
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_reported() {
        let mut console = Console::new(ClosedPipe, Vec::new(), false);
        let error = console.log("lost").unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::BrokenPipe);
        assert!(console.success("lost").is_err());
        assert!(console.warning("still visible").is_ok());
    }
}
