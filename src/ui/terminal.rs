//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, NotyposTheme, OutputMode, UserInterface};

/// Terminal UI implementation.
///
/// Status goes to standard output; errors go to standard error.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: NotyposTheme,
    mode: OutputMode,
    color: bool,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode, color: bool) -> Self {
        let theme = if color {
            NotyposTheme::new()
        } else {
            NotyposTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
            color,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn emit(&mut self, text: &str) {
        write!(self.out, "{}", text).ok();
        if !text.ends_with('\n') {
            writeln!(self.out).ok();
        }
        self.out.flush().ok();
    }

    fn use_color(&self) -> bool {
        self.color
    }
}

/// Create the UI for this process.
///
/// Colors are used when standard output is a terminal, `NO_COLOR` is unset
/// and `no_color` is false.
pub fn create_ui(mode: OutputMode, no_color: bool) -> Box<dyn UserInterface> {
    let color = !no_color && should_use_colors();
    Box::new(TerminalUI::new(mode, color))
}
