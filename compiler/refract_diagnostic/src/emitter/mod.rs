//! Terminal emitter for diagnostics.
//!
//! Renders diagnostics as human-readable text, optionally colored. When the
//! emitter is given the source the diagnostics refer to (for example, the
//! generated analyzer source that failed to compile), labels are shown as
//! `line:col` with the offending line and a caret underline.

use std::io::Write;

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Label, Severity};

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const NOTE: &str = "\x1b[1;36m"; // Bold cyan
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Source text the diagnostics point into.
struct SourceView<'s> {
    text: &'s str,
    lines: LineOffsetTable,
}

/// Human-readable diagnostic writer.
pub struct TerminalEmitter<'s, W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceView<'s>>,
}

impl<'s, W: Write> TerminalEmitter<'s, W> {
    pub fn new(writer: W, colors: bool) -> Self {
        TerminalEmitter {
            writer,
            colors,
            source: None,
        }
    }

    /// Render labels against `source` (line:col plus snippet).
    #[must_use]
    pub fn with_source(mut self, source: &'s str) -> Self {
        self.source = Some(SourceView {
            text: source,
            lines: LineOffsetTable::build(source),
        });
        self
    }

    /// Consume the emitter, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn paint(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_severity(&mut self, severity: Severity) {
        let color = match severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
            Severity::Note => colors::NOTE,
        };
        self.paint(&severity.to_string(), color);
    }

    fn write_label(&mut self, label: &Label) {
        let marker = if label.is_primary { "-->" } else { "   " };
        let color = if label.is_primary {
            colors::ERROR
        } else {
            colors::SECONDARY
        };

        let located = self.source.as_ref().map(|view| {
            let (line, col) = view.lines.span_start(view.text, label.span);
            let text = view.lines.line_text(view.text, line).unwrap_or("");
            (line, col, text)
        });

        match located {
            Some((line, col, text)) => {
                let _ = writeln!(self.writer, "  {marker} {line}:{col}");
                let gutter = line.to_string();
                let pad = " ".repeat(gutter.len());
                let _ = writeln!(self.writer, "  {pad} |");
                let _ = writeln!(self.writer, "  {gutter} | {text}");

                let indent = " ".repeat(col.saturating_sub(1) as usize);
                let width = label.span.len().max(1) as usize;
                let mark = if label.is_primary { "^" } else { "-" };
                let _ = write!(self.writer, "  {pad} | {indent}");
                self.paint(&mark.repeat(width), color);
                let _ = write!(self.writer, " ");
                self.paint(&label.message, color);
                let _ = writeln!(self.writer);
            }
            None => {
                let _ = write!(self.writer, "  {marker} {:?}: ", label.span);
                self.paint(&label.message, color);
                let _ = writeln!(self.writer);
            }
        }
    }

    /// Emit a single diagnostic.
    pub fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: severity [CODE]: message
        self.write_severity(diagnostic.severity);
        let _ = write!(self.writer, " [{}]: ", diagnostic.code);
        self.paint(&diagnostic.message, colors::BOLD);
        let _ = writeln!(self.writer);

        for label in &diagnostic.labels {
            self.write_label(label);
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.paint("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }

        for suggestion in &diagnostic.suggestions {
            let _ = write!(self.writer, "  = ");
            self.paint("help", colors::HELP);
            let _ = writeln!(self.writer, ": {suggestion}");
        }

        let _ = writeln!(self.writer);
    }

    /// Emit a summary of errors/warnings.
    pub fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        if error_count > 0 {
            self.paint("error", colors::ERROR);
            let _ = write!(
                self.writer,
                ": aborting due to {error_count} previous error{}",
                plural_s(error_count)
            );
            if warning_count > 0 {
                let _ = write!(
                    self.writer,
                    "; {warning_count} warning{} emitted",
                    plural_s(warning_count)
                );
            }
            let _ = writeln!(self.writer);
        } else if warning_count > 0 {
            self.paint("warning", colors::WARNING);
            let _ = writeln!(
                self.writer,
                ": {warning_count} warning{} emitted",
                plural_s(warning_count)
            );
        }
    }

    pub fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}
