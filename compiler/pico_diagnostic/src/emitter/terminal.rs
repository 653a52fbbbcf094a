//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.
//! Given the source text, labels render as the offending line with a caret
//! underline; without it they fall back to raw byte ranges.

use std::io::{self, Write};

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Label, Severity};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const GUTTER: &str = "\x1b[1;34m"; // Bold blue
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

/// Color output mode for the terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => Err(format!(
                "invalid color mode `{other}` (expected auto, always, or never)"
            )),
        }
    }
}

/// Source text borrowed for snippet rendering.
struct SourceContext<'src> {
    text: &'src str,
    lines: LineOffsetTable,
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<'src, W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceContext<'src>>,
    file_path: Option<String>,
}

impl<'src, W: Write> TerminalEmitter<'src, W> {
    /// Create an emitter; `is_tty` resolves [`ColorMode::Auto`].
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
            file_path: None,
        }
    }

    /// Render labels against `source` (line, column, snippet, caret).
    #[must_use]
    pub fn with_source(mut self, source: &'src str) -> Self {
        self.source = Some(SourceContext {
            text: source,
            lines: LineOffsetTable::build(source),
        });
        self
    }

    /// File name shown in the `-->` location line.
    #[must_use]
    pub fn with_file_path(mut self, path: impl Into<String>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Consume the emitter and hand back its writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn severity_color(severity: Severity) -> &'static str {
        match severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
        }
    }

    fn write_header(&mut self, diagnostic: &Diagnostic) {
        let color = Self::severity_color(diagnostic.severity);
        self.write_colored(&diagnostic.severity.to_string(), color);
        if self.colors {
            let _ = write!(
                self.writer,
                "{}[{}]{}",
                colors::BOLD,
                diagnostic.code,
                colors::RESET
            );
        } else {
            let _ = write!(self.writer, "[{}]", diagnostic.code);
        }
        let _ = writeln!(self.writer, ": {}", diagnostic.message);
    }

    /// Labels without source context: `--> 21..22: message`.
    fn write_labels_raw(&mut self, diagnostic: &Diagnostic) {
        for label in &diagnostic.labels {
            let marker = if label.is_primary { "-->" } else { "   " };
            let _ = write!(self.writer, "  {marker} {:?}: ", label.span);
            let color = if label.is_primary {
                Self::severity_color(diagnostic.severity)
            } else {
                colors::GUTTER
            };
            self.write_colored(&label.message, color);
            let _ = writeln!(self.writer);
        }
    }

    fn write_labels_with_source(&mut self, diagnostic: &Diagnostic, ctx: &SourceContext<'_>) {
        let located: Vec<(&Label, usize, usize)> = diagnostic
            .labels
            .iter()
            .map(|label| {
                let (line, col) = ctx.lines.offset_to_line_col(ctx.text, label.span.start);
                (label, line, col)
            })
            .collect();

        let gutter = located
            .iter()
            .map(|&(_, line, _)| line.to_string().len())
            .max()
            .unwrap_or(1);
        let pad = " ".repeat(gutter);

        let location = located
            .iter()
            .find(|(label, _, _)| label.is_primary)
            .or(located.first());
        if let Some(&(_, line, col)) = location {
            let path = self.file_path.clone().unwrap_or_else(|| "<input>".into());
            let _ = write!(self.writer, "{pad}");
            self.write_colored("-->", colors::GUTTER);
            let _ = writeln!(self.writer, " {path}:{line}:{col}");
        }

        self.write_gutter(&pad, None);
        for &(label, line, col) in &located {
            let text = ctx.lines.line_text(ctx.text, line);
            self.write_gutter(&format!("{line:>gutter$}"), Some(text));

            let indent = caret_indent(text, col);
            let width = underline_width(ctx, text, col, label);
            let (mark, color) = if label.is_primary {
                ('^', Self::severity_color(diagnostic.severity))
            } else {
                ('-', colors::GUTTER)
            };
            let underline = mark.to_string().repeat(width);

            self.write_colored(&format!("{pad} |"), colors::GUTTER);
            let _ = write!(self.writer, " {indent}");
            self.write_colored(&underline, color);
            if !label.message.is_empty() {
                let _ = write!(self.writer, " ");
                self.write_colored(&label.message, color);
            }
            let _ = writeln!(self.writer);
        }
        self.write_gutter(&pad, None);
    }

    /// `NN | text`, or a bare ` |` line when `text` is `None`.
    fn write_gutter(&mut self, number: &str, text: Option<&str>) {
        self.write_colored(&format!("{number} |"), colors::GUTTER);
        match text {
            Some(text) => {
                let _ = writeln!(self.writer, " {text}");
            }
            None => {
                let _ = writeln!(self.writer);
            }
        }
    }
}

impl TerminalEmitter<'_, io::Stderr> {
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

/// Whitespace reaching column `col` of `line`; tabs are kept so the caret
/// lines up with what the terminal shows.
fn caret_indent(line: &str, col: usize) -> String {
    line.chars()
        .take(col.saturating_sub(1))
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect()
}

/// Caret count for a label: the span's characters on this line, at least one.
fn underline_width(ctx: &SourceContext<'_>, line: &str, col: usize, label: &Label) -> usize {
    if label.span.is_empty() {
        return 1;
    }
    let end = (label.span.end as usize).min(ctx.text.len());
    let chars = ctx
        .text
        .get(label.span.start as usize..end)
        .map_or(label.span.len() as usize, |s| {
            s.chars().take_while(|&c| c != '\n').count()
        });
    let remaining = line.chars().count().saturating_sub(col - 1);
    chars.min(remaining).max(1)
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.write_header(diagnostic);

        match self.source.take() {
            Some(ctx) if !diagnostic.labels.is_empty() => {
                self.write_labels_with_source(diagnostic, &ctx);
                self.source = Some(ctx);
            }
            other => {
                self.source = other;
                self.write_labels_raw(diagnostic);
            }
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }
        for suggestion in &diagnostic.suggestions {
            let _ = write!(self.writer, "  = ");
            self.write_colored("help", colors::HELP);
            let _ = writeln!(self.writer, ": {suggestion}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        if error_count > 0 {
            self.write_colored("error", colors::ERROR);
            let error_part = if error_count == 1 {
                "previous error".to_string()
            } else {
                format!("{error_count} previous errors")
            };
            if warning_count > 0 {
                let _ = writeln!(
                    self.writer,
                    ": aborting due to {error_part}; {warning_count} warning{} emitted",
                    plural_s(warning_count)
                );
            } else {
                let _ = writeln!(self.writer, ": aborting due to {error_part}");
            }
        } else if warning_count > 0 {
            self.write_colored("warning", colors::WARNING);
            let _ = writeln!(
                self.writer,
                ": {warning_count} warning{} emitted",
                plural_s(warning_count)
            );
        }
    }
}
