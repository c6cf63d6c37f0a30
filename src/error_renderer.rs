//! Error rendering using ariadne
//!
//! Errors that point into the source (unexpected tokens, unexpected end of
//! input) are rendered as annotated snippets. Everything else is a one-line
//! message carrying the error code.

use crate::Error;
use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use std::io::Write;

const SOURCE_ID: &str = "<input>";

/// Render an error for `source` to stderr
///
/// # Example
/// ```no_run
/// use funclang::{Engine, OperatorTable, Runtime, render_error};
///
/// let engine = Engine::new(OperatorTable::standard()).unwrap();
/// let source = "1 + + 2";
/// if let Err(e) = engine.execute(source, &mut Runtime::new()) {
///     render_error(&e, source);
/// }
/// ```
pub fn render_error(error: &Error, source: &str) {
    render_error_to_writer(error, source, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
pub fn render_error_to(error: &Error, source: &str, writer: &mut dyn Write) -> std::io::Result<()> {
    render_error_to_writer(error, source, writer, true)
}

/// Render an error to a String (useful for logs, web UIs, etc.)
pub fn render_error_to_string(error: &Error, source: &str) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, source, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
pub fn render_error_to_string_no_color(error: &Error, source: &str) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, source, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    error: &Error,
    source: &str,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let Some(span) = error.span(source) else {
        return writeln!(writer, "Error[{}]: {}", error.code(), error);
    };

    // Zero-width spans at the end of input are widened to the last character.
    let span = match source.char_indices().last() {
        Some((last, _)) if span.is_empty() && span.start == source.len() => last..source.len(),
        _ => span,
    };

    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    let message = error.to_string();
    let report = Report::build(ReportKind::Error, (SOURCE_ID, span.clone()))
        .with_message(&message)
        .with_config(
            ariadne::Config::default()
                .with_color(use_color)
                .with_index_type(ariadne::IndexType::Byte),
        )
        .with_code(error.code())
        .with_label(
            Label::new((SOURCE_ID, span))
                .with_message(label_for(error))
                .with_color(colors.next()),
        );

    report
        .finish()
        .write((SOURCE_ID, Source::from(source)), &mut *writer)
}

fn label_for(error: &Error) -> &'static str {
    use funclang_core::api::CompilationError;
    match error {
        Error::Compilation(CompilationError::UnexpectedEnd) => "input ends here",
        _ => "not expected here",
    }
}
