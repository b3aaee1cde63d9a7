//! Ariadne-based rendering of match-check errors.
//!
//! Turns a [`MatchError`] into a formatted, labeled report against the
//! original source text. Output is colorless so snapshots stay stable.

use std::ops::Range;

use ariadne::{Color, Config, Label, Report, ReportKind, Source};

use crate::error::MatchError;

/// Error code per variant, stable across releases.
fn error_code(err: &MatchError) -> &'static str {
    match err {
        MatchError::NonExhaustiveMatch { .. } => "E0301",
        MatchError::PatternDepthExceeded { .. } => "E0302",
    }
}

/// Render one match-check error into a diagnostic string.
pub fn render_diagnostic(error: &MatchError, source: &str, _filename: &str) -> String {
    let config = Config::default().with_color(false);
    let source_len = source.len();

    // Keep spans inside the source and at least one byte wide for ariadne.
    let clamp = |r: Range<usize>| -> Range<usize> {
        let s = r.start.min(source_len);
        let e = r.end.min(source_len).max(s);
        if s == e {
            s..e.saturating_add(1).min(source_len)
        } else {
            s..e
        }
    };

    let code = error_code(error);

    let report = match error {
        MatchError::NonExhaustiveMatch { witness, span } => {
            let range = clamp(span.to_range());
            Report::build(ReportKind::Error, range.clone())
                .with_code(code)
                .with_message(format!("match does not cover `{}`", witness))
                .with_config(config)
                .with_label(
                    Label::new(range)
                        .with_message(format!("`{}` is not matched by any rule", witness))
                        .with_color(Color::Red),
                )
                .with_help(format!(
                    "add a rule for `{}` or a catch-all `_` rule",
                    witness
                ))
                .finish()
        }

        MatchError::PatternDepthExceeded { span } => {
            let range = clamp(span.to_range());
            Report::build(ReportKind::Error, range.clone())
                .with_code(code)
                .with_message("patterns are nested too deeply to analyze")
                .with_config(config)
                .with_label(
                    Label::new(range)
                        .with_message("this match exceeds the checker's nesting limit")
                        .with_color(Color::Red),
                )
                .with_help("flatten the patterns or split the match into stages")
                .finish()
        }
    };

    let mut buf = Vec::new();
    let cache = Source::from(source);
    report
        .write(cache, &mut buf)
        .expect("failed to write diagnostic");
    String::from_utf8(buf).expect("diagnostic output should be valid UTF-8")
}
