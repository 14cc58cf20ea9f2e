//! Format output dispatch helpers
//!
//! Provides macros to eliminate repetitive format match blocks.

/// Dispatch output by format.
///
/// # Examples
///
/// ```rust,ignore
/// output_by_format!(cli.format,
///     json => { print_json(&report)? },
///     human => { print_human(&report); }
/// );
/// ```
#[macro_export]
macro_rules! output_by_format {
    ($format:expr, json => $json:block, human => $human:block) => {
        match $format {
            $crate::cli::OutputFormat::Json => $json,
            $crate::cli::OutputFormat::Human => $human,
        }
    };
}

/// Print a serializable report as pretty JSON on stdout
pub fn print_json<T: serde::Serialize>(value: &T) -> qbank_core::error::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
