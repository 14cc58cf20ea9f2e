pub use qbank_core::format::OutputFormat;

/// Parse `--format`, reusing the core parser so error text stays consistent
pub fn parse_output_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}
