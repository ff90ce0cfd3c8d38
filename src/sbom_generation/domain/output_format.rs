/// Output format understood by the CycloneDX dotnet tool.
///
/// Task inputs are matched case-sensitively against `json`, `xml` and
/// `unsafeJson`. Anything else is not an error: the argument builder falls
/// back to JSON and emits a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// CycloneDX JSON (default)
    #[default]
    Json,
    /// CycloneDX XML
    Xml,
    /// JSON with relaxed escaping
    UnsafeJson,
}

impl OutputFormat {
    /// Parses a task input value. Returns `None` for unknown values.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "json" => Some(OutputFormat::Json),
            "xml" => Some(OutputFormat::Xml),
            "unsafeJson" => Some(OutputFormat::UnsafeJson),
            _ => None,
        }
    }

    /// Command-line flags selecting this format.
    pub fn flags(&self) -> &'static [&'static str] {
        match self {
            OutputFormat::Json => &["--json"],
            OutputFormat::Xml => &["--xml"],
            // Provisional mapping; the tool's CLI has changed this switch before.
            OutputFormat::UnsafeJson => &["--json", "--unsafe"],
        }
    }

    pub fn as_input(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Xml => "xml",
            OutputFormat::UnsafeJson => "unsafeJson",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_input())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_formats() {
        assert_eq!(OutputFormat::parse("json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::parse("xml"), Some(OutputFormat::Xml));
        assert_eq!(
            OutputFormat::parse("unsafeJson"),
            Some(OutputFormat::UnsafeJson)
        );
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(OutputFormat::parse("JSON"), None);
        assert_eq!(OutputFormat::parse("Xml"), None);
        assert_eq!(OutputFormat::parse("unsafejson"), None);
    }

    #[test]
    fn test_parse_unknown_and_empty() {
        assert_eq!(OutputFormat::parse("yaml"), None);
        assert_eq!(OutputFormat::parse(""), None);
        assert_eq!(OutputFormat::parse(" json"), None);
    }

    #[test]
    fn test_flags() {
        assert_eq!(OutputFormat::Json.flags(), &["--json"]);
        assert_eq!(OutputFormat::Xml.flags(), &["--xml"]);
        assert_eq!(OutputFormat::UnsafeJson.flags(), &["--json", "--unsafe"]);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for format in [OutputFormat::Json, OutputFormat::Xml, OutputFormat::UnsafeJson] {
            assert_eq!(OutputFormat::parse(&format.to_string()), Some(format));
        }
    }

    #[test]
    fn test_default_is_json() {
        assert_eq!(OutputFormat::default(), OutputFormat::Json);
    }
}
