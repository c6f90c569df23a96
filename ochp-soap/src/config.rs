//! Output configuration

use xmltree::EmitterConfig;

/// How encoded documents are laid out
///
/// # Default
/// Compact output with an XML declaration, which is what clearing houses
/// expect on the wire. Enable `pretty` for logging or debugging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterConfig {
    pub pretty: bool,
    pub indent: String,
    pub xml_declaration: bool,
    pub line_separator: String,
}

impl WriterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indented output with two spaces
    pub fn pretty() -> Self {
        Self::default().with_pretty(true)
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    pub fn with_xml_declaration(mut self, xml_declaration: bool) -> Self {
        self.xml_declaration = xml_declaration;
        self
    }

    pub fn with_line_separator(mut self, line_separator: impl Into<String>) -> Self {
        self.line_separator = line_separator.into();
        self
    }

    pub fn emitter_config(&self) -> EmitterConfig {
        EmitterConfig::new()
            .perform_indent(self.pretty)
            .indent_string(self.indent.clone())
            .line_separator(self.line_separator.clone())
            .write_document_declaration(self.xml_declaration)
            .normalize_empty_elements(true)
    }
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            indent: "  ".to_string(),
            xml_declaration: true,
            line_separator: "\n".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_compact() {
        let config = WriterConfig::default();
        assert!(!config.pretty);
        assert!(config.xml_declaration);
        assert!(!config.emitter_config().perform_indent);
    }

    #[test]
    fn test_builder() {
        let config = WriterConfig::pretty()
            .with_indent("\t")
            .with_xml_declaration(false)
            .with_line_separator("\r\n");
        let emitter = config.emitter_config();
        assert!(emitter.perform_indent);
        assert_eq!(emitter.indent_string, "\t");
        assert_eq!(emitter.line_separator, "\r\n");
        assert!(!emitter.write_document_declaration);
    }
}
