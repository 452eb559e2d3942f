use std::path::Path;

use serde::{Deserialize, Serialize};

/// Supported config file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    Json,
    Yaml,
    Yml,
}

impl Default for FileFormat {
    fn default() -> Self {
        FileFormat::Json
    }
}

impl FileFormat {
    pub fn extension(self) -> &'static str {
        match self {
            FileFormat::Json => "json",
            FileFormat::Yaml => "yaml",
            FileFormat::Yml => "yml",
        }
    }

    /// Detect the format from a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("json") => Some(FileFormat::Json),
            Some("yaml") => Some(FileFormat::Yaml),
            Some("yml") => Some(FileFormat::Yml),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FileFormat;
    use rstest::rstest;
    use std::path::Path;

    #[test]
    fn default_is_json() {
        assert_eq!(FileFormat::default(), FileFormat::Json);
    }

    #[rstest]
    #[case("tessera.json", Some(FileFormat::Json))]
    #[case("conf/tessera.yaml", Some(FileFormat::Yaml))]
    #[case("tessera.yml", Some(FileFormat::Yml))]
    #[case("tessera.toml", None)]
    #[case("tessera", None)]
    fn detects_format_from_extension(#[case] path: &str, #[case] expected: Option<FileFormat>) {
        assert_eq!(FileFormat::from_path(Path::new(path)), expected);
    }
}
