use std::fmt;

#[derive(Debug)]
pub enum ContentsError {
    /// File could not be read (snapshot, label file, caption seeds)
    Io { path: String, source: std::io::Error },

    /// JSON parsing failed
    JsonParse { context: String, source: serde_json::Error },

    /// YAML parsing failed
    YamlParse { context: String, source: serde_yaml::Error },

    /// JSON serialization failed (report output)
    JsonSerialize { context: String, source: serde_json::Error },

    /// File extension is not one of json, yaml, yml
    UnsupportedFormat(String),
}

impl fmt::Display for ContentsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentsError::Io { path, source } => {
                write!(f, "Failed to read {}: {}", path, source)
            }
            ContentsError::JsonParse { context, source } => {
                write!(f, "JSON parse error ({}): {}", context, source)
            }
            ContentsError::YamlParse { context, source } => {
                write!(f, "YAML parse error ({}): {}", context, source)
            }
            ContentsError::JsonSerialize { context, source } => {
                write!(f, "JSON serialize error ({}): {}", context, source)
            }
            ContentsError::UnsupportedFormat(path) => {
                write!(f, "Unsupported file format (expected .json, .yaml or .yml): {}", path)
            }
        }
    }
}

impl std::error::Error for ContentsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ContentsError::Io { source, .. } => Some(source),
            ContentsError::JsonParse { source, .. } => Some(source),
            ContentsError::YamlParse { source, .. } => Some(source),
            ContentsError::JsonSerialize { source, .. } => Some(source),
            ContentsError::UnsupportedFormat(_) => None,
        }
    }
}

/// Serialization format inferred from a file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Yaml,
}

impl FileFormat {
    pub fn from_path(path: &str) -> Result<Self, ContentsError> {
        let ext = std::path::Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match ext.as_deref() {
            Some("json") => Ok(FileFormat::Json),
            Some("yaml") | Some("yml") => Ok(FileFormat::Yaml),
            _ => Err(ContentsError::UnsupportedFormat(path.to_string())),
        }
    }
}

/// Read a file and deserialize it as JSON or YAML depending on its extension.
pub fn read_structured<T: serde::de::DeserializeOwned>(
    path: &str,
    context: &str,
) -> Result<T, ContentsError> {
    let format = FileFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|e| ContentsError::Io {
        path: path.to_string(),
        source: e,
    })?;

    match format {
        FileFormat::Json => serde_json::from_str(&content).map_err(|e| ContentsError::JsonParse {
            context: context.to_string(),
            source: e,
        }),
        FileFormat::Yaml => serde_yaml::from_str(&content).map_err(|e| ContentsError::YamlParse {
            context: context.to_string(),
            source: e,
        }),
    }
}
