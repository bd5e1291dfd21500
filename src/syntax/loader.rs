use crate::constants::errors;
use crate::error::{ErrorType, NavError};
use std::path::Path;
use tree_sitter::Language;

/// Handle to a loaded grammar
pub struct LoadedLanguage {
    pub language: Language,
    pub name: String,
}

impl LoadedLanguage {
    /// Create a LoadedLanguage for a bundled grammar
    pub fn bundled(language: Language, name: &str) -> Self {
        Self {
            language,
            name: name.to_string(),
        }
    }
}

/// Resolves grammars compiled into the binary
#[derive(Debug, Default, Clone, Copy)]
pub struct LanguageLoader;

impl LanguageLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load a language based on file extension
    pub fn load_language_for_file(&self, path: &Path) -> Result<LoadedLanguage, NavError> {
        let extension = path.extension().and_then(|e| e.to_str()).ok_or_else(|| {
            NavError::new(ErrorType::Syntax, "NO_EXTENSION", "File has no extension")
        })?;

        let lang_name = match extension {
            "md" | "markdown" | "mdown" | "mkd" => "markdown",
            _ => {
                return Err(NavError::new(
                    ErrorType::Syntax,
                    "UNKNOWN_EXTENSION",
                    format!("Unknown extension: {}", extension),
                ))
            }
        };

        self.load_language(lang_name)
    }

    /// Load a specific language by name (e.g., "markdown")
    pub fn load_language(&self, lang_name: &str) -> Result<LoadedLanguage, NavError> {
        #[cfg(feature = "treesitter")]
        {
            if lang_name == "markdown" {
                return Ok(LoadedLanguage::bundled(
                    tree_sitter_md::LANGUAGE.into(),
                    "markdown",
                ));
            }
        }

        Err(NavError::new(
            ErrorType::Syntax,
            errors::LANGUAGE_ERROR,
            format!("Language {} not found or feature not enabled", lang_name),
        ))
    }
}
