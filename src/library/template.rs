// ABOUTME: Act templates and the YAML-backed template library
// ABOUTME: Metadata is carried through untouched; only the body is rendered

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info};

use super::error::{LibraryError, Result};
use crate::template::extract_variables;

fn default_type_acte() -> String {
    "AUTRE".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActTemplate {
    /// Absent for ad-hoc bodies loaded from a plain text file
    #[serde(default)]
    pub id: Option<u32>,
    pub nom: String,
    /// Free-form category, e.g. VENTE, PROCURATION, BAIL
    #[serde(default = "default_type_acte")]
    pub type_acte: String,
    #[serde(default)]
    pub description: Option<String>,
    pub contenu: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateLibrary {
    #[serde(default)]
    templates: Vec<ActTemplate>,
}

impl ActTemplate {
    pub fn new(
        id: u32,
        nom: impl Into<String>,
        type_acte: impl Into<String>,
        contenu: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id),
            nom: nom.into(),
            type_acte: type_acte.into(),
            description: None,
            contenu: contenu.into(),
        }
    }

    /// Anonymous template around a bare body
    pub fn from_text(nom: impl Into<String>, contenu: impl Into<String>) -> Self {
        Self {
            id: None,
            nom: nom.into(),
            type_acte: default_type_acte(),
            description: None,
            contenu: contenu.into(),
        }
    }

    /// Paths the body refers to
    pub fn variables(&self) -> Vec<String> {
        extract_variables(&self.contenu)
    }
}

impl TemplateLibrary {
    /// Parse a library from YAML with a top-level `templates:` list
    pub fn from_yaml(content: &str) -> Result<Self> {
        let library: TemplateLibrary =
            serde_yaml::from_str(content).map_err(LibraryError::YamlError)?;
        library.validate_structure()?;
        Ok(library)
    }

    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await?;
        let library = Self::from_yaml(&content)?;
        info!(
            "Loaded {} templates from {}",
            library.templates.len(),
            path.display()
        );
        Ok(library)
    }

    fn validate_structure(&self) -> Result<()> {
        if self.templates.is_empty() {
            return Err(LibraryError::Empty);
        }

        let mut seen = HashSet::new();
        for (index, template) in self.templates.iter().enumerate() {
            let id = template.id.ok_or_else(|| LibraryError::MissingField {
                index,
                field: "id".to_string(),
            })?;
            if template.nom.trim().is_empty() {
                return Err(LibraryError::MissingField {
                    index,
                    field: "nom".to_string(),
                });
            }
            if !seen.insert(id) {
                return Err(LibraryError::DuplicateId { id });
            }
        }

        Ok(())
    }

    pub fn get(&self, id: u32) -> Result<&ActTemplate> {
        self.templates
            .iter()
            .find(|template| template.id == Some(id))
            .ok_or(LibraryError::NotFound { id })
    }

    /// The template to use when the caller gave no id: only valid for single-entry libraries
    pub fn sole(&self) -> Option<&ActTemplate> {
        match self.templates.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    pub fn by_type_acte<'a>(&'a self, type_acte: &'a str) -> impl Iterator<Item = &'a ActTemplate> {
        self.templates
            .iter()
            .filter(move |template| template.type_acte.eq_ignore_ascii_case(type_acte))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActTemplate> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Load a template from disk: a library entry for YAML files, a bare body otherwise.
pub async fn load_template<P: AsRef<Path>>(path: P, id: Option<u32>) -> Result<ActTemplate> {
    let path = path.as_ref();
    let is_library = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| matches!(ext.to_ascii_lowercase().as_str(), "yaml" | "yml"));

    if is_library {
        let library = TemplateLibrary::from_file(path).await?;
        let template = match id {
            Some(id) => library.get(id)?,
            None => library.sole().ok_or(LibraryError::IdRequired {
                count: library.len(),
            })?,
        };
        return Ok(template.clone());
    }

    let contenu = fs::read_to_string(path).await?;
    let nom = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| "modele".to_string());
    debug!("Loaded plain template body '{}' ({} bytes)", nom, contenu.len());
    Ok(ActTemplate::from_text(nom, contenu))
}
