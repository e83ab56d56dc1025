// ABOUTME: Fully materialized case records: dossier, clients and their roles
// ABOUTME: Plain data snapshots handed to the context builder, loaded from YAML or JSON

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tokio::fs;
use tracing::debug;

use super::error::{CaseError, Result};

/// A dossier with every party attachment already loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseRecord {
    pub dossier: Dossier,
    /// Attachments in the order they were made
    #[serde(default)]
    pub parties: Vec<PartyAttachment>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dossier {
    #[serde(default)]
    pub numero: Option<String>,
    #[serde(default)]
    pub intitule: Option<String>,
    #[serde(default, rename = "type")]
    pub type_dossier: Option<String>,
    #[serde(default)]
    pub statut: Option<String>,
    #[serde(default)]
    pub date_ouverture: Option<NaiveDate>,
    #[serde(default)]
    pub date_cloture: Option<NaiveDate>,
    #[serde(default)]
    pub montant_acte: Option<Amount>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Monetary amount, either a bare number or text the office already formatted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(serde_json::Number),
    Formatted(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartyAttachment {
    /// Free-form role label as entered, e.g. "Vendeur" or "ACQUEREUR"
    pub role: String,
    pub client: Client,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Client {
    #[serde(default, rename = "type")]
    pub kind: ClientKind,
    #[serde(default)]
    pub nom: String,
    #[serde(default)]
    pub prenom: Option<String>,
    #[serde(default)]
    pub date_naissance: Option<NaiveDate>,
    #[serde(default)]
    pub lieu_naissance: Option<String>,
    #[serde(default)]
    pub adresse: Option<String>,
    #[serde(default)]
    pub telephone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub identifiant_unique: Option<String>,
}

/// Natural person or legal entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ClientKind {
    #[default]
    Physique,
    Morale,
}

impl CaseRecord {
    pub fn new(dossier: Dossier) -> Self {
        Self {
            dossier,
            parties: Vec::new(),
        }
    }

    /// Attach a client under a role, after any existing attachments
    pub fn attach(&mut self, role: impl Into<String>, client: Client) {
        self.parties.push(PartyAttachment {
            role: role.into(),
            client,
        });
    }

    pub fn with_party(mut self, role: impl Into<String>, client: Client) -> Self {
        self.attach(role, client);
        self
    }

    /// Parse a case record from YAML
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(CaseError::YamlError)
    }

    /// Parse a case record from JSON
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(CaseError::JsonError)
    }

    /// Load a case record, choosing JSON for `.json` files and YAML otherwise
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let record = if is_json {
            Self::from_json(&content)?
        } else {
            Self::from_yaml(&content)?
        };

        debug!(
            "Loaded case {} with {} attached parties from {}",
            record.dossier.numero.as_deref().unwrap_or("<sans numéro>"),
            record.parties.len(),
            path.display()
        );

        Ok(record)
    }
}

impl Dossier {
    pub fn new(numero: impl Into<String>, intitule: impl Into<String>) -> Self {
        Self {
            numero: Some(numero.into()),
            intitule: Some(intitule.into()),
            ..Self::default()
        }
    }
}

impl Client {
    pub fn physique(prenom: impl Into<String>, nom: impl Into<String>) -> Self {
        Self {
            kind: ClientKind::Physique,
            nom: nom.into(),
            prenom: Some(prenom.into()),
            ..Self::default()
        }
    }

    pub fn morale(raison_sociale: impl Into<String>) -> Self {
        Self {
            kind: ClientKind::Morale,
            nom: raison_sociale.into(),
            ..Self::default()
        }
    }

    /// "prenom nom" for natural persons, the entity name for legal entities
    pub fn nom_complet(&self) -> String {
        match (self.kind, self.prenom.as_deref().map(str::trim)) {
            (ClientKind::Physique, Some(prenom)) if !prenom.is_empty() => {
                format!("{} {}", prenom, self.nom)
            }
            _ => self.nom.clone(),
        }
    }
}

impl fmt::Display for ClientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientKind::Physique => write!(f, "PHYSIQUE"),
            ClientKind::Morale => write!(f, "MORALE"),
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Number(n) => write!(f, "{}", n),
            Amount::Formatted(s) => f.write_str(s),
        }
    }
}
