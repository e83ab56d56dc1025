// ABOUTME: Case context construction from materialized dossier snapshots
// ABOUTME: Groups attached clients by normalized role and formats dates for act text

use chrono::{Local, NaiveDate};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value as JsonValue};
use tracing::{debug, warn};

use super::error::{Result, TemplateError};
use super::path::{self, is_segment_char, Resolution, VariablePath};
use crate::case::{Amount, CaseRecord, Client, Dossier, PartyAttachment};

/// Day/month/year, as written in French legal acts
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Top-level keys owned by the builder; office variables cannot shadow them.
pub const RESERVED_NAMESPACES: [&str; 4] = ["dossier", "clients", "parties", "date_jour"];

/// Role key used when an attachment's label is blank
pub const UNNAMED_ROLE: &str = "autre";

/// Render-scoped, immutable snapshot of one case.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CaseContext {
    root: JsonValue,
}

#[derive(Debug, Clone, Default)]
pub struct ContextBuilder {
    today: Option<NaiveDate>,
    variables: IndexMap<String, String>,
}

impl CaseContext {
    /// Wrap an arbitrary nested value, e.g. a context prepared elsewhere
    pub fn from_json(root: JsonValue) -> Self {
        Self { root }
    }

    pub fn as_json(&self) -> &JsonValue {
        &self.root
    }

    pub fn resolve(&self, path: &VariablePath) -> Resolution<'_> {
        path.resolve(&self.root)
    }

    /// Substitution text for `path`, if it names a scalar
    pub fn lookup(&self, path: &str) -> Option<String> {
        path::resolve(path, &self.root).into_text().ok()
    }

    /// Clients attached under a normalized role, in attachment order
    pub fn parties(&self, role: &str) -> &[JsonValue] {
        self.root
            .get("parties")
            .and_then(|parties| parties.get(role))
            .and_then(JsonValue::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Normalized roles present in the case, in first-attachment order
    pub fn roles(&self) -> Vec<String> {
        self.root
            .get("parties")
            .and_then(JsonValue::as_object)
            .map(|parties| parties.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.root).map_err(TemplateError::JsonError)
    }
}

impl ContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin `date_jour` instead of reading the local clock
    pub fn with_date(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Add an office-level top-level variable such as `ville_signature`
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn with_variables<I, K, V>(mut self, variables: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.variables
            .extend(variables.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Build the context. Performs no I/O and never fails on incomplete data.
    pub fn build(&self, case: &CaseRecord) -> CaseContext {
        let today = self.today.unwrap_or_else(|| Local::now().date_naive());

        let mut clients = Vec::with_capacity(case.parties.len());
        let mut parties: IndexMap<String, Vec<JsonValue>> = IndexMap::new();

        for attachment in &case.parties {
            let client = client_json(attachment);
            parties
                .entry(normalize_role(&attachment.role))
                .or_default()
                .push(client.clone());
            clients.push(client);
        }

        let mut root = Map::new();
        root.insert("dossier".to_string(), dossier_json(&case.dossier));
        root.insert("clients".to_string(), JsonValue::Array(clients));
        root.insert(
            "parties".to_string(),
            JsonValue::Object(
                parties
                    .into_iter()
                    .map(|(role, members)| (role, JsonValue::Array(members)))
                    .collect(),
            ),
        );
        root.insert(
            "date_jour".to_string(),
            JsonValue::String(today.format(DATE_FORMAT).to_string()),
        );

        for (key, value) in &self.variables {
            if RESERVED_NAMESPACES.contains(&key.as_str()) {
                warn!("Ignoring office variable '{}': name is reserved", key);
                continue;
            }
            if key.is_empty() || !key.chars().all(is_segment_char) {
                warn!("Ignoring office variable '{}': not addressable from a template", key);
                continue;
            }
            root.insert(key.clone(), JsonValue::String(value.clone()));
        }

        debug!(
            "Built context for dossier '{}' with {} clients",
            case.dossier.numero.as_deref().unwrap_or_default(),
            case.parties.len()
        );

        CaseContext::from_json(JsonValue::Object(root))
    }
}

/// Build a context dated today with no office variables.
pub fn build_context(case: &CaseRecord) -> CaseContext {
    ContextBuilder::new().build(case)
}

/// Turn a free-form role label into a context key.
///
/// Trims, lower-cases and joins whitespace runs with `_`. French accented
/// letters are folded to ASCII and any other character outside
/// `[a-z0-9_]` becomes `_`, so "Acquéreur" and "acquereur" share a group.
pub fn normalize_role(label: &str) -> String {
    let joined = label.split_whitespace().collect::<Vec<_>>().join("_");

    let mut key = String::with_capacity(joined.len());
    for c in joined.to_lowercase().chars() {
        match c {
            c if is_segment_char(c) => key.push(c),
            'à' | 'â' | 'ä' | 'á' => key.push('a'),
            'é' | 'è' | 'ê' | 'ë' => key.push('e'),
            'î' | 'ï' | 'í' => key.push('i'),
            'ô' | 'ö' | 'ó' => key.push('o'),
            'ù' | 'û' | 'ü' | 'ú' => key.push('u'),
            'ç' => key.push('c'),
            'ÿ' => key.push('y'),
            'œ' => key.push_str("oe"),
            'æ' => key.push_str("ae"),
            _ => key.push('_'),
        }
    }

    if key.is_empty() {
        UNNAMED_ROLE.to_string()
    } else {
        key
    }
}

fn format_date(date: Option<NaiveDate>) -> Option<String> {
    date.map(|d| d.format(DATE_FORMAT).to_string())
}

fn text_or_empty(value: &Option<String>) -> JsonValue {
    JsonValue::String(value.clone().unwrap_or_default())
}

fn text_or_null(value: &Option<String>) -> JsonValue {
    value
        .as_ref()
        .map(|s| JsonValue::String(s.clone()))
        .unwrap_or(JsonValue::Null)
}

fn dossier_json(dossier: &Dossier) -> JsonValue {
    let montant = match &dossier.montant_acte {
        Some(Amount::Number(n)) => JsonValue::Number(n.clone()),
        Some(Amount::Formatted(s)) => JsonValue::String(s.clone()),
        None => JsonValue::Null,
    };

    let mut map = Map::new();
    map.insert("numero".to_string(), text_or_empty(&dossier.numero));
    map.insert("intitule".to_string(), text_or_empty(&dossier.intitule));
    map.insert("type".to_string(), text_or_empty(&dossier.type_dossier));
    map.insert("statut".to_string(), text_or_empty(&dossier.statut));
    map.insert(
        "date_ouverture".to_string(),
        text_or_empty(&format_date(dossier.date_ouverture)),
    );
    map.insert(
        "date_cloture".to_string(),
        text_or_empty(&format_date(dossier.date_cloture)),
    );
    map.insert("montant_acte".to_string(), montant);
    map.insert("description".to_string(), text_or_empty(&dossier.description));
    JsonValue::Object(map)
}

fn client_json(attachment: &PartyAttachment) -> JsonValue {
    let client: &Client = &attachment.client;

    let mut map = Map::new();
    map.insert("nom".to_string(), JsonValue::String(client.nom.clone()));
    map.insert("prenom".to_string(), text_or_null(&client.prenom));
    map.insert(
        "nom_complet".to_string(),
        JsonValue::String(client.nom_complet()),
    );
    map.insert(
        "date_naissance".to_string(),
        text_or_null(&format_date(client.date_naissance)),
    );
    map.insert("lieu_naissance".to_string(), text_or_null(&client.lieu_naissance));
    map.insert("adresse".to_string(), text_or_null(&client.adresse));
    map.insert("email".to_string(), text_or_null(&client.email));
    map.insert("telephone".to_string(), text_or_null(&client.telephone));
    map.insert(
        "identifiant_unique".to_string(),
        text_or_null(&client.identifiant_unique),
    );
    map.insert("type".to_string(), JsonValue::String(client.kind.to_string()));
    map.insert("role".to_string(), JsonValue::String(attachment.role.trim().to_string()));
    JsonValue::Object(map)
}
