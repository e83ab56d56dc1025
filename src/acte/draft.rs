// ABOUTME: Act drafts generated from a template and a case context
// ABOUTME: Tracks the BROUILLON -> FINALISE -> SIGNE lifecycle; persistence is up to the caller

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

use super::error::{ActError, Result};
use crate::case::CaseRecord;
use crate::library::ActTemplate;
use crate::template::{extract_variables, render_with_report, CaseContext, ContextBuilder};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ActStatus {
    #[default]
    Brouillon,
    Finalise,
    Signe,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActDraft {
    pub titre: String,
    pub contenu: String,
    pub template_id: Option<u32>,
    pub type_acte: String,
    pub dossier_numero: String,
    pub statut: ActStatus,
    /// Placeholders the case could not fill, in order of appearance
    #[serde(default)]
    pub unresolved: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl ActStatus {
    pub fn next(self) -> Option<ActStatus> {
        match self {
            ActStatus::Brouillon => Some(ActStatus::Finalise),
            ActStatus::Finalise => Some(ActStatus::Signe),
            ActStatus::Signe => None,
        }
    }
}

impl fmt::Display for ActStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActStatus::Brouillon => write!(f, "BROUILLON"),
            ActStatus::Finalise => write!(f, "FINALISE"),
            ActStatus::Signe => write!(f, "SIGNE"),
        }
    }
}

impl ActDraft {
    /// Render `template` against an already built context
    pub fn from_context(template: &ActTemplate, context: &CaseContext) -> Self {
        let outcome = render_with_report(&template.contenu, context);
        let dossier_numero = context.lookup("dossier.numero").unwrap_or_default();

        let titre = if dossier_numero.is_empty() {
            template.nom.clone()
        } else {
            format!("{} - {}", template.nom, dossier_numero)
        };

        let mut unresolved: Vec<String> = Vec::new();
        for placeholder in outcome.unresolved {
            if !unresolved.contains(&placeholder.path) {
                unresolved.push(placeholder.path);
            }
        }

        Self {
            titre,
            contenu: outcome.text,
            template_id: template.id,
            type_acte: template.type_acte.clone(),
            dossier_numero,
            statut: ActStatus::Brouillon,
            unresolved,
            created_at: Utc::now(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }

    /// Move to FINALISE. Refused while placeholders remain unless `force` is set.
    pub fn finalize(&mut self, force: bool) -> Result<()> {
        if !force && !self.is_complete() {
            return Err(ActError::UnresolvedPlaceholders {
                count: self.unresolved.len(),
                paths: self.unresolved.clone(),
            });
        }
        self.transition(ActStatus::Finalise)
    }

    pub fn sign(&mut self) -> Result<()> {
        self.transition(ActStatus::Signe)
    }

    /// Replace the body after manual editing. Only drafts can be edited.
    pub fn edit(&mut self, contenu: impl Into<String>) -> Result<()> {
        if self.statut != ActStatus::Brouillon {
            return Err(ActError::InvalidTransition {
                from: self.statut,
                to: ActStatus::Brouillon,
            });
        }
        self.contenu = contenu.into();
        // Hand edits may fill placeholders in; recount from the text itself
        self.unresolved = extract_variables(&self.contenu);
        Ok(())
    }

    fn transition(&mut self, to: ActStatus) -> Result<()> {
        if self.statut.next() != Some(to) {
            return Err(ActError::InvalidTransition {
                from: self.statut,
                to,
            });
        }
        info!("Act '{}' moved from {} to {}", self.titre, self.statut, to);
        self.statut = to;
        Ok(())
    }
}

/// Build the context for `case` and render `template` into a new draft.
pub fn generate_act(
    template: &ActTemplate,
    case: &CaseRecord,
    builder: &ContextBuilder,
) -> ActDraft {
    let context = builder.build(case);
    ActDraft::from_context(template, &context)
}
