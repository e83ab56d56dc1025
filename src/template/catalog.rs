// ABOUTME: Static catalogue of commonly available template variables
// ABOUTME: Documentation data for editors, never derived from scanning a template

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VariableDoc {
    pub path: &'static str,
    pub description: &'static str,
}

const fn doc(path: &'static str, description: &'static str) -> VariableDoc {
    VariableDoc { path, description }
}

static AVAILABLE_VARIABLES: &[VariableDoc] = &[
    doc("dossier.numero", "Numéro du dossier"),
    doc("dossier.intitule", "Intitulé du dossier"),
    doc("dossier.type", "Type de dossier (VENTE, PROCURATION, ...)"),
    doc("dossier.statut", "Statut du dossier"),
    doc("dossier.date_ouverture", "Date d'ouverture (JJ/MM/AAAA)"),
    doc("dossier.date_cloture", "Date de clôture (JJ/MM/AAAA)"),
    doc("dossier.montant_acte", "Montant de l'acte"),
    doc("dossier.description", "Description libre du dossier"),
    doc("date_jour", "Date du jour (JJ/MM/AAAA)"),
    doc("clients", "Toutes les parties, dans l'ordre de rattachement"),
    doc("parties.vendeur", "Vendeur(s)"),
    doc("parties.acquereur", "Acquéreur(s)"),
    doc("parties.mandant", "Mandant(s) d'une procuration"),
    doc("parties.mandataire", "Mandataire(s) d'une procuration"),
    doc("parties.bailleur", "Bailleur(s)"),
    doc("parties.preneur", "Preneur(s)"),
];

static CLIENT_FIELDS: &[VariableDoc] = &[
    doc("nom", "Nom ou raison sociale"),
    doc("prenom", "Prénom"),
    doc("nom_complet", "Prénom et nom, ou raison sociale"),
    doc("date_naissance", "Date de naissance (JJ/MM/AAAA)"),
    doc("lieu_naissance", "Lieu de naissance"),
    doc("adresse", "Adresse"),
    doc("email", "Adresse e-mail"),
    doc("telephone", "Téléphone"),
    doc("identifiant_unique", "Identifiant (CNI, NINEA, ...)"),
    doc("type", "PHYSIQUE ou MORALE"),
    doc("role", "Rôle tel que saisi"),
];

pub fn available_variables() -> &'static [VariableDoc] {
    AVAILABLE_VARIABLES
}

/// Fields of each entry in `clients` and `parties.<role>`
pub fn client_fields() -> &'static [VariableDoc] {
    CLIENT_FIELDS
}

/// Description of a catalogued path, or of a client field reached through
/// `clients.<n>.<field>` or `parties.<role>.<n>.<field>`
pub fn describe(path: &str) -> Option<&'static str> {
    if let Some(doc) = AVAILABLE_VARIABLES.iter().find(|doc| doc.path == path) {
        return Some(doc.description);
    }

    let segments: Vec<&str> = path.split('.').collect();
    let field = match segments.as_slice() {
        ["clients", index, field] if is_index(index) => field,
        ["parties", _, index, field] if is_index(index) => field,
        _ => return None,
    };

    CLIENT_FIELDS
        .iter()
        .find(|doc| doc.path == *field)
        .map(|doc| doc.description)
}

fn is_index(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

/// Insertable paths for the first party holding `role`
pub fn role_variables(role: &str) -> Vec<String> {
    CLIENT_FIELDS
        .iter()
        .map(|field| format!("parties.{}.0.{}", role, field.path))
        .collect()
}
