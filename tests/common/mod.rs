// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Builds case and template library files inside temporary directories

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tokio::fs;

pub struct TestCaseBuilder {
    numero: String,
    intitule: String,
    montant_acte: Option<String>,
    parties: Vec<TestParty>,
}

pub struct TestParty {
    pub role: String,
    pub prenom: Option<String>,
    pub nom: String,
    pub kind: String,
    pub adresse: Option<String>,
}

impl TestCaseBuilder {
    pub fn new(numero: &str, intitule: &str) -> Self {
        Self {
            numero: numero.to_string(),
            intitule: intitule.to_string(),
            montant_acte: None,
            parties: Vec::new(),
        }
    }

    pub fn with_montant(mut self, montant: &str) -> Self {
        self.montant_acte = Some(montant.to_string());
        self
    }

    pub fn with_person(mut self, role: &str, prenom: &str, nom: &str) -> Self {
        self.parties.push(TestParty {
            role: role.to_string(),
            prenom: Some(prenom.to_string()),
            nom: nom.to_string(),
            kind: "PHYSIQUE".to_string(),
            adresse: None,
        });
        self
    }

    pub fn with_company(mut self, role: &str, name: &str) -> Self {
        self.parties.push(TestParty {
            role: role.to_string(),
            prenom: None,
            nom: name.to_string(),
            kind: "MORALE".to_string(),
            adresse: None,
        });
        self
    }

    pub fn with_address(mut self, adresse: &str) -> Self {
        if let Some(party) = self.parties.last_mut() {
            party.adresse = Some(adresse.to_string());
        }
        self
    }

    pub fn generate_yaml(&self) -> String {
        let mut yaml = String::from("dossier:\n");
        yaml.push_str(&format!("  numero: \"{}\"\n", self.numero));
        yaml.push_str(&format!("  intitule: \"{}\"\n", self.intitule));
        yaml.push_str("  type: VENTE\n");
        yaml.push_str("  statut: OUVERT\n");
        yaml.push_str("  date_ouverture: 2025-01-15\n");
        if let Some(montant) = &self.montant_acte {
            yaml.push_str(&format!("  montant_acte: {}\n", montant));
        }

        yaml.push_str("parties:\n");
        for party in &self.parties {
            yaml.push_str(&format!("  - role: \"{}\"\n", party.role));
            yaml.push_str("    client:\n");
            yaml.push_str(&format!("      type: {}\n", party.kind));
            yaml.push_str(&format!("      nom: \"{}\"\n", party.nom));
            if let Some(prenom) = &party.prenom {
                yaml.push_str(&format!("      prenom: \"{}\"\n", prenom));
            }
            if let Some(adresse) = &party.adresse {
                yaml.push_str(&format!("      adresse: \"{}\"\n", adresse));
            }
        }

        yaml
    }

    pub async fn write_to_file(&self, path: &Path) -> std::io::Result<()> {
        fs::write(path, self.generate_yaml()).await
    }
}

pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn output_file(&self, name: &str) -> PathBuf {
        self.path().join(name)
    }

    pub async fn create_case_file(&self, name: &str, builder: &TestCaseBuilder) -> PathBuf {
        let case_file = self.path().join(format!("{}.yaml", name));
        builder
            .write_to_file(&case_file)
            .await
            .expect("Failed to write case file");
        case_file
    }

    /// Write a plain template body, named after the file stem when loaded
    pub async fn create_template_file(&self, name: &str, contenu: &str) -> PathBuf {
        let template_file = self.path().join(format!("{}.txt", name));
        fs::write(&template_file, contenu)
            .await
            .expect("Failed to write template file");
        template_file
    }

    /// Write a library with one entry per `(id, nom, contenu)`
    pub async fn create_library_file(&self, name: &str, templates: &[(u32, &str, &str)]) -> PathBuf {
        let mut yaml = String::from("templates:\n");
        for (id, nom, contenu) in templates {
            yaml.push_str(&format!("  - id: {}\n", id));
            yaml.push_str(&format!("    nom: \"{}\"\n", nom));
            yaml.push_str("    type_acte: VENTE\n");
            yaml.push_str(&format!("    contenu: \"{}\"\n", contenu));
        }

        let library_file = self.path().join(format!("{}.yaml", name));
        fs::write(&library_file, yaml)
            .await
            .expect("Failed to write library file");
        library_file
    }
}

pub fn standard_case() -> TestCaseBuilder {
    TestCaseBuilder::new("2025-001", "Vente Maison")
        .with_person("VENDEUR", "Jean", "Dupont")
        .with_address("12 rue Carnot, Dakar")
        .with_company("Acquéreur", "SCI Les Almadies")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_builder() {
        let yaml = standard_case().with_montant("15000000").generate_yaml();

        assert!(yaml.contains("numero: \"2025-001\""));
        assert!(yaml.contains("montant_acte: 15000000"));
        assert!(yaml.contains("role: \"VENDEUR\""));
        assert!(yaml.contains("type: MORALE"));
        assert!(yaml.contains("adresse: \"12 rue Carnot, Dakar\""));
    }

    #[test]
    fn test_environment_setup() {
        let env = TestEnvironment::new();
        assert!(env.path().exists());
        assert!(env
            .output_file("acte.txt")
            .to_string_lossy()
            .ends_with("acte.txt"));
    }
}
