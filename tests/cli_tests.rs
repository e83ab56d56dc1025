// ABOUTME: Integration tests for the CLI application
// ABOUTME: Runs the acta binary against temporary case and template files

use std::path::Path;
use std::process::{Command, Output};
use tokio::fs;

mod common;
use common::{standard_case, TestEnvironment};

/// Run acta inside `dir` with a clean environment so no user config leaks in
fn acta(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_acta"))
        .args(args)
        .current_dir(dir)
        .env("HOME", dir)
        .env_remove("ACTA_LOG_LEVEL")
        .env_remove("ACTA_LOG_FORMAT")
        .env_remove("ACTA_VILLE_SIGNATURE")
        .env_remove("ACTA_OUTPUT_DIR")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute acta")
}

#[tokio::test]
async fn test_cli_help_command() {
    let env = TestEnvironment::new();
    let output = acta(env.path(), &["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("render"));
    assert!(stdout.contains("check"));
}

#[tokio::test]
async fn test_cli_version_command() {
    let env = TestEnvironment::new();
    let output = acta(env.path(), &["--version"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[tokio::test]
async fn test_cli_render_to_stdout() {
    let env = TestEnvironment::new();
    let case_file = env.create_case_file("dossier", &standard_case()).await;
    let template_file = env
        .create_template_file(
            "vente",
            "Dossier {{dossier.numero}} à {{ville_signature}}: {{parties.vendeur.0.nom_complet}}",
        )
        .await;

    let output = acta(
        env.path(),
        &[
            "render",
            template_file.to_str().unwrap(),
            "--case",
            case_file.to_str().unwrap(),
            "--var",
            "ville_signature=Dakar",
        ],
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim_end(), "Dossier 2025-001 à Dakar: Jean Dupont");
}

#[tokio::test]
async fn test_cli_render_json_to_file() {
    let env = TestEnvironment::new();
    let case_file = env.create_case_file("dossier", &standard_case()).await;
    let library_file = env
        .create_library_file(
            "modeles",
            &[
                (1, "Vente", "Prix: {{dossier.montant_acte}}"),
                (2, "Quittance", "Reçu de {{parties.acquereur.0.nom}}"),
            ],
        )
        .await;
    let output_file = env.output_file("actes/quittance.json");

    let output = acta(
        env.path(),
        &[
            "render",
            library_file.to_str().unwrap(),
            "--case",
            case_file.to_str().unwrap(),
            "-t",
            "2",
            "--format",
            "json",
            "--output",
            output_file.to_str().unwrap(),
        ],
    );

    assert!(output.status.success());
    let content = fs::read_to_string(&output_file).await.unwrap();
    let act: serde_json::Value = serde_json::from_str(&content).unwrap();

    assert_eq!(act["titre"], "Quittance - 2025-001");
    assert_eq!(act["contenu"], "Reçu de SCI Les Almadies");
    assert_eq!(act["statut"], "BROUILLON");
    assert_eq!(act["template_id"], 2);
}

#[tokio::test]
async fn test_cli_variables_command() {
    let env = TestEnvironment::new();
    let template_file = env
        .create_template_file("note", "{{dossier.numero}} {{parties.vendeur.0.nom}} {{dossier.numero}}")
        .await;

    let output = acta(env.path(), &["variables", template_file.to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("dossier.numero"));
    assert!(lines[1].starts_with("parties.vendeur.0.nom"));
}

#[tokio::test]
async fn test_cli_check_strict_fails_on_unresolved() {
    let env = TestEnvironment::new();
    let case_file = env.create_case_file("dossier", &standard_case()).await;
    let template_file = env
        .create_template_file("bail", "Preneur: {{parties.preneur.0.nom}}")
        .await;

    let lenient = acta(
        env.path(),
        &[
            "check",
            template_file.to_str().unwrap(),
            "--case",
            case_file.to_str().unwrap(),
        ],
    );
    assert!(lenient.status.success());
    let stdout = String::from_utf8_lossy(&lenient.stdout);
    assert!(stdout.contains("✗ parties.preneur.0.nom"));

    let strict = acta(
        env.path(),
        &[
            "check",
            template_file.to_str().unwrap(),
            "--case",
            case_file.to_str().unwrap(),
            "--strict",
        ],
    );
    assert!(!strict.status.success());
}

#[tokio::test]
async fn test_cli_context_command() {
    let env = TestEnvironment::new();
    let case_file = env.create_case_file("dossier", &standard_case()).await;

    let output = acta(
        env.path(),
        &["context", "--case", case_file.to_str().unwrap()],
    );

    assert!(output.status.success());
    let context: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(context["dossier"]["numero"], "2025-001");
    assert_eq!(context["parties"]["vendeur"][0]["nom_complet"], "Jean Dupont");
    assert_eq!(context["clients"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_cli_uses_config_file() {
    let env = TestEnvironment::new();
    let case_file = env.create_case_file("dossier", &standard_case()).await;
    let template_file = env
        .create_template_file("signature", "Fait à {{ville_signature}}")
        .await;
    fs::write(
        env.path().join("acta.yaml"),
        "office:\n  ville_signature: Thiès\n",
    )
    .await
    .unwrap();

    let output = acta(
        env.path(),
        &[
            "render",
            template_file.to_str().unwrap(),
            "--case",
            case_file.to_str().unwrap(),
        ],
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim_end(), "Fait à Thiès");
}
