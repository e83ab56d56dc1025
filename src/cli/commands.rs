// ABOUTME: Command implementations for the acta CLI
// ABOUTME: Handles render, variables, catalog, check and context commands

use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::config::Config;
use crate::acte::ActDraft;
use crate::case::CaseRecord;
use crate::library::load_template;
use crate::output::{OutputFormat, OutputHandler};
use crate::template::{catalog, check_template, extract_variables, normalize_role, CaseContext};

async fn load_case_context(case_path: &Path, config: &Config) -> Result<CaseContext> {
    let case = CaseRecord::from_file(case_path)
        .await
        .with_context(|| format!("Failed to load case from {}", case_path.display()))?;
    Ok(config.context_builder().build(&case))
}

/// Render a template against a case and emit the act draft
pub async fn render_act(
    template_path: PathBuf,
    case_path: PathBuf,
    template_id: Option<u32>,
    output: Option<PathBuf>,
    format: Option<OutputFormat>,
    config: &Config,
) -> Result<()> {
    info!("Rendering {} against {}", template_path.display(), case_path.display());

    let template = load_template(&template_path, template_id)
        .await
        .with_context(|| format!("Failed to load template from {}", template_path.display()))?;
    let context = load_case_context(&case_path, config).await?;

    let act = ActDraft::from_context(&template, &context);
    if !act.is_complete() {
        warn!(
            "Act '{}' has {} unresolved variables: {}",
            act.titre,
            act.unresolved.len(),
            act.unresolved.join(", ")
        );
    }

    let destination = output.map(|path| config.output_path(path));
    let handler = OutputHandler::new(format.unwrap_or(config.output_format), destination);
    handler.output_act(&act).await?;

    info!("Rendered act '{}'", act.titre);
    Ok(())
}

/// List the variables referenced by a template
pub async fn list_variables(template_path: PathBuf, template_id: Option<u32>) -> Result<()> {
    let template = load_template(&template_path, template_id)
        .await
        .with_context(|| format!("Failed to load template from {}", template_path.display()))?;

    let variables = extract_variables(&template.contenu);
    info!("Template '{}' references {} variables", template.nom, variables.len());

    for variable in variables {
        match catalog::describe(&variable) {
            Some(description) => println!("{}  ({})", variable, description),
            None => println!("{}", variable),
        }
    }

    Ok(())
}

/// Print the variable catalogue
pub async fn show_catalog(role: Option<String>) -> Result<()> {
    for doc in catalog::available_variables() {
        println!("{:<28} {}", doc.path, doc.description);
    }

    if let Some(role) = role {
        let role = normalize_role(&role);
        println!();
        for (path, field) in catalog::role_variables(&role)
            .into_iter()
            .zip(catalog::client_fields())
        {
            println!("{:<28} {}", path, field.description);
        }
    }

    Ok(())
}

/// Check a template against a case; with `strict`, unresolved variables fail the command
pub async fn check(
    template_path: PathBuf,
    case_path: PathBuf,
    template_id: Option<u32>,
    strict: bool,
    format: Option<OutputFormat>,
    config: &Config,
) -> Result<()> {
    let template = load_template(&template_path, template_id)
        .await
        .with_context(|| format!("Failed to load template from {}", template_path.display()))?;
    let context = load_case_context(&case_path, config).await?;

    let report = check_template(&template.contenu, &context);
    let handler = OutputHandler::new(format.unwrap_or(config.output_format), None);
    handler.output_check(&report).await?;

    if strict && !report.unresolved.is_empty() {
        return Err(anyhow::anyhow!(
            "Template '{}' has {} unresolved variables",
            template.nom,
            report.unresolved.len()
        ));
    }

    Ok(())
}

/// Dump the built context as JSON
pub async fn show_context(case_path: PathBuf, config: &Config) -> Result<()> {
    let context = load_case_context(&case_path, config).await?;
    println!("{}", context.to_json_pretty()?);
    Ok(())
}
