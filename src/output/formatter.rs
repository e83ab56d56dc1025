// ABOUTME: Output formatters for act drafts and template checks (text, JSON, YAML)
// ABOUTME: Text output is the act body itself; structured formats carry the whole draft

use serde::Serialize;
use std::fmt::Write as _;

use super::error::{OutputError, Result};
use super::OutputFormat;
use crate::acte::ActDraft;
use crate::template::TemplateCheck;

pub trait OutputFormatter: Send + Sync {
    fn format_act(&self, act: &ActDraft) -> Result<String>;

    fn format_check(&self, check: &TemplateCheck) -> Result<String>;
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct YamlFormatter;

pub struct TextFormatter;

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self { pretty: false }
    }

    pub fn new_pretty() -> Self {
        Self { pretty: true }
    }

    fn to_json<T: Serialize>(&self, value: &T) -> Result<String> {
        if self.pretty {
            serde_json::to_string_pretty(value).map_err(OutputError::SerializationError)
        } else {
            serde_json::to_string(value).map_err(OutputError::SerializationError)
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_act(&self, act: &ActDraft) -> Result<String> {
        self.to_json(act)
    }

    fn format_check(&self, check: &TemplateCheck) -> Result<String> {
        self.to_json(check)
    }
}

impl OutputFormatter for YamlFormatter {
    fn format_act(&self, act: &ActDraft) -> Result<String> {
        serde_yaml::to_string(act).map_err(OutputError::YamlSerializationError)
    }

    fn format_check(&self, check: &TemplateCheck) -> Result<String> {
        serde_yaml::to_string(check).map_err(OutputError::YamlSerializationError)
    }
}

impl OutputFormatter for TextFormatter {
    fn format_act(&self, act: &ActDraft) -> Result<String> {
        Ok(act.contenu.clone())
    }

    fn format_check(&self, check: &TemplateCheck) -> Result<String> {
        let mut out = String::new();

        let _ = writeln!(out, "Variables ({}):", check.variables.len());
        for variable in &check.variables {
            let marker = if check.unresolved.iter().any(|u| &u.path == variable) {
                "✗"
            } else {
                "✓"
            };
            let _ = writeln!(out, "  {} {}", marker, variable);
        }

        if !check.unresolved.is_empty() {
            let _ = writeln!(out, "Unresolved ({}):", check.unresolved.len());
            for unresolved in &check.unresolved {
                let _ = writeln!(out, "  {}: {}", unresolved.path, unresolved.reason);
            }
        }

        if !check.lint.is_empty() {
            let _ = writeln!(out, "Syntax warnings ({}):", check.lint.len());
            for warning in &check.lint {
                let _ = writeln!(out, "  {}", warning);
            }
        }

        if check.is_clean() {
            let _ = writeln!(out, "Template is ready to render");
        }

        Ok(out.trim_end().to_string())
    }
}

pub fn formatter_for(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter::new_pretty()),
        OutputFormat::Yaml => Box::new(YamlFormatter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::ActTemplate;
    use crate::template::{check_template, CaseContext};
    use serde_json::json;

    fn context() -> CaseContext {
        CaseContext::from_json(json!({ "dossier": { "numero": "2025-001" } }))
    }

    fn act() -> ActDraft {
        let template = ActTemplate::new(1, "Vente", "VENTE", "Dossier {{dossier.numero}}");
        ActDraft::from_context(&template, &context())
    }

    #[test]
    fn test_text_act_is_body() {
        assert_eq!(TextFormatter.format_act(&act()).unwrap(), "Dossier 2025-001");
    }

    #[test]
    fn test_json_act_carries_metadata() {
        let output = JsonFormatter::new().format_act(&act()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["titre"], "Vente - 2025-001");
        assert_eq!(value["statut"], "BROUILLON");
        assert_eq!(value["template_id"], 1);
    }

    #[test]
    fn test_yaml_act() {
        let output = YamlFormatter.format_act(&act()).unwrap();
        assert!(output.contains("statut: BROUILLON"));
    }

    #[test]
    fn test_text_check() {
        let check = check_template("{{dossier.numero}} {{dossier.intitule}}", &context());
        let output = TextFormatter.format_check(&check).unwrap();

        assert!(output.contains("✓ dossier.numero"));
        assert!(output.contains("✗ dossier.intitule"));
        assert!(output.contains("Unresolved (1):"));
        assert!(!output.contains("ready to render"));
    }
}
