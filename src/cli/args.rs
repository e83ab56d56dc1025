// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Defines the main CLI structure and subcommands for acta

use clap::{Parser, Subcommand};
use indexmap::IndexMap;
use std::path::PathBuf;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "acta")]
#[command(about = "Render notarial act templates against case data")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Path to configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a template against a case into an act draft
    Render {
        #[arg(help = "Template library (YAML) or plain text template body")]
        template: PathBuf,

        #[arg(long, help = "Case file (YAML or JSON)")]
        case: PathBuf,

        #[arg(short = 't', long, help = "Template id within a library")]
        template_id: Option<u32>,

        #[arg(long = "var", help = "Extra context variables (key=value)")]
        vars: Vec<String>,

        #[arg(short, long, help = "Output file (defaults to stdout)")]
        output: Option<PathBuf>,

        #[arg(short, long, value_enum, help = "Output format")]
        format: Option<OutputFormat>,
    },

    /// List the variables a template references
    Variables {
        #[arg(help = "Template library (YAML) or plain text template body")]
        template: PathBuf,

        #[arg(short = 't', long, help = "Template id within a library")]
        template_id: Option<u32>,
    },

    /// Show the catalogue of commonly available variables
    Catalog {
        #[arg(long, help = "Also list per-party fields for this role")]
        role: Option<String>,
    },

    /// Check a template against a case without producing an act
    Check {
        #[arg(help = "Template library (YAML) or plain text template body")]
        template: PathBuf,

        #[arg(long, help = "Case file (YAML or JSON)")]
        case: PathBuf,

        #[arg(short = 't', long, help = "Template id within a library")]
        template_id: Option<u32>,

        #[arg(long = "var", help = "Extra context variables (key=value)")]
        vars: Vec<String>,

        #[arg(long, help = "Fail when any variable is unresolved")]
        strict: bool,

        #[arg(short, long, value_enum, help = "Output format")]
        format: Option<OutputFormat>,
    },

    /// Print the context built from a case, as JSON
    Context {
        #[arg(long, help = "Case file (YAML or JSON)")]
        case: PathBuf,

        #[arg(long = "var", help = "Extra context variables (key=value)")]
        vars: Vec<String>,
    },
}

impl Commands {
    /// The `--var` values of commands that build a context
    pub fn variables(&self) -> Option<&[String]> {
        match self {
            Commands::Render { vars, .. }
            | Commands::Check { vars, .. }
            | Commands::Context { vars, .. } => Some(vars.as_slice()),
            Commands::Variables { .. } | Commands::Catalog { .. } => None,
        }
    }
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parse variables from key=value format, keeping command line order
    pub fn parse_variables(vars: &[String]) -> anyhow::Result<IndexMap<String, String>> {
        let mut variables = IndexMap::new();

        for var in vars {
            if let Some((key, value)) = var.split_once('=') {
                variables.insert(key.trim().to_string(), value.to_string());
            } else {
                return Err(anyhow::anyhow!(
                    "Invalid variable format '{}'. Expected 'key=value'",
                    var
                ));
            }
        }

        Ok(variables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variables() {
        let vars = vec![
            "ville_signature=Dakar".to_string(),
            "notaire=Maître Diop".to_string(),
            "formule=a=b".to_string(),
        ];

        let parsed = Args::parse_variables(&vars).unwrap();

        assert_eq!(parsed.get("ville_signature"), Some(&"Dakar".to_string()));
        assert_eq!(parsed.get("notaire"), Some(&"Maître Diop".to_string()));
        assert_eq!(parsed.get("formule"), Some(&"a=b".to_string()));
    }

    #[test]
    fn test_parse_variables_invalid() {
        let vars = vec!["invalid_format".to_string()];
        let result = Args::parse_variables(&vars);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_render_command() {
        let args = Args::try_parse_from([
            "acta",
            "render",
            "modeles.yaml",
            "--case",
            "dossier.yaml",
            "-t",
            "2",
            "--format",
            "json",
            "--var",
            "ville_signature=Thiès",
        ])
        .unwrap();

        match args.command {
            Commands::Render {
                template,
                template_id,
                format,
                vars,
                ..
            } => {
                assert_eq!(template, PathBuf::from("modeles.yaml"));
                assert_eq!(template_id, Some(2));
                assert_eq!(format, Some(OutputFormat::Json));
                assert_eq!(vars, vec!["ville_signature=Thiès"]);
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_command_variables() {
        let args = Args::try_parse_from([
            "acta", "context", "--case", "d.yaml", "--var", "notaire=Diop",
        ])
        .unwrap();
        assert_eq!(args.command.variables(), Some(&["notaire=Diop".to_string()][..]));

        let args = Args::try_parse_from(["acta", "catalog"]).unwrap();
        assert_eq!(args.command.variables(), None);
    }
}
