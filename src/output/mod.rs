// ABOUTME: Output handler module for rendered acts and template reports
// ABOUTME: Chooses a formatter by format name and a writer by destination

pub mod error;
pub mod formatter;
pub mod writer;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use self::error::Result;
use self::formatter::formatter_for;
use self::writer::{FileWriter, OutputWriter, StdoutWriter};
use crate::acte::ActDraft;
use crate::template::TemplateCheck;

pub use self::error::OutputError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

pub struct OutputHandler {
    format: OutputFormat,
    writer: Box<dyn OutputWriter>,
}

impl OutputHandler {
    /// Write to `destination`, or stdout when none is given
    pub fn new(format: OutputFormat, destination: Option<PathBuf>) -> Self {
        let writer: Box<dyn OutputWriter> = match destination {
            Some(path) => Box::new(FileWriter::new(path)),
            None => Box::new(StdoutWriter::new()),
        };
        Self { format, writer }
    }

    pub async fn output_act(&self, act: &ActDraft) -> Result<()> {
        let formatted = formatter_for(self.format).format_act(act)?;
        self.writer.write(&formatted).await
    }

    pub async fn output_check(&self, check: &TemplateCheck) -> Result<()> {
        let formatted = formatter_for(self.format).format_check(check)?;
        self.writer.write(&formatted).await
    }
}
