// ABOUTME: Case record module for dossier snapshots fed to the template engine
// ABOUTME: Exports the record types and their loading errors

pub mod error;
pub mod record;

pub use error::{CaseError, Result};
pub use record::{Amount, CaseRecord, Client, ClientKind, Dossier, PartyAttachment};
