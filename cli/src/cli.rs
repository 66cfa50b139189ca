//! Command-line surface and the action sequence it drives.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use petstore_core::{example_pet, renamed_example_pet, DeletionResult, Pet, PetStore, Transport};
use tracing::info;

pub const DEFAULT_BASE_URL: &str = "https://petstore.swagger.io/v2";

/// Create, update, delete and inspect pet records in a Swagger pet store.
///
/// With neither --input-file nor --pet-id, the built-in example pet is
/// created, renamed, updated and deleted again.
#[derive(Parser, Debug)]
#[command(name = "petstore", version)]
pub struct Cli {
    /// Action to perform on the pet record. Repeat or comma-separate to run
    /// several; they always run in the order create, update, delete, info.
    #[arg(short = 'a', long = "db-action", value_enum, value_delimiter = ',')]
    pub db_action: Vec<Action>,

    /// Path to a JSON file holding the pet record for create or update.
    #[arg(short = 'i', long)]
    pub input_file: Option<PathBuf>,

    /// Pet id for delete or info.
    #[arg(short = 'p', long)]
    pub pet_id: Option<i64>,

    /// Write console output to swagger_pet_<TIMESTAMP>.txt in the current
    /// directory instead of the terminal.
    #[arg(short = 'l', long)]
    pub log_file: bool,

    /// Root URL of the store; the `/pet` resource is appended to it.
    #[arg(long, env = "PETSTORE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Action {
    Create,
    Update,
    Delete,
    Info,
}

impl Cli {
    fn wants(&self, action: Action) -> bool {
        self.db_action.contains(&action)
    }
}

/// Read one pet record from a JSON file.
pub fn load_pet(path: &Path) -> Result<Pet> {
    if !path.exists() {
        bail!(
            "Path '{}' does not exist on this system. Please pass in a valid path. Exiting...",
            path.display()
        );
    }
    let raw =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse pet record from {}", path.display()))
}

/// Run the actions selected by `cli` against `store`, writing results to `out`.
pub fn run<T: Transport>(cli: &Cli, store: &PetStore<T>, out: &mut dyn Write) -> Result<()> {
    let (mut pet, example) = match &cli.input_file {
        Some(path) => (load_pet(path)?, false),
        None => (example_pet(), cli.pet_id.is_none()),
    };
    if example {
        info!(id = pet.id, "no input given, running the example pet through create/update/delete");
    }

    if example || cli.wants(Action::Create) {
        let created = store.create(pet.clone())?;
        writeln!(
            out,
            "Pet ID '{}' successfully created with the following details:\n{}\n",
            created.id,
            serde_json::to_string(&created)?
        )?;
    }

    if example {
        pet = renamed_example_pet("Ruff");
    }
    if example || cli.wants(Action::Update) {
        let updated = store.update(pet.clone())?;
        writeln!(
            out,
            "Details of pet ID '{}' updated successfully:\n{}\n",
            updated.id,
            serde_json::to_string(&updated)?
        )?;
    }

    let id = cli.pet_id.unwrap_or(pet.id);
    if example || cli.wants(Action::Delete) {
        match store.delete(id)? {
            DeletionResult::Deleted => {
                writeln!(out, "Pet ID '{id}' details removed successfully.\n")?
            }
            DeletionResult::AlreadyAbsent => writeln!(
                out,
                "Pet ID '{id}' does not exist in the pet database. \
                 Please enter an ID that exists in the system.\n"
            )?,
        }
    }

    if cli.wants(Action::Info) {
        let lookup = store.info(id)?;
        writeln!(out, "{}", serde_json::to_string(&lookup)?)?;
    }
    Ok(())
}
