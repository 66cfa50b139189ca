//! Tracing setup and optional redirection of console output to a file.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

/// `swagger_pet_<DD-MM-YYYY_HH-MM>.txt`
pub fn log_file_name(now: &NaiveDateTime) -> String {
    format!("swagger_pet_{}.txt", now.format("%d-%m-%Y_%H-%M"))
}

/// Where log events and command output end up.
pub struct Console {
    pub out: Box<dyn Write>,
}

impl Console {
    /// Terminal output with colored log events.
    pub fn stdout() -> Self {
        init_tracing(BoxMakeWriter::new(io::stdout), true);
        Self {
            out: Box::new(io::stdout()),
        }
    }

    /// Send everything to a timestamped file in the working directory.
    pub fn log_file() -> Result<Self> {
        let path = PathBuf::from(log_file_name(&chrono::Local::now().naive_local()));
        println!("Console output of this script will be saved to '{}'", path.display());

        let file = File::create(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        let out = file
            .try_clone()
            .with_context(|| format!("failed to open {}", path.display()))?;
        init_tracing(BoxMakeWriter::new(Arc::new(file)), false);
        Ok(Self { out: Box::new(out) })
    }
}

fn init_tracing(writer: BoxMakeWriter, ansi: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn log_file_name_uses_day_first_timestamp() {
        let now = NaiveDate::from_ymd_opt(2020, 1, 19)
            .unwrap()
            .and_hms_opt(9, 5, 42)
            .unwrap();
        assert_eq!(log_file_name(&now), "swagger_pet_19-01-2020_09-05.txt");
    }
}
