//! Command-line driver for the pet store client.
//!
//! Parses flags, picks the record (file or built-in example), runs the
//! selected operations through `petstore_core::PetStore` over a ureq
//! transport, and prints results to the terminal or a log file.

pub mod cli;
pub mod logging;
pub mod transport;

pub use cli::{load_pet, run, Action, Cli, DEFAULT_BASE_URL};
pub use logging::{log_file_name, Console};
pub use transport::UreqTransport;
