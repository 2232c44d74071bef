pub use cli::*;
pub use configuration::*;
pub use errors::*;

pub mod cli;
pub mod configuration;
pub mod constants;
pub mod errors;
pub mod file_ops;
pub mod logging;
pub mod rules;
pub mod walker;

pub mod prelude {
    pub use crate::cli::{build_command, build_job, get_log_file, get_matches, get_verbose};
    pub use crate::configuration::{RenameJob, RenameJobBuilder};
    pub use crate::errors::{
        directory_not_found_error, file_operation_error, generic_error, invalid_filename_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::file_ops::{TransferOutcome, transfer};
    pub use crate::logging::{Logger, default_log_file, format_message};
    pub use crate::rules::{RuleDecision, compute_name};
    pub use crate::walker::{FileEntry, RunSummary, process_folder};
}
