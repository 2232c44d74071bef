/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Application title used for identification
///
/// This is the name of the application used in log lines and in the
/// default log filename.
pub const APP_TITLE: &str = "BatchRenamer";

/// Version tag written into every log line
pub const VERSION_TAG: &str = env!("CARGO_PKG_VERSION");

/// Default filename for the application log
///
/// The file is created beside the executable unless overridden on the
/// command line.
pub const LOG_FILE_DEFAULT: &str = "BatchRenamer.log";

/// Help text for the filepath command-line option
pub const FILEPATH_HELP: &str = "Folder whose files will be renamed";

/// Help text for the new-folder command-line option
pub const NEW_FOLDER_HELP: &str = "Folder to move or copy files to (defaults to renaming in place)";

/// Help text for the copy command-line option
pub const COPY_HELP: &str = "Copy files instead of moving them";

/// Help text for the overwrite command-line option
pub const OVERWRITE_HELP: &str = "Allow overwriting existing files";

/// Help text for the filetypes command-line option
pub const FILETYPES_HELP: &str = "File extensions to modify (all files when omitted)";

/// Help text for the find command-line option
pub const FIND_HELP: &str = "Substrings to find in filenames for replacement";

/// Help text for the replace command-line option
pub const REPLACE_HELP: &str = "String to replace found substrings with";

/// Help text for the prefix command-line option
pub const PREFIX_HELP: &str = "Prefix added to Maya scene (.ma) filenames";

/// Help text for the suffix command-line option
pub const SUFFIX_HELP: &str = "Suffix field (accepted for interface parity; no rule applies it)";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "Run without moving any files";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Mirror log lines to the console";

/// Help text for the log-file command-line option
pub const LOG_FILE_HELP: &str = "Write the log to a specific file";
