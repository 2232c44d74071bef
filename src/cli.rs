use std::path::{Path, PathBuf};

use clap::{
    Arg, ArgAction, ArgMatches, Command, command, crate_authors, crate_description, crate_name,
    crate_version,
};
use shellexpand::tilde;

use crate::configuration::RenameJob;
use crate::constants::{
    COPY_HELP, DRY_RUN_HELP, FILEPATH_HELP, FILETYPES_HELP, FIND_HELP, LOG_FILE_HELP,
    NEW_FOLDER_HELP, OVERWRITE_HELP, PREFIX_HELP, REPLACE_HELP, SUFFIX_HELP, VERBOSE_HELP,
};
use crate::errors::{Result, generic_error};
use crate::logging::default_log_file;

/// Builds the command-line interface
///
/// Defines the following arguments:
/// - `filepath`: Folder whose files will be renamed (required)
/// - `new_folder`: Folder to move or copy files to
/// - `copy`: Copy files instead of moving them
/// - `overwrite`: Allow overwriting existing files
/// - `filetypes`: File extensions to modify
/// - `find`: Substrings to find in filenames
/// - `replace`: Replacement for found substrings
/// - `prefix` / `suffix`: Strings added around modified filenames
/// - `dry`: Run without moving any files
/// - `verbose`: Mirror log lines to the console
/// - `log_file`: Log file path
pub fn build_command() -> Command {
    // define arg for the folder to process
    let arg_filepath = Arg::new("filepath")
        .short('f')
        .long("filepath")
        .help(FILEPATH_HELP)
        .required(true);

    // define arg for the destination folder
    let arg_new_folder = Arg::new("new_folder")
        .short('n')
        .long("new-folder")
        .help(NEW_FOLDER_HELP);

    // define arg for copying instead of moving
    let arg_copy = Arg::new("copy")
        .short('c')
        .long("copy")
        .help(COPY_HELP)
        .action(ArgAction::SetTrue);

    // define arg for allowing overwrites
    let arg_overwrite = Arg::new("overwrite")
        .short('o')
        .long("overwrite")
        .help(OVERWRITE_HELP)
        .action(ArgAction::SetTrue);

    // define arg for the extension filter
    let arg_filetypes = Arg::new("filetypes")
        .short('t')
        .long("filetypes")
        .help(FILETYPES_HELP)
        .num_args(1..)
        .action(ArgAction::Append);

    // define arg for the find strings
    let arg_find = Arg::new("find")
        .long("find")
        .help(FIND_HELP)
        .num_args(1..)
        .action(ArgAction::Append);

    // define arg for the replacement string
    let arg_replace = Arg::new("replace")
        .short('r')
        .long("replace")
        .help(REPLACE_HELP)
        .default_value("");

    // define arg for the prefix
    let arg_prefix = Arg::new("prefix")
        .short('p')
        .long("prefix")
        .help(PREFIX_HELP)
        .default_value("");

    // define arg for the suffix
    let arg_suffix = Arg::new("suffix")
        .short('s')
        .long("suffix")
        .help(SUFFIX_HELP)
        .default_value("");

    // define arg for dry run
    let arg_dry = Arg::new("dry")
        .long("dry")
        .help(DRY_RUN_HELP)
        .action(ArgAction::SetTrue);

    // define arg for verbosity
    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(ArgAction::SetTrue);

    // define arg for the log file
    let arg_log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .help(LOG_FILE_HELP);

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .arg(arg_filepath)
        .arg(arg_new_folder)
        .arg(arg_copy)
        .arg(arg_overwrite)
        .arg(arg_filetypes)
        .arg(arg_find)
        .arg(arg_replace)
        .arg(arg_prefix)
        .arg(arg_suffix)
        .arg(arg_dry)
        .arg(arg_verbose)
        .arg(arg_log_file)
}

/// Parses the command-line arguments
///
/// # Returns
/// * `Result<ArgMatches>` - The parsed command-line arguments
pub fn get_matches() -> Result<ArgMatches> {
    Ok(build_command().get_matches())
}

/// Builds the run configuration from parsed command-line arguments
///
/// User-supplied paths are tilde-expanded. All remaining values are handed
/// to the engine as one immutable RenameJob; the engine performs no argument
/// parsing itself.
///
/// # Errors
/// Returns an error if the required filepath option is missing
pub fn build_job(matches: &ArgMatches) -> Result<RenameJob> {
    let filepath = matches
        .get_one::<String>("filepath")
        .ok_or_else(|| generic_error("Filepath option not found"))?;

    let mut builder = RenameJob::builder(Path::new(tilde(filepath).as_ref()));

    if let Some(new_folder) = matches.get_one::<String>("new_folder") {
        builder = builder.target_dir(Path::new(tilde(new_folder).as_ref()));
    }

    if let Some(filetypes) = matches.get_many::<String>("filetypes") {
        builder = builder.filetypes(filetypes.cloned());
    }

    if let Some(find_strings) = matches.get_many::<String>("find") {
        builder = builder.find_strings(find_strings.cloned());
    }

    let job = builder
        .copy_mode(matches.get_flag("copy"))
        .overwrite(matches.get_flag("overwrite"))
        .replace_with(matches.get_one::<String>("replace").map_or("", String::as_str))
        .prefix(matches.get_one::<String>("prefix").map_or("", String::as_str))
        .suffix(matches.get_one::<String>("suffix").map_or("", String::as_str))
        .dry_run(matches.get_flag("dry"))
        .build();

    Ok(job)
}

/// Gets the verbose flag from the command-line arguments
pub fn get_verbose(matches: &ArgMatches) -> bool {
    matches.get_flag("verbose")
}

/// Gets the log file path from the command-line arguments
///
/// Falls back to the default log file beside the executable.
pub fn get_log_file(matches: &ArgMatches) -> PathBuf {
    matches
        .get_one::<String>("log_file")
        .map(|file| PathBuf::from(tilde(file).as_ref()))
        .unwrap_or_else(default_log_file)
}
