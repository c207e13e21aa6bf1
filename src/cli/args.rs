use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Do not create the default template folders
    #[arg(long)]
    pub no_folders: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ExtractArgs {
    /// Template id or name (prompted for when omitted on a terminal)
    #[arg(long, short)]
    pub template: Option<String>,

    /// Alias, used as the note title
    #[arg(long, short)]
    pub alias: Option<String>,

    /// Selected text (default: read from --file or stdin)
    #[arg(long, conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the selection from a file
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Note the selection came from; recorded in source_notes
    #[arg(long, short)]
    pub source: Option<PathBuf>,

    /// Replace the selection in the source note with a link to the new note
    #[arg(long, requires = "source")]
    pub link: bool,

    /// Strip the selection's shared indentation
    #[arg(long)]
    pub remove_indent: bool,

    /// Print the note that would be created without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Open the new note in the editor
    #[arg(long, short)]
    pub open: bool,
}
