//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use roster_lib::format::Locale;

#[derive(Parser)]
#[command(name = "roster", version, about = "Inspect roster records, columns and validators")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub cmd: Cmd,
}

/// Flags shared by every subcommand. They override `settings.json`.
#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// Settings file (default: platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Date locale
    #[arg(long, global = true, value_enum)]
    pub locale: Option<LocaleArg>,

    /// Text shown for empty cells
    #[arg(long, global = true)]
    pub placeholder: Option<String>,

    /// Currency code for currency columns
    #[arg(long, global = true)]
    pub currency: Option<String>,

    /// Application root URL for CRUD routes
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Bearer token for CRUD requests
    #[arg(long, global = true)]
    pub token: Option<String>,
}

#[derive(Subcommand)]
pub enum Cmd {
    /// Render records through a column config
    Table(TableArgs),
    /// Check Thai citizen IDs
    CheckId {
        /// IDs to check, with or without dashes
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Validate a form described in a JSON file
    Validate {
        /// Form file: an object of field name to preset and value
        form: PathBuf,
    },
    /// Print the URL of a record's show or edit page
    Link {
        /// Resource route prefix, e.g. `citizens`
        resource: String,
        /// Record id
        id: String,
        #[arg(long, value_enum, default_value = "show")]
        action: LinkAction,
    },
    /// Delete a record after confirmation
    Delete {
        /// Resource route prefix, e.g. `citizens`
        resource: String,
        /// Record id
        id: String,
        /// Name shown in the confirmation and toasts
        #[arg(long)]
        name: Option<String>,
        /// Entity label, e.g. `Citizen`
        #[arg(long, default_value = "Record")]
        entity: String,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
        /// Send PUT/DELETE natively instead of as POST with `_method`
        #[arg(long)]
        native_methods: bool,
    },
}

#[derive(Args, Debug)]
pub struct TableArgs {
    /// JSON array of records
    pub records: PathBuf,

    /// JSON array of column configs
    #[arg(long, short)]
    pub columns: PathBuf,

    /// Sort by column; prefix with `-` for descending. Repeat for multi-sort.
    #[arg(long, short, allow_hyphen_values = true)]
    pub sort: Vec<String>,

    /// Column filter as `column=text`. Repeatable.
    #[arg(long, short)]
    pub filter: Vec<String>,

    /// Filter across all columns
    #[arg(long)]
    pub search: Option<String>,

    /// Group rows by these columns
    #[arg(long)]
    pub group_by: Vec<String>,

    /// Hide a column. Repeatable.
    #[arg(long)]
    pub hide: Vec<String>,

    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page (default from settings)
    #[arg(long)]
    pub page_size: Option<usize>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LocaleArg {
    Th,
    En,
}

impl From<LocaleArg> for Locale {
    fn from(locale: LocaleArg) -> Self {
        match locale {
            LocaleArg::Th => Locale::Th,
            LocaleArg::En => Locale::En,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LinkAction {
    Show,
    Edit,
}
