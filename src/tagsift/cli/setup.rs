use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tagsift::config::OutputFormat;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "tagsift", bin_name = "tagsift", version = get_version())]
#[command(about = "Filter text items by tags and highlight the matches", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding config.json (defaults to the user config dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Html,
    Ansi,
    Plain,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Html => OutputFormat::Html,
            FormatArg::Ansi => OutputFormat::Ansi,
            FormatArg::Plain => OutputFormat::Plain,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Filter items, keeping those that contain every tag
    #[command(alias = "f")]
    Filter {
        /// Items file: a JSON array of {id, text} or one item per line (stdin if omitted)
        file: Option<PathBuf>,

        /// Tag to match; repeat for more, or separate several with commas
        #[arg(short, long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,

        /// Also print hidden items
        #[arg(short, long)]
        all: bool,
    },

    /// Show how raw input splits into tags
    Tags {
        /// Raw tag input, e.g. "rust, cache"
        input: String,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (highlight-class, format, separators)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
