use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "request-composer")]
#[command(
    author,
    version,
    about = "Compose Analytics Reporting API v4 requests and view report results"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Flatten a saved report response into a pivot table
    Pivot {
        /// Path to a saved reports:batchGet response JSON file
        #[clap(short, long)]
        response: String,

        /// Output format for the pivot table
        #[clap(short, long, value_enum, default_value_t = PivotFormat::Table)]
        format: PivotFormat,

        /// Emit compact JSON instead of pretty-printed (json format only)
        #[clap(long, default_value_t = false)]
        compact: bool,
    },

    /// Merge parameters into the request skeleton and print the result
    Compose {
        /// Parameter file path (TOML); flags below override file values
        #[clap(short, long)]
        config: Option<String>,

        /// Analytics view (profile) id
        #[clap(long)]
        view_id: Option<String>,

        /// Start of the reporting date range (YYYY-MM-DD)
        #[clap(long)]
        start_date: Option<String>,

        /// End of the reporting date range (YYYY-MM-DD)
        #[clap(long)]
        end_date: Option<String>,

        /// Comma-separated dimension names (e.g. ga:country,ga:city)
        #[clap(short, long)]
        dimensions: Option<String>,

        /// Output format for the composed request
        #[clap(short, long, value_enum, default_value_t = ComposeFormat::Json)]
        format: ComposeFormat,

        /// Print the request line above the body
        #[clap(long, default_value_t = false)]
        show_uri: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PivotFormat {
    /// Terminal grid
    Table,
    /// Structured JSON (headers and rows)
    Json,
    /// Embeddable HTML table fragment
    Html,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ComposeFormat {
    /// Pretty-printed JSON body
    Json,
    /// Syntax-highlighted HTML fragment
    Html,
}
