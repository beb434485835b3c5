//! Command-line and environment configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::criteria::{
    Criteria, ListParams, PageRequest, SortSpec, DEFAULT_SORT_BY, DEFAULT_SORT_ORDER,
};
use crate::error::ValidationError;

pub const DEFAULT_DATA_PATH: &str = "mock-data/candidates.json";
pub const DEFAULT_BIND: &str = "0.0.0.0:8000";

#[derive(Debug, Parser)]
#[command(name = "roster", version, about = "Read-only candidate listing API")]
pub struct Cli {
    /// JSON document with a top-level `candidates` array.
    #[arg(long, env = "ROSTER_DATA", default_value = DEFAULT_DATA_PATH, global = true)]
    pub data: PathBuf,

    /// Log line format.
    #[arg(
        long,
        env = "ROSTER_LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Text,
        global = true
    )]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the HTTP API.
    Serve(ServeArgs),
    /// Run one candidate listing query and print the response.
    List(ListArgs),
    /// Print the distinct candidate sources.
    Sources(OutputArgs),
    /// Print the distinct application types.
    ApplicationTypes(OutputArgs),
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to listen on.
    #[arg(long, env = "ROSTER_BIND", default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive match on name, position or company.
    #[arg(long)]
    pub search: Option<String>,

    /// Keep only these application types (repeatable).
    #[arg(long = "application-type")]
    pub application_type: Vec<String>,

    /// Keep only these sources (repeatable).
    #[arg(long)]
    pub source: Vec<String>,

    /// Exact job identifier.
    #[arg(long)]
    pub job_id: Option<String>,

    /// `last_activity` or `name`; anything else keeps file order.
    #[arg(long, default_value = DEFAULT_SORT_BY)]
    pub sort_by: String,

    /// `desc` for descending; anything else is ascending.
    #[arg(long, default_value = DEFAULT_SORT_ORDER)]
    pub sort_order: String,

    /// Page number, from 1. Parsed like the `page` query parameter.
    #[arg(long, default_value = "1", allow_hyphen_values = true)]
    pub page: String,

    #[arg(long, default_value = "5", allow_hyphen_values = true)]
    pub per_page: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl ListArgs {
    /// Validates the arguments into pipeline parameters.
    pub fn to_params(&self) -> Result<ListParams, ValidationError> {
        Ok(ListParams {
            criteria: Criteria {
                search: self.search.clone(),
                application_type: non_empty(&self.application_type),
                source: non_empty(&self.source),
                job_id: self.job_id.clone(),
            },
            sort: SortSpec::new(&self.sort_by, &self.sort_order),
            page: PageRequest::parse(Some(&self.page), Some(&self.per_page))?,
        })
    }
}

fn non_empty(values: &[String]) -> Option<Vec<String>> {
    (!values.is_empty()).then(|| values.to_vec())
}

#[derive(Debug, Clone, Copy, Args)]
pub struct OutputArgs {
    /// Serialization format for the printed response.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub output: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn list_defaults() {
        let cli = Cli::try_parse_from(["roster", "list"]).unwrap();
        let Command::List(args) = cli.command else {
            panic!("expected list subcommand");
        };
        assert_eq!(args.to_params().unwrap(), ListParams::default());
        assert_eq!(args.output.output, OutputFormat::Json);
    }

    #[test]
    fn list_repeatable_filters() {
        let cli = Cli::try_parse_from([
            "roster",
            "--data",
            "other.json",
            "list",
            "--application-type",
            "referral",
            "--application-type",
            "inbound",
            "--source",
            "linkedin",
            "--sort-by",
            "name",
            "--output",
            "yaml",
        ])
        .unwrap();
        assert_eq!(cli.data, PathBuf::from("other.json"));
        let Command::List(args) = cli.command else {
            panic!("expected list subcommand");
        };
        let params = args.to_params().unwrap();
        assert_eq!(
            params.criteria.application_type,
            Some(vec!["referral".to_string(), "inbound".to_string()])
        );
        assert_eq!(params.criteria.source, Some(vec!["linkedin".to_string()]));
        assert_eq!(params.sort.sort_by, "name");
        assert_eq!(args.output.output, OutputFormat::Yaml);
    }

    #[test]
    fn list_rejects_out_of_range_pages() {
        let cli =
            Cli::try_parse_from(["roster", "list", "--page", "0", "--per-page", "51"]).unwrap();
        let Command::List(args) = cli.command else {
            panic!("expected list subcommand");
        };
        assert_eq!(args.to_params().unwrap_err().issues.len(), 2);
    }

    #[test]
    fn list_accepts_pages_beyond_u64() {
        let cli =
            Cli::try_parse_from(["roster", "list", "--page", "100000000000000000000"]).unwrap();
        let Command::List(args) = cli.command else {
            panic!("expected list subcommand");
        };
        let params = args.to_params().unwrap();
        assert_eq!(params.page.page(), u64::MAX);
    }

    #[test]
    fn serve_bind_address() {
        let cli = Cli::try_parse_from(["roster", "serve", "--bind", "127.0.0.1:9000"]).unwrap();
        let Command::Serve(args) = cli.command else {
            panic!("expected serve subcommand");
        };
        assert_eq!(args.bind, "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
    }
}
