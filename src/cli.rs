use crate::config::{Config, OutputFormat, DEFAULT_DATE_FORMAT};
use anyhow::Result;
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gitgrowth")]
#[command(about = "Cumulative lines added, removed and net total over a git repository's history")]
#[command(version)]
#[command(group(ArgGroup::new("format").args(["json", "ndjson", "table"])))]
pub struct Cli {
    #[arg(help = "Path to git repository (defaults to the current directory)")]
    pub path: Option<PathBuf>,

    #[arg(long, help = "Output as JSON")]
    pub json: bool,

    #[arg(long, help = "Output as NDJSON, one line per commit")]
    pub ndjson: bool,

    #[arg(long, help = "Print a text table instead of the chart")]
    pub table: bool,

    #[arg(long, default_value = DEFAULT_DATE_FORMAT, help = "strftime format for chart and table dates")]
    pub date_format: String,

    #[arg(long, env = "GITGROWTH_GIT", default_value = "git", help = "git executable to invoke")]
    pub git: String,

    #[arg(long, short, help = "Suppress progress notices")]
    pub quiet: bool,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.ndjson {
            OutputFormat::Ndjson
        } else if self.table {
            OutputFormat::Table
        } else {
            OutputFormat::Chart
        }
    }

    pub fn into_config(self) -> Result<Config> {
        let output = self.output_format();
        let mut config = Config::new(self.path)?;
        config.git_binary = self.git.into();
        config.date_format = self.date_format;
        config.progress = !self.quiet;
        Ok(config.with_output(output))
    }

    pub fn execute(self) -> Result<()> {
        let config = self.into_config()?;
        config.validate()?;
        crate::growth::exec(&config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("gitgrowth").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_to_chart() {
        let config = parse(&[]).into_config().unwrap();
        assert_eq!(config.output, OutputFormat::Chart);
        assert!(config.progress);
        assert_eq!(config.git_binary, "git");
    }

    #[test]
    fn json_flag_and_path() {
        let config = parse(&["--json", "/tmp"]).into_config().unwrap();
        assert_eq!(config.output, OutputFormat::Json);
        assert!(!config.progress);
        assert_eq!(config.repo_path, PathBuf::from("/tmp"));
    }

    #[test]
    fn quiet_table() {
        let config = parse(&["--table", "-q", "--date-format", "%Y-%m-%d"])
            .into_config()
            .unwrap();
        assert_eq!(config.output, OutputFormat::Table);
        assert!(!config.progress);
        assert_eq!(config.date_format, "%Y-%m-%d");
    }

    #[test]
    fn formats_are_exclusive() {
        assert!(Cli::try_parse_from(["gitgrowth", "--json", "--ndjson"]).is_err());
    }
}
