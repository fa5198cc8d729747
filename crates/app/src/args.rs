//! Command-line arguments.

use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};

pub const USAGE: &str = "\
Usage: chart_advisor <FILE> <X> <Y> [OPTIONS]

Suggest and validate a chart type for two columns of a CSV/TSV file.

Options:
  --kind <LABEL>    Chart kind to check instead of the suggestion
                    (coluna, barra, linha, dispersão, pizza, rosca, histograma)
  --explain         Ask the advisor for a short analysis of the chart
  --offline         Do not contact the advisor
  --config <PATH>   Advisor settings file (JSON)
  -h, --help        Print this help";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub file: PathBuf,
    pub x: String,
    pub y: String,
    pub kind: Option<String>,
    pub explain: bool,
    pub offline: bool,
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Args),
    Help,
}

pub fn parse<I, S>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut positional = Vec::new();
    let mut kind = None;
    let mut config = None;
    let mut explain = false;
    let mut offline = false;

    let mut iter = args.into_iter().map(Into::into);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--explain" => explain = true,
            "--offline" => offline = true,
            "--kind" => {
                kind = Some(iter.next().ok_or_else(|| anyhow!("--kind needs a value"))?);
            }
            "--config" => {
                let path = iter.next().ok_or_else(|| anyhow!("--config needs a value"))?;
                config = Some(PathBuf::from(path));
            }
            flag if flag.starts_with("--") => bail!("unknown option: {}", flag),
            _ => positional.push(arg),
        }
    }

    let [file, x, y]: [String; 3] = positional
        .try_into()
        .map_err(|got: Vec<String>| anyhow!("expected <FILE> <X> <Y>, got {} argument(s)", got.len()))?;

    Ok(Command::Run(Args {
        file: PathBuf::from(file),
        x,
        y,
        kind,
        explain,
        offline,
        config,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positional_and_flags() {
        let cmd = parse(["sales.csv", "Region", "Sales", "--kind", "pizza", "--offline"]).unwrap();
        let Command::Run(args) = cmd else {
            panic!("expected run");
        };
        assert_eq!(args.file, PathBuf::from("sales.csv"));
        assert_eq!(args.x, "Region");
        assert_eq!(args.y, "Sales");
        assert_eq!(args.kind.as_deref(), Some("pizza"));
        assert!(args.offline);
        assert!(!args.explain);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_help_wins() {
        assert_eq!(parse(["a.csv", "--help"]).unwrap(), Command::Help);
    }

    #[test]
    fn test_missing_positionals() {
        let err = parse(["a.csv", "Region"]).unwrap_err();
        assert!(err.to_string().contains("got 2"));
    }

    #[test]
    fn test_flag_without_value() {
        assert!(parse(["a.csv", "x", "y", "--kind"]).is_err());
        assert!(parse(["a.csv", "x", "y", "--verbose"]).is_err());
    }
}
