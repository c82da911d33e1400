use clap::{Parser, Subcommand};

/// Extended help shown after `caixa report --help`.
/// Contains the ledger schema and the report configuration format.
pub const REPORT_AFTER_HELP: &str = "\
How reporting works:
  Caixa reads one ledger CSV for one fiscal year, aggregates it, and
  renders the report. Nothing is written anywhere.

Ledger schema:
  One header row, then one row per cash movement:
  date,name,description,classification,amount,flow_type
  2023-01-05,Cliente A,Projeto site,Serviços,1250.00,Entrada
  2023-01-20,Fornecedor,Material de escritório,Compras,89.90,Saída

Field rules (very explicit):
  date (required):
    Date only, exactly `YYYY-MM-DD`.
    Example: `2023-01-15`

  amount (required):
    A non-negative number with a `.` decimal point.
    The movement direction belongs in flow_type, never in the sign.
    Example: `1250.00`

  flow_type (required):
    `Entrada` for money in, `Saída` for money out.
    English spellings `inflow` and `outflow` are accepted too.

  name, description, classification (required columns, free text):
    Who, what, and how you classify the movement.

Report configuration (optional, via --config <path>):
  A JSON file with position figures the ledger cannot derive.
  Every field is optional; omitted fields default to zero and
  fiscal_year defaults to the current year.
  {
    \"fiscal_year\": 2023,
    \"prior_balance\": 1702.32,
    \"receivables_due_month\": 2725.00,
    \"receivables_future\": 500.00,
    \"payables_due_month\": 810.00,
    \"payables_future\": 0.00,
    \"always_present\": [
      {\"month\": 1, \"flow_type\": \"entrada\"},
      {\"month\": 5, \"flow_type\": \"entrada\"}
    ]
  }
  `always_present` pins (month, flow) pairs into the chart at zero
  even when the ledger has no entries for them.

Data quality rule (important):
  Caixa never skips a bad row silently. If any row fails validation,
  the whole report is refused and every issue is listed with its row
  number. Fix the rows and rerun.
";

#[derive(Debug, Parser)]
#[command(
    name = "caixa",
    version,
    about = "cash flow ledger reports",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render the fiscal-year report: metric cards plus the monthly chart
    #[command(after_long_help = REPORT_AFTER_HELP)]
    Report {
        /// Path to the ledger CSV file
        path: String,
        /// Path to a JSON report configuration file
        #[arg(long)]
        config: Option<String>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Show monthly inflow and outflow totals
    Months {
        /// Path to the ledger CSV file
        path: String,
        /// Path to a JSON report configuration file
        #[arg(long)]
        config: Option<String>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// List one month's ledger entries as a table
    Month {
        /// Month name, e.g. Janeiro
        label: String,
        /// Path to the ledger CSV file
        path: String,
        /// Path to a JSON report configuration file
        #[arg(long)]
        config: Option<String>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
pub fn parse_from<I, T>(itr: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(itr)
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::{Commands, parse_from};

    #[test]
    fn parse_command_paths() {
        let cases: [Vec<&str>; 8] = [
            vec!["caixa", "report", "ledger.csv"],
            vec!["caixa", "report", "ledger.csv", "--json"],
            vec!["caixa", "report", "ledger.csv", "--config", "report.json"],
            vec!["caixa", "months", "ledger.csv"],
            vec!["caixa", "months", "ledger.csv", "--json"],
            vec!["caixa", "month", "Janeiro", "ledger.csv"],
            vec!["caixa", "month", "Janeiro", "ledger.csv", "--json"],
            vec![
                "caixa",
                "month",
                "Maio",
                "ledger.csv",
                "--config",
                "report.json",
            ],
        ];

        for case in cases {
            let parsed = parse_from(case.clone());
            assert!(parsed.is_ok(), "failed to parse: {case:?}");
        }
    }

    #[test]
    fn parse_report_with_config_and_json() {
        let parsed = parse_from([
            "caixa",
            "report",
            "ledger.csv",
            "--config",
            "report.json",
            "--json",
        ]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert!(matches!(
                cli.command,
                Commands::Report {
                    json: true,
                    config: Some(_),
                    ..
                }
            ));
        }
    }

    #[test]
    fn parse_month_keeps_label_and_path_positional() {
        let parsed = parse_from(["caixa", "month", "Fevereiro", "ledger.csv"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            if let Commands::Month { label, path, .. } = cli.command {
                assert_eq!(label, "Fevereiro");
                assert_eq!(path, "ledger.csv");
            } else {
                unreachable!("parsed a different command");
            }
        }
    }

    #[test]
    fn missing_ledger_path_is_rejected() {
        let report = parse_from(["caixa", "report"]);
        assert!(report.is_err());

        let month = parse_from(["caixa", "month", "Janeiro"]);
        assert!(month.is_err());
    }

    #[test]
    fn unknown_command_is_rejected() {
        let parsed = parse_from(["caixa", "dashboard"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn help_command_is_rejected() {
        let parsed = parse_from(["caixa", "help"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn subcommand_help_uses_clap_display_help() {
        let parsed = parse_from(["caixa", "report", "--help"]);
        assert!(parsed.is_err());
        if let Err(err) = parsed {
            assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        }
    }
}
