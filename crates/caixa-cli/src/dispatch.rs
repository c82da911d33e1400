use caixa_client::commands;
use caixa_client::{ClientResult, SuccessEnvelope};

use crate::cli::{Cli, Commands};

pub fn dispatch(cli: &Cli) -> ClientResult<SuccessEnvelope> {
    match &cli.command {
        Commands::Report { path, config, .. } => commands::report::run(path, config.as_deref()),
        Commands::Months { path, config, .. } => commands::months::run(path, config.as_deref()),
        Commands::Month {
            label,
            path,
            config,
            ..
        } => commands::month::run(label, path, config.as_deref()),
    }
}
