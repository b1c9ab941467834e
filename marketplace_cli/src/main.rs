mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use marketplace_lib::{Config, MarketplaceError};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "marketplace")]
#[command(about = "Administer the marketplace back-office from the terminal")]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = Output::Table, global = true)]
    output: Output,

    /// API base URL, overrides NEXT_PUBLIC_API_URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Output {
    Table,
    Json,
    Markdown,
}

impl From<Output> for OutputFormat {
    fn from(value: Output) -> Self {
        match value {
            Output::Table => OutputFormat::Table,
            Output::Json => OutputFormat::Json,
            Output::Markdown => OutputFormat::Markdown,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Countries
    Pays(commands::pays::PaysArgs),
    /// Marital statuses
    Statuts(commands::statuts::StatutsArgs),
    /// Roles and permissions
    Roles(commands::roles::RolesArgs),
    /// User accounts
    Users(commands::users::UsersArgs),
    /// Products
    Produits(commands::produits::ProduitsArgs),
    /// Exchange proposals
    Echanges(commands::echanges::EchangesArgs),
    /// Favorites
    Favoris(commands::favoris::FavorisArgs),
    /// Messaging
    Messages(commands::messages::MessagesArgs),
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("marketplace=info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        match err.downcast_ref::<MarketplaceError>() {
            Some(e) => eprintln!("{}", e.user_message()),
            None => eprintln!("Error: {:#}", err),
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = Config::from_env()?;
    if let Some(ref base_url) = cli.base_url {
        config = config.with_base_url(base_url)?;
    }
    let client = config.connect()?;
    let format = OutputFormat::from(cli.output);

    match &cli.command {
        Commands::Pays(args) => commands::pays::run(args, &client, &format).await?,
        Commands::Statuts(args) => commands::statuts::run(args, &client, &format).await?,
        Commands::Roles(args) => commands::roles::run(args, &client, &format).await?,
        Commands::Users(args) => commands::users::run(args, &client, &format).await?,
        Commands::Produits(args) => commands::produits::run(args, &client, &format).await?,
        Commands::Echanges(args) => commands::echanges::run(args, &client, &format).await?,
        Commands::Favoris(args) => commands::favoris::run(args, &client, &format).await?,
        Commands::Messages(args) => commands::messages::run(args, &client, &format).await?,
    }

    Ok(())
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
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "marketplace",
            "pays",
            "list",
            "--limit",
            "5",
            "--output",
            "json",
            "--base-url",
            "http://api.test",
        ])
        .unwrap();
        assert!(matches!(cli.output, Output::Json));
        assert_eq!(cli.base_url.as_deref(), Some("http://api.test"));
        let Commands::Pays(args) = cli.command else {
            panic!("expected pays command");
        };
        let commands::pays::PaysCommand::List(list) = args.command else {
            panic!("expected list");
        };
        assert_eq!(list.limit, 5);
        assert_eq!(list.page, 1);
    }

    #[test]
    fn favoris_toggle_requires_all_targets() {
        let err = Cli::try_parse_from(["marketplace", "favoris", "toggle", "--user", "u1"]);
        assert!(err.is_err());

        let cli = Cli::try_parse_from([
            "marketplace",
            "favoris",
            "toggle",
            "--user",
            "u1",
            "--type",
            "produit",
            "--element",
            "p1",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Favoris(_)));
    }

    #[test]
    fn users_list_splits_types() {
        let cli = Cli::try_parse_from(["marketplace", "users", "list", "--type", "agent,vendeur"])
            .unwrap();
        let Commands::Users(args) = cli.command else {
            panic!("expected users command");
        };
        let commands::users::UsersCommand::List { types, role, .. } = args.command else {
            panic!("expected list");
        };
        assert_eq!(types, vec!["agent", "vendeur"]);
        assert!(role.is_none());
    }
}
