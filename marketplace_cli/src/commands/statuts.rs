use anyhow::Result;
use clap::{Args, Subcommand};
use marketplace_lib::types::StatutMatrimonialInput;
use marketplace_lib::validation;
use marketplace_lib::{Client, ListQuery, StatutMatrimonialService};

use super::common::ListArgs;
use crate::output::{print_one, print_page, statut_matrimonial_rows, OutputFormat};

#[derive(Args)]
pub struct StatutsArgs {
    #[command(subcommand)]
    pub command: StatutsCommand,
}

#[derive(Subcommand)]
pub enum StatutsCommand {
    /// List marital statuses
    List(ListArgs),
    /// Show one marital status
    Get { uuid: String },
    /// Create a marital status
    Create {
        /// Label shown to users
        #[arg(long)]
        libelle: String,
        #[arg(long)]
        code: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Switch a marital status between actif and inactif
    Toggle { uuid: String },
    /// Delete a marital status
    Delete { uuid: String },
}

pub async fn run(args: &StatutsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let service = StatutMatrimonialService::new(client);
    match &args.command {
        StatutsCommand::List(list) => {
            let page = service.list(&list.to_query::<ListQuery>()?).await?;
            print_page(&page, statut_matrimonial_rows, *format);
        }
        StatutsCommand::Get { uuid } => {
            print_one(&service.get(uuid).await?, statut_matrimonial_rows, *format);
        }
        StatutsCommand::Create {
            libelle,
            code,
            description,
        } => {
            let input = StatutMatrimonialInput {
                libelle: validation::validate_name(libelle)?,
                code: code.as_deref().map(validation::validate_name).transpose()?,
                description: description
                    .as_deref()
                    .map(validation::validate_message)
                    .transpose()?,
                statut: None,
            };
            let created = service.create(&input).await?;
            eprintln!("Statut matrimonial créé.");
            print_one(&created, statut_matrimonial_rows, *format);
        }
        StatutsCommand::Toggle { uuid } => {
            let updated = service.toggle_status(uuid).await?;
            eprintln!("Statut matrimonial désormais {}.", updated.statut);
            print_one(&updated, statut_matrimonial_rows, *format);
        }
        StatutsCommand::Delete { uuid } => {
            service.delete(uuid).await?;
            eprintln!("Statut matrimonial supprimé.");
        }
    }
    Ok(())
}
