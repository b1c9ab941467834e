use anyhow::Result;
use clap::{Args, Subcommand};
use marketplace_lib::types::PaysInput;
use marketplace_lib::validation;
use marketplace_lib::{Client, ListQuery, PaysService};

use super::common::ListArgs;
use crate::output::{pays_rows, print_one, print_page, OutputFormat};

#[derive(Args)]
pub struct PaysArgs {
    #[command(subcommand)]
    pub command: PaysCommand,
}

#[derive(Subcommand)]
pub enum PaysCommand {
    /// List countries
    List(ListArgs),
    /// Show one country
    Get { uuid: String },
    /// Create a country
    Create(PaysFields),
    /// Replace a country's fields
    Update {
        uuid: String,
        #[command(flatten)]
        fields: PaysFields,
    },
    /// Switch a country between actif and inactif
    Toggle { uuid: String },
    /// Delete a country
    Delete { uuid: String },
}

#[derive(Args)]
pub struct PaysFields {
    /// Display name
    #[arg(long)]
    pub nom: String,

    /// 2-letter ISO code
    #[arg(long)]
    pub code: String,

    /// Dialing prefix, e.g. +225
    #[arg(long)]
    pub indicatif: Option<String>,
}

impl PaysFields {
    fn to_input(&self) -> Result<PaysInput> {
        Ok(PaysInput {
            nom: validation::validate_name(&self.nom)?,
            code: validation::validate_country_code(&self.code)?,
            indicatif: self.indicatif.as_deref().map(str::trim).map(str::to_string),
            statut: None,
        })
    }
}

pub async fn run(args: &PaysArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let service = PaysService::new(client);
    match &args.command {
        PaysCommand::List(list) => {
            let page = service.list(&list.to_query::<ListQuery>()?).await?;
            print_page(&page, pays_rows, *format);
        }
        PaysCommand::Get { uuid } => {
            print_one(&service.get(uuid).await?, pays_rows, *format);
        }
        PaysCommand::Create(fields) => {
            let created = service.create(&fields.to_input()?).await?;
            eprintln!("Pays créé.");
            print_one(&created, pays_rows, *format);
        }
        PaysCommand::Update { uuid, fields } => {
            let updated = service.update(uuid, &fields.to_input()?).await?;
            eprintln!("Pays mis à jour.");
            print_one(&updated, pays_rows, *format);
        }
        PaysCommand::Toggle { uuid } => {
            let updated = service.toggle_status(uuid).await?;
            eprintln!("Pays désormais {}.", updated.statut);
            print_one(&updated, pays_rows, *format);
        }
        PaysCommand::Delete { uuid } => {
            service.delete(uuid).await?;
            eprintln!("Pays supprimé.");
        }
    }
    Ok(())
}
