use anyhow::Result;
use clap::{Args, Subcommand};
use marketplace_lib::{Client, ListQuery, ProduitService};

use super::common::ListArgs;
use crate::output::{print_one, print_page, produit_rows, OutputFormat};

#[derive(Args)]
pub struct ProduitsArgs {
    #[command(subcommand)]
    pub command: ProduitsCommand,
}

#[derive(Subcommand)]
pub enum ProduitsCommand {
    /// List products
    List(ListArgs),
    /// Show one product
    Get { uuid: String },
    /// Publish or withdraw a product
    Toggle { uuid: String },
    /// Delete a product
    Delete { uuid: String },
}

pub async fn run(args: &ProduitsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let service = ProduitService::new(client);
    match &args.command {
        ProduitsCommand::List(list) => {
            let page = service.list(&list.to_query::<ListQuery>()?).await?;
            print_page(&page, produit_rows, *format);
        }
        ProduitsCommand::Get { uuid } => {
            let produit = service.get(uuid).await?;
            print_one(&produit, produit_rows, *format);
            if *format != OutputFormat::Json {
                if let Some(description) = &produit.description {
                    println!("{}", description);
                }
            }
        }
        ProduitsCommand::Toggle { uuid } => {
            let updated = service.toggle_status(uuid).await?;
            eprintln!("Produit désormais {}.", updated.statut);
            print_one(&updated, produit_rows, *format);
        }
        ProduitsCommand::Delete { uuid } => {
            service.delete(uuid).await?;
            eprintln!("Produit supprimé.");
        }
    }
    Ok(())
}
