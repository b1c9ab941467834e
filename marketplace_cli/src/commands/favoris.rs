use anyhow::Result;
use clap::{Args, Subcommand};
use marketplace_lib::types::FavoriInput;
use marketplace_lib::validation;
use marketplace_lib::{Client, FavoriQuery, FavoriService};

use super::common::ListArgs;
use crate::output::{favori_rows, print_json, print_one, print_page, OutputFormat};

#[derive(Args)]
pub struct FavorisArgs {
    #[command(subcommand)]
    pub command: FavorisCommand,
}

#[derive(Subcommand)]
pub enum FavorisCommand {
    /// List a user's favorites
    List {
        /// Owner of the favorites (uuid)
        #[arg(long)]
        user: String,
        /// Only this element type: produit, boutique, vendeur, annonce
        #[arg(long = "type")]
        type_element: Option<String>,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Add the element to the user's favorites, or remove it if already there
    Toggle(FavoriTarget),
    /// Add or refresh a favorite without removing it
    Add(FavoriTarget),
    /// Delete a favorite by its uuid
    Remove { uuid: String },
}

#[derive(Args)]
pub struct FavoriTarget {
    #[arg(long)]
    pub user: String,
    /// produit, boutique, vendeur, annonce
    #[arg(long = "type")]
    pub type_element: String,
    /// Favorited element (uuid)
    #[arg(long)]
    pub element: String,
}

impl FavoriTarget {
    fn to_input(&self) -> Result<FavoriInput> {
        Ok(FavoriInput {
            utilisateur_uuid: self.user.clone(),
            type_element: validation::validate_type_element(&self.type_element)?,
            element_uuid: self.element.clone(),
        })
    }
}

pub async fn run(args: &FavorisArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let service = FavoriService::new(client);
    match &args.command {
        FavorisCommand::List {
            user,
            type_element,
            list,
        } => {
            let mut query = list
                .to_query::<FavoriQuery>()?
                .with_utilisateur(&validation::validate_uuid(user)?);
            if let Some(t) = type_element {
                query = query.with_type_element(validation::validate_type_element(t)?);
            }
            let page = service.list(&query).await?;
            print_page(&page, favori_rows, *format);
        }
        FavorisCommand::Toggle(target) => {
            let outcome = service.toggle_favori(&target.to_input()?).await?;
            if *format == OutputFormat::Json {
                print_json(&outcome);
            } else if outcome.added {
                println!("Ajouté aux favoris ({}).", outcome.favori.uuid);
            } else {
                println!("Retiré des favoris.");
            }
        }
        FavorisCommand::Add(target) => {
            let favori = service.create_favori(&target.to_input()?).await?;
            print_one(&favori, favori_rows, *format);
        }
        FavorisCommand::Remove { uuid } => {
            service.delete(uuid).await?;
            eprintln!("Favori supprimé.");
        }
    }
    Ok(())
}
