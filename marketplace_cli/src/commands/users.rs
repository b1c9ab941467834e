use anyhow::Result;
use clap::{Args, Subcommand};
use marketplace_lib::validation;
use marketplace_lib::{Client, UserQuery, UserService};

use super::common::ListArgs;
use crate::output::{print_one, print_page, user_rows, OutputFormat};

#[derive(Args)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub command: UsersCommand,
}

#[derive(Subcommand)]
pub enum UsersCommand {
    /// List users
    List {
        #[command(flatten)]
        list: ListArgs,
        /// Only users holding this role (uuid)
        #[arg(long)]
        role: Option<String>,
        /// Filter by account type: admin, agent, vendeur, utilisateur (comma-separated)
        #[arg(long = "type", value_delimiter = ',')]
        types: Vec<String>,
    },
    /// Show one user
    Get { uuid: String },
    /// Switch a user between actif and inactif
    Toggle { uuid: String },
    /// Delete a user
    Delete { uuid: String },
}

pub async fn run(args: &UsersArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let service = UserService::new(client);
    match &args.command {
        UsersCommand::List { list, role, types } => {
            let mut query = list.to_query::<UserQuery>()?;
            for t in types {
                query = query.with_type(validation::validate_type_utilisateur(t)?);
            }
            let page = match role {
                Some(role) => service.list_by_role(role, query).await?,
                None => service.list(&query).await?,
            };
            print_page(&page, user_rows, *format);
        }
        UsersCommand::Get { uuid } => {
            print_one(&service.get(uuid).await?, user_rows, *format);
        }
        UsersCommand::Toggle { uuid } => {
            let updated = service.toggle_status(uuid).await?;
            eprintln!("Compte désormais {}.", updated.statut);
            print_one(&updated, user_rows, *format);
        }
        UsersCommand::Delete { uuid } => {
            service.delete(uuid).await?;
            eprintln!("Utilisateur supprimé.");
        }
    }
    Ok(())
}
