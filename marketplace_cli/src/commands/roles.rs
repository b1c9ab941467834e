use anyhow::Result;
use clap::{Args, Subcommand};
use marketplace_lib::types::RoleInput;
use marketplace_lib::validation;
use marketplace_lib::{Client, ListQuery, RoleService};

use super::common::ListArgs;
use crate::output::{print_one, print_page, role_rows, OutputFormat};

#[derive(Args)]
pub struct RolesArgs {
    #[command(subcommand)]
    pub command: RolesCommand,
}

#[derive(Subcommand)]
pub enum RolesCommand {
    /// List roles
    List(ListArgs),
    /// Show one role
    Get { uuid: String },
    /// Create a role
    Create {
        #[arg(long)]
        nom: String,
        #[arg(long)]
        description: Option<String>,
        /// Permission name, repeatable
        #[arg(long = "permission")]
        permissions: Vec<String>,
    },
    /// Switch a role between actif and inactif
    Toggle { uuid: String },
    /// Delete a role
    Delete { uuid: String },
}

pub async fn run(args: &RolesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let service = RoleService::new(client);
    match &args.command {
        RolesCommand::List(list) => {
            let page = service.list(&list.to_query::<ListQuery>()?).await?;
            print_page(&page, role_rows, *format);
        }
        RolesCommand::Get { uuid } => {
            let role = service.get(uuid).await?;
            print_one(&role, role_rows, *format);
            if *format != OutputFormat::Json && !role.permissions.is_empty() {
                println!("Permissions : {}", role.permissions.join(", "));
            }
        }
        RolesCommand::Create {
            nom,
            description,
            permissions,
        } => {
            let input = RoleInput {
                nom: validation::validate_name(nom)?,
                description: description
                    .as_deref()
                    .map(validation::validate_message)
                    .transpose()?,
                permissions: permissions
                    .iter()
                    .map(|p| validation::validate_name(p))
                    .collect::<Result<Vec<_>, _>>()?,
                statut: None,
            };
            let created = service.create(&input).await?;
            eprintln!("Rôle créé.");
            print_one(&created, role_rows, *format);
        }
        RolesCommand::Toggle { uuid } => {
            let updated = service.toggle_status(uuid).await?;
            eprintln!("Rôle désormais {}.", updated.statut);
            print_one(&updated, role_rows, *format);
        }
        RolesCommand::Delete { uuid } => {
            service.delete(uuid).await?;
            eprintln!("Rôle supprimé.");
        }
    }
    Ok(())
}
