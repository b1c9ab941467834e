use anyhow::Result;
use clap::{Args, Subcommand};
use marketplace_lib::{Client, EchangeService, ListQuery};

use super::common::ListArgs;
use crate::output::{echange_rows, print_one, print_page, OutputFormat};

#[derive(Args)]
pub struct EchangesArgs {
    #[command(subcommand)]
    pub command: EchangesCommand,
}

#[derive(Subcommand)]
pub enum EchangesCommand {
    /// List exchange proposals
    List(ListArgs),
    /// Show one exchange proposal
    Get { uuid: String },
    /// Accept a pending proposal
    Accept { uuid: String },
    /// Refuse a pending proposal
    Refuse { uuid: String },
    /// Cancel a pending proposal
    Cancel { uuid: String },
}

pub async fn run(args: &EchangesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let service = EchangeService::new(client);
    let updated = match &args.command {
        EchangesCommand::List(list) => {
            let page = service.list(&list.to_query::<ListQuery>()?).await?;
            print_page(&page, echange_rows, *format);
            return Ok(());
        }
        EchangesCommand::Get { uuid } => service.get(uuid).await?,
        EchangesCommand::Accept { uuid } => service.accept(uuid).await?,
        EchangesCommand::Refuse { uuid } => service.refuse(uuid).await?,
        EchangesCommand::Cancel { uuid } => service.cancel(uuid).await?,
    };
    print_one(&updated, echange_rows, *format);
    Ok(())
}
