use anyhow::Result;
use clap::{Args, Subcommand};
use marketplace_lib::types::MessageInput;
use marketplace_lib::{Client, MessageQuery, MessageService};

use super::common::ListArgs;
use crate::output::{message_rows, print_json, print_one, print_page, OutputFormat};

#[derive(Args)]
pub struct MessagesArgs {
    #[command(subcommand)]
    pub command: MessagesCommand,
}

#[derive(Subcommand)]
pub enum MessagesCommand {
    /// Received messages
    Inbox {
        #[command(flatten)]
        list: ListArgs,
        /// Only unread messages
        #[arg(long)]
        unread: bool,
    },
    /// Sent messages
    Sent(ListArgs),
    /// Show a message and mark it as read
    Read { uuid: String },
    /// Send a message
    Send {
        /// Recipient (uuid)
        #[arg(long)]
        to: String,
        #[arg(long)]
        sujet: String,
        #[arg(long)]
        contenu: String,
    },
    /// Number of unread messages
    Unread,
    /// Delete a message
    Delete { uuid: String },
}

pub async fn run(args: &MessagesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let service = MessageService::new(client);
    match &args.command {
        MessagesCommand::Inbox { list, unread } => {
            let mut query = list.to_query::<MessageQuery>()?;
            if *unread {
                query = query.unread_only();
            }
            let page = service.inbox(&query).await?;
            print_page(&page, message_rows, *format);
        }
        MessagesCommand::Sent(list) => {
            let page = service.sent(&list.to_query::<MessageQuery>()?).await?;
            print_page(&page, message_rows, *format);
        }
        MessagesCommand::Read { uuid } => {
            let message = service.get(uuid).await?;
            if !message.est_lu {
                service.mark_as_read(uuid).await?;
            }
            print_one(&message, message_rows, *format);
            if *format != OutputFormat::Json {
                println!("{}", message.contenu);
            }
        }
        MessagesCommand::Send { to, sujet, contenu } => {
            let message = service
                .send(&MessageInput {
                    destinataire_uuid: to.clone(),
                    sujet: sujet.clone(),
                    contenu: contenu.clone(),
                })
                .await?;
            eprintln!("Message envoyé.");
            print_one(&message, message_rows, *format);
        }
        MessagesCommand::Unread => {
            let count = service.unread_count().await?;
            if *format == OutputFormat::Json {
                print_json(&serde_json::json!({ "non_lus": count }));
            } else {
                println!("{} message(s) non lu(s)", count);
            }
        }
        MessagesCommand::Delete { uuid } => {
            service.delete(uuid).await?;
            eprintln!("Message supprimé.");
        }
    }
    Ok(())
}
