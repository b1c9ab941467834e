//! Arguments shared by every `list` subcommand.

use anyhow::Result;
use clap::Args;
use marketplace_lib::validation;
use marketplace_lib::{Query, SortDirection};

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Page number
    #[arg(long, default_value = "1")]
    pub page: u64,

    /// Results per page
    #[arg(long, default_value = "20")]
    pub limit: u64,

    /// Free-text search
    #[arg(long)]
    pub search: Option<String>,

    /// Filter by status: actif, inactif
    #[arg(long)]
    pub statut: Option<String>,

    /// Server-side field to sort by (e.g. nom, created_at)
    #[arg(long)]
    pub sort_by: Option<String>,

    /// Sort ascending instead of descending
    #[arg(long)]
    pub asc: bool,
}

impl ListArgs {
    /// Validates the arguments and applies them to a fresh query.
    pub fn to_query<Q: Query + Default>(&self) -> Result<Q> {
        let mut query = Q::default()
            .with_page(validation::validate_page(self.page)?)
            .with_limit(validation::validate_limit(self.limit)?);

        if let Some(ref search) = self.search {
            query = query.with_search(&validation::validate_search(search)?);
        }
        if let Some(ref statut) = self.statut {
            query = query.with_statut(validation::validate_statut(statut)?);
        }
        if let Some(ref sort_by) = self.sort_by {
            query = query.with_sort_by(&validation::validate_search(sort_by)?);
        }
        if self.asc {
            query = query.with_sort_direction(SortDirection::Asc);
        }
        Ok(query)
    }
}
