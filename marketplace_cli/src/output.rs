use chrono::{DateTime, Utc};
use marketplace_lib::types::{
    Echange, Favori, Message, Pays, Produit, Role, StatutMatrimonial, Utilisateur,
};
use marketplace_lib::Page;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Markdown,
}

#[derive(Tabled)]
pub struct PaysRow {
    #[tabled(rename = "UUID")]
    uuid: String,
    #[tabled(rename = "Nom")]
    nom: String,
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Indicatif")]
    indicatif: String,
    #[tabled(rename = "Statut")]
    statut: String,
    #[tabled(rename = "Créé le")]
    created_at: String,
}

#[derive(Tabled)]
pub struct StatutMatrimonialRow {
    #[tabled(rename = "UUID")]
    uuid: String,
    #[tabled(rename = "Libellé")]
    libelle: String,
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Statut")]
    statut: String,
}

#[derive(Tabled)]
pub struct RoleRow {
    #[tabled(rename = "UUID")]
    uuid: String,
    #[tabled(rename = "Nom")]
    nom: String,
    #[tabled(rename = "Permissions")]
    permissions: usize,
    #[tabled(rename = "Statut")]
    statut: String,
}

#[derive(Tabled)]
pub struct UserRow {
    #[tabled(rename = "UUID")]
    uuid: String,
    #[tabled(rename = "Nom")]
    nom: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Type")]
    type_utilisateur: String,
    #[tabled(rename = "Statut")]
    statut: String,
}

#[derive(Tabled)]
pub struct MessageRow {
    #[tabled(rename = "UUID")]
    uuid: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Sujet")]
    sujet: String,
    #[tabled(rename = "Lu")]
    lu: String,
}

#[derive(Tabled)]
pub struct FavoriRow {
    #[tabled(rename = "UUID")]
    uuid: String,
    #[tabled(rename = "Type")]
    type_element: String,
    #[tabled(rename = "Élément")]
    element_uuid: String,
    #[tabled(rename = "Ajouté le")]
    created_at: String,
}

#[derive(Tabled)]
pub struct ProduitRow {
    #[tabled(rename = "UUID")]
    uuid: String,
    #[tabled(rename = "Libellé")]
    libelle: String,
    #[tabled(rename = "Prix")]
    prix: String,
    #[tabled(rename = "Quantité")]
    quantite: String,
    #[tabled(rename = "Statut")]
    statut: String,
}

#[derive(Tabled)]
pub struct EchangeRow {
    #[tabled(rename = "UUID")]
    uuid: String,
    #[tabled(rename = "Produit")]
    produit_uuid: String,
    #[tabled(rename = "Demandeur")]
    demandeur_uuid: String,
    #[tabled(rename = "Statut")]
    statut: String,
    #[tabled(rename = "Date")]
    created_at: String,
}

// -- Row builders --

pub fn pays_rows(items: &[Pays]) -> Vec<PaysRow> {
    items
        .iter()
        .map(|p| PaysRow {
            uuid: p.uuid.clone(),
            nom: p.nom.clone(),
            code: p.code.clone(),
            indicatif: p.indicatif.clone().unwrap_or_default(),
            statut: p.statut.to_string(),
            created_at: format_date(p.created_at),
        })
        .collect()
}

pub fn statut_matrimonial_rows(items: &[StatutMatrimonial]) -> Vec<StatutMatrimonialRow> {
    items
        .iter()
        .map(|s| StatutMatrimonialRow {
            uuid: s.uuid.clone(),
            libelle: s.libelle.clone(),
            code: s.code.clone().unwrap_or_default(),
            statut: s.statut.to_string(),
        })
        .collect()
}

pub fn role_rows(items: &[Role]) -> Vec<RoleRow> {
    items
        .iter()
        .map(|r| RoleRow {
            uuid: r.uuid.clone(),
            nom: r.nom.clone(),
            permissions: r.permissions.len(),
            statut: r.statut.to_string(),
        })
        .collect()
}

pub fn user_rows(items: &[Utilisateur]) -> Vec<UserRow> {
    items
        .iter()
        .map(|u| UserRow {
            uuid: u.uuid.clone(),
            nom: u.full_name(),
            email: u.email.clone(),
            type_utilisateur: u.type_utilisateur.to_string(),
            statut: u.statut.to_string(),
        })
        .collect()
}

pub fn message_rows(items: &[Message]) -> Vec<MessageRow> {
    items
        .iter()
        .map(|m| MessageRow {
            uuid: m.uuid.clone(),
            date: format_date(m.created_at),
            sujet: if m.sujet.is_empty() {
                truncate(&m.contenu, 40)
            } else {
                truncate(&m.sujet, 40)
            },
            lu: if m.est_lu { "oui" } else { "non" }.to_string(),
        })
        .collect()
}

pub fn favori_rows(items: &[Favori]) -> Vec<FavoriRow> {
    items
        .iter()
        .map(|f| FavoriRow {
            uuid: f.uuid.clone(),
            type_element: f.type_element.to_string(),
            element_uuid: f.element_uuid.clone(),
            created_at: format_date(f.created_at),
        })
        .collect()
}

pub fn produit_rows(items: &[Produit]) -> Vec<ProduitRow> {
    items
        .iter()
        .map(|p| ProduitRow {
            uuid: p.uuid.clone(),
            libelle: p.libelle.clone(),
            prix: p.prix.map(format_prix).unwrap_or_else(|| "-".to_string()),
            quantite: p
                .quantite
                .map(|q| q.to_string())
                .unwrap_or_else(|| "-".to_string()),
            statut: p.statut.to_string(),
        })
        .collect()
}

pub fn echange_rows(items: &[Echange]) -> Vec<EchangeRow> {
    items
        .iter()
        .map(|e| EchangeRow {
            uuid: e.uuid.clone(),
            produit_uuid: e.produit_uuid.clone(),
            demandeur_uuid: e.demandeur_uuid.clone(),
            statut: e.statut.to_string(),
            created_at: format_date(e.created_at),
        })
        .collect()
}

// -- Printing --

/// Prints one page of results, with the paging summary on stderr.
pub fn print_page<T, R, F>(page: &Page<T>, build: F, format: OutputFormat)
where
    T: Serialize,
    R: Tabled,
    F: Fn(&[T]) -> Vec<R>,
{
    eprintln!(
        "Page {}/{} ({} au total)",
        page.page, page.pages, page.total
    );
    match format {
        OutputFormat::Json => print_json(page),
        _ => print_rows(build(&page.items), format),
    }
}

/// Prints a single entity as a one-row table, or as JSON.
pub fn print_one<T, R, F>(item: &T, build: F, format: OutputFormat)
where
    T: Serialize,
    R: Tabled,
    F: Fn(&[T]) -> Vec<R>,
{
    match format {
        OutputFormat::Json => print_json(item),
        _ => print_rows(build(std::slice::from_ref(item)), format),
    }
}

fn print_rows<R: Tabled>(rows: Vec<R>, format: OutputFormat) {
    let mut table = Table::new(rows);
    if format == OutputFormat::Markdown {
        table.with(Style::markdown());
    }
    println!("{}", table);
}

pub fn print_json<T: Serialize + ?Sized>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn format_date(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Whole-unit price with space-separated thousands, e.g. `12 500 FCFA`.
fn format_prix(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    let sign = if rounded < 0 { "-" } else { "" };
    format!("{}{} FCFA", sign, grouped)
}

fn truncate(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }
    let mut out: String = value.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}
