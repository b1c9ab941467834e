//! Reference lists maintained by administrators: countries and marital statuses.

use marketplace_api::endpoints;
use marketplace_api::types::{
    Pays, PaysInput, Statut, StatutMatrimonial, StatutMatrimonialInput,
};

use super::crud::{Crud, Resource, Toggleable};

pub type PaysService<'c> = Crud<'c, Pays>;
pub type StatutMatrimonialService<'c> = Crud<'c, StatutMatrimonial>;

impl Resource for Pays {
    type Input = PaysInput;
    const COLLECTION: &'static str = endpoints::PAYS;
    const LABEL: &'static str = "pays";
}

impl Toggleable for Pays {
    fn statut(&self) -> Statut {
        self.statut
    }
    fn input_with_statut(&self, statut: Statut) -> PaysInput {
        PaysInput {
            statut: Some(statut),
            ..PaysInput::from(self)
        }
    }
}

impl Resource for StatutMatrimonial {
    type Input = StatutMatrimonialInput;
    const COLLECTION: &'static str = endpoints::STATUTS_MATRIMONIAUX;
    const LABEL: &'static str = "statut matrimonial";
}

impl Toggleable for StatutMatrimonial {
    fn statut(&self) -> Statut {
        self.statut
    }
    fn input_with_statut(&self, statut: Statut) -> StatutMatrimonialInput {
        StatutMatrimonialInput {
            libelle: self.libelle.clone(),
            code: self.code.clone(),
            description: self.description.clone(),
            statut: Some(statut),
        }
    }
}
