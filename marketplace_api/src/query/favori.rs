use url::Url;

use crate::types::{EntityUuid, FavoriInput, TypeElement};

use super::common::{Query, QueryCommon};

#[derive(Default, Clone, Debug, PartialEq)]
pub struct FavoriQuery {
    pub common: QueryCommon,
    pub utilisateur_uuid: Option<EntityUuid>,
    pub type_element: Option<TypeElement>,
    pub element_uuid: Option<EntityUuid>,
}

impl Query for FavoriQuery {
    fn common(&self) -> &QueryCommon {
        &self.common
    }
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        if let Some(utilisateur_uuid) = &self.utilisateur_uuid {
            url.query_pairs_mut()
                .append_pair("utilisateur_uuid", utilisateur_uuid.as_str());
        }
        if let Some(type_element) = &self.type_element {
            url.query_pairs_mut()
                .append_pair("type_element", type_element.to_string().as_str());
        }
        if let Some(element_uuid) = &self.element_uuid {
            url.query_pairs_mut()
                .append_pair("element_uuid", element_uuid.as_str());
        }
        url
    }
}

impl FavoriQuery {
    /// Query matching exactly the favorite described by `input`.
    pub fn for_input(input: &FavoriInput) -> Self {
        FavoriQuery::default()
            .with_utilisateur(&input.utilisateur_uuid)
            .with_type_element(input.type_element)
            .with_element(&input.element_uuid)
    }

    pub fn with_utilisateur(mut self, utilisateur_uuid: &str) -> Self {
        self.utilisateur_uuid = Some(utilisateur_uuid.to_string());
        self
    }

    pub fn with_type_element(mut self, type_element: TypeElement) -> Self {
        self.type_element = Some(type_element);
        self
    }

    pub fn with_element(mut self, element_uuid: &str) -> Self {
        self.element_uuid = Some(element_uuid.to_string());
        self
    }
}
