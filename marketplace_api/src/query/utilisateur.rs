use url::Url;

use crate::types::{EntityUuid, TypeUtilisateur};

use super::common::{Query, QueryCommon};

#[derive(Default, Clone, Debug, PartialEq)]
pub struct UserQuery {
    pub common: QueryCommon,
    pub role_uuid: Option<EntityUuid>,
    pub types: Vec<TypeUtilisateur>,
}

impl Query for UserQuery {
    fn common(&self) -> &QueryCommon {
        &self.common
    }
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        if let Some(role_uuid) = &self.role_uuid {
            url.query_pairs_mut()
                .append_pair("role_uuid", role_uuid.as_str());
        }
        for type_utilisateur in self.types.iter() {
            url.query_pairs_mut()
                .append_pair("type", type_utilisateur.to_string().as_str());
        }
        url
    }
}

impl UserQuery {
    pub fn with_role(mut self, role_uuid: &str) -> Self {
        self.role_uuid = Some(role_uuid.to_string());
        self
    }

    pub fn with_type(mut self, type_utilisateur: TypeUtilisateur) -> Self {
        self.types.push(type_utilisateur);
        self
    }

    pub fn with_types(mut self, types: &[TypeUtilisateur]) -> Self {
        self.types.extend_from_slice(types);
        self
    }
}
