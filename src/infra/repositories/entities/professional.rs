//! Professional database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Professional;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "professionals")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub full_name: String,
    pub professional_title: String,
    pub phone_number: String,
    pub email: Option<String>,
    pub company: Option<String>,
    pub license_number: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Professional {
    fn from(model: Model) -> Self {
        Professional {
            id: model.id,
            full_name: model.full_name,
            professional_title: model.professional_title,
            phone_number: model.phone_number,
            email: model.email,
            company: model.company,
            license_number: model.license_number,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
