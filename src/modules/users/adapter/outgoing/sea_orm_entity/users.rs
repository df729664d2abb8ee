//! User account rows. Every profile column is nullable because signup flows
//! fill them in incrementally; only `status` carries a hard default.

use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use super::status::Status;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub newsletter: Option<bool>,
    pub verify_token: Option<String>,
    pub access_token: Option<String>,
    pub status: Status,
    pub organization_id: Option<i32>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Acts created by this user, as opposed to acts merely joined
    /// through `user_acts`.
    #[sea_orm(has_many = "super::acts::Entity")]
    OwnActs,
    #[sea_orm(has_many = "super::answers::Entity")]
    Answers,
    #[sea_orm(
        belongs_to = "super::organizations::Entity",
        from = "Column::OrganizationId",
        to = "super::organizations::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Organizations,
    #[sea_orm(has_many = "super::influencers::Entity")]
    Influencers,
    #[sea_orm(has_many = "super::brands::Entity")]
    Brands,
    #[sea_orm(has_many = "super::user_acts::Entity")]
    UserActs,
}

impl Related<super::answers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Answers.def()
    }
}

impl Related<super::organizations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Organizations.def()
    }
}

impl Related<super::influencers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Influencers.def()
    }
}

impl Related<super::brands::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Brands.def()
    }
}

impl Related<super::acts::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_acts::Relation::Acts.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_acts::Relation::Users.def().rev())
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if !insert {
            self.updated_at = Set(chrono::Utc::now().into());
        }
        Ok(self)
    }
}
