use sea_orm::entity::prelude::*;

use crate::modules::contact::application::domain::entities::{Contact, ContactStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "contacts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub name: String,

    pub email: String,

    pub subject: String,

    #[sea_orm(column_type = "Text")]
    pub message: String,

    pub status: Status,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

/// Text column guarded by a CHECK constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Status {
    #[sea_orm(string_value = "unread")]
    Unread,

    #[sea_orm(string_value = "read")]
    Read,

    #[sea_orm(string_value = "replied")]
    Replied,
}

impl From<Status> for ContactStatus {
    fn from(s: Status) -> Self {
        match s {
            Status::Unread => ContactStatus::Unread,
            Status::Read => ContactStatus::Read,
            Status::Replied => ContactStatus::Replied,
        }
    }
}

impl From<ContactStatus> for Status {
    fn from(s: ContactStatus) -> Self {
        match s {
            ContactStatus::Unread => Status::Unread,
            ContactStatus::Read => Status::Read,
            ContactStatus::Replied => Status::Replied,
        }
    }
}

impl Model {
    pub fn to_domain(&self) -> Contact {
        Contact {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
            status: self.status.into(),
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
