use sea_orm::entity::prelude::*;

/// Primary key of the only row.
pub const SINGLETON_ID: &str = "main";

/// One row, one JSONB column per independently writable section.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "portfolio")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub id: String,

    #[sea_orm(column_type = "JsonBinary")]
    pub hero: Json,

    #[sea_orm(column_type = "Text")]
    pub about_subtitle: String,

    #[sea_orm(column_type = "JsonBinary")]
    pub skills: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub experience: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub achievements: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub services: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub contact: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub settings: Json,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
