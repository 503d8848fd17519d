use sea_orm::entity::prelude::*;

/// One event per guild.
///
/// Discord snowflakes are stored as strings. `seconds` is the shared counter: the number of
/// ticks since the last successful claim.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "button")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub guild_id: String,
    pub category_id: Option<String>,
    pub button_channel_id: String,
    pub message_id: String,
    pub discussion_channel_id: Option<String>,
    pub voice_channel_id: Option<String>,
    pub emoji: String,
    pub start_timestamp: DateTimeUtc,
    pub end_timestamp: DateTimeUtc,
    pub seconds: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_score::Entity")]
    UserScore,
}

impl Related<super::user_score::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserScore.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
