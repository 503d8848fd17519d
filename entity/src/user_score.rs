use sea_orm::entity::prelude::*;

/// A single claim: the counter value a user took from the button.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_score")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub guild_id: String,
    pub user_id: String,
    pub score: i64,
    pub attempt_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::button::Entity",
        from = "Column::GuildId",
        to = "super::button::Column::GuildId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Button,
}

impl Related<super::button::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Button.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
