use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_button_table::Button;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserScore::Table)
                    .if_not_exists()
                    .col(pk_auto(UserScore::Id))
                    .col(string(UserScore::GuildId))
                    .col(string(UserScore::UserId))
                    .col(big_integer(UserScore::Score))
                    .col(
                        timestamp_with_time_zone(UserScore::AttemptDate)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_score_guild_id")
                            .from(UserScore::Table, UserScore::GuildId)
                            .to(Button::Table, Button::GuildId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Quota checks and per-user summaries filter on both columns
        manager
            .create_index(
                Index::create()
                    .name("idx_user_score_guild_user")
                    .table(UserScore::Table)
                    .col(UserScore::GuildId)
                    .col(UserScore::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_user_score_guild_user")
                    .table(UserScore::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserScore::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserScore {
    Table,
    Id,
    GuildId,
    UserId,
    Score,
    AttemptDate,
}
