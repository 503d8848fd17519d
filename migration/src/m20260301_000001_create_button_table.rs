use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Button::Table)
                    .if_not_exists()
                    .col(string(Button::GuildId).primary_key())
                    .col(string_null(Button::CategoryId))
                    .col(string(Button::ButtonChannelId))
                    .col(string(Button::MessageId))
                    .col(string_null(Button::DiscussionChannelId))
                    .col(string_null(Button::VoiceChannelId))
                    .col(string(Button::Emoji))
                    .col(timestamp_with_time_zone(Button::StartTimestamp))
                    .col(timestamp_with_time_zone(Button::EndTimestamp))
                    .col(big_integer(Button::Seconds).default(0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Button::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Button {
    Table,
    GuildId,
    CategoryId,
    ButtonChannelId,
    MessageId,
    DiscussionChannelId,
    VoiceChannelId,
    Emoji,
    StartTimestamp,
    EndTimestamp,
    Seconds,
}
