use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250901_000002_create_user_table::User,
    m20250902_000004_create_pro_con_discussion_table::ProConDiscussion,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProConVote::Table)
                    .if_not_exists()
                    .col(pk_auto(ProConVote::Id))
                    .col(integer(ProConVote::DiscussionId))
                    .col(integer(ProConVote::UserId))
                    .col(boolean(ProConVote::IsAgree))
                    .col(
                        timestamp(ProConVote::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pro_con_vote_discussion_id")
                            .from(ProConVote::Table, ProConVote::DiscussionId)
                            .to(ProConDiscussion::Table, ProConDiscussion::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pro_con_vote_user_id")
                            .from(ProConVote::Table, ProConVote::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One vote per user per discussion; stance changes are updates.
        manager
            .create_index(
                Index::create()
                    .name("idx_pro_con_vote_discussion_user")
                    .table(ProConVote::Table)
                    .col(ProConVote::DiscussionId)
                    .col(ProConVote::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProConVote::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ProConVote {
    Table,
    Id,
    DiscussionId,
    UserId,
    IsAgree,
    CreatedAt,
}
