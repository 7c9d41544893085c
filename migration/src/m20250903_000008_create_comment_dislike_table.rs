use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250901_000002_create_user_table::User, m20250903_000006_create_comment_table::Comment,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CommentDislike::Table)
                    .if_not_exists()
                    .col(pk_auto(CommentDislike::Id))
                    .col(integer(CommentDislike::CommentId))
                    .col(integer(CommentDislike::UserId))
                    .col(
                        timestamp(CommentDislike::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_dislike_comment_id")
                            .from(CommentDislike::Table, CommentDislike::CommentId)
                            .to(Comment::Table, Comment::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_dislike_user_id")
                            .from(CommentDislike::Table, CommentDislike::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_comment_dislike_comment_user")
                    .table(CommentDislike::Table)
                    .col(CommentDislike::CommentId)
                    .col(CommentDislike::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CommentDislike::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CommentDislike {
    Table,
    Id,
    CommentId,
    UserId,
    CreatedAt,
}
