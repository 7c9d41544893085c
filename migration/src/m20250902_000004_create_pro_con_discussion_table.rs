use sea_orm_migration::{prelude::*, schema::*};

use super::m20250901_000003_create_post_table::Post;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProConDiscussion::Table)
                    .if_not_exists()
                    .col(pk_auto(ProConDiscussion::Id))
                    .col(integer_uniq(ProConDiscussion::PostId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pro_con_discussion_post_id")
                            .from(ProConDiscussion::Table, ProConDiscussion::PostId)
                            .to(Post::Table, Post::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProConDiscussion::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ProConDiscussion {
    Table,
    Id,
    PostId,
}
