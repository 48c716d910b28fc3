use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Genres are a JSON array of tags: ["Jazz", "Classical"]
        manager
            .alter_table(
                Table::alter()
                    .table("artists")
                    .add_column(
                        ColumnDef::new("genres")
                            .string()
                            .not_null()
                            .default("[]"),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table("artists")
                    .drop_column("genres")
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}
