use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Singleton row, one JSONB column per section
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Portfolio::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Portfolio::Id).text().not_null().primary_key())
                    .col(ColumnDef::new(Portfolio::Hero).json_binary().not_null())
                    .col(ColumnDef::new(Portfolio::AboutSubtitle).text().not_null())
                    .col(
                        ColumnDef::new(Portfolio::Skills)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Portfolio::Experience)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Portfolio::Achievements)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Portfolio::Services)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(ColumnDef::new(Portfolio::Contact).json_binary().not_null())
                    .col(ColumnDef::new(Portfolio::Settings).json_binary().not_null())
                    .col(
                        ColumnDef::new(Portfolio::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_portfolio_updated_at
                BEFORE UPDATE ON portfolio
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TRIGGER IF EXISTS update_portfolio_updated_at ON portfolio;")
            .await?;

        manager
            .drop_table(Table::drop().table(Portfolio::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Portfolio {
    Table,
    Id,
    Hero,
    AboutSubtitle,
    Skills,
    Experience,
    Achievements,
    Services,
    Contact,
    Settings,
    UpdatedAt,
}
