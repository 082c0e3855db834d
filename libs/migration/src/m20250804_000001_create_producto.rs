use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Producto::Table)
                    .if_not_exists()
                    .col(pk_auto(Producto::Id))
                    .col(string_len(Producto::Modelo, 100))
                    .col(decimal_len(Producto::Precio, 10, 2))
                    .col(string_len(Producto::Almacenamiento, 20))
                    .col(string_len(Producto::Color, 30))
                    .col(integer(Producto::Stock).default(0))
                    .col(
                        timestamp_with_time_zone(Producto::FechaCreacion)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Filtered lookups scan on these columns
        manager
            .create_index(
                Index::create()
                    .name("idx_producto_modelo")
                    .table(Producto::Table)
                    .col(Producto::Modelo)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_producto_stock")
                    .table(Producto::Table)
                    .col(Producto::Stock)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Producto::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Producto {
    Table,
    Id,
    Modelo,
    Precio,
    Almacenamiento,
    Color,
    Stock,
    FechaCreacion,
}
