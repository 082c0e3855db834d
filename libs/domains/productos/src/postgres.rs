use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::{Expr, ExprTrait, Func, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    entity,
    error::{ProductoError, ProductoResult},
    models::{CreateProducto, Producto, UpdateProducto},
    repository::ProductoRepository,
};

pub struct PgProductoRepository {
    db: DatabaseConnection,
}

impl PgProductoRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_filtered(&self, filter: SimpleExpr) -> ProductoResult<Vec<Producto>> {
        let models = entity::Entity::find()
            .filter(filter)
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }
}

#[async_trait]
impl ProductoRepository for PgProductoRepository {
    async fn create(&self, input: CreateProducto) -> ProductoResult<Producto> {
        let active_model: entity::ActiveModel = input.into();

        let model = active_model.insert(&self.db).await?;

        tracing::info!(producto_id = %model.id, "Created producto");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> ProductoResult<Option<Producto>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;

        Ok(model.map(|m| m.into()))
    }

    async fn list(&self) -> ProductoResult<Vec<Producto>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn update(&self, id: i32, input: UpdateProducto) -> ProductoResult<Producto> {
        // Single read-modify-write; id and fecha_creacion are never touched
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(ProductoError::NotFound(id))?;

        let mut active_model: entity::ActiveModel = model.into();
        active_model.modelo = Set(input.modelo);
        active_model.precio = Set(input.precio);
        active_model.almacenamiento = Set(input.almacenamiento);
        active_model.color = Set(input.color);
        active_model.stock = Set(input.stock);

        let updated = active_model.update(&self.db).await?;

        tracing::info!(producto_id = %id, "Updated producto");
        Ok(updated.into())
    }

    async fn delete(&self, id: i32) -> ProductoResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(producto_id = %id, "Deleted producto");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn find_by_modelo(&self, modelo: &str) -> ProductoResult<Vec<Producto>> {
        let pattern = format!("%{}%", modelo.to_lowercase());
        self.find_filtered(
            Expr::expr(Func::lower(Expr::col(entity::Column::Modelo))).like(pattern),
        )
        .await
    }

    async fn find_by_color(&self, color: &str) -> ProductoResult<Vec<Producto>> {
        self.find_filtered(
            Expr::expr(Func::lower(Expr::col(entity::Column::Color))).eq(color.to_lowercase()),
        )
        .await
    }

    async fn find_by_almacenamiento(&self, almacenamiento: &str) -> ProductoResult<Vec<Producto>> {
        // Exact match, case-sensitive
        self.find_filtered(entity::Column::Almacenamiento.eq(almacenamiento))
            .await
    }

    async fn find_disponibles(&self) -> ProductoResult<Vec<Producto>> {
        self.find_filtered(entity::Column::Stock.gt(0)).await
    }
}
