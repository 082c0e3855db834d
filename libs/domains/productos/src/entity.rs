use crate::models::{CreateProducto, Producto};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the producto table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "producto")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub modelo: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub precio: Decimal,
    pub almacenamiento: String,
    pub color: String,
    pub stock: i32,
    pub fecha_creacion: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from SeaORM Model to domain Producto
impl From<Model> for Producto {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            modelo: model.modelo,
            precio: model.precio,
            almacenamiento: model.almacenamiento,
            color: model.color,
            stock: model.stock,
            fecha_creacion: model.fecha_creacion.into(),
        }
    }
}

// Conversion from domain CreateProducto to SeaORM ActiveModel.
// The id stays NotSet so the database sequence assigns it.
impl From<CreateProducto> for ActiveModel {
    fn from(input: CreateProducto) -> Self {
        ActiveModel {
            id: NotSet,
            modelo: Set(input.modelo),
            precio: Set(input.precio),
            almacenamiento: Set(input.almacenamiento),
            color: Set(input.color),
            stock: Set(input.stock),
            fecha_creacion: Set(chrono::Utc::now().into()),
        }
    }
}
