use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Producto entity - one catalog entry for a specific device configuration
/// (model, storage size, color) with price and stock count.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Producto {
    /// Unique identifier, system-assigned at creation
    pub id: i32,
    /// Commercial model name (e.g. "iPhone 15 Pro")
    pub modelo: String,
    /// Unit price, 10 digits with 2 fractional
    pub precio: Decimal,
    /// Storage capacity descriptor (e.g. "128GB")
    pub almacenamiento: String,
    /// Color name
    pub color: String,
    /// Units in stock
    pub stock: i32,
    /// Creation timestamp, set once by the system
    #[serde(rename = "fechaCreacion")]
    pub fecha_creacion: DateTime<Utc>,
}

/// DTO for creating a new producto.
///
/// Carries no `id` or `fechaCreacion`: both are system-assigned, and any
/// values the caller sends under those keys are dropped on deserialization.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProducto {
    #[validate(length(min = 1, max = 100))]
    pub modelo: String,
    pub precio: Decimal,
    #[validate(length(min = 1, max = 20))]
    pub almacenamiento: String,
    #[validate(length(min = 1, max = 30))]
    pub color: String,
    #[serde(default)]
    pub stock: i32,
}

/// DTO for updating an existing producto.
///
/// All mutable fields are required: an update is a full overwrite of
/// modelo, precio, almacenamiento, color and stock. `id` and
/// `fechaCreacion` are never updatable.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateProducto {
    #[validate(length(min = 1, max = 100))]
    pub modelo: String,
    pub precio: Decimal,
    #[validate(length(min = 1, max = 20))]
    pub almacenamiento: String,
    #[validate(length(min = 1, max = 30))]
    pub color: String,
    pub stock: i32,
}

impl Producto {
    /// Build a persisted record from caller input and a system-assigned id.
    pub fn new(id: i32, input: CreateProducto) -> Self {
        Self {
            id,
            modelo: input.modelo,
            precio: input.precio,
            almacenamiento: input.almacenamiento,
            color: input.color,
            stock: input.stock,
            fecha_creacion: Utc::now(),
        }
    }

    /// Overwrite the mutable fields from an update; id and fecha_creacion
    /// stay untouched.
    pub fn apply_update(&mut self, update: UpdateProducto) {
        self.modelo = update.modelo;
        self.precio = update.precio;
        self.almacenamiento = update.almacenamiento;
        self.color = update.color;
        self.stock = update.stock;
    }
}
