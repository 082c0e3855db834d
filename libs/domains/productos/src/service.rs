use std::sync::Arc;
use validator::Validate;

use crate::error::{ProductoError, ProductoResult};
use crate::models::{CreateProducto, Producto, UpdateProducto};
use crate::repository::ProductoRepository;

/// Service layer for Producto business logic.
///
/// The only non-pass-through logic of the system lives here: input
/// validation, the update overwrite policy, and the translation of
/// repository-level absence into the NotFound failure for update/delete
/// (get keeps absence explicit until this boundary too).
#[derive(Clone)]
pub struct ProductoService<R: ProductoRepository> {
    repository: Arc<R>,
}

impl<R: ProductoRepository> ProductoService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all productos in persistence default order
    pub async fn list_productos(&self) -> ProductoResult<Vec<Producto>> {
        self.repository.list().await
    }

    /// Get a producto by id; absence becomes NotFound here
    pub async fn get_producto(&self, id: i32) -> ProductoResult<Producto> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductoError::NotFound(id))
    }

    /// Create a new producto; id and fecha_creacion are system-assigned
    pub async fn create_producto(&self, input: CreateProducto) -> ProductoResult<Producto> {
        input
            .validate()
            .map_err(|e| ProductoError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Overwrite the mutable fields of an existing producto
    pub async fn update_producto(&self, id: i32, input: UpdateProducto) -> ProductoResult<Producto> {
        input
            .validate()
            .map_err(|e| ProductoError::Validation(e.to_string()))?;

        self.repository.update(id, input).await
    }

    /// Delete a producto; deleting an absent id is NotFound, not a no-op
    pub async fn delete_producto(&self, id: i32) -> ProductoResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(ProductoError::NotFound(id));
        }

        Ok(())
    }

    /// Productos whose modelo contains the substring, case-insensitive
    pub async fn search_by_modelo(&self, modelo: &str) -> ProductoResult<Vec<Producto>> {
        self.repository.find_by_modelo(modelo).await
    }

    /// Productos whose color equals the value, case-insensitive
    pub async fn search_by_color(&self, color: &str) -> ProductoResult<Vec<Producto>> {
        self.repository.find_by_color(color).await
    }

    /// Productos whose almacenamiento equals the value exactly
    pub async fn search_by_almacenamiento(
        &self,
        almacenamiento: &str,
    ) -> ProductoResult<Vec<Producto>> {
        self.repository.find_by_almacenamiento(almacenamiento).await
    }

    /// Productos with stock strictly greater than zero
    pub async fn list_disponibles(&self) -> ProductoResult<Vec<Producto>> {
        self.repository.find_disponibles().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductoRepository;
    use chrono::Utc;
    use mockall::predicate::eq;

    fn producto(id: i32) -> Producto {
        Producto {
            id,
            modelo: "iPhone 14".to_string(),
            precio: "799.00".parse().unwrap(),
            almacenamiento: "128GB".to_string(),
            color: "Blue".to_string(),
            stock: 5,
            fecha_creacion: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_get_producto_translates_absence_to_not_found() {
        let mut mock_repo = MockProductoRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(42))
            .returning(|_| Ok(None));

        let service = ProductoService::new(mock_repo);
        let result = service.get_producto(42).await;

        assert!(matches!(result, Err(ProductoError::NotFound(42))));
    }

    #[tokio::test]
    async fn test_get_producto_found() {
        let mut mock_repo = MockProductoRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(1))
            .returning(|id| Ok(Some(producto(id))));

        let service = ProductoService::new(mock_repo);
        let found = service.get_producto(1).await.unwrap();

        assert_eq!(found.id, 1);
    }

    #[tokio::test]
    async fn test_create_producto_rejects_oversize_modelo() {
        // No repository expectations: validation must fail before any call
        let mock_repo = MockProductoRepository::new();
        let service = ProductoService::new(mock_repo);

        let input = CreateProducto {
            modelo: "a".repeat(101),
            precio: "799.00".parse().unwrap(),
            almacenamiento: "128GB".to_string(),
            color: "Blue".to_string(),
            stock: 0,
        };

        let result = service.create_producto(input).await;
        assert!(matches!(result, Err(ProductoError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_producto_rejects_empty_color() {
        let mock_repo = MockProductoRepository::new();
        let service = ProductoService::new(mock_repo);

        let input = UpdateProducto {
            modelo: "iPhone 14".to_string(),
            precio: "799.00".parse().unwrap(),
            almacenamiento: "128GB".to_string(),
            color: String::new(),
            stock: 0,
        };

        let result = service.update_producto(1, input).await;
        assert!(matches!(result, Err(ProductoError::Validation(_))));
    }

    #[tokio::test]
    async fn test_delete_producto_strict_on_missing() {
        let mut mock_repo = MockProductoRepository::new();
        mock_repo.expect_delete().with(eq(9)).returning(|_| Ok(false));

        let service = ProductoService::new(mock_repo);
        let result = service.delete_producto(9).await;

        assert!(matches!(result, Err(ProductoError::NotFound(9))));
    }

    #[tokio::test]
    async fn test_delete_producto_ok_when_removed() {
        let mut mock_repo = MockProductoRepository::new();
        mock_repo.expect_delete().with(eq(1)).returning(|_| Ok(true));

        let service = ProductoService::new(mock_repo);
        assert!(service.delete_producto(1).await.is_ok());
    }
}
