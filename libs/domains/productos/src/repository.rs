use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};
use tokio::sync::RwLock;

use crate::error::{ProductoError, ProductoResult};
use crate::models::{CreateProducto, Producto, UpdateProducto};

/// Repository trait for Producto persistence.
///
/// Absence on `get_by_id` is a valid outcome (`None`), not an error; the
/// service layer decides where absence becomes a failure. `delete` reports
/// whether a row was actually removed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductoRepository: Send + Sync {
    /// Create a new producto with a generated id
    async fn create(&self, input: CreateProducto) -> ProductoResult<Producto>;

    /// Get a producto by id
    async fn get_by_id(&self, id: i32) -> ProductoResult<Option<Producto>>;

    /// List all productos
    async fn list(&self) -> ProductoResult<Vec<Producto>>;

    /// Overwrite the mutable fields of an existing producto
    async fn update(&self, id: i32, input: UpdateProducto) -> ProductoResult<Producto>;

    /// Delete a producto by id; false when no row existed
    async fn delete(&self, id: i32) -> ProductoResult<bool>;

    /// Productos whose modelo contains the substring, case-insensitive
    async fn find_by_modelo(&self, modelo: &str) -> ProductoResult<Vec<Producto>>;

    /// Productos whose color equals the value, case-insensitive
    async fn find_by_color(&self, color: &str) -> ProductoResult<Vec<Producto>>;

    /// Productos whose almacenamiento equals the value exactly
    async fn find_by_almacenamiento(&self, almacenamiento: &str) -> ProductoResult<Vec<Producto>>;

    /// Productos with stock strictly greater than zero
    async fn find_disponibles(&self) -> ProductoResult<Vec<Producto>>;
}

/// In-memory implementation of ProductoRepository (for development/testing).
///
/// Ids come from an atomic counter and are never reused within a process.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductoRepository {
    productos: Arc<RwLock<HashMap<i32, Producto>>>,
    next_id: Arc<AtomicI32>,
}

impl InMemoryProductoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductoRepository for InMemoryProductoRepository {
    async fn create(&self, input: CreateProducto) -> ProductoResult<Producto> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let producto = Producto::new(id, input);

        let mut productos = self.productos.write().await;
        productos.insert(id, producto.clone());

        tracing::info!(producto_id = %id, "Created producto");
        Ok(producto)
    }

    async fn get_by_id(&self, id: i32) -> ProductoResult<Option<Producto>> {
        let productos = self.productos.read().await;
        Ok(productos.get(&id).cloned())
    }

    async fn list(&self) -> ProductoResult<Vec<Producto>> {
        let productos = self.productos.read().await;
        let mut result: Vec<Producto> = productos.values().cloned().collect();
        result.sort_by_key(|p| p.id);
        Ok(result)
    }

    async fn update(&self, id: i32, input: UpdateProducto) -> ProductoResult<Producto> {
        let mut productos = self.productos.write().await;

        let producto = productos.get_mut(&id).ok_or(ProductoError::NotFound(id))?;
        producto.apply_update(input);
        let updated = producto.clone();

        tracing::info!(producto_id = %id, "Updated producto");
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> ProductoResult<bool> {
        let mut productos = self.productos.write().await;

        if productos.remove(&id).is_some() {
            tracing::info!(producto_id = %id, "Deleted producto");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn find_by_modelo(&self, modelo: &str) -> ProductoResult<Vec<Producto>> {
        let needle = modelo.to_lowercase();
        let productos = self.productos.read().await;
        let mut result: Vec<Producto> = productos
            .values()
            .filter(|p| p.modelo.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        result.sort_by_key(|p| p.id);
        Ok(result)
    }

    async fn find_by_color(&self, color: &str) -> ProductoResult<Vec<Producto>> {
        let productos = self.productos.read().await;
        let mut result: Vec<Producto> = productos
            .values()
            .filter(|p| p.color.eq_ignore_ascii_case(color))
            .cloned()
            .collect();
        result.sort_by_key(|p| p.id);
        Ok(result)
    }

    async fn find_by_almacenamiento(&self, almacenamiento: &str) -> ProductoResult<Vec<Producto>> {
        let productos = self.productos.read().await;
        let mut result: Vec<Producto> = productos
            .values()
            .filter(|p| p.almacenamiento == almacenamiento)
            .cloned()
            .collect();
        result.sort_by_key(|p| p.id);
        Ok(result)
    }

    async fn find_disponibles(&self) -> ProductoResult<Vec<Producto>> {
        let productos = self.productos.read().await;
        let mut result: Vec<Producto> = productos
            .values()
            .filter(|p| p.stock > 0)
            .cloned()
            .collect();
        result.sort_by_key(|p| p.id);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(modelo: &str, almacenamiento: &str, color: &str, stock: i32) -> CreateProducto {
        CreateProducto {
            modelo: modelo.to_string(),
            precio: "799.00".parse().unwrap(),
            almacenamiento: almacenamiento.to_string(),
            color: color.to_string(),
            stock,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = InMemoryProductoRepository::new();

        let first = repo.create(input("iPhone 14", "128GB", "Blue", 5)).await.unwrap();
        let second = repo.create(input("iPhone 15", "256GB", "Black", 3)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);

        let fetched = repo.get_by_id(first.id).await.unwrap();
        assert_eq!(fetched.unwrap().modelo, "iPhone 14");
    }

    #[tokio::test]
    async fn test_get_by_id_missing_is_none() {
        let repo = InMemoryProductoRepository::new();
        assert!(repo.get_by_id(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryProductoRepository::new();

        let first = repo.create(input("iPhone 14", "128GB", "Blue", 5)).await.unwrap();
        assert!(repo.delete(first.id).await.unwrap());

        let second = repo.create(input("iPhone 15", "256GB", "Black", 3)).await.unwrap();
        assert_ne!(second.id, first.id);
    }

    #[tokio::test]
    async fn test_update_keeps_id_and_fecha_creacion() {
        let repo = InMemoryProductoRepository::new();

        let created = repo.create(input("iPhone 14", "128GB", "Blue", 5)).await.unwrap();

        let updated = repo
            .update(
                created.id,
                UpdateProducto {
                    modelo: "iPhone 14 Pro".to_string(),
                    precio: "999.00".parse().unwrap(),
                    almacenamiento: "256GB".to_string(),
                    color: "Silver".to_string(),
                    stock: 2,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.fecha_creacion, created.fecha_creacion);
        assert_eq!(updated.modelo, "iPhone 14 Pro");
        assert_eq!(updated.stock, 2);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = InMemoryProductoRepository::new();

        let result = repo
            .update(
                7,
                UpdateProducto {
                    modelo: "iPhone 14".to_string(),
                    precio: "799.00".parse().unwrap(),
                    almacenamiento: "128GB".to_string(),
                    color: "Blue".to_string(),
                    stock: 0,
                },
            )
            .await;

        assert!(matches!(result, Err(ProductoError::NotFound(7))));
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let repo = InMemoryProductoRepository::new();

        let created = repo.create(input("iPhone 14", "128GB", "Blue", 5)).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(!repo.delete(created.id).await.unwrap());
        assert!(repo.get_by_id(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_modelo_substring_case_insensitive() {
        let repo = InMemoryProductoRepository::new();

        repo.create(input("iPhone 15 Pro", "256GB", "Black", 1)).await.unwrap();
        repo.create(input("iPhone SE", "64GB", "Red", 1)).await.unwrap();

        let found = repo.find_by_modelo("iphone").await.unwrap();
        assert_eq!(found.len(), 2);

        let found = repo.find_by_modelo("15 PRO").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].modelo, "iPhone 15 Pro");
    }

    #[tokio::test]
    async fn test_find_by_color_equality_case_insensitive() {
        let repo = InMemoryProductoRepository::new();

        repo.create(input("iPhone 15", "128GB", "black", 1)).await.unwrap();
        repo.create(input("iPhone 15", "128GB", "Blackish-Blue", 1)).await.unwrap();

        let found = repo.find_by_color("Black").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].color, "black");
    }

    #[tokio::test]
    async fn test_find_by_almacenamiento_exact_case_sensitive() {
        let repo = InMemoryProductoRepository::new();

        repo.create(input("iPhone 15", "128GB", "Blue", 1)).await.unwrap();
        repo.create(input("iPhone 15", "128gb", "Blue", 1)).await.unwrap();

        let found = repo.find_by_almacenamiento("128GB").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].almacenamiento, "128GB");
    }

    #[tokio::test]
    async fn test_find_disponibles_excludes_zero_stock() {
        let repo = InMemoryProductoRepository::new();

        let in_stock = repo.create(input("iPhone 15", "128GB", "Blue", 3)).await.unwrap();
        repo.create(input("iPhone 14", "128GB", "Red", 0)).await.unwrap();

        let found = repo.find_disponibles().await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, in_stock.id);
    }
}
