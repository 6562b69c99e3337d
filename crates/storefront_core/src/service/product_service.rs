//! Product use-case service.

use crate::dto::product::{ProductCreateRequest, ProductResponse, ProductUpdateRequest};
use crate::model::product::Product;
use crate::model::{parse_wire_id, Record};
use crate::repo::product_repo::ProductRepository;
use crate::service::{ServiceError, ServiceResult};
use crate::validation::{ValidationError, Validator};

/// Product CRUD over any `ProductRepository`.
pub struct ProductService<R: ProductRepository> {
    repo: R,
    validator: Validator,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repo: R, validator: Validator) -> Self {
        Self { repo, validator }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Validates and stores a new product.
    pub fn create(&self, request: ProductCreateRequest) -> ServiceResult<ProductResponse> {
        self.validator.validate(&request)?;
        let saved = self.repo.save(Product::from(request))?;
        Ok(saved.into())
    }

    /// Replaces every field of the product named by `request.product_id`.
    pub fn update(&self, request: ProductUpdateRequest) -> ServiceResult<ProductResponse> {
        self.validator.validate(&request)?;
        let id = parse_wire_id(&request.product_id)
            .ok_or_else(|| ValidationError::invalid_id("product_id"))?;
        let saved = self.repo.save(request.into_product(id))?;
        Ok(saved.into())
    }

    /// Removes a product; ids with no stored record are ignored.
    pub fn delete(&self, id: &str) -> ServiceResult<()> {
        let Some(id) = parse_wire_id(id) else {
            return Ok(());
        };
        self.repo.delete(&Product::stub(id))?;
        Ok(())
    }

    pub fn find_by_id(&self, id: &str) -> ServiceResult<ProductResponse> {
        let key = parse_wire_id(id).ok_or_else(|| ServiceError::not_found(Product::ENTITY, id))?;
        Ok(self.repo.find_by_id(key)?.into())
    }

    pub fn find_all(&self) -> ServiceResult<Vec<ProductResponse>> {
        let products = self.repo.find_all()?;
        Ok(products.into_iter().map(ProductResponse::from).collect())
    }
}
