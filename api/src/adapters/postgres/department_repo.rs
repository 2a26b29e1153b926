//! PostgreSQL adapter for DepartmentRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::domain::entities::{Department, DepartmentId, DepartmentPatch, NewDepartment};
use crate::domain::ports::DepartmentRepository;
use crate::entity::departments;
use crate::error::DomainError;

/// PostgreSQL implementation of DepartmentRepository
pub struct PostgresDepartmentRepository {
    db: DatabaseConnection,
}

impl PostgresDepartmentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DepartmentRepository for PostgresDepartmentRepository {
    async fn find_all(&self) -> Result<Vec<Department>, DomainError> {
        let results = departments::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_id(&self, id: &DepartmentId) -> Result<Option<Department>, DomainError> {
        let result = departments::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_ids(&self, ids: &[DepartmentId]) -> Result<Vec<Department>, DomainError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let results = departments::Entity::find()
            .filter(departments::Column::Id.is_in(ids.iter().map(|id| id.0)))
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        departments::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))
    }

    async fn find_nth(&self, offset: u64) -> Result<Option<Department>, DomainError> {
        let result = departments::Entity::find()
            .order_by_asc(departments::Column::Id)
            .offset(offset)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn create(&self, department: &NewDepartment) -> Result<Department, DomainError> {
        let model = departments::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(department.name.clone()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn update(
        &self,
        id: &DepartmentId,
        patch: &DepartmentPatch,
    ) -> Result<Option<Department>, DomainError> {
        if patch.is_empty() {
            return self.find_by_id(id).await;
        }

        let mut model = departments::ActiveModel {
            id: Set(id.0),
            ..Default::default()
        };
        if let Some(name) = &patch.name {
            model.name = Set(name.clone());
        }

        match model.update(&self.db).await {
            Ok(updated) => Ok(Some(updated.into())),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(DomainError::Database(e.to_string())),
        }
    }

    async fn delete(&self, id: &DepartmentId) -> Result<Option<Department>, DomainError> {
        let Some(existing) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let result = departments::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            Ok(None)
        } else {
            Ok(Some(existing))
        }
    }

    async fn delete_all(&self) -> Result<u64, DomainError> {
        let result = departments::Entity::delete_many()
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.rows_affected)
    }
}

/// Convert SeaORM model to domain entity
impl From<departments::Model> for Department {
    fn from(model: departments::Model) -> Self {
        Department {
            id: DepartmentId(model.id),
            name: model.name,
        }
    }
}
