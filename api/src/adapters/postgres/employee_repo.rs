//! PostgreSQL adapter for EmployeeRepository

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::domain::entities::{Employee, EmployeeFilter, EmployeeId, EmployeePatch, NewEmployee};
use crate::domain::ports::EmployeeRepository;
use crate::entity::employees;
use crate::error::DomainError;

/// PostgreSQL implementation of EmployeeRepository
pub struct PostgresEmployeeRepository {
    db: DatabaseConnection,
}

impl PostgresEmployeeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Translate a filter into a WHERE clause. An empty filter yields no clause.
fn condition(filter: &EmployeeFilter) -> Condition {
    let mut condition = Condition::all();

    if let Some(first_name) = &filter.first_name {
        condition = condition.add(employees::Column::FirstName.eq(first_name.clone()));
    }
    if let Some(last_name) = &filter.last_name {
        condition = condition.add(employees::Column::LastName.eq(last_name.clone()));
    }
    if let Some(department) = &filter.department {
        condition = condition.add(employees::Column::Department.eq(department.clone()));
    }

    condition
}

/// Active model carrying only the fields the patch sets
fn patch_model(id: &EmployeeId, patch: &EmployeePatch) -> employees::ActiveModel {
    let mut model = employees::ActiveModel {
        id: Set(id.0),
        ..Default::default()
    };

    if let Some(first_name) = &patch.first_name {
        model.first_name = Set(first_name.clone());
    }
    if let Some(last_name) = &patch.last_name {
        model.last_name = Set(last_name.clone());
    }
    if let Some(department) = &patch.department {
        model.department = Set(department.clone());
    }

    model
}

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepository {
    async fn find(&self, filter: &EmployeeFilter) -> Result<Vec<Employee>, DomainError> {
        let results = employees::Entity::find()
            .filter(condition(filter))
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_one(&self, filter: &EmployeeFilter) -> Result<Option<Employee>, DomainError> {
        let result = employees::Entity::find()
            .filter(condition(filter))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, DomainError> {
        let result = employees::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn count(&self) -> Result<u64, DomainError> {
        employees::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))
    }

    async fn find_nth(&self, offset: u64) -> Result<Option<Employee>, DomainError> {
        let result = employees::Entity::find()
            .order_by_asc(employees::Column::Id)
            .offset(offset)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn create(&self, employee: &NewEmployee) -> Result<Employee, DomainError> {
        let model = employees::ActiveModel {
            id: Set(Uuid::new_v4()),
            first_name: Set(employee.first_name.clone()),
            last_name: Set(employee.last_name.clone()),
            department: Set(employee.department.clone()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn update(
        &self,
        id: &EmployeeId,
        patch: &EmployeePatch,
    ) -> Result<Option<Employee>, DomainError> {
        if patch.is_empty() {
            return self.find_by_id(id).await;
        }

        match patch_model(id, patch).update(&self.db).await {
            Ok(updated) => Ok(Some(updated.into())),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(DomainError::Database(e.to_string())),
        }
    }

    async fn save(&self, employee: &Employee) -> Result<Option<Employee>, DomainError> {
        let model = employees::ActiveModel {
            id: Set(employee.id.0),
            first_name: Set(employee.first_name.clone()),
            last_name: Set(employee.last_name.clone()),
            department: Set(employee.department.clone()),
        };

        match model.update(&self.db).await {
            Ok(saved) => Ok(Some(saved.into())),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(DomainError::Database(e.to_string())),
        }
    }

    async fn update_many(
        &self,
        filter: &EmployeeFilter,
        patch: &EmployeePatch,
    ) -> Result<u64, DomainError> {
        if patch.is_empty() {
            return Ok(0);
        }

        let mut update = employees::Entity::update_many().filter(condition(filter));
        if let Some(first_name) = &patch.first_name {
            update = update.col_expr(employees::Column::FirstName, Expr::value(first_name.clone()));
        }
        if let Some(last_name) = &patch.last_name {
            update = update.col_expr(employees::Column::LastName, Expr::value(last_name.clone()));
        }
        if let Some(department) = &patch.department {
            update = update.col_expr(
                employees::Column::Department,
                Expr::value(department.clone()),
            );
        }

        let result = update
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.rows_affected)
    }

    async fn delete(&self, id: &EmployeeId) -> Result<Option<Employee>, DomainError> {
        let Some(existing) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let result = employees::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            Ok(None)
        } else {
            Ok(Some(existing))
        }
    }

    async fn delete_many(&self, filter: &EmployeeFilter) -> Result<u64, DomainError> {
        let result = employees::Entity::delete_many()
            .filter(condition(filter))
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.rows_affected)
    }
}

/// Convert SeaORM model to domain entity
impl From<employees::Model> for Employee {
    fn from(model: employees::Model) -> Self {
        Employee {
            id: EmployeeId(model.id),
            first_name: model.first_name,
            last_name: model.last_name,
            department: model.department,
        }
    }
}
