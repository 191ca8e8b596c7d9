use thiserror::Error;

// Postgres SQLSTATE for foreign_key_violation.
const FOREIGN_KEY_VIOLATION: &str = "23503";

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    #[error("Missing reference: {0}")]
    ForeignKey(String),

    #[error("Invalid {entity}: {reason}")]
    InvalidInput { entity: &'static str, reason: String },

    #[error("No ids left for {entity}")]
    IdsExhausted { entity: &'static str },

    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl RepositoryError {
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn invalid_input(entity: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            entity,
            reason: reason.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) {
                return Self::ForeignKey(db_err.message().to_string());
            }
        }
        Self::Database(err)
    }
}
