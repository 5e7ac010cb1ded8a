use crate::domain::errors::DomainError;

/// Every store failure is a persistence fault. Constraint violations only
/// happen when a write bypassed domain validation, so they are not reported
/// as client errors.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if db_err.is_unique_violation() {
                return DomainError::Persistence("duplicate article id".into());
            }
            if db_err.is_check_violation() {
                return DomainError::Persistence(format!(
                    "check constraint violated: {}",
                    db_err.message()
                ));
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
