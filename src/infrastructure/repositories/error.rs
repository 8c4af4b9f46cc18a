use crate::domain::errors::DomainError;

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            DomainError::Persistence(format!("database error: {}", db_err.message()))
        }
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
            DomainError::Persistence("comment store unavailable".into())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

pub fn map_reqwest(err: &reqwest::Error) -> DomainError {
    DomainError::Persistence(format!("comment service: {err}"))
}
