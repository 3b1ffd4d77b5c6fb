//! sqlx 错误到 `AppError` 的映射

use purchase_errors::AppError;
use sqlx::error::ErrorKind;

/// 读操作失败一律视为数据库错误
pub fn map_read_error(context: &str, err: sqlx::Error) -> AppError {
    AppError::database(format!("{}: {}", context, err))
}

/// 写操作失败
///
/// 被数据库拒绝的语句（约束冲突、非法数据等）属于客户端输入问题，映射为
/// `Validation`；连接、连接池等其余错误映射为 `Database`。
pub fn map_write_error(context: &str, err: sqlx::Error) -> AppError {
    match err {
        sqlx::Error::Database(db) => {
            let reason = match db.kind() {
                ErrorKind::UniqueViolation => "record already exists",
                ErrorKind::ForeignKeyViolation => "referenced record does not exist",
                ErrorKind::NotNullViolation => "required field is missing",
                ErrorKind::CheckViolation => "value violates a check constraint",
                _ => "statement rejected by database",
            };
            AppError::validation(format!("{}: {} ({})", context, reason, db.message()))
        }
        other => AppError::database(format!("{}: {}", context, other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_is_database() {
        let err = map_read_error("Failed to fetch customer", sqlx::Error::PoolTimedOut);
        assert!(matches!(err, AppError::Database(ref m) if m.starts_with("Failed to fetch customer")));
    }

    #[test]
    fn test_write_error_without_statement_is_database() {
        let err = map_write_error("Failed to insert lot", sqlx::Error::PoolClosed);
        assert!(matches!(err, AppError::Database(_)));
    }

    #[test]
    fn test_row_not_found_on_write_is_database() {
        let err = map_write_error("Failed to insert lot", sqlx::Error::RowNotFound);
        assert!(!err.is_client_error());
    }
}
