//! Tests for bounded query execution

use std::time::Duration;

use tp_core::errors::DomainError;

use crate::database::bounded;
use crate::InfrastructureError;

#[tokio::test(start_paused = true)]
async fn test_slow_query_times_out() {
    let slow = async {
        tokio::time::sleep(Duration::from_secs(10)).await;
        Ok::<_, sqlx::Error>(1)
    };

    let err = bounded("slow", Duration::from_millis(3000), slow)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        InfrastructureError::Timeout {
            operation: "slow",
            millis: 3000
        }
    ));

    let domain: DomainError = err.into();
    assert!(matches!(domain, DomainError::StorageFailure { .. }));
}

#[tokio::test]
async fn test_query_error_is_database_error() {
    let failing = async { Err::<i32, _>(sqlx::Error::RowNotFound) };
    let err = bounded("lookup", Duration::from_secs(1), failing)
        .await
        .unwrap_err();
    assert!(matches!(err, InfrastructureError::Database(_)));
}

#[tokio::test]
async fn test_fast_query_passes_through() {
    let value = bounded("fast", Duration::from_secs(1), async { Ok::<_, sqlx::Error>(7) })
        .await
        .unwrap();
    assert_eq!(value, 7);
}
