use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
#[error("Retry failed")]
pub struct RetryFailed;

/// Run `f` until it succeeds, making at most `times` extra attempts.
pub fn retry<T, E, F>(times: u32, f: F) -> Result<T, RetryFailed>
where
    F: Fn() -> Result<T, E>,
    E: std::error::Error,
{
    let mut attempts_left = times;
    loop {
        match f() {
            Ok(value) => return Ok(value),
            Err(err) if attempts_left == 0 => {
                warn!("No more retry attempts. Error: {}", err);
                return Err(RetryFailed);
            }
            Err(err) => {
                warn!("Retry triggered. Error: {}", err);
                attempts_left -= 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Error, Debug)]
    #[error("Boom")]
    struct Boom;

    #[test]
    fn test_retry_eventually_succeeds() {
        let failures_left = Cell::new(2);
        let result = retry(2, || {
            if failures_left.get() > 0 {
                failures_left.set(failures_left.get() - 1);
                Err(Boom)
            } else {
                Ok(42)
            }
        });
        assert_eq!(result.unwrap(), 42);
    }

    #[test]
    fn test_retry_gives_up() {
        let result = retry(1, || Err::<(), Boom>(Boom));
        assert!(result.is_err());
    }
}
