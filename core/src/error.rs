use thiserror::Error;

/// Errors raised by the combinatorics functions on out-of-domain arguments.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid argument to {operation}: {}", describe(.n, .r))]
    InvalidArgument {
        operation: &'static str,
        n: i64,
        r: Option<i64>,
    },
}

fn describe(n: &i64, r: &Option<i64>) -> String {
    match r {
        Some(r) => format!("n = {}, r = {}", n, r),
        None => format!("n = {}", n),
    }
}

pub type Result<T> = std::result::Result<T, Error>;
