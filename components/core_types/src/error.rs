//! Arithmetic error types.

use thiserror::Error;

/// Failure of an integer arithmetic operation.
///
/// Float arithmetic never fails; it produces infinities or NaN instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithError {
    /// Integer floor division by zero
    #[error("attempt to perform 'n//0'")]
    DivideByZero,
    /// Integer modulo by zero
    #[error("attempt to perform 'n%0'")]
    ModuloByZero,
}
