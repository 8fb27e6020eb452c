//! Error types and small numeric/string helpers.

pub mod decimal;
pub mod error;
pub mod join;
pub mod range;

pub use decimal::{decimal_calc, CalcOp};
pub use error::{PixFindError, PixFindResult};
pub use join::{join_valid, Truthy};
pub use range::standard_num;
