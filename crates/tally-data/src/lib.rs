// Operations
mod operations;
pub use operations::*;

// Models
mod transactions;
pub use transactions::*;

mod contacts;
pub use contacts::*;
