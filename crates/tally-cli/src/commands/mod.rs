mod balance;
pub use balance::*;

mod contacts;
pub use contacts::*;

mod link;
pub use link::*;

mod receive;
pub use receive::*;

mod recommend;
pub use recommend::*;

mod settle;
pub use settle::*;

mod transactions;
pub use transactions::*;
