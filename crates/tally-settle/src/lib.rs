pub mod balance;
pub mod events;
pub mod recommend;
pub mod registry;
pub mod request;
pub mod split;

pub use balance::{balance, summarize_by_category, CategorySummary};
pub use events::{Dispatcher, Event};
pub use recommend::{Recommendation, Recommender, SimilarTransaction, TableRecommender};
pub use registry::{StaticRegistry, UserRegistry};
pub use request::SettlementRequest;
pub use split::{RemainderPolicy, Split, SplitError};
