pub mod booking;
pub mod customers;
pub mod query;
pub mod seed;

pub use booking::{BookingService, PurchaseRequest};
pub use customers::{CustomerRegistry, ResetSummary};
pub use query::QueryService;
