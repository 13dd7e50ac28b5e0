pub mod summary_service;
pub mod transaction_service;

pub use summary_service::{CategoryTotal, LedgerSummary, SummaryService};
pub use transaction_service::TransactionService;
