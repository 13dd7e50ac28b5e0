pub mod category;
pub mod common;
pub mod transaction;

pub use category::Category;
pub use common::{AsTransaction, Displayable};
pub use transaction::{parse_date, Transaction, TransactionDraft, TransactionKind, MAX_AMOUNT};
