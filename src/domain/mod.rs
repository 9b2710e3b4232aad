pub mod account;
pub mod error;
pub mod money;
pub mod operation;
pub mod outcome;
pub mod traits;

pub use account::Account;
pub use error::{AccountError, Error};
pub use money::Money;
pub use operation::Operation;
pub use outcome::{CloseOutcome, DepositOutcome, InterestOutcome, WithdrawalOutcome};
pub use traits::{AccountRepository, DeadLetterQueue, OperationStream};
