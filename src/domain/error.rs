/// Business rule violations, carrying the messages shown to account holders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AccountError {
    #[error("You cannot deposit money into a closed account.")]
    DepositIntoClosedAccount,

    #[error("You cannot deposit a negative amount into an account.")]
    NegativeDeposit,

    #[error("You cannot withdraw money from a closed account.")]
    WithdrawalFromClosedAccount,

    #[error("You cannot withdraw a negative amount from an account.")]
    NegativeWithdrawal,

    #[error("There is not enough money to cover the withdrawal.")]
    InsufficientFunds,

    #[error("The account cannot be closed because there is money in the account.")]
    AccountNotEmpty,

    #[error("You cannot accrue interest on a closed account.")]
    InterestOnClosedAccount,

    #[error("You cannot accrue interest at a negative rate.")]
    NegativeInterestRate,

    #[error("The amount is too large to apply to the account.")]
    Overflow,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error("Ingestion failed with: {0}")]
    Ingestion(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Operation rejected: {0}")]
    Account(#[from] AccountError),
}
