//! Result objects returned by [`Account`](super::Account) operations.
//!
//! Every failure variant leaves the account untouched. `into_result` bridges
//! an outcome into [`AccountError`] for callers that want `?` propagation.

use super::AccountError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum DepositOutcome {
    Succeeded,
    FailedAccountClosed,
    FailedNegativeAmount,
    FailedAmountTooLarge,
}

impl DepositOutcome {
    pub fn into_result(self) -> Result<(), AccountError> {
        match self {
            Self::Succeeded => Ok(()),
            Self::FailedAccountClosed => Err(AccountError::DepositIntoClosedAccount),
            Self::FailedNegativeAmount => Err(AccountError::NegativeDeposit),
            Self::FailedAmountTooLarge => Err(AccountError::Overflow),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum WithdrawalOutcome {
    Succeeded,
    FailedAccountClosed,
    FailedNegativeAmount,
    FailedInsufficientFunds,
}

impl WithdrawalOutcome {
    pub fn into_result(self) -> Result<(), AccountError> {
        match self {
            Self::Succeeded => Ok(()),
            Self::FailedAccountClosed => Err(AccountError::WithdrawalFromClosedAccount),
            Self::FailedNegativeAmount => Err(AccountError::NegativeWithdrawal),
            Self::FailedInsufficientFunds => Err(AccountError::InsufficientFunds),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum InterestOutcome {
    Accrued,
    FailedAccountClosed,
    FailedNegativeRate,
    FailedAmountTooLarge,
}

impl InterestOutcome {
    pub fn into_result(self) -> Result<(), AccountError> {
        match self {
            Self::Accrued => Ok(()),
            Self::FailedAccountClosed => Err(AccountError::InterestOnClosedAccount),
            Self::FailedNegativeRate => Err(AccountError::NegativeInterestRate),
            Self::FailedAmountTooLarge => Err(AccountError::Overflow),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum CloseOutcome {
    Closed,
    FailedAccountNotEmpty,
}

impl CloseOutcome {
    pub fn into_result(self) -> Result<(), AccountError> {
        match self {
            Self::Closed => Ok(()),
            Self::FailedAccountNotEmpty => Err(AccountError::AccountNotEmpty),
        }
    }
}
