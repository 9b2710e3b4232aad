//! A single bank account with cent-precise balances, plus a replay driver
//! that applies a CSV script of operations to it.

pub mod config;
pub mod dlq;
pub mod domain;
pub mod engine;
pub mod ingestion;
pub mod output_repository;

pub use domain::{
    Account, AccountError, CloseOutcome, DepositOutcome, Error, InterestOutcome, Money,
    Operation, WithdrawalOutcome,
};
