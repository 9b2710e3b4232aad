use rust_decimal::Decimal;

use crate::domain::{CloseOutcome, DepositOutcome, InterestOutcome, Money, WithdrawalOutcome};

/// A single account. Starts open with a zero balance; once closed it never
/// accepts another mutation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Account {
    balance: Money, // never negative
    closed: bool,   // false -> true only, at zero balance
}

impl Account {
    pub fn new() -> Self {
        Self {
            balance: Money::zero(),
            closed: false,
        }
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Adds `amount`, rounded to cents, to the balance. Zero is accepted.
    pub fn deposit(&mut self, amount: Decimal) -> DepositOutcome {
        if self.closed {
            return DepositOutcome::FailedAccountClosed;
        }
        if amount.is_sign_negative() && !amount.is_zero() {
            return DepositOutcome::FailedNegativeAmount;
        }

        match self.balance.checked_add(Money::from_decimal(amount)) {
            Some(balance) => {
                self.balance = balance;
                DepositOutcome::Succeeded
            }
            None => DepositOutcome::FailedAmountTooLarge,
        }
    }

    /// Removes `amount`, rounded to cents, from the balance. The funds check
    /// runs against the rounded amount, so `1.995` is treated as `2.00`.
    pub fn withdraw(&mut self, amount: Decimal) -> WithdrawalOutcome {
        if self.closed {
            return WithdrawalOutcome::FailedAccountClosed;
        }
        if amount.is_sign_negative() && !amount.is_zero() {
            return WithdrawalOutcome::FailedNegativeAmount;
        }

        let amount = Money::from_decimal(amount);
        if amount > self.balance {
            return WithdrawalOutcome::FailedInsufficientFunds;
        }

        match self.balance.checked_sub(amount) {
            Some(balance) => {
                self.balance = balance;
                WithdrawalOutcome::Succeeded
            }
            None => WithdrawalOutcome::FailedInsufficientFunds,
        }
    }

    /// Credits `balance * rate`, rounded to cents. `rate` is a fraction,
    /// e.g. `0.07327` for 7.327%.
    pub fn accrue_interest(&mut self, rate: Decimal) -> InterestOutcome {
        if self.closed {
            return InterestOutcome::FailedAccountClosed;
        }
        if rate.is_sign_negative() && !rate.is_zero() {
            return InterestOutcome::FailedNegativeRate;
        }

        let balance = self
            .balance
            .checked_scale(rate)
            .and_then(|interest| self.balance.checked_add(interest));
        match balance {
            Some(balance) => {
                self.balance = balance;
                InterestOutcome::Accrued
            }
            None => InterestOutcome::FailedAmountTooLarge,
        }
    }

    /// Closes the account if it is empty. Closing twice is not an error.
    pub fn close(&mut self) -> CloseOutcome {
        if !self.balance.is_zero() {
            return CloseOutcome::FailedAccountNotEmpty;
        }

        self.closed = true;
        CloseOutcome::Closed
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn funded(amount: &str) -> Account {
        let mut account = Account::new();
        assert_eq!(account.deposit(dec(amount)), DepositOutcome::Succeeded);
        account
    }

    #[test]
    fn new_account_is_open_and_empty() {
        let account = Account::new();
        assert!(account.balance().is_zero());
        assert!(!account.is_closed());
        assert_eq!(account, Account::default());
    }

    #[test]
    fn deposit_rounds_to_the_nearest_cent() {
        let account = funded("1.235");
        assert_eq!(account.balance(), dec("1.24"));
    }

    #[test]
    fn zero_deposit_succeeds() {
        let mut account = funded("5");
        assert_eq!(account.deposit(Decimal::ZERO), DepositOutcome::Succeeded);
        assert_eq!(account.balance(), dec("5"));
    }

    #[test]
    fn zero_withdrawal_succeeds() {
        let mut account = funded("5");
        assert_eq!(account.withdraw(Decimal::ZERO), WithdrawalOutcome::Succeeded);
        assert_eq!(account.balance(), dec("5"));

        let mut empty = Account::new();
        assert_eq!(empty.withdraw(Decimal::ZERO), WithdrawalOutcome::Succeeded);
        assert!(empty.balance().is_zero());
    }

    #[test]
    fn negative_withdrawal_is_rejected_before_rounding() {
        let mut account = funded("5");
        assert_eq!(
            account.withdraw(dec("-0.001")),
            WithdrawalOutcome::FailedNegativeAmount
        );
        assert_eq!(account.balance(), dec("5"));
    }

    #[test]
    fn negative_deposit_is_rejected_before_rounding() {
        let mut account = funded("5");
        assert_eq!(
            account.deposit(dec("-0.001")),
            DepositOutcome::FailedNegativeAmount
        );
        assert_eq!(account.deposit(dec("-2")), DepositOutcome::FailedNegativeAmount);
        assert_eq!(account.balance(), dec("5"));
    }

    #[test]
    fn withdrawal_checks_funds_after_rounding() {
        let mut account = funded("20");
        assert_eq!(account.withdraw(dec("1.995")), WithdrawalOutcome::Succeeded);
        assert_eq!(account.balance(), dec("18.00"));

        let mut account = funded("20");
        assert_eq!(account.withdraw(dec("20.004")), WithdrawalOutcome::Succeeded);
        assert!(account.balance().is_zero());
    }

    #[test]
    fn overdraw_leaves_balance_alone() {
        let mut account = funded("20");
        assert_eq!(
            account.withdraw(dec("20.005")),
            WithdrawalOutcome::FailedInsufficientFunds
        );
        assert_eq!(account.balance(), dec("20"));
    }

    #[test]
    fn closed_checks_come_first() {
        let mut account = Account::new();
        assert_eq!(account.close(), CloseOutcome::Closed);
        assert_eq!(
            account.deposit(dec("-1")),
            DepositOutcome::FailedAccountClosed
        );
        assert_eq!(
            account.withdraw(dec("-1")),
            WithdrawalOutcome::FailedAccountClosed
        );
        assert_eq!(
            account.accrue_interest(dec("-1")),
            InterestOutcome::FailedAccountClosed
        );
    }

    #[test]
    fn interest_is_rounded_then_credited() {
        let mut account = funded("20");
        assert_eq!(account.accrue_interest(dec("0.07327")), InterestOutcome::Accrued);
        assert_eq!(account.balance(), dec("21.47"));
    }

    #[test]
    fn negative_rate_is_rejected() {
        let mut account = funded("20");
        assert_eq!(
            account.accrue_interest(dec("-0.01")),
            InterestOutcome::FailedNegativeRate
        );
        assert_eq!(account.accrue_interest(Decimal::ZERO), InterestOutcome::Accrued);
        assert_eq!(account.balance(), dec("20"));
    }

    #[test]
    fn close_requires_an_empty_account() {
        let mut account = funded("0.01");
        assert_eq!(account.close(), CloseOutcome::FailedAccountNotEmpty);
        assert!(!account.is_closed());

        assert_eq!(account.withdraw(dec("0.01")), WithdrawalOutcome::Succeeded);
        assert_eq!(account.close(), CloseOutcome::Closed);
        assert_eq!(account.close(), CloseOutcome::Closed);
        assert!(account.is_closed());
    }

    #[test]
    fn oversized_deposit_is_refused() {
        let mut account = funded("1");
        assert_eq!(
            account.deposit(Decimal::MAX),
            DepositOutcome::FailedAmountTooLarge
        );
        assert_eq!(account.balance(), dec("1"));
    }

    #[test]
    fn balance_is_capped_so_every_cent_counts() {
        let mut account = Account::new();
        assert_eq!(
            account.deposit(dec("1000000000000000000000000000")),
            DepositOutcome::FailedAmountTooLarge
        );
        assert!(account.balance().is_zero());

        assert_eq!(account.deposit(dec("9999999999999999999999999.98")), DepositOutcome::Succeeded);
        assert_eq!(account.deposit(dec("0.01")), DepositOutcome::Succeeded);
        assert_eq!(account.balance(), Money::MAX);
        assert_eq!(
            account.deposit(dec("0.01")),
            DepositOutcome::FailedAmountTooLarge
        );
        assert_eq!(account.deposit(dec("0.4")), DepositOutcome::FailedAmountTooLarge);
        assert_eq!(account.balance(), Money::MAX);

        assert_eq!(account.withdraw(dec("0.01")), WithdrawalOutcome::Succeeded);
        assert_eq!(account.balance(), dec("9999999999999999999999999.98"));
    }

    #[test]
    fn interest_past_the_cap_is_refused() {
        let mut account = Account::new();
        assert_eq!(account.deposit(dec("9999999999999999999999999")), DepositOutcome::Succeeded);
        assert_eq!(
            account.accrue_interest(dec("0.01")),
            InterestOutcome::FailedAmountTooLarge
        );
        assert_eq!(account.balance(), dec("9999999999999999999999999"));
    }
}
