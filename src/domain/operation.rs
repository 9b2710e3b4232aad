use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Deposit { amount: Decimal },
    Withdrawal { amount: Decimal },
    Interest { rate: Decimal },
    Close,
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Operation::Deposit { amount } => write!(f, "deposit,amount={}", amount),
            Operation::Withdrawal { amount } => write!(f, "withdrawal,amount={}", amount),
            Operation::Interest { rate } => write!(f, "interest,rate={}", rate),
            Operation::Close => write!(f, "close"),
        }
    }
}
