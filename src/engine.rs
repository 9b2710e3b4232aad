use crate::domain::{
    Error, Operation,
    traits::{AccountRepository, DeadLetterQueue, OperationStream},
};

use futures::StreamExt;

/// Replays a stream of operations against one account. Rejected operations
/// go to the dead-letter queue and replay continues.
#[derive(Debug)]
pub struct Engine<I, O, D>
where
    I: OperationStream,
    O: AccountRepository,
    D: DeadLetterQueue,
{
    ingestion: I,
    output_repository: O,
    dlq: D,
}

impl<I, O, D> Engine<I, O, D>
where
    I: OperationStream,
    O: AccountRepository,
    D: DeadLetterQueue,
{
    pub fn new(ingestion: I, output_repository: O, dlq: D) -> Self {
        Self {
            ingestion,
            output_repository,
            dlq,
        }
    }

    pub async fn process(&mut self) -> Result<(), Error> {
        let mut res = self.ingestion.stream();

        while let Some(op) = res.next().await {
            match op {
                Ok(op) => match self.apply_operation(op) {
                    Ok(()) => tracing::debug!(%op, "operation applied"),
                    Err(e) => self.dlq.report(&e),
                },
                Err(e) => self.dlq.report(&e),
            }
        }

        Ok(())
    }

    fn apply_operation(&mut self, op: Operation) -> Result<(), Error> {
        let account = self.output_repository.account();

        match op {
            Operation::Deposit { amount } => account.deposit(amount).into_result()?,
            Operation::Withdrawal { amount } => account.withdraw(amount).into_result()?,
            Operation::Interest { rate } => account.accrue_interest(rate).into_result()?,
            Operation::Close => account.close().into_result()?,
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn output(&self) -> &O {
        &self.output_repository
    }

    #[cfg(test)]
    pub fn dlq(&self) -> &D {
        &self.dlq
    }

    pub fn flush(&mut self) {
        self.output_repository.flush();
    }
}
