use futures::Stream;

use crate::domain::{Account, Error, Operation};

pub trait OperationStream {
    type OpStream: Stream<Item = Result<Operation, Error>> + Send + Unpin + 'static;
    fn stream(&mut self) -> Self::OpStream;
}

pub trait DeadLetterQueue {
    fn report(&self, error: &Error);
}

pub trait AccountRepository {
    fn account(&mut self) -> &mut Account;
    fn flush(&mut self);
}
