use crate::domain::{DeadLetterQueue, Error};

/// Logs rejected operations as warnings.
#[derive(Default, Debug)]
pub struct LogDLQ {}

impl DeadLetterQueue for LogDLQ {
    fn report(&self, error: &Error) {
        tracing::warn!(%error, "operation rejected");
    }
}

/// Keeps the rendered messages of rejected operations, in arrival order.
#[cfg(test)]
#[derive(Default, Debug)]
pub struct CollectingDLQ {
    reports: std::cell::RefCell<Vec<String>>,
}

#[cfg(test)]
impl CollectingDLQ {
    pub fn reports(&self) -> Vec<String> {
        self.reports.borrow().clone()
    }
}

#[cfg(test)]
impl DeadLetterQueue for CollectingDLQ {
    fn report(&self, error: &Error) {
        self.reports.borrow_mut().push(error.to_string());
    }
}
