use std::io::Read;
use std::pin::Pin;
use std::str::FromStr;

use futures::stream::{self, Stream};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::traits::OperationStream;
use crate::domain::{Error, Operation};

pub struct CsvReader<R: Read> {
    reader: Option<csv::Reader<R>>,
}

impl<R: Read> CsvReader<R> {
    pub fn new(reader: R) -> Result<Self, Error> {
        let rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        Ok(Self { reader: Some(rdr) })
    }
}

/// Internal shape used only for CSV deserialization.
#[derive(Debug, Deserialize)]
struct CsvRow {
    op: String,
    amount: Option<String>,
}

fn parse_decimal(raw: &str) -> Result<Decimal, Error> {
    Decimal::from_str(raw.trim())
        .map_err(|e| Error::Ingestion(format!("Invalid amount {:?}: {}", raw, e)))
}

impl TryFrom<CsvRow> for Operation {
    type Error = Error;

    fn try_from(row: CsvRow) -> Result<Self, Self::Error> {
        let amount = row.amount.as_deref().filter(|a| !a.trim().is_empty());
        let op = match (row.op.trim().to_ascii_lowercase().as_str(), amount) {
            ("deposit", Some(amount)) => Operation::Deposit {
                amount: parse_decimal(amount)?,
            },
            ("withdrawal" | "withdraw", Some(amount)) => Operation::Withdrawal {
                amount: parse_decimal(amount)?,
            },
            ("interest", Some(rate)) => Operation::Interest {
                rate: parse_decimal(rate)?,
            },
            ("close", None) => Operation::Close,
            (op @ ("deposit" | "withdrawal" | "withdraw" | "interest"), None) => {
                return Err(Error::Ingestion(format!("{} requires an amount", op)));
            }
            ("close", Some(_)) => {
                return Err(Error::Ingestion("close does not take an amount".to_string()));
            }
            (other, _) => {
                return Err(Error::Ingestion(format!(
                    "Invalid operation type: {}",
                    other
                )));
            }
        };

        Ok(op)
    }
}

impl<R: Read + Send + 'static> OperationStream for CsvReader<R> {
    type OpStream = Pin<Box<dyn Stream<Item = Result<Operation, Error>> + Send>>;

    fn stream(&mut self) -> Self::OpStream {
        // Take ownership of the reader so the iterator owns all data and is 'static.
        let reader = match self.reader.take() {
            Some(r) => r,
            None => {
                // Already consumed
                return Box::pin(stream::iter(Vec::<Result<Operation, Error>>::new()));
            }
        };

        let iter = reader
            .into_deserialize::<CsvRow>()
            .map(|row_res| match row_res {
                Ok(row) => Operation::try_from(row),
                Err(e) => Err(Error::Ingestion(format!(
                    "CSV deserialization error: {}",
                    e
                ))),
            });

        Box::pin(stream::iter(iter))
    }
}
