use std::path::PathBuf;

use crate::domain::Error;

const USAGE: &str = "usage: bank_account <operations.csv>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
}

impl Config {
    /// Builds the configuration from process arguments, program name first.
    pub fn from_args<I>(args: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter().skip(1);

        let input = args
            .next()
            .ok_or_else(|| Error::Config(format!("missing input file; {}", USAGE)))?;
        if let Some(extra) = args.next() {
            return Err(Error::Config(format!(
                "unexpected argument {:?}; {}",
                extra, USAGE
            )));
        }

        Ok(Self {
            input: PathBuf::from(input),
        })
    }
}
