use crate::domain::{Account, AccountRepository};

#[derive(Default, Debug)]
pub struct StdOutOutput {
    account: Account,
}

impl StdOutOutput {
    pub fn new() -> Self {
        Self {
            account: Account::new(),
        }
    }

    pub fn render(&self) -> String {
        format!(
            "balance,closed\n{},{}\n",
            self.account.balance(),
            self.account.is_closed()
        )
    }
}

impl AccountRepository for StdOutOutput {
    fn account(&mut self) -> &mut Account {
        &mut self.account
    }

    fn flush(&mut self) {
        print!("{}", self.render());
    }
}
