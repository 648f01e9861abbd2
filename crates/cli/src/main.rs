//! Demo binary: wires the banking domain to logging and runs the showcase
//! transfer scenario.

use anyhow::Result;
use passbook_banking::{Account, Bank};
use rust_decimal::Decimal;

fn main() -> Result<()> {
    passbook_observability::init();

    let mut bank = Bank::new("Banco del Estado");
    bank.add_account(Account::new("Jhon Doe", "2500".parse::<Decimal>()?));
    bank.add_account(Account::new("Andres", "1500.8989".parse::<Decimal>()?));

    // 500 from Andres to Jhon Doe.
    bank.transfer_between(1, 0, "500".parse()?)?;

    for account in bank.accounts() {
        tracing::info!(
            owner = account.owner(),
            balance = %account.balance(),
            bank = account.bank_name(),
            "balance after transfer"
        );
    }

    // An overdraw is a domain failure, not a crash: report and move on.
    if let Some(account) = bank.find_by_owner_mut("Andres") {
        if let Err(err) = account.debit("5000".parse()?) {
            tracing::warn!(owner = account.owner(), error = %err, "debit rejected");
        }
    }

    Ok(())
}
