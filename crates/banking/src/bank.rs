use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use passbook_core::{DomainError, DomainResult};

use crate::account::Account;

/// Bank: a named, ordered collection of accounts.
///
/// The bank owns its accounts (insertion order preserved) and is the
/// authority that associates them: `add_account` sets the account's
/// back-reference to this bank's name, and `set_name` keeps the owned
/// accounts' back-references in sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bank {
    name: String,
    accounts: Vec<Account>,
}

impl Bank {
    /// Create an empty bank with the given label.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            accounts: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the bank's label and update the back-reference of every
    /// account the bank owns.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        for account in &mut self.accounts {
            account.set_bank(self.name.clone());
        }
    }

    /// Append `account` and point its back-reference at this bank.
    ///
    /// No duplicate check. An account previously added to another bank gets
    /// its back-reference overwritten here, while the other bank still holds
    /// its own copy — reassignment is not prevented.
    pub fn add_account(&mut self, mut account: Account) {
        account.set_bank(self.name.clone());
        self.accounts.push(account);
    }

    /// Accounts in insertion order.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// First account whose owner matches exactly.
    pub fn find_by_owner(&self, owner: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.owner() == owner)
    }

    /// Mutable variant of [`Bank::find_by_owner`].
    pub fn find_by_owner_mut(&mut self, owner: &str) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|a| a.owner() == owner)
    }

    /// Move `amount` from one account to another: debit the source, then
    /// credit the destination.
    ///
    /// This is a free function over two accounts, not bank-scoped: neither
    /// account needs to belong to this bank's collection. The composition is
    /// not atomic, which is safe here — once the debit guard has passed,
    /// crediting the same positive amount cannot fail.
    pub fn transfer(
        &self,
        from: &mut Account,
        to: &mut Account,
        amount: Decimal,
    ) -> DomainResult<()> {
        from.debit(amount)?;
        to.credit(amount)
    }

    /// [`Bank::transfer`] over two accounts owned by this bank, addressed by
    /// their position in [`Bank::accounts`].
    pub fn transfer_between(
        &mut self,
        from: usize,
        to: usize,
        amount: Decimal,
    ) -> DomainResult<()> {
        if from == to {
            return Err(DomainError::validation(
                "source and destination accounts must differ",
            ));
        }
        let (lo, hi) = if from < to { (from, to) } else { (to, from) };
        if hi >= self.accounts.len() {
            return Err(DomainError::validation(format!(
                "account index out of range: {hi}"
            )));
        }

        // Disjoint mutable borrows out of the owned Vec.
        let (head, tail) = self.accounts.split_at_mut(hi);
        let (src, dst) = if from < to {
            (&mut head[lo], &mut tail[0])
        } else {
            (&mut tail[0], &mut head[lo])
        };

        src.debit(amount)?;
        dst.credit(amount)
    }
}
