use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use passbook_core::{DomainError, DomainResult, ValueObject};

/// Bank account: owner identity plus a monetary balance.
///
/// Balances are `rust_decimal::Decimal` so repeated debit/credit cycles stay
/// exact — no binary floating point, and the scale of the operands is
/// preserved (`"900.123456"` stays `"900.123456"`).
///
/// No invariant is enforced at construction: an opening balance may be any
/// value, including negative. Only `debit` guards against the balance going
/// negative as a result of the operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    owner: String,
    balance: Decimal,
    /// Name of the bank this account belongs to.
    ///
    /// A plain lookup field, not a structural back-pointer: it is set by
    /// `Bank::add_account` and never extends the bank's lifetime.
    bank: Option<String>,
}

impl Account {
    pub fn new(owner: impl Into<String>, balance: Decimal) -> Self {
        Self {
            owner: owner.into(),
            balance,
            bank: None,
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Replace the owner. Direct field replacement, no validation.
    pub fn set_owner(&mut self, owner: impl Into<String>) {
        self.owner = owner.into();
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Replace the balance. Direct field replacement, no validation.
    pub fn set_balance(&mut self, balance: Decimal) {
        self.balance = balance;
    }

    /// Name of the bank this account was last added to, if any.
    pub fn bank_name(&self) -> Option<&str> {
        self.bank.as_deref()
    }

    pub(crate) fn set_bank(&mut self, name: impl Into<String>) {
        self.bank = Some(name.into());
    }

    /// Subtract `amount` from the balance.
    ///
    /// Fails with [`DomainError::InsufficientFunds`] when `amount` exceeds the
    /// current balance; the balance is unchanged on failure. Non-positive
    /// amounts are rejected as validation errors.
    pub fn debit(&mut self, amount: Decimal) -> DomainResult<()> {
        ensure_positive(amount)?;
        if amount > self.balance {
            return Err(DomainError::insufficient_funds());
        }
        self.balance -= amount;
        Ok(())
    }

    /// Add `amount` to the balance. No upper bound.
    ///
    /// Non-positive amounts are rejected as validation errors.
    pub fn credit(&mut self, amount: Decimal) -> DomainResult<()> {
        ensure_positive(amount)?;
        self.balance += amount;
        Ok(())
    }
}

/// Accounts are compared by value: equal iff `owner` and `balance` match.
///
/// The bank back-reference does not participate. This means two logically
/// distinct accounts sharing owner and balance are indistinguishable — a
/// deliberate choice, not a derive accident.
impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner && self.balance == other.balance
    }
}

impl Eq for Account {}

impl ValueObject for Account {}

fn ensure_positive(amount: Decimal) -> DomainResult<()> {
    if amount <= Decimal::ZERO {
        return Err(DomainError::validation(format!(
            "amount must be positive, got {amount}"
        )));
    }
    Ok(())
}
