//! Bank accounts: encapsulation and access control
//!
//! Three variants of the same idea, each guarding its balance a little more:
//! [`BankAccount`] validates amounts, [`SecureAccount`] additionally requires
//! a PIN for every operation, and [`SmartAccount`] exposes its balance through
//! a validated setter.

use menagerie_core::{MenagerieError, Narrator, Result};
use tracing::debug;

fn positive_amount(amount: f64, action: &str) -> Result<f64> {
    if !(amount > 0.0) || !amount.is_finite() {
        return Err(MenagerieError::validation(format!(
            "{} amount must be greater than 0: {}",
            action, amount
        )));
    }
    Ok(amount)
}

/// Render `1234.5` as `$1,234.50`
pub fn format_currency(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::new();
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, cents)
}

/// Basic account: amounts are validated, nothing else is protected
#[derive(Debug, Clone)]
pub struct BankAccount {
    holder: String,
    balance: f64,
}

impl BankAccount {
    pub fn new(holder: impl Into<String>, initial_balance: f64) -> Result<Self> {
        if initial_balance < 0.0 || !initial_balance.is_finite() {
            return Err(MenagerieError::validation(format!(
                "initial balance must be a non-negative number: {}",
                initial_balance
            )));
        }
        Ok(Self {
            holder: holder.into(),
            balance: initial_balance,
        })
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Returns the new balance
    pub fn deposit(&mut self, amount: f64) -> Result<f64> {
        self.balance += positive_amount(amount, "deposit")?;
        debug!("{} deposited {}", self.holder, amount);
        Ok(self.balance)
    }

    /// Returns the new balance
    pub fn withdraw(&mut self, amount: f64) -> Result<f64> {
        let amount = positive_amount(amount, "withdrawal")?;
        if amount > self.balance {
            return Err(MenagerieError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        debug!("{} withdrew {}", self.holder, amount);
        Ok(self.balance)
    }
}

/// One entry of a [`SecureAccount`]'s history
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transaction {
    Deposit(f64),
    Withdrawal(f64),
}

impl std::fmt::Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Deposit(amount) => write!(f, "Deposit: +{}", format_currency(*amount)),
            Self::Withdrawal(amount) => write!(f, "Withdrawal: -{}", format_currency(*amount)),
        }
    }
}

/// PIN-guarded account
///
/// The PIN is stored and compared as plain text. This is a teaching
/// illustration of access control, not a credential store.
#[derive(Debug, Clone)]
pub struct SecureAccount {
    holder: String,
    pin: String,
    balance: f64,
    history: Vec<Transaction>,
}

impl SecureAccount {
    pub fn new(holder: impl Into<String>, pin: impl Into<String>, initial_balance: f64) -> Result<Self> {
        let base = BankAccount::new(holder, initial_balance)?;
        Ok(Self {
            holder: base.holder,
            pin: pin.into(),
            balance: base.balance,
            history: Vec::new(),
        })
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    fn verify_pin(&self, pin: &str) -> Result<()> {
        if pin != self.pin {
            debug!("Rejected PIN for {}", self.holder);
            return Err(MenagerieError::Authorization("incorrect PIN".to_string()));
        }
        Ok(())
    }

    pub fn deposit(&mut self, amount: f64, pin: &str) -> Result<f64> {
        self.verify_pin(pin)?;
        let amount = positive_amount(amount, "deposit")?;
        self.balance += amount;
        self.history.push(Transaction::Deposit(amount));
        Ok(self.balance)
    }

    pub fn withdraw(&mut self, amount: f64, pin: &str) -> Result<f64> {
        self.verify_pin(pin)?;
        let amount = positive_amount(amount, "withdrawal")?;
        if amount > self.balance {
            return Err(MenagerieError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        self.history.push(Transaction::Withdrawal(amount));
        Ok(self.balance)
    }

    pub fn balance(&self, pin: &str) -> Result<f64> {
        self.verify_pin(pin)?;
        Ok(self.balance)
    }

    pub fn history(&self, pin: &str) -> Result<&[Transaction]> {
        self.verify_pin(pin)?;
        Ok(&self.history)
    }

    pub fn change_pin(&mut self, old_pin: &str, new_pin: impl Into<String>) -> Result<()> {
        self.verify_pin(old_pin)?;
        self.pin = new_pin.into();
        Ok(())
    }
}

/// Account whose balance is read and assigned through accessors
#[derive(Debug, Clone)]
pub struct SmartAccount {
    holder: String,
    balance: f64,
}

impl SmartAccount {
    pub fn new(holder: impl Into<String>, initial_balance: f64) -> Result<Self> {
        let mut account = Self {
            holder: holder.into(),
            balance: 0.0,
        };
        account.set_balance(initial_balance)?;
        Ok(account)
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn set_balance(&mut self, value: f64) -> Result<()> {
        if value < 0.0 || !value.is_finite() {
            return Err(MenagerieError::validation(format!(
                "balance cannot be negative: {}",
                value
            )));
        }
        self.balance = value;
        Ok(())
    }

    pub fn formatted_balance(&self) -> String {
        format_currency(self.balance)
    }
}

fn narrate<T>(out: &mut dyn Narrator, result: Result<T>, ok: impl FnOnce(T) -> String) {
    match result {
        Ok(value) => out.say(format!("✓ {}", ok(value))),
        Err(e) => out.say(format!("✗ {}", e)),
    }
}

/// Walk through all three account flavors
pub fn demo(out: &mut dyn Narrator) -> Result<()> {
    out.say("【1. Basic encapsulation: the class as a blueprint】".to_string());
    let mut alice = BankAccount::new("Alice", 1000.0)?;
    let mut bob = BankAccount::new("Bob", 500.0)?;
    out.say(format!(
        "✓ Opened accounts for {} and {}",
        alice.holder(),
        bob.holder()
    ));

    narrate(out, alice.deposit(500.0), |b| {
        format!("Alice deposits $500, balance: {}", format_currency(b))
    });
    narrate(out, alice.withdraw(200.0), |b| {
        format!("Alice withdraws $200, balance: {}", format_currency(b))
    });
    narrate(out, alice.withdraw(10_000.0), |_| unreachable_text());
    narrate(out, bob.deposit(-5.0), |_| unreachable_text());
    narrate(out, bob.deposit(300.0), |b| {
        format!("Bob deposits $300, balance: {}", format_currency(b))
    });

    out.blank();
    out.say("【2. Private state and access control】".to_string());
    let mut carol = SecureAccount::new("Carol", "1234", 1000.0)?;
    narrate(out, carol.deposit(500.0, "1234"), |b| {
        format!("Deposit of $500 accepted, balance: {}", format_currency(b))
    });
    narrate(out, carol.withdraw(200.0, "1234"), |b| {
        format!("Withdrawal of $200 accepted, balance: {}", format_currency(b))
    });
    narrate(out, carol.withdraw(100.0, "0000"), |_| unreachable_text());
    narrate(out, carol.balance("9999"), |_| unreachable_text());
    narrate(out, carol.change_pin("1234", "4321"), |_| "PIN changed".to_string());
    for entry in carol.history("4321")? {
        out.say(format!("  - {}", entry));
    }

    out.blank();
    out.say("【3. Controlled access through accessors】".to_string());
    let mut dave = SmartAccount::new("Dave", 5000.0)?;
    out.say(format!("Balance: {}", dave.formatted_balance()));
    narrate(out, dave.set_balance(6000.0), |_| {
        "Balance updated to $6,000.00".to_string()
    });
    narrate(out, dave.set_balance(-100.0), |_| unreachable_text());
    out.say(format!("Formatted balance: {}", dave.formatted_balance()));

    Ok(())
}

// Placeholder for the success branch of calls expected to fail
fn unreachable_text() -> String {
    "unexpectedly succeeded".to_string()
}
