// OOP 1: Encapsulation - A Guarded Balance
// The balance is private; every change goes through deposit/withdraw, which
// refuse anything that would break the books.

use colored::Colorize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AccountError {
    #[error("invalid amount: {0}")]
    InvalidAmount(i64),
    #[error("insufficient balance: have {balance}, need {requested}")]
    InsufficientBalance { balance: i64, requested: i64 },
}

#[derive(Debug)]
pub struct BankAccount {
    balance: i64,
}

impl BankAccount {
    pub fn new(initial_balance: i64) -> Result<Self, AccountError> {
        if initial_balance < 0 {
            return Err(AccountError::InvalidAmount(initial_balance));
        }
        Ok(Self {
            balance: initial_balance,
        })
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    pub fn deposit(&mut self, amount: i64) -> Result<(), AccountError> {
        if amount < 0 {
            return Err(AccountError::InvalidAmount(amount));
        }
        self.balance += amount;
        Ok(())
    }

    pub fn withdraw(&mut self, amount: i64) -> Result<(), AccountError> {
        if amount < 0 {
            return Err(AccountError::InvalidAmount(amount));
        }
        if self.balance - amount < 0 {
            return Err(AccountError::InsufficientBalance {
                balance: self.balance,
                requested: amount,
            });
        }
        self.balance -= amount;
        Ok(())
    }
}

fn main() {
    println!("OOP 1: Encapsulation");
    println!("====================\n");

    let mut account = BankAccount::new(1000).expect("non-negative opening balance");
    account.deposit(500).expect("positive deposit");
    account.withdraw(700).expect("covered withdrawal");

    println!("Current balance: {}", account.balance());

    match account.withdraw(10_000) {
        Ok(()) => println!("{}", "withdrawal accepted".green()),
        Err(err) => println!("{}", err.to_string().red()),
    }

    match account.deposit(-50) {
        Ok(()) => println!("{}", "deposit accepted".green()),
        Err(err) => println!("{}", err.to_string().red()),
    }

    // Rejected operations left the balance untouched.
    println!("Balance after rejections: {}", account.balance());
}

// =============================================================================
// Tests
// =============================================================================
