//! Menu loops and display formatting.
//!
//! Mirrors the two-level menu of a classic teller terminal: a main menu for
//! register/login, and an account menu for everything a logged-in user can
//! do. Core failures are printed and the menu continues; only Exit or EOF
//! ends the process.

use anyhow::Result;
use chrono::Utc;
use minibank_core::{
    Account, AccountLedger, AccountType, AppState, IdAllocator, InterestOutcome, LedgerResult,
};
use rust_decimal::Decimal;

use crate::input;

pub fn main_menu(app: &mut AppState) -> Result<()> {
    loop {
        println!();
        println!("!--- Banking Application ---!");
        println!("1. Register");
        println!("2. Login");
        println!("3. Exit");

        let Some(choice) = input::prompt("Choose an option: ")? else {
            break;
        };
        match choice.as_str() {
            "1" => register(app)?,
            "2" => {
                if login(app)? {
                    account_menu(app)?;
                }
            }
            "3" => break,
            _ => println!("Invalid option. Please try again."),
        }
    }
    Ok(())
}

fn register(app: &mut AppState) -> Result<()> {
    let Some(username) = input::prompt("Enter username: ")? else {
        return Ok(());
    };
    let Some(password) = input::prompt("Enter password: ")? else {
        return Ok(());
    };

    match app.register(&username, &password) {
        Ok(()) => println!("User registered successfully."),
        Err(err) => println!("{err}."),
    }
    Ok(())
}

fn login(app: &mut AppState) -> Result<bool> {
    let Some(username) = input::prompt("Enter username: ")? else {
        return Ok(false);
    };
    let Some(password) = input::prompt("Enter password: ")? else {
        return Ok(false);
    };

    match app.login(&username, &password) {
        Ok(()) => {
            println!("Login successful.");
            Ok(true)
        }
        Err(err) => {
            println!("{err}.");
            Ok(false)
        }
    }
}

fn account_menu(app: &mut AppState) -> Result<()> {
    while app.session.is_active() {
        println!();
        println!("=== Account Menu ===");
        println!("1. Open Account");
        println!("2. Deposit");
        println!("3. Withdraw");
        println!("4. Check Balance");
        println!("5. View Statement");
        println!("6. Calculate Monthly Interest");
        println!("7. Export Statement (JSON)");
        println!("8. Logout");

        let Some(choice) = input::prompt("Choose an option: ")? else {
            app.logout();
            break;
        };
        match choice.as_str() {
            "1" => open_account(app)?,
            "2" => deposit(app)?,
            "3" => withdraw(app)?,
            "4" => check_balance(app)?,
            "5" => view_statement(app)?,
            "6" => credit_monthly_interest(app),
            "7" => export_statement(app)?,
            "8" => app.logout(),
            _ => println!("Invalid option."),
        }
    }
    Ok(())
}

fn open_account(app: &mut AppState) -> Result<()> {
    let Some(holder) = input::prompt("Enter account holder name: ")? else {
        return Ok(());
    };
    let Some(type_label) = input::prompt("Enter account type (savings/checking): ")? else {
        return Ok(());
    };
    let Some(initial_deposit) = input::prompt_decimal("Enter initial deposit amount: ")? else {
        return Ok(());
    };

    let account_type = AccountType::from_label(&type_label);
    let Some((ledger, ids)) = session_parts(app) else {
        return Ok(());
    };
    let number = ledger.open_account(ids, &holder, account_type, initial_deposit);

    println!("Account created successfully.");
    println!("*****Account Number: {number}*****");
    Ok(())
}

fn deposit(app: &mut AppState) -> Result<()> {
    let Some(number) = input::prompt_account_number("Enter account number: ")? else {
        return Ok(());
    };
    let Some(amount) = input::prompt_decimal("Enter amount to deposit: ")? else {
        return Ok(());
    };

    let Some((ledger, ids)) = session_parts(app) else {
        return Ok(());
    };
    let outcome = ledger
        .find_mut(number)
        .and_then(|account| account.deposit(ids, amount));
    report(outcome, "Deposit successful.");
    Ok(())
}

fn withdraw(app: &mut AppState) -> Result<()> {
    let Some(number) = input::prompt_account_number("Enter account number: ")? else {
        return Ok(());
    };
    let Some(amount) = input::prompt_decimal("Enter amount to withdraw: ")? else {
        return Ok(());
    };

    let Some((ledger, ids)) = session_parts(app) else {
        return Ok(());
    };
    let outcome = ledger
        .find_mut(number)
        .and_then(|account| account.withdraw(ids, amount));
    report(outcome, "Withdrawal successful.");
    Ok(())
}

fn check_balance(app: &mut AppState) -> Result<()> {
    let Some(number) = input::prompt_account_number("Enter account number: ")? else {
        return Ok(());
    };

    let Some((ledger, _)) = session_parts(app) else {
        return Ok(());
    };
    match ledger.find(number) {
        Ok(account) => println!("Current balance: {}", currency(account.balance())),
        Err(err) => println!("{err}."),
    }
    Ok(())
}

fn view_statement(app: &mut AppState) -> Result<()> {
    let Some(number) = input::prompt_account_number("Enter account number: ")? else {
        return Ok(());
    };

    let Some((ledger, _)) = session_parts(app) else {
        return Ok(());
    };
    match ledger.find(number) {
        Ok(account) => render_statement(account),
        Err(err) => println!("{err}."),
    }
    Ok(())
}

fn export_statement(app: &mut AppState) -> Result<()> {
    let Some(number) = input::prompt_account_number("Enter account number: ")? else {
        return Ok(());
    };

    let Some((ledger, _)) = session_parts(app) else {
        return Ok(());
    };
    match ledger.find(number) {
        Ok(account) => println!("{}", serde_json::to_string_pretty(account.statement())?),
        Err(err) => println!("{err}."),
    }
    Ok(())
}

fn credit_monthly_interest(app: &mut AppState) {
    let today = Utc::now().date_naive();
    let Some((ledger, ids)) = session_parts(app) else {
        return;
    };

    for (number, outcome) in ledger.credit_interest_all(ids, today) {
        match outcome {
            InterestOutcome::Credited(amount) => {
                println!(
                    "Interest of {} added to account {number}.",
                    currency(amount)
                );
            }
            InterestOutcome::AlreadyCredited => {
                println!("Interest has already been added to account {number} this month.");
            }
            // Checking and other non-savings accounts accrue nothing.
            InterestOutcome::NotApplicable => {}
        }
    }
}

fn render_statement(account: &Account) {
    println!();
    println!(
        "!---- Statement for Account {} ({}) ----!",
        account.number(),
        account.holder
    );
    println!("Account Type: {}", account.account_type);
    println!("Current Balance: {}\n", currency(account.balance()));
    println!("--------------------------------------------------");
    println!("{:<22} {:<15} {:>10}", "Date", "Transaction", "Amount");
    println!("--------------------------------------------------");
    for transaction in account.statement() {
        let date = transaction.timestamp.format("%Y-%m-%d %H:%M:%S").to_string();
        let kind = transaction.kind.to_string();
        println!("{date:<22} {kind:<15} {:>10}", currency(transaction.amount));
    }
    println!("--------------------------------------------------");
    println!("End of statement\n");
}

/// The logged-in user's ledger and the id allocator.
///
/// Any failure (no active session, dangling session handle) is reported
/// like every other core error and the menu keeps running; nothing here
/// terminates the process.
fn session_parts(app: &mut AppState) -> Option<(&mut AccountLedger, &mut IdAllocator)> {
    match app.session_ledger_mut() {
        Ok(parts) => Some(parts),
        Err(err) => {
            tracing::debug!(%err, "no usable session");
            println!("{err}.");
            None
        }
    }
}

fn report(outcome: LedgerResult<()>, success: &str) {
    match outcome {
        Ok(()) => println!("{success}"),
        Err(err) => {
            tracing::debug!(%err, "operation rejected");
            println!("{err}.");
        }
    }
}

fn currency(amount: Decimal) -> String {
    format!("${amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_parts_without_login_reports_instead_of_failing() {
        let mut app = AppState::new();
        assert!(session_parts(&mut app).is_none());
    }

    #[test]
    fn test_session_parts_with_active_session() {
        let mut app = AppState::new();
        app.register("alice", "pw").unwrap();
        app.login("alice", "pw").unwrap();
        assert!(session_parts(&mut app).is_some());
    }

    #[test]
    fn test_currency_formats_two_decimals() {
        assert_eq!(currency(Decimal::new(100, 0)), "$100.00");
        assert_eq!(currency(Decimal::new(2040, 2)), "$20.40");
    }
}
