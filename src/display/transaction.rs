//! Transaction tables and detail view

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::{format_amount, truncate};
use crate::models::{Transaction, TransactionType};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

fn signed_display(txn: &Transaction, currency: &str) -> String {
    match txn.transaction_type {
        TransactionType::Income => format!("+{}", format_amount(txn.amount, currency)),
        TransactionType::Expense => format!("-{}", format_amount(txn.amount, currency)),
    }
}

pub fn format_transaction_list(transactions: &[Transaction], currency: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows = transactions.iter().map(|txn| TransactionRow {
        id: txn.id.to_string(),
        date: txn.date.clone(),
        title: truncate(&txn.title, 28),
        category: txn.category.clone(),
        amount: signed_display(txn, currency),
    });

    let mut output = Table::new(rows).with(Style::rounded()).to_string();
    output.push('\n');
    output
}

pub fn format_transaction_details(txn: &Transaction, currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Title:       {}\n", txn.title));
    if !txn.description.is_empty() {
        output.push_str(&format!("Description: {}\n", txn.description));
    }
    output.push_str(&format!("Type:        {}\n", txn.transaction_type));
    output.push_str(&format!("Amount:      {}\n", signed_display(txn, currency)));
    output.push_str(&format!("Category:    {}\n", txn.category));
    output.push_str(&format!("Date:        {}\n", txn.date));
    output.push_str(&format!(
        "Updated:     {}\n",
        txn.updated_at.format("%Y-%m-%d %H:%M UTC")
    ));

    output
}
