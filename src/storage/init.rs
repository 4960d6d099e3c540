//! First-run setup and seed data

use crate::config::paths::FinancePaths;
use crate::config::settings::Settings;
use crate::error::FinanceResult;
use crate::models::budget::default_goals;
use crate::models::{Transaction, TransactionType};

use super::Storage;

/// Open storage, seeding sample transactions and default budgets into
/// empty tables
pub fn initialize_storage(paths: &FinancePaths, settings: &Settings) -> FinanceResult<Storage> {
    let storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    let mut seeded = 0;
    if settings.seed_sample_data {
        seeded += seed_sample_transactions(&storage)?;
    }
    seeded += seed_default_budgets(&storage)?;

    if seeded > 0 {
        storage.save_all()?;
    }

    Ok(storage)
}

/// Insert the sample transactions when the table is empty; returns how many
pub fn seed_sample_transactions(storage: &Storage) -> FinanceResult<usize> {
    if storage.transactions.count()? > 0 {
        return Ok(0);
    }

    let samples = sample_transactions();
    let count = samples.len();
    storage.transactions.upsert_many(samples)?;
    tracing::info!(count, "seeded sample transactions");
    Ok(count)
}

/// Insert the default budget goals when the table is empty; returns how many
pub fn seed_default_budgets(storage: &Storage) -> FinanceResult<usize> {
    if storage.budgets.count()? > 0 {
        return Ok(0);
    }

    let goals = default_goals();
    let count = goals.len();
    for goal in goals {
        storage.budgets.upsert(goal)?;
    }
    tracing::info!(count, "seeded default budgets");
    Ok(count)
}

/// Starter entries shown on a clean install
pub fn sample_transactions() -> Vec<Transaction> {
    use TransactionType::{Expense, Income};

    [
        ("Pago de salario", "Depósito mensual de tu trabajo", 1450.0, Income, "Salario", "2024-10-05"),
        ("Supermercado", "Compra semanal", 210.5, Expense, "Alimentos", "2024-10-06"),
        ("Freelance diseño", "Proyecto UX/UI", 380.0, Income, "Freelance", "2024-10-07"),
        ("Suscripción streaming", "Plan familiar", 12.99, Expense, "Entretenimiento", "2024-10-08"),
        ("Cena con amigos", "Restaurante centro", 48.25, Expense, "Social", "2024-10-08"),
        ("Intereses cuenta", "Rendimiento mensual", 25.75, Income, "Inversiones", "2024-10-09"),
    ]
    .into_iter()
    .map(|(title, description, amount, kind, category, date)| {
        Transaction::new(title, amount, kind, category, date).with_description(description)
    })
    .collect()
}
