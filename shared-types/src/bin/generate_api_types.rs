use shared_types::*;
use std::fs;
use std::path::PathBuf;
use ts_rs::TS;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Generate TypeScript definitions for API types
    let mut types = Vec::new();

    // Transaction types
    types.push(clean_type(TransactionType::export_to_string()?));
    types.push(clean_type(TransactionDraft::export_to_string()?));
    types.push(clean_type(Transaction::export_to_string()?));
    types.push(clean_type(CreateTransactionRequest::export_to_string()?));
    types.push(clean_type(TransactionsResponse::export_to_string()?));

    // Goal types
    types.push(clean_type(Goal::export_to_string()?));
    types.push(clean_type(CreateGoalRequest::export_to_string()?));
    types.push(clean_type(GoalsResponse::export_to_string()?));

    // Interpreter types
    types.push(clean_type(InterpretTransactionRequest::export_to_string()?));
    types.push(clean_type(InterpretTransactionResponse::export_to_string()?));

    let output_dir = PathBuf::from(
        std::env::args()
            .nth(1)
            .unwrap_or_else(|| "../web/src/types/api".to_string()),
    );
    fs::create_dir_all(&output_dir)?;

    let output_path = output_dir.join("types.ts");
    let output = types.join("\n\n");

    fs::write(&output_path, output)?;
    println!("Generated TypeScript types in {}", output_path.display());

    Ok(())
}

fn clean_type(mut type_def: String) -> String {
    type_def.retain(|c| c != '\r');

    // Everything lands in one file, so cross-type imports are dropped
    let filtered: Vec<&str> = type_def
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("import type")
                && !trimmed.starts_with("// This file was generated")
                && !trimmed.starts_with("/* This file was generated")
        })
        .collect();

    let result = filtered.join("\n").trim().to_string();
    if result.is_empty() {
        result
    } else {
        format!("{}\n", result)
    }
}
