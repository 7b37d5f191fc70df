use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::{Connection, params};
use time::{OffsetDateTime, macros::datetime};

use spender_ledger::initialize_db;

/// A utility for creating a test database for the REST API server of spender_ledger.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

struct SeedTransaction {
    date: OffsetDateTime,
    amount: f64,
    category: &'static str,
    transaction_type: &'static str,
    note: &'static str,
    spender_id: i64,
}

const SEED_TRANSACTIONS: [SeedTransaction; 6] = [
    SeedTransaction {
        date: datetime!(2024-03-01 09:00 UTC),
        amount: 500.0,
        category: "Salary",
        transaction_type: "income",
        note: "March pay",
        spender_id: 1,
    },
    SeedTransaction {
        date: datetime!(2024-03-03 18:20 UTC),
        amount: 120.5,
        category: "Groceries",
        transaction_type: "expense",
        note: "Weekly shop",
        spender_id: 1,
    },
    SeedTransaction {
        date: datetime!(2024-03-05 08:10 UTC),
        amount: 60.0,
        category: "Transport",
        transaction_type: "expense",
        note: "Bus pass",
        spender_id: 1,
    },
    SeedTransaction {
        date: datetime!(2024-03-01 09:00 UTC),
        amount: 1200.0,
        category: "Salary",
        transaction_type: "income",
        note: "",
        spender_id: 2,
    },
    SeedTransaction {
        date: datetime!(2024-03-02 12:00 UTC),
        amount: 450.0,
        category: "Rent",
        transaction_type: "expense",
        note: "March rent",
        spender_id: 2,
    },
    SeedTransaction {
        date: datetime!(2024-03-09 19:45 UTC),
        amount: 35.0,
        category: "Food",
        transaction_type: "expense",
        note: "Dinner out",
        spender_id: 2,
    },
];

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating test transactions for spenders 1 and 2...");

    for transaction in &SEED_TRANSACTIONS {
        conn.execute(
            "INSERT INTO \"transaction\" \
            (date, amount, category, transaction_type, note, image_url, spender_id) \
            VALUES (?1, ?2, ?3, ?4, ?5, NULL, ?6)",
            params![
                transaction.date,
                transaction.amount,
                transaction.category,
                transaction.transaction_type,
                transaction.note,
                transaction.spender_id,
            ],
        )?;
    }

    println!("Success!");

    Ok(())
}
