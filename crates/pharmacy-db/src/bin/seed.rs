//! # Seed Data Generator
//!
//! Fills a pharmacy database with sample customers, medicines and stock for
//! local development.
//!
//! ## Usage
//! ```bash
//! cargo run --bin seed -- --db ./pharmacy_dev.db --customers 50
//! ```

use std::env;

use pharmacy_core::{NewCustomer, NewMedicine, NewStock};
use pharmacy_db::{DbConfig, PharmacyStore};

/// Sample medicines: (name, manufacturer, unit price)
const MEDICINES: &[(&str, &str, f64)] = &[
    ("Aspirin 300mg", "Bayer", 5.00),
    ("Paracetamol 500mg", "GSK", 2.25),
    ("Ibuprofen 200mg", "Advil", 6.49),
    ("Amoxicillin 250mg", "Sandoz", 11.80),
    ("Cetirizine 10mg", "Zyrtec", 9.99),
    ("Loratadine 10mg", "Claritin", 8.75),
    ("Omeprazole 20mg", "Prilosec", 14.20),
    ("Metformin 500mg", "Teva", 4.10),
    ("Atorvastatin 10mg", "Pfizer", 12.35),
    ("Salbutamol Inhaler", "Ventolin", 18.60),
    ("Loperamide 2mg", "Imodium", 7.15),
    ("Oral Rehydration Salts", "Dioralyte", 3.40),
];

const FIRST_NAMES: &[&str] = &[
    "Amina", "Ben", "Carla", "Dev", "Elena", "Farid", "Grace", "Hugo", "Ines", "Jonas",
];

const LAST_NAMES: &[&str] = &[
    "Okafor", "Schmidt", "Rossi", "Patel", "Novak", "Haddad", "Kim", "Moreau", "Silva", "Berg",
];

const STREETS: &[&str] = &["Elm St", "Oak Ave", "Mill Rd", "High St", "Park Lane"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut customer_count: usize = 25;
    let mut db_path = "./pharmacy_dev.db".to_string();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--customers" | "-c" => {
                if i + 1 < args.len() {
                    customer_count = args[i + 1].parse().unwrap_or(25);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Pharmacy Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --customers <N>  Number of customers to generate (default: 25)");
                println!("  -d, --db <PATH>      Database file path (default: ./pharmacy_dev.db)");
                println!("  -h, --help           Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Pharmacy Seed Data Generator");
    println!("============================");
    println!("Database:  {}", db_path);
    println!("Customers: {}", customer_count);
    println!();

    let store = PharmacyStore::new(DbConfig::new(&db_path)).await?;
    println!("✓ Connected to database");
    println!("✓ Schema ready");

    let existing = store.medicines().list().await?.len();
    if existing > 0 {
        println!("⚠ Database already has {} medicines", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    let start = std::time::Instant::now();

    for (idx, (name, manufacturer, price)) in MEDICINES.iter().enumerate() {
        let medicine = store
            .medicines()
            .add(&NewMedicine::new(*name, *manufacturer, *price))
            .await?;

        // Two deliveries per medicine, to show rows are kept separate
        let first = 40 + ((idx * 37) % 160) as i64;
        let second = 10 + ((idx * 13) % 50) as i64;
        store.stock().add(&NewStock::new(medicine.id, first)).await?;
        store.stock().add(&NewStock::new(medicine.id, second)).await?;
    }
    println!("✓ Added {} medicines with stock", MEDICINES.len());

    for n in 0..customer_count {
        let customer = generate_customer(n);
        if let Err(e) = store.customers().add(&customer).await {
            eprintln!("Failed to insert {}: {}", customer.name, e);
        }
    }
    println!("✓ Added {} customers", customer_count);

    println!();
    println!("✓ Seed complete in {:?}", start.elapsed());

    store.close().await;
    Ok(())
}

/// Generates a customer from the sample name tables.
fn generate_customer(seed: usize) -> NewCustomer {
    let first = FIRST_NAMES[seed % FIRST_NAMES.len()];
    let last = LAST_NAMES[(seed / FIRST_NAMES.len()) % LAST_NAMES.len()];
    let street = STREETS[seed % STREETS.len()];

    NewCustomer::new(
        format!("{} {}", first, last),
        format!("555-{:04}", seed % 10_000),
        format!("{} {}", 1 + seed % 250, street),
    )
}
