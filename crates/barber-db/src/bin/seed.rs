//! # Starter Catalog Seeder
//!
//! Fills an empty database with a small service catalog and barber roster
//! so the front-end has something to show on first launch.
//!
//! ## Usage
//! ```bash
//! # Seed ./database.sqlite (default)
//! cargo run -p barber-db --bin seed
//!
//! # Specify database path
//! cargo run -p barber-db --bin seed -- --db ./data/shop.sqlite
//! ```
//!
//! Tables that already hold rows are left untouched, so running it twice is
//! harmless.

use std::env;

use barber_core::{NewBarber, NewService};
use barber_db::{Database, DbConfig};
use tracing::{info, warn};

/// Starter service catalog: (name, price).
const SERVICES: &[(&str, f64)] = &[
    ("Haircut", 20.0),
    ("Beard Trim", 12.0),
    ("Shave", 10.0),
    ("Kids Cut", 15.0),
    ("Hair Wash", 5.0),
    ("Haircut + Beard", 28.0),
];

/// Starter barber roster: (name, commission percent).
const BARBERS: &[(&str, i64)] = &[("Alex", 40), ("Jordan", 35), ("Sam", 50)];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sqlx=warn".into()),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let mut db_path = String::from("./database.sqlite");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Barber POS Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./database.sqlite)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            other => warn!(arg = other, "Ignoring unknown argument"),
        }
        i += 1;
    }

    let db = Database::new(DbConfig::new(&db_path)).await?;
    info!(path = %db_path, "Connected, migrations applied");

    let services = db.services();
    if services.count().await? > 0 {
        info!("Services already present, skipping catalog");
    } else {
        for (name, price) in SERVICES {
            let service = services.insert(&NewService::new(name, *price)?).await?;
            info!(id = service.id, name = %service.name, "Seeded service");
        }
    }

    let barbers = db.barbers();
    if barbers.count().await? > 0 {
        info!("Barbers already present, skipping roster");
    } else {
        for (name, commission) in BARBERS {
            let barber = barbers.insert(&NewBarber::new(name, *commission)?).await?;
            info!(id = barber.id, name = %barber.name, commission = barber.commission, "Seeded barber");
        }
    }

    db.close().await;
    info!("Seed complete");
    Ok(())
}
