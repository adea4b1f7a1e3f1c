//! Stockpile CLI
//!
//! Command-line interface over a Stockpile snapshot file.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use stockpile::{Config, Field, FieldValue, Inventory, Product, ProductId, SyncStrategy};
use tracing_subscriber::{fmt, EnvFilter};

/// Stockpile CLI
#[derive(Parser, Debug)]
#[command(name = "stockpile")]
#[command(about = "Manage a product inventory stored in a snapshot file")]
#[command(version)]
struct Args {
    /// Snapshot file
    #[arg(short, long, default_value = "./stockpile.snap")]
    snapshot: PathBuf,

    /// First id handed out when the snapshot does not exist yet
    #[arg(long, default_value = "1")]
    first_id: u64,

    /// Skip fsync after writing the snapshot
    #[arg(long)]
    no_fsync: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a product
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        category: String,

        #[arg(long, allow_negative_numbers = true)]
        stock: i64,

        #[arg(long, allow_negative_numbers = true)]
        price: f64,
    },

    /// Change fields of an existing product
    Update {
        #[arg(long)]
        id: u64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long, allow_negative_numbers = true)]
        stock: Option<i64>,

        #[arg(long, allow_negative_numbers = true)]
        price: Option<f64>,
    },

    /// Remove a product
    Remove {
        #[arg(long)]
        id: u64,
    },

    /// Show one product
    Show {
        #[arg(long)]
        id: u64,
    },

    /// List all products
    List {
        /// Field to sort by (id, name, category, stock, price)
        #[arg(long)]
        sort: Option<Field>,

        /// Sort descending
        #[arg(long)]
        desc: bool,
    },

    /// List products whose field equals a value
    Filter {
        /// Field to compare (id, name, category, stock, price)
        #[arg(long)]
        field: Field,

        /// Value to compare against
        #[arg(long, allow_negative_numbers = true)]
        value: String,
    },

    /// Seed sample products and list them by price
    Demo,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,stockpile=debug"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    tracing::debug!("Stockpile CLI v{}", stockpile::VERSION);

    if let Err(e) = run(args) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> stockpile::Result<()> {
    let sync_strategy = if args.no_fsync {
        SyncStrategy::Flush
    } else {
        SyncStrategy::Fsync
    };

    let config = Config::builder()
        .snapshot_path(&args.snapshot)
        .first_id(args.first_id)
        .sync_strategy(sync_strategy)
        .build();

    let mut inventory = Inventory::with_config(config)?;
    if args.snapshot.exists() {
        inventory.load()?;
    } else {
        tracing::info!("No snapshot at {}, starting empty", args.snapshot.display());
    }

    match args.command {
        Commands::Add {
            name,
            category,
            stock,
            price,
        } => {
            let product = inventory.create(name, category, stock, price)?;
            inventory.insert(product.clone())?;
            print_product(&product);
            inventory.save()?;
        }
        Commands::Update {
            id,
            name,
            category,
            stock,
            price,
        } => {
            let id = ProductId::new(id);
            let mut changes = inventory
                .get(id)
                .cloned()
                .ok_or(stockpile::StockpileError::ProductNotFound(id))?;

            if let Some(name) = name {
                changes.set_name(name);
            }
            if let Some(category) = category {
                changes.set_category(category);
            }
            if let Some(stock) = stock {
                changes.set_stock(stock);
            }
            if let Some(price) = price {
                changes.set_price(price);
            }

            inventory.update(&changes)?;
            print_product(&changes);
            inventory.save()?;
        }
        Commands::Remove { id } => {
            let removed = inventory.remove(ProductId::new(id))?;
            print_product(&removed);
            inventory.save()?;
        }
        Commands::Show { id } => {
            let id = ProductId::new(id);
            let product = inventory
                .get(id)
                .ok_or(stockpile::StockpileError::ProductNotFound(id))?;
            print_product(product);
        }
        Commands::List { sort, desc } => {
            let products = match sort {
                Some(field) => inventory.sort(field, !desc),
                None => inventory.all(),
            };
            print_products(&products);
        }
        Commands::Filter { field, value } => {
            let keyword = FieldValue::parse(field, &value)?;
            print_products(&inventory.filter(field, keyword)?);
        }
        Commands::Demo => {
            let samples = [
                inventory.create("Java Programmer's Compendium IX", "Book", 62, 149.99)?,
                inventory.create("Java Hibernate VI", "Book", 22, 49.99)?,
                inventory.create("Java Spring Boot III", "Book", 16, 84.0)?,
            ];
            inventory.insert_all(samples)?;
            println!("There are currently {} products in the inventory.", inventory.len());
            print_products(&inventory.sort(Field::Price, true));
            inventory.save()?;
        }
    }

    Ok(())
}

fn print_products(products: &[&Product]) {
    for product in products {
        print_product(product);
    }
}

fn print_product(product: &Product) {
    println!(
        "{:>5}  {:<36} {:<12} {:>6} {:>10.2}",
        product.id(),
        product.name(),
        product.category(),
        product.stock(),
        product.price()
    );
}
