use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use smartcart::application::session::ShoppingSession;
use smartcart::config::CartConfig;
use smartcart::domain::cart::Cart;
use smartcart::domain::money::Money;
use smartcart::domain::ports::CartStoreBox;
use smartcart::domain::pricing::{
    DEFAULT_FLAT_SHIPPING, DEFAULT_FREE_SHIPPING_THRESHOLD, DEFAULT_TAX_RATE, PricingPolicy,
};
use smartcart::domain::recommendation::DEFAULT_RECOMMENDATION_LIMIT;
use smartcart::infrastructure::in_memory::{DEFAULT_EVENT_CAPACITY, InMemoryCartStore};
use smartcart::interfaces::csv::catalog_reader::CatalogReader;
use smartcart::interfaces::csv::command_reader::CommandReader;
use smartcart::interfaces::csv::report_writer::CartReportWriter;
use smartcart::interfaces::json;
use smartcart::telemetry;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Catalog CSV file (id, name, price, category, description, image)
    catalog: PathBuf,

    /// Cart commands CSV file (action, product, quantity)
    commands: PathBuf,

    /// JSON cart snapshot to start from instead of an empty cart
    #[arg(long)]
    restore: Option<PathBuf>,

    /// Write the final cart items to this JSON file
    #[arg(long)]
    save: Option<PathBuf>,

    /// Report format written to stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Tax rate applied to the subtotal, as a fraction
    #[arg(long, default_value_t = DEFAULT_TAX_RATE)]
    tax_rate: Decimal,

    /// Subtotal above which shipping is free
    #[arg(long, default_value_t = DEFAULT_FREE_SHIPPING_THRESHOLD)]
    free_shipping_threshold: Decimal,

    /// Shipping charged at or below the free shipping threshold
    #[arg(long, default_value_t = DEFAULT_FLAT_SHIPPING)]
    flat_shipping: Decimal,

    /// Maximum number of recommended products
    #[arg(long, default_value_t = DEFAULT_RECOMMENDATION_LIMIT)]
    recommendation_limit: usize,
}

impl Cli {
    fn config(&self) -> CartConfig {
        CartConfig {
            pricing: PricingPolicy {
                tax_rate: self.tax_rate,
                free_shipping_threshold: Money::new(self.free_shipping_threshold),
                flat_shipping: Money::new(self.flat_shipping),
            },
            recommendation_limit: self.recommendation_limit,
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init();
    let cli = Cli::parse();

    let config = cli.config();
    config.validate().into_diagnostic()?;

    let catalog = CatalogReader::new(File::open(&cli.catalog).into_diagnostic()?)
        .into_catalog()
        .into_diagnostic()?;

    let store: CartStoreBox = if let Some(path) = &cli.restore {
        // Re-hydrate the cart from a previous run, priced from today's catalog
        let saved = json::read_snapshot(File::open(path).into_diagnostic()?).into_diagnostic()?;
        let items = catalog.refresh(saved);
        tracing::info!(lines = items.len(), "Restored cart snapshot");
        Box::new(InMemoryCartStore::from_cart(
            Cart::from_items(items),
            config.event_capacity,
        ))
    } else {
        Box::new(InMemoryCartStore::with_capacity(config.event_capacity))
    };

    let session = ShoppingSession::new(store, Arc::new(catalog), config);

    // Stands in for the storefront's "added to cart" notices
    let mut subscription = session.subscribe();
    let notifier = tokio::spawn(async move {
        while let Some(event) = subscription.recv().await {
            tracing::info!(product = ?event.product_id(), "{event}");
        }
    });

    // Replay the commands
    let file = File::open(&cli.commands).into_diagnostic()?;
    let reader = CommandReader::new(file);
    for command_result in reader.commands() {
        match command_result {
            Ok(command) => {
                if let Err(e) = session.apply(command) {
                    tracing::warn!("Error applying command: {e}");
                }
            }
            Err(e) => {
                tracing::warn!("Error reading command: {e}");
            }
        }
    }

    // Ending the session closes the event feed
    let view = session.into_view();
    notifier.await.into_diagnostic()?;

    if let Some(path) = &cli.save {
        json::write_snapshot(File::create(path).into_diagnostic()?, &view.items)
            .into_diagnostic()?;
    }

    let stdout = io::stdout();
    match cli.format {
        OutputFormat::Csv => CartReportWriter::new(stdout.lock())
            .write_view(&view)
            .into_diagnostic()?,
        OutputFormat::Json => json::write_view(stdout.lock(), &view).into_diagnostic()?,
    }

    Ok(())
}
