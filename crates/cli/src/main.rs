use anyhow::{Context, Result};
use catalog::{Color, Product, ProductCatalog, Size};
use clap::{Parser, Subcommand};
use colored::Colorize;
use specification::specs::{ColorSpecification, SizeSpecification};
use specification::{Filter, LegacyFilter, Specification, SpecificationExt};
use std::path::{Path, PathBuf};

/// Product Filter - composable specifications over a product catalog
#[derive(Parser)]
#[command(name = "product-filter")]
#[command(about = "Filter a product catalog with composable specifications", long_about = None)]
struct Cli {
    /// Catalog file, one `name::color::size` per line (defaults to the built-in sample)
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare the hard-coded filter with the specification filter
    Demo,

    /// Print the products matching the given criteria
    Filter {
        /// Keep products of this color (red, green, blue)
        #[arg(long)]
        color: Option<Color>,

        /// Keep products of this size (small, medium, large)
        #[arg(long)]
        size: Option<Size>,

        /// Match when any criterion holds instead of all of them
        #[arg(long)]
        any: bool,

        /// Invert the match: print the products the criteria reject
        #[arg(long)]
        exclude: bool,

        /// Print matches as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Print every product in the catalog
    List {
        /// Print the catalog as a JSON array
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Initialize tracing; stdout is reserved for results
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let catalog = load_catalog(cli.catalog.as_deref())?;

    match cli.command {
        Commands::Demo => handle_demo(&catalog),
        Commands::Filter {
            color,
            size,
            any,
            exclude,
            json,
        } => {
            let spec = build_specification(color, size, any, exclude)?;
            handle_filter(&catalog, spec.as_ref(), json)?
        }
        Commands::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&catalog)?);
            } else {
                let all: Vec<&Product> = catalog.iter().collect();
                print_products("Catalog:", &all);
            }
        }
    }

    Ok(())
}

fn load_catalog(path: Option<&Path>) -> Result<ProductCatalog> {
    match path {
        Some(path) => ProductCatalog::load_from_file(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display())),
        None => {
            tracing::debug!("No catalog given, using the built-in sample");
            Ok(ProductCatalog::sample())
        }
    }
}

/// Turn the command-line criteria into one specification.
///
/// Criteria are combined with AND, or with OR when `any` is set, and the
/// result is negated when `exclude` is set.
fn build_specification(
    color: Option<Color>,
    size: Option<Size>,
    any: bool,
    exclude: bool,
) -> Result<Box<dyn Specification>> {
    let mut parts: Vec<Box<dyn Specification>> = Vec::new();
    if let Some(color) = color {
        parts.push(ColorSpecification::new(color).boxed());
    }
    if let Some(size) = size {
        parts.push(SizeSpecification::new(size).boxed());
    }

    let spec = parts
        .into_iter()
        .reduce(|acc, next| {
            if any {
                acc.or(next).boxed()
            } else {
                acc.and(next).boxed()
            }
        })
        .context("At least one of --color or --size is required")?;

    Ok(if exclude { spec.negate().boxed() } else { spec })
}

/// Handle the 'demo' command
fn handle_demo(catalog: &ProductCatalog) {
    for (header, products) in demo_sections(catalog) {
        print_products(header, &products);
    }
}

/// The three demonstration sections: green products through the hard-coded
/// filter, green products through a specification, then large and green.
fn demo_sections(catalog: &ProductCatalog) -> Vec<(&'static str, Vec<&Product>)> {
    let products = catalog.products();

    let legacy = LegacyFilter::new();
    let filter = Filter::new();
    let green = ColorSpecification::new(Color::Green);
    let large_and_green = green.and(SizeSpecification::new(Size::Large));

    vec![
        (
            "Green products (old):",
            legacy.filter_by_color(products, Color::Green),
        ),
        ("Green products (new):", filter.filter(products, &green)),
        (
            "Large and green products:",
            filter.filter(products, &large_and_green),
        ),
    ]
}

/// Handle the 'filter' command
fn handle_filter(catalog: &ProductCatalog, spec: &dyn Specification, json: bool) -> Result<()> {
    let matched = Filter::new().filter(catalog.products(), spec);

    if json {
        println!("{}", serde_json::to_string_pretty(&matched)?);
    } else {
        print_products(&format!("Products matching {}:", spec.describe()), &matched);
    }
    Ok(())
}

/// Helper function to print a header and one line per product
fn print_products(header: &str, products: &[&Product]) {
    println!("{}", header.bold().blue());
    if products.is_empty() {
        println!("  {}", "(none)".dimmed());
        return;
    }
    for product in products {
        println!(
            " {} {} is {} and {}",
            "-".green(),
            product.name(),
            product.color(),
            product.size()
        );
    }
}
