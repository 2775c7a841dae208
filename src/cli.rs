//! Command-line driver: one session per invocation against an in-memory
//! catalog seeded from config.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};

use product_editor::catalog::{MemoryCatalog, Product, ProductId};
use product_editor::config::Config;
use product_editor::form::{Field, FormState};
use product_editor::session::{Alert, EditSession, ScreenHost, SessionError, SessionOptions};
use product_editor::submit::SubmitError;

/// Exit status when the form was rejected by validation.
const EXIT_INVALID_INPUT: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "product-editor", version, about = "Create or edit catalog products")]
pub struct Cli {
    /// Config file (defaults to the platform config dir).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the repository timeout in milliseconds.
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a new product.
    Create {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        image_url: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        price: Option<String>,
    },
    /// Edit an existing product. Price cannot be changed.
    Edit {
        id: u64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        image_url: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// List seeded products.
    List,
}

/// Prints alerts to stderr; navigation has nowhere to go in a one-shot CLI.
struct ConsoleHost;

impl ScreenHost for ConsoleHost {
    fn go_back(&self) {
        tracing::debug!("Navigation back requested");
    }

    fn show_alert(&self, alert: &Alert) {
        eprintln!("{}", alert.title);
        eprintln!("{}", alert.message);
        eprintln!("[{}]", alert.acknowledge);
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(timeout_ms) = cli.timeout_ms {
        config.submit.timeout_ms = timeout_ms;
        config.validate()?;
    }

    let catalog = MemoryCatalog::with_products(config.catalog.products.clone());
    let options = SessionOptions::from_config(&config);

    let (product_id, edits) = match cli.command {
        Command::List => {
            print_products(&catalog.list(), cli.json)?;
            return Ok(ExitCode::SUCCESS);
        }
        Command::Create {
            title,
            image_url,
            description,
            price,
        } => (
            None,
            vec![
                (Field::Title, title),
                (Field::ImageUrl, image_url),
                (Field::Description, description),
                (Field::Price, price),
            ],
        ),
        Command::Edit {
            id,
            title,
            image_url,
            description,
        } => {
            let id = ProductId(id);
            if catalog.get(id).is_none() {
                anyhow::bail!("Product '{id}' not found");
            }
            (
                Some(id),
                vec![
                    (Field::Title, title),
                    (Field::ImageUrl, image_url),
                    (Field::Description, description),
                ],
            )
        }
    };

    let session = EditSession::open(catalog, ConsoleHost, product_id, options)
        .await
        .context("Failed to open product session")?;
    tracing::info!(session_id = %session.session_id(), title = session.header_title(), "Session ready");

    for (field, text) in edits {
        if let Some(text) = text {
            session.edit(field, text)?;
        }
    }

    match session.submit().await {
        Ok(outcome) => {
            let product = session
                .repository()
                .get(outcome.product_id())
                .context("Submitted product missing from catalog")?;
            if cli.json {
                let body = serde_json::json!({ "result": outcome, "product": product });
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else {
                println!("{}:", session.header_title());
                print_product(&product);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(SessionError::Submit(err @ SubmitError::ValidationFailed { .. })) => {
            if let SubmitError::ValidationFailed { invalid_fields } = &err {
                for field in invalid_fields {
                    eprintln!("  {}: {}", field.label(), field.error_hint());
                }
            }
            if cli.json {
                let body = validation_failure_body(&err, &session.state());
                println!("{}", serde_json::to_string_pretty(&body)?);
            }
            Ok(ExitCode::from(EXIT_INVALID_INPUT))
        }
        Err(err) => Err(err)
            .with_context(|| format!("Submit failed (timeout {}ms)", config.submit.timeout_ms)),
    }
}

/// JSON body printed for a submit rejected by validation.
pub fn validation_failure_body(err: &SubmitError, form: &FormState) -> serde_json::Value {
    let invalid_fields: &[Field] = match err {
        SubmitError::ValidationFailed { invalid_fields } => invalid_fields.as_slice(),
        _ => &[],
    };
    serde_json::json!({
        "error_type": err.error_type(),
        "invalid_fields": invalid_fields,
        "form": form,
    })
}

fn print_products(products: &[Product], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(products)?);
        return Ok(());
    }
    if products.is_empty() {
        println!("No products.");
    }
    for product in products {
        print_product(product);
    }
    Ok(())
}

fn print_product(product: &Product) {
    println!(
        "  #{} {} ({:.2}) - {} [{}]",
        product.id, product.title, product.price, product.description, product.image_url
    );
}
