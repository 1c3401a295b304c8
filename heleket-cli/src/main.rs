//! Heleket CLI
//!
//! Command-line interface for the Heleket gateway SDK.

use anyhow::Result;
use clap::{Parser, Subcommand};

use heleket_client::{FinanceService, HttpExecutor, PaymentService};
use heleket_types::{
    CreateInvoiceRequest, Currency, Lifetime, Network, PaymentStatus, RefundRequest,
    TestWebhookRequest,
};

#[derive(Parser)]
#[command(name = "heleket")]
#[command(author, version, about = "Heleket payment gateway CLI client", long_about = None)]
struct Cli {
    /// Gateway base URL
    #[arg(long, env = "HELEKET_API_URL", default_value = "https://api.heleket.com")]
    api_url: String,

    /// Merchant identifier
    #[arg(long, env = "HELEKET_MERCHANT_ID")]
    merchant_id: String,

    /// API key used to sign requests
    #[arg(long, env = "HELEKET_API_KEY")]
    api_key: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List exchange rates from a currency
    Rates {
        /// Source currency (e.g. BTC)
        currency: Currency,
        /// Restrict output to these target currencies
        #[arg(long, value_delimiter = ',')]
        to: Vec<Currency>,
    },
    /// Show merchant and user balances
    Balance,
    /// Create a payment invoice
    Invoice {
        #[arg(long)]
        amount: String,
        #[arg(long)]
        currency: Currency,
        #[arg(long)]
        order_id: String,
        /// Lifetime in seconds (300-43200)
        #[arg(long)]
        lifetime: Option<u32>,
        #[arg(long)]
        network: Option<Network>,
        #[arg(long)]
        url_callback: Option<String>,
    },
    /// Look up a payment
    Info {
        #[arg(long)]
        uuid: Option<String>,
        #[arg(long)]
        order_id: Option<String>,
    },
    /// Fetch the QR code for a payment address
    Qr {
        /// Payment UUID
        uuid: String,
    },
    /// Refund a paid invoice
    Refund {
        #[arg(long)]
        address: String,
        #[arg(long)]
        is_subtract: bool,
        #[arg(long)]
        uuid: Option<String>,
        #[arg(long)]
        order_id: Option<String>,
        #[arg(long)]
        amount: Option<String>,
    },
    /// List available payment services
    Services,
    /// List configured discounts
    Discounts,
    /// Set the discount for a currency/network pair
    SetDiscount {
        #[arg(long)]
        currency: Currency,
        #[arg(long)]
        network: Network,
        #[arg(long)]
        percent: i32,
    },
    /// Replay a payment webhook against a callback URL
    TestWebhook {
        #[arg(long)]
        url_callback: String,
        #[arg(long)]
        currency: Currency,
        #[arg(long)]
        network: Network,
        #[arg(long, default_value = "paid")]
        status: PaymentStatus,
        #[arg(long)]
        uuid: Option<String>,
        #[arg(long)]
        order_id: Option<String>,
    },
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();
    let executor =
        HttpExecutor::new(cli.merchant_id, cli.api_key).with_base_url(cli.api_url);

    match cli.command {
        Commands::Rates { currency, to } => {
            let finance = FinanceService::new(executor);
            let filter = (!to.is_empty()).then_some(to.as_slice());
            let courses = finance.exchange_rate(currency, filter).await?;
            print_json(&courses)
        }
        Commands::Balance => {
            let finance = FinanceService::new(executor);
            print_json(&finance.balance().await?)
        }
        Commands::Invoice {
            amount,
            currency,
            order_id,
            lifetime,
            network,
            url_callback,
        } => {
            let mut req = CreateInvoiceRequest::new(amount, currency, order_id);
            if let Some(secs) = lifetime {
                req = req.with_lifetime(
                    Lifetime::try_from(secs).map_err(|e| anyhow::anyhow!(e))?,
                );
            }
            if let Some(network) = network {
                req = req.with_network(network);
            }
            if let Some(url) = url_callback {
                req = req.with_url_callback(url);
            }
            let payments = PaymentService::new(executor);
            print_json(&payments.create_invoice(&req).await?)
        }
        Commands::Info { uuid, order_id } => {
            let payments = PaymentService::new(executor);
            let payment = payments
                .info(uuid.as_deref(), order_id.as_deref())
                .await?;
            print_json(&payment)
        }
        Commands::Qr { uuid } => {
            let payments = PaymentService::new(executor);
            println!("{}", payments.generate_qr_code(&uuid).await?);
            Ok(())
        }
        Commands::Refund {
            address,
            is_subtract,
            uuid,
            order_id,
            amount,
        } => {
            let payments = PaymentService::new(executor);
            let req = RefundRequest {
                address,
                is_subtract,
                uuid,
                order_id,
                amount,
            };
            print_json(&payments.refund(&req).await?)
        }
        Commands::Services => {
            let payments = PaymentService::new(executor);
            print_json(&payments.services_info().await?)
        }
        Commands::Discounts => {
            let payments = PaymentService::new(executor);
            print_json(&payments.discount_list().await?)
        }
        Commands::SetDiscount {
            currency,
            network,
            percent,
        } => {
            let payments = PaymentService::new(executor);
            print_json(&payments.set_discount(currency, network, percent).await?)
        }
        Commands::TestWebhook {
            url_callback,
            currency,
            network,
            status,
            uuid,
            order_id,
        } => {
            let mut req =
                TestWebhookRequest::new(url_callback, currency, network).with_status(status);
            req.uuid = uuid;
            req.order_id = order_id;
            let payments = PaymentService::new(executor);
            print_json(&payments.test_webhook(&req).await?)
        }
    }
}
