use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use zenopay::{Credentials, PaymentRequest, ZenoPay};

/// Create ZenoPay orders and check their status from the shell
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    #[arg(long, env = "ZENOPAY_ACCOUNT_ID")]
    account_id: String,
    #[arg(long, env = "ZENOPAY_API_KEY", hide_env_values = true)]
    api_key: String,
    #[arg(long, env = "ZENOPAY_SECRET_KEY", hide_env_values = true)]
    secret_key: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create a payment order
    Pay {
        name: String,
        email: String,
        phone: String,
        amount: f64,
    },
    /// Check the status of an order
    Status { order_id: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_ansi(false)
        .init();

    match dotenvy::dotenv() {
        Ok(p) => tracing::info!(path = %p.display(), "Loaded environment variables from .env file"),
        Err(e) => tracing::debug!("No .env file loaded: {e}"),
    };
    let cli = Cli::parse();

    let zeno = ZenoPay::new(Credentials::new(cli.api_key, cli.secret_key, cli.account_id));
    let result = match cli.command {
        Command::Pay {
            name,
            email,
            phone,
            amount,
        } => {
            let payment = PaymentRequest {
                customer_name: name,
                customer_email: email,
                customer_phone_number: phone,
                amount_to_charge: amount,
            };
            zeno.pay(&payment).await
        }
        Command::Status { order_id } => zeno.check_payment_status(&order_id).await,
    };

    println!("{}", serde_json::to_string_pretty(&result)?);
    if !result.success {
        std::process::exit(1);
    }
    Ok(())
}
