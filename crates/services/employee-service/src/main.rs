//! Employee Service - command-line entry point.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use domain::{EmployeeClassification, EmployeeSaveRequest};
use employee_service_lib::config::EmployeeServiceConfig;

#[derive(Parser)]
#[command(name = "employee-service")]
#[command(about = "Employee management service")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create one employee and print the response as JSON
    Create {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long, env = "EMPLOYEE_PASSWORD", hide_env_values = true)]
        password: String,
        /// Create the bootstrap general manager account
        #[arg(long)]
        initial: bool,
        /// cashier, shift_manager or general_manager
        #[arg(long)]
        classification: Option<EmployeeClassification>,
    },
    /// Run pending database migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = EmployeeServiceConfig::from_env();
    tracing::debug!(?config, "Configuration loaded");

    match cli.command {
        Commands::Create {
            first_name,
            last_name,
            password,
            initial,
            classification,
        } => {
            let request = EmployeeSaveRequest {
                first_name,
                last_name,
                password,
                is_initial_employee: initial,
                classification,
            };

            match employee_service_lib::create_employee(&config, request).await? {
                Ok(response) => println!("{}", serde_json::to_string_pretty(&response)?),
                Err(err) => {
                    eprintln!("{}", serde_json::to_string_pretty(&err)?);
                    std::process::exit(1);
                }
            }
        }
        Commands::Migrate => {
            employee_service_lib::run_migrations(&config).await?;
        }
    }

    Ok(())
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
