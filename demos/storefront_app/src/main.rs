// demos/storefront_app/src/main.rs

mod config;
mod errors;
mod models;
mod services;
mod session;
mod state;
mod web;

use crate::config::AppConfig;
use crate::models::catalog_product::seed_catalog;
use crate::services::mock_auth::MockAuthService;
use crate::services::mock_cart::MockCartService;
use crate::session::SessionPlan;
use crate::state::AppState;

use actix_web::{web as actix_data, App, HttpServer};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

#[derive(Parser, Debug)]
#[command(name = "storefront_app", version, about = "Storefront cart demo: mock cart service and a scripted session")]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Run the in-memory cart service on MOCK_SERVER_HOST:MOCK_SERVER_PORT.
  ServeMock,
  /// Drive a cart session against CART_API_BASE_URL.
  Session {
    #[arg(long, default_value = "p-100")]
    product: String,
    #[arg(long, default_value_t = 1)]
    quantity: u32,
    /// Quantity to set afterwards; zero or less removes the line.
    #[arg(long, default_value_t = 3, allow_negative_numbers = true)]
    update_to: i32,
    /// Place an order and clear the cart at the end.
    #[arg(long)]
    checkout: bool,
    /// Log in first; needs --password as well.
    #[arg(long, requires = "password")]
    email: Option<String>,
    #[arg(long, requires = "email")]
    password: Option<String>,
  },
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO)
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE)
    .init();

  let cli = Cli::parse();
  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg),
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      return Err(e.into());
    }
  };

  match cli.command {
    Command::ServeMock => serve_mock(app_config).await?,
    Command::Session {
      product,
      quantity,
      update_to,
      checkout,
      email,
      password,
    } => {
      let plan = SessionPlan {
        product_id: product,
        quantity,
        updated_quantity: update_to,
        checkout,
        login: email.zip(password),
      };
      session::run(&app_config.cart, plan).await?;
    }
  }
  Ok(())
}

async fn serve_mock(app_config: Arc<AppConfig>) -> std::io::Result<()> {
  tracing::info!("Starting mock cart service...");

  let app_state = AppState {
    carts: Arc::new(MockCartService::new(seed_catalog())),
    auth: Arc::new(MockAuthService::new()),
    config: app_config.clone(),
  };

  let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone()))
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}
