//! `ortho` — operator console for the Ortho prosthetics marketplace.
//!
//! This file is intentionally thin: it parses arguments, loads config, and
//! dispatches. All command handlers live in `commands/`.

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use ortho_config::OrthoConfig;

#[derive(Parser)]
#[command(name = "ortho")]
#[command(about = "Ortho marketplace console", long_about = None)]
struct Cli {
    /// Optional YAML config file (defaults + env vars apply without it).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Catalog {
        #[command(subcommand)]
        cmd: CatalogCmd,
    },

    /// Local shopping cart
    Cart {
        #[command(subcommand)]
        cmd: CartCmd,
    },

    /// Bearer-token session for the admin API
    Auth {
        #[command(subcommand)]
        cmd: AuthCmd,
    },

    /// Order lookup and lifecycle
    Order {
        #[command(subcommand)]
        cmd: OrderCmd,
    },

    /// Customer lookup
    Customer {
        #[command(subcommand)]
        cmd: CustomerCmd,
    },

    /// Shipping assignment
    Shipping {
        #[command(subcommand)]
        cmd: ShippingCmd,
    },

    /// Payment verification
    Payment {
        #[command(subcommand)]
        cmd: PaymentCmd,
    },
}

#[derive(Subcommand)]
enum CatalogCmd {
    /// List products, optionally filtered and sorted
    List {
        /// Exact category name ("All" or omitted = every category)
        #[arg(long)]
        category: Option<String>,

        /// Case-insensitive substring match on name or description
        #[arg(long)]
        search: Option<String>,

        /// Sort order: name | price-asc | price-desc
        #[arg(long)]
        sort: Option<String>,
    },
}

#[derive(Subcommand)]
enum CartCmd {
    /// Add a catalog product (increments quantity if already present)
    Add {
        /// Product id
        #[arg(long)]
        product: String,

        /// Quantity to add
        #[arg(long, default_value_t = 1)]
        qty: u32,
    },

    /// Remove a line entirely
    Remove {
        /// Product id
        #[arg(long)]
        product: String,
    },

    /// Replace a line's quantity (0 removes the line)
    SetQty {
        /// Product id
        #[arg(long)]
        product: String,

        #[arg(long)]
        qty: u32,
    },

    /// Print the cart with per-line and grand totals
    Show,

    /// Drop every line
    Clear,
}

#[derive(Subcommand)]
enum AuthCmd {
    /// Store a bearer token in the local store
    Login {
        #[arg(long)]
        token: String,
    },

    /// Forget the stored token
    Logout,

    /// Report whether a token is stored
    Status,
}

#[derive(Subcommand)]
enum OrderCmd {
    /// Fetch and print an order
    Show {
        /// Order id
        #[arg(long)]
        order_id: String,
    },

    /// Move an order to a new status. Refused locally when the move is not
    /// in the transition table; nothing is sent to the server in that case.
    SetStatus {
        /// Order id
        #[arg(long)]
        order_id: String,

        /// Target status (pending | processing | shipped | delivered | cancelled | refunded)
        #[arg(long)]
        status: String,

        /// Free-text note attached to the timeline
        #[arg(long)]
        notes: Option<String>,
    },

    /// Complete an order. Requires --delivery-confirmed, and additionally
    /// --payment-collected for cash-on-delivery orders.
    Complete {
        /// Order id
        #[arg(long)]
        order_id: String,

        /// Operator confirms the customer received the package
        #[arg(long, default_value_t = false)]
        delivery_confirmed: bool,

        /// Operator confirms the cash was collected (COD only)
        #[arg(long, default_value_t = false)]
        payment_collected: bool,

        #[arg(long)]
        notes: Option<String>,
    },
}

#[derive(Subcommand)]
enum CustomerCmd {
    /// Fetch and print a customer profile
    Show {
        /// Customer id
        #[arg(long)]
        customer_id: String,
    },
}

#[derive(Subcommand)]
enum ShippingCmd {
    /// Assign a tracking number and carrier to an order
    Assign {
        /// Order id
        #[arg(long)]
        order_id: String,

        /// Courier tracking number
        #[arg(long)]
        tracking: String,

        /// Carrier (dhl | fedex | ups | aramex | local_courier)
        #[arg(long)]
        carrier: String,

        /// Shipment phase (shipped | delivered); defaults to shipped
        #[arg(long)]
        status: Option<String>,

        /// Estimated delivery, RFC 3339
        #[arg(long)]
        eta: Option<String>,

        /// Current shipment location
        #[arg(long)]
        location: Option<String>,

        /// First checkpoint description (defaults to a handoff line)
        #[arg(long = "checkpoint-description")]
        checkpoint_description: Option<String>,

        /// First checkpoint location (defaults to --location)
        #[arg(long = "checkpoint-location")]
        checkpoint_location: Option<String>,
    },
}

#[derive(Subcommand)]
enum PaymentCmd {
    /// Record how an order was actually paid
    Verify {
        /// Order id
        #[arg(long)]
        order_id: String,

        /// Payment method; defaults to the order's own method
        #[arg(long)]
        method: Option<String>,

        /// Amount collected, e.g. 2499.99; defaults to the order total
        #[arg(long)]
        amount: Option<String>,

        /// Payment reference (receipt / transaction id)
        #[arg(long)]
        reference: String,

        #[arg(long)]
        notes: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env.local if present (dev convenience). Silent when missing —
    // production injects env vars directly.
    let _ = dotenvy::from_filename(".env.local");

    init_tracing();

    let cli = Cli::parse();
    let cfg = OrthoConfig::load(cli.config.as_deref())?;

    match cli.cmd {
        Commands::Catalog { cmd } => match cmd {
            CatalogCmd::List {
                category,
                search,
                sort,
            } => commands::catalog::list(category, search, sort),
        },

        Commands::Cart { cmd } => match cmd {
            CartCmd::Add { product, qty } => commands::cart::add(&cfg, &product, qty),
            CartCmd::Remove { product } => commands::cart::remove(&cfg, &product),
            CartCmd::SetQty { product, qty } => commands::cart::set_qty(&cfg, &product, qty),
            CartCmd::Show => commands::cart::show(&cfg),
            CartCmd::Clear => commands::cart::clear(&cfg),
        },

        Commands::Auth { cmd } => match cmd {
            AuthCmd::Login { token } => commands::auth::login(&cfg, token),
            AuthCmd::Logout => commands::auth::logout(&cfg),
            AuthCmd::Status => commands::auth::status(&cfg),
        },

        Commands::Order { cmd } => match cmd {
            OrderCmd::Show { order_id } => commands::order::show(&cfg, &order_id).await,
            OrderCmd::SetStatus {
                order_id,
                status,
                notes,
            } => commands::order::set_status(&cfg, &order_id, &status, notes).await,
            OrderCmd::Complete {
                order_id,
                delivery_confirmed,
                payment_collected,
                notes,
            } => {
                commands::order::complete(&cfg, &order_id, delivery_confirmed, payment_collected, notes)
                    .await
            }
        },

        Commands::Customer { cmd } => match cmd {
            CustomerCmd::Show { customer_id } => {
                commands::order::customer_show(&cfg, &customer_id).await
            }
        },

        Commands::Shipping { cmd } => match cmd {
            ShippingCmd::Assign {
                order_id,
                tracking,
                carrier,
                status,
                eta,
                location,
                checkpoint_description,
                checkpoint_location,
            } => {
                commands::shipping::assign(
                    &cfg,
                    commands::shipping::AssignArgs {
                        order_id,
                        tracking,
                        carrier,
                        status,
                        eta,
                        location,
                        checkpoint_description,
                        checkpoint_location,
                    },
                )
                .await
            }
        },

        Commands::Payment { cmd } => match cmd {
            PaymentCmd::Verify {
                order_id,
                method,
                amount,
                reference,
                notes,
            } => commands::payment::verify(&cfg, &order_id, method, amount, reference, notes).await,
        },
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
