mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use securand_core::constants::DEFAULT_TOKEN_LEN;

#[derive(Parser)]
#[command(name = "securand", about = "Generate cryptographically secure random values")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate raw random bytes, printed as lowercase hex
    Bytes {
        /// Number of bytes to generate
        #[arg(long, default_value_t = DEFAULT_TOKEN_LEN)]
        len: usize,
    },

    /// Generate a hexadecimal token
    Hex {
        /// Number of random bytes behind the token (output is twice as long)
        #[arg(long, default_value_t = DEFAULT_TOKEN_LEN)]
        len: usize,
    },

    /// Generate a base64 token
    Base64 {
        /// Number of random bytes behind the token
        #[arg(long, default_value_t = DEFAULT_TOKEN_LEN)]
        len: usize,
    },

    /// Generate a uniform integer in [0, BOUND), or a float in [0, 1) when
    /// BOUND is omitted or not positive
    Random {
        /// Exclusive upper bound for integer output
        #[arg(default_value_t = 0)]
        bound: i64,
    },
}

fn main() {
    // Initialize tracing (controlled by RUST_LOG env var).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Bytes { len } => commands::bytes::run_bytes(len),
        Commands::Hex { len } => commands::hex::run_hex(len),
        Commands::Base64 { len } => commands::base64::run_base64(len),
        Commands::Random { bound } => commands::random::run_random(bound),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
