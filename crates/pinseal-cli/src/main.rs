use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod dgst;
mod encrypt;
mod keyinfo;

/// pinseal command-line tool for PIN transport encryption.
#[derive(Parser)]
#[command(name = "pinseal")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log engine activity to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a PIN (or a PIN change) for the authentication manager.
    Encrypt(encrypt::EncryptArgs),
    /// Hash/digest operations.
    #[command(alias = "digest")]
    Dgst {
        /// Hash algorithm (sha1, sha224, sha256, sha384, sha512).
        #[arg(short, long, default_value = "sha256")]
        algorithm: String,
        /// Input file (use - for stdin).
        file: String,
    },
    /// Show block size and OAEP capacity for a public key.
    Keyinfo {
        /// Public key as "<modulusHex>,<exponentHex>".
        #[arg(short = 'k', long, env = "PINSEAL_PUBLIC_KEY")]
        public_key: String,
        /// Hash algorithm; all five when omitted.
        #[arg(short = 'H', long)]
        hash: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let result = match &cli.command {
        Commands::Encrypt(args) => encrypt::run(args),
        Commands::Dgst { algorithm, file } => dgst::run(algorithm, file),
        Commands::Keyinfo { public_key, hash } => keyinfo::run(public_key, hash.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
