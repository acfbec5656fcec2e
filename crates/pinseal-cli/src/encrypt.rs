//! PIN encryption command.

use clap::Args;
use pinseal_auth::pin::{PinEncryptConfig, PinEncryptor};
use pinseal_crypto::rand::SystemRandom;
use pinseal_types::HashAlgId;

#[derive(Args)]
pub struct EncryptArgs {
    /// Session identifier echoed at the front of the result.
    #[arg(short, long, env = "PINSEAL_SESSION_ID")]
    pub session_id: String,
    /// Verifier public key as "<modulusHex>,<exponentHex>".
    #[arg(short = 'k', long, env = "PINSEAL_PUBLIC_KEY")]
    pub public_key: String,
    /// Server random challenge, hex encoded.
    #[arg(short = 'r', long, env = "PINSEAL_SERVER_RANDOM")]
    pub server_random: String,
    /// Hash for OAEP and MGF1; empty selects the default.
    #[arg(short = 'H', long, env = "PINSEAL_HASH", default_value = "")]
    pub hash: String,
    /// Hash used when --hash is empty.
    #[arg(long, env = "PINSEAL_DEFAULT_HASH", default_value = "SHA-1")]
    pub default_hash: String,
    /// The PIN. Prefer the environment variable over the flag.
    #[arg(short, long, env = "PINSEAL_PIN", hide_env_values = true)]
    pub pin: String,
    /// New PIN, for a PIN change.
    #[arg(short, long, env = "PINSEAL_NEW_PIN", hide_env_values = true)]
    pub new_pin: Option<String>,
    /// Skip the 4-12 digit PIN check.
    #[arg(long)]
    pub no_validate: bool,
}

pub fn run(args: &EncryptArgs) -> Result<(), Box<dyn std::error::Error>> {
    let out = encrypt(args)?;
    println!("{out}");
    Ok(())
}

fn encrypt(args: &EncryptArgs) -> Result<String, Box<dyn std::error::Error>> {
    let config = PinEncryptConfig::builder()
        .default_hash(HashAlgId::from_name(&args.default_hash)?)
        .validate_pins(!args.no_validate)
        .build();
    let encryptor = PinEncryptor::with_config(SystemRandom::new(), config);

    let out = match &args.new_pin {
        Some(new_pin) => encryptor.encrypt_change(
            &args.session_id,
            &args.public_key,
            &args.server_random,
            &args.pin,
            new_pin,
            &args.hash,
        )?,
        None => encryptor.encrypt(
            &args.session_id,
            &args.public_key,
            &args.server_random,
            &args.pin,
            &args.hash,
        )?,
    };
    Ok(out)
}
