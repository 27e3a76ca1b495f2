use std::env;

use clap::Parser;

use runtsign::{encoding, key, sign};

/// Sign a message for the RUNT consulta ciudadana API and print the base64
/// signature.
#[derive(Parser)]
#[command(name = "runtsign", version)]
struct Cli {
    /// Message to sign, treated as UTF-8 bytes.
    message: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let key_path =
        env::var("PRIVATE_KEY_PATH").unwrap_or_else(|_| key::DEFAULT_KEY_FILE.to_string());

    let private_key = key::load_private_key(&key_path)?;
    let signature = sign::sign_message(&private_key, cli.message.as_bytes())?;
    println!("{}", encoding::encode_signature(&signature));

    Ok(())
}
