//! symcrypt CLI
//!
//! Encrypts secrets for an owner and decrypts them for the same owner.
//! The key is read from an environment variable; this tool never stores it.

mod config;

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::{Read, Write};
use std::path::PathBuf;
use zeroize::Zeroizing;

use config::Config;
use symcrypt::wire::SealedBox;
use symcrypt::{Ciphertext, Client, HexKey, Owner, Plaintext, generate_random_key, new_client};

/// symcrypt - Owner-bound secret encryption
#[derive(Parser)]
#[command(name = "symcrypt")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Environment variable holding the hex-encoded key
    #[arg(long, global = true)]
    key_env: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new random key and print it as hex
    Keygen,

    /// Encrypt a secret for an owner
    Encrypt {
        /// Owner identity the secret is bound to
        #[arg(short, long)]
        owner: String,

        /// Secret to encrypt (read from stdin when omitted)
        plaintext: Option<String>,
    },

    /// Decrypt a secret for an owner
    Decrypt {
        /// Owner identity the secret was encrypted for
        #[arg(short, long)]
        owner: String,

        /// Hex ciphertext (read from stdin when omitted)
        ciphertext: Option<String>,
    },

    /// Show the structure of a ciphertext without decrypting it
    Inspect {
        /// Hex ciphertext (read from stdin when omitted)
        ciphertext: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::load_or_default()?,
    };

    // Validate configuration
    config.validate()?;

    // Initialize logging; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(if cli.verbose {
            "debug"
        } else {
            config.logging.level.as_str()
        })
        .with_writer(std::io::stderr)
        .init();

    let key_env = cli.key_env.as_deref().unwrap_or(&config.key.env_var);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Keygen => {
            generate_key(&mut stdout)?;
        }
        Commands::Encrypt { owner, plaintext } => {
            let client = client_from_env(key_env)?;
            let plaintext = match plaintext {
                Some(text) => Plaintext::from(text),
                None => read_plaintext(stdin.lock())?,
            };
            encrypt(&client, &plaintext, &Owner::from(owner), &mut stdout)?;
        }
        Commands::Decrypt { owner, ciphertext } => {
            let client = client_from_env(key_env)?;
            let ciphertext = ciphertext_or_stdin(ciphertext, stdin.lock())?;
            decrypt(&client, &ciphertext, &Owner::from(owner), &mut stdout)?;
        }
        Commands::Inspect { ciphertext } => {
            let ciphertext = ciphertext_or_stdin(ciphertext, stdin.lock())?;
            inspect(&ciphertext, &mut stdout)?;
        }
    }

    stdout.flush()?;
    Ok(())
}

/// Build a client from the key in environment variable `name`
fn client_from_env(name: &str) -> anyhow::Result<impl Client> {
    config::validate_env_var_name(name)?;

    let key = HexKey::from(
        std::env::var(name).with_context(|| format!("Environment variable {name} is not set"))?,
    );
    tracing::debug!("Loaded key from {}", name);

    new_client(&key).with_context(|| format!("Invalid key in {name}"))
}

/// Generate a new key and print it
fn generate_key(out: &mut impl Write) -> anyhow::Result<()> {
    let key = generate_random_key().context("Failed to generate key")?;
    writeln!(out, "{}", key.expose_secret())?;

    tracing::info!("Generated new key");
    Ok(())
}

/// Encrypt `plaintext` for `owner` and print the hex ciphertext
fn encrypt(
    client: &impl Client,
    plaintext: &Plaintext,
    owner: &Owner,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    tracing::debug!(
        "Encrypting {} bytes for owner ({} bytes)",
        plaintext.len(),
        owner.as_bytes().len()
    );

    let ciphertext = client
        .encrypt(plaintext, owner)
        .context("Encryption failed")?;
    writeln!(out, "{ciphertext}")?;
    Ok(())
}

/// Decrypt `ciphertext` for `owner` and write the raw plaintext bytes
fn decrypt(
    client: &impl Client,
    ciphertext: &Ciphertext,
    owner: &Owner,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    tracing::debug!(
        "Decrypting {} hex chars for owner ({} bytes)",
        ciphertext.len(),
        owner.as_bytes().len()
    );

    let plaintext = match client.decrypt(ciphertext, owner) {
        Ok(plaintext) => plaintext,
        Err(e) => {
            tracing::warn!("Decryption rejected: {}", e);
            return Err(e).context("Decryption failed");
        }
    };

    out.write_all(plaintext.as_bytes())?;
    Ok(())
}

/// Print the nonce and lengths carried by a ciphertext
fn inspect(ciphertext: &Ciphertext, out: &mut impl Write) -> anyhow::Result<()> {
    let sealed_box = SealedBox::decode(ciphertext).context("Not a symcrypt ciphertext")?;

    writeln!(out, "Nonce: {}", hex::encode(sealed_box.nonce.as_bytes()))?;
    writeln!(out, "Sealed: {} bytes", sealed_box.sealed.len())?;
    match sealed_box.plaintext_len() {
        Some(len) => writeln!(out, "Plaintext: {len} bytes")?,
        None => writeln!(out, "Plaintext: none (shorter than an authentication tag)")?,
    }
    Ok(())
}

/// Read a plaintext from `input` verbatim
fn read_plaintext(mut input: impl Read) -> anyhow::Result<Plaintext> {
    let mut buf = Zeroizing::new(Vec::new());
    input
        .read_to_end(&mut buf)
        .context("Failed to read plaintext from stdin")?;
    Ok(Plaintext::from(buf.as_slice()))
}

/// Use the argument if given, otherwise read a ciphertext from `input`
fn ciphertext_or_stdin(arg: Option<String>, mut input: impl Read) -> anyhow::Result<Ciphertext> {
    let text = match arg {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            input
                .read_to_string(&mut buf)
                .context("Failed to read ciphertext from stdin")?;
            buf
        }
    };
    Ok(Ciphertext::from(text.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use symcrypt::XChaChaClient;

    fn test_client() -> XChaChaClient {
        new_client(&HexKey::from("00".repeat(32))).unwrap()
    }

    #[test]
    fn test_encrypt_then_decrypt() {
        let client = test_client();
        let owner = Owner::from("userid_000111");

        let mut encrypted = Vec::new();
        encrypt(
            &client,
            &Plaintext::from("ascx_mysecretaccesstoken"),
            &owner,
            &mut encrypted,
        )
        .unwrap();

        let line = String::from_utf8(encrypted).unwrap();
        let ciphertext = ciphertext_or_stdin(None, line.as_bytes()).unwrap();
        assert_eq!(ciphertext.len(), 128);

        let mut decrypted = Vec::new();
        decrypt(&client, &ciphertext, &owner, &mut decrypted).unwrap();
        assert_eq!(decrypted, b"ascx_mysecretaccesstoken");
    }

    #[test]
    fn test_decrypt_wrong_owner_writes_nothing() {
        let client = test_client();
        let ciphertext = client
            .encrypt(&Plaintext::from("secret"), &Owner::from("a"))
            .unwrap();

        let mut out = Vec::new();
        assert!(decrypt(&client, &ciphertext, &Owner::from("b"), &mut out).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_generate_key_prints_hex() {
        let mut out = Vec::new();
        generate_key(&mut out).unwrap();

        let line = String::from_utf8(out).unwrap();
        let key = HexKey::from(line.trim_end());
        assert_eq!(key.expose_secret().len(), symcrypt::HEX_KEY_LEN);
        assert!(new_client(&key).is_ok());
    }

    #[test]
    fn test_inspect() {
        let client = test_client();
        let ciphertext = client
            .encrypt(&Plaintext::from("12345"), &Owner::from("o"))
            .unwrap();

        let mut out = Vec::new();
        inspect(&ciphertext, &mut out).unwrap();

        let report = String::from_utf8(out).unwrap();
        assert!(report.contains("Sealed: 21 bytes"));
        assert!(report.contains("Plaintext: 5 bytes"));
    }

    #[test]
    fn test_inspect_rejects_garbage() {
        let mut out = Vec::new();
        assert!(inspect(&Ciphertext::from("xyz"), &mut out).is_err());
        assert!(inspect(&Ciphertext::from("abcd"), &mut out).is_err());
    }

    #[test]
    fn test_read_plaintext_is_verbatim() {
        let plaintext = read_plaintext(&b"line one\nline two\n"[..]).unwrap();
        assert_eq!(plaintext.as_bytes(), b"line one\nline two\n");
    }

    #[test]
    fn test_ciphertext_argument_is_trimmed() {
        let ciphertext = ciphertext_or_stdin(Some("  abcd\n".to_string()), &b""[..]).unwrap();
        assert_eq!(ciphertext.as_str(), "abcd");
    }

    #[test]
    fn test_client_from_env_rejects_bad_name() {
        assert!(client_from_env("NOT-VALID").is_err());
    }

    #[test]
    fn test_client_from_env_missing_variable() {
        assert!(client_from_env("SYMCRYPT_TEST_KEY_THAT_IS_NEVER_SET").is_err());
    }
}
