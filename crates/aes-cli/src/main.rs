//! Command-line interface for `aes-engine`.

#![forbid(unsafe_code)]

use std::fs;
use std::path::{Path, PathBuf};

use aes_engine::{self_test, AesEngine, CipherKey, CryptoEngine, KeySize, KeySpec, Mode};
use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// AES file encryption CLI.
#[derive(Parser)]
#[command(
    name = "aesx",
    version,
    author,
    about = "AES-128/192/256 file encryption (ECB or CBC, PKCS#7 padding)"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random key and IV, printed as hex.
    Keygen {
        /// Key size in bits (128, 192 or 256).
        #[arg(long, default_value_t = 256)]
        bits: u32,
        /// Optional RNG seed for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Encrypt a file.
    Enc {
        #[command(flatten)]
        key: KeyArgs,
        /// Plaintext input path.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Ciphertext output path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Decrypt a file.
    Dec {
        #[command(flatten)]
        key: KeyArgs,
        /// Ciphertext input path (a positive multiple of 16 bytes).
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Plaintext output path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Run the built-in known-answer tests.
    Check,
    /// Generate a key, encrypt random data, decrypt it back and print everything.
    Demo {
        /// Key size in bits (128, 192 or 256).
        #[arg(long, default_value_t = 128)]
        bits: u32,
        /// Mode of operation.
        #[arg(long, default_value = "cbc")]
        mode: Mode,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(clap::Args)]
struct KeyArgs {
    /// AES key as 32, 48 or 64 hex characters; the length selects the key size.
    #[arg(long, value_name = "HEX")]
    key_hex: String,
    /// IV as 32 hex characters. Required for CBC.
    #[arg(long, value_name = "HEX")]
    iv_hex: Option<String>,
    /// Mode of operation.
    #[arg(long, default_value = "cbc")]
    mode: Mode,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        Commands::Keygen { bits, seed } => cmd_keygen(bits, seed),
        Commands::Enc { key, input, output } => cmd_enc(&key, &input, &output),
        Commands::Dec { key, input, output } => cmd_dec(&key, &input, &output),
        Commands::Check => cmd_check(),
        Commands::Demo { bits, mode, seed } => cmd_demo(bits, mode, seed),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn cmd_keygen(bits: u32, seed: Option<u64>) -> Result<()> {
    let spec = KeySpec::from_bits(bits, Mode::Cbc)?;
    let mut rng = seeded_rng(seed);
    let key = CipherKey::generate(spec, &mut rng).context("generate key")?;
    println!("key: {}", hex::encode(key.key()));
    println!("iv: {}", hex::encode(key.init_vector()));
    Ok(())
}

fn cmd_enc(args: &KeyArgs, input_path: &Path, output_path: &Path) -> Result<()> {
    let engine = build_engine(args)?;
    let data = fs::read(input_path).with_context(|| format!("read {}", input_path.display()))?;
    let ciphertext = engine.encrypt_to_vec(&data).context("encrypt")?;
    fs::write(output_path, &ciphertext)
        .with_context(|| format!("write {}", output_path.display()))?;
    log::info!(
        "encrypted {} bytes into {} bytes with {}",
        data.len(),
        ciphertext.len(),
        engine.spec()
    );
    Ok(())
}

fn cmd_dec(args: &KeyArgs, input_path: &Path, output_path: &Path) -> Result<()> {
    let engine = build_engine(args)?;
    let data = fs::read(input_path).with_context(|| format!("read {}", input_path.display()))?;
    let plaintext = engine.decrypt_to_vec(&data).context("decrypt")?;
    fs::write(output_path, &plaintext)
        .with_context(|| format!("write {}", output_path.display()))?;
    log::info!(
        "decrypted {} bytes into {} bytes with {}",
        data.len(),
        plaintext.len(),
        engine.spec()
    );
    Ok(())
}

fn cmd_check() -> Result<()> {
    self_test()?;
    println!("all known-answer tests passed");
    Ok(())
}

fn cmd_demo(bits: u32, mode: Mode, seed: Option<u64>) -> Result<()> {
    let spec = KeySpec::from_bits(bits, mode)?;
    let mut rng = seeded_rng(seed);
    let key = CipherKey::generate(spec, &mut rng).context("generate key")?;
    let key_hex = hex::encode(key.key());
    let iv_hex = hex::encode(key.init_vector());
    let engine = AesEngine::new(key)?;

    let mut plaintext = vec![0u8; 40];
    rng.fill_bytes(&mut plaintext);
    let ciphertext = engine.encrypt_to_vec(&plaintext)?;
    let decrypted = engine.decrypt_to_vec(&ciphertext)?;

    println!("spec: {spec}");
    println!("key: {key_hex}");
    if mode.needs_iv() {
        println!("iv: {iv_hex}");
    }
    println!("plaintext: {}", hex::encode(&plaintext));
    println!("ciphertext: {}", hex::encode(&ciphertext));
    println!("decrypted: {}", hex::encode(&decrypted));
    if decrypted != plaintext {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn build_engine(args: &KeyArgs) -> Result<AesEngine> {
    let key_bytes = hex::decode(args.key_hex.trim()).context("decode key hex")?;
    let Some(size) = KeySize::from_key_len(key_bytes.len()) else {
        bail!("AES key must be 16, 24 or 32 bytes (32, 48 or 64 hex characters)");
    };
    let spec = KeySpec::new(size, args.mode);

    let mut key = CipherKey::from_bytes(spec, &key_bytes)?;
    match (&args.iv_hex, args.mode.needs_iv()) {
        (Some(iv_hex), _) => {
            let iv = hex::decode(iv_hex.trim()).context("decode iv hex")?;
            key.set_init_vector(&iv)?;
        }
        (None, true) => bail!("{} requires --iv-hex", args.mode),
        (None, false) => {}
    }
    Ok(AesEngine::new(key)?)
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_args(key_hex: &str, iv_hex: Option<&str>, mode: Mode) -> KeyArgs {
        KeyArgs {
            key_hex: key_hex.to_string(),
            iv_hex: iv_hex.map(str::to_string),
            mode,
        }
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn key_length_selects_size() {
        let engine = build_engine(&key_args(&"ab".repeat(24), None, Mode::Ecb)).expect("192-bit");
        assert_eq!(engine.spec().size(), KeySize::Aes192);
    }

    #[test]
    fn cbc_without_iv_is_rejected() {
        assert!(build_engine(&key_args(&"00".repeat(16), None, Mode::Cbc)).is_err());
        let iv = "11".repeat(16);
        assert!(build_engine(&key_args(&"00".repeat(16), Some(&iv), Mode::Cbc)).is_ok());
    }

    #[test]
    fn odd_key_lengths_are_rejected() {
        assert!(build_engine(&key_args(&"00".repeat(20), None, Mode::Ecb)).is_err());
        assert!(build_engine(&key_args("zz", None, Mode::Ecb)).is_err());
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let mut a = seeded_rng(Some(9));
        let mut b = seeded_rng(Some(9));
        assert_eq!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn file_round_trip() {
        let dir = std::env::temp_dir().join(format!("aesx-test-{}", std::process::id()));
        fs::create_dir_all(&dir).expect("temp dir");
        let plain = dir.join("plain.bin");
        let cipher = dir.join("cipher.bin");
        let back = dir.join("back.bin");
        fs::write(&plain, b"file contents for the cli").expect("write input");

        let iv = "24".repeat(16);
        let args = key_args(&"42".repeat(32), Some(&iv), Mode::Cbc);
        cmd_enc(&args, &plain, &cipher).expect("encrypt file");
        cmd_dec(&args, &cipher, &back).expect("decrypt file");
        assert_eq!(fs::read(&back).expect("read output"), b"file contents for the cli");
        assert_eq!(fs::read(&cipher).expect("read ciphertext").len(), 32);

        fs::remove_dir_all(&dir).ok();
    }
}
