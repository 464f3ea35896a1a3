use alloy_primitives::Address;
use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use k256::ecdsa::SigningKey;

use grant_signer::signer::{sign_grant, signer_address};
use grant_signer::types::{Grant, GrantScope};

/// Sign a bouncer grant off-band and print the signature the claimant submits
/// on-chain.
///
/// With no scope flag the grant admits the claimant to any method of the
/// verifying contract. `--selector` narrows it to one method; `--payload`
/// narrows it to an exact call payload (the ABI prefix without the trailing
/// signature encoding).
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Bouncer private key, hex (0x-prefixed or bare).
    #[arg(long, env = "BOUNCER_KEY", hide_env_values = true)]
    key: String,

    /// Address of the verifying bouncer contract.
    #[arg(long)]
    verifier: String,

    /// Address of the claimant the grant admits.
    #[arg(long)]
    claimant: String,

    /// Restrict the grant to one method: 4-byte selector, hex.
    #[arg(long, conflicts_with = "payload")]
    selector: Option<String>,

    /// Restrict the grant to an exact call payload, hex.
    #[arg(long)]
    payload: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let key = parse_key(&cli.key)?;
    let scope = match (&cli.selector, &cli.payload) {
        (None, None) => GrantScope::Identity,
        (Some(selector), None) => GrantScope::Method {
            selector: parse_selector(selector)?,
        },
        (None, Some(payload)) => GrantScope::CallData {
            payload: parse_hex(payload).context("invalid --payload")?,
        },
        (Some(_), Some(_)) => bail!("--selector and --payload are mutually exclusive"),
    };

    let grant = Grant {
        verifier: parse_address(&cli.verifier).context("invalid --verifier")?,
        claimant: parse_address(&cli.claimant).context("invalid --claimant")?,
        scope,
    };

    let signed = sign_grant(&grant, &key).context("signing failed")?;

    println!("signer:    0x{}", hex::encode(signer_address(&key)));
    println!("digest:    0x{}", hex::encode(signed.digest));
    println!("signature: 0x{}", hex::encode(&signed.signature));
    Ok(())
}

fn parse_hex(s: &str) -> Result<Vec<u8>> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    hex::decode(s).map_err(|e| anyhow!("bad hex: {e}"))
}

fn parse_address(s: &str) -> Result<Address> {
    let bytes = parse_hex(s)?;
    if bytes.len() != 20 {
        bail!("expected 20 bytes, got {}", bytes.len());
    }
    Ok(Address::from_slice(&bytes))
}

fn parse_selector(s: &str) -> Result<[u8; 4]> {
    let bytes = parse_hex(s).context("invalid --selector")?;
    if bytes.len() != 4 {
        bail!("selector must be 4 bytes, got {}", bytes.len());
    }
    let mut selector = [0u8; 4];
    selector.copy_from_slice(&bytes);
    Ok(selector)
}

fn parse_key(s: &str) -> Result<SigningKey> {
    let bytes = parse_hex(s).context("invalid --key")?;
    if bytes.len() != 32 {
        bail!("private key must be 32 bytes, got {}", bytes.len());
    }
    SigningKey::from_slice(&bytes).map_err(|e| anyhow!("bad private key: {e}"))
}
