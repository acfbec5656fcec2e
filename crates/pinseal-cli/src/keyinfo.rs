//! Public key inspection command.

use pinseal_crypto::rsa::RsaPublicKey;
use pinseal_types::HashAlgId;

pub fn run(public_key: &str, hash: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let key = RsaPublicKey::parse(public_key)?;
    let algs = match hash {
        Some(name) => vec![HashAlgId::from_name(name)?],
        None => HashAlgId::ALL.to_vec(),
    };
    print!("{}", describe(&key, &algs));
    Ok(())
}

fn describe(key: &RsaPublicKey, algs: &[HashAlgId]) -> String {
    let mut out = format!(
        "Modulus: {} bits, k = {} bytes ({} hex chars)\nExponent: 0x{}\n",
        key.bits(),
        key.modulus_len(),
        key.modulus_hex_len(),
        key.e_hex()
    );
    for &alg in algs {
        match key.max_message_len(alg) {
            Some(max) => out.push_str(&format!("    {alg:<8} max message {max} bytes\n")),
            None => out.push_str(&format!("    {alg:<8} key too small\n")),
        }
    }
    out
}
