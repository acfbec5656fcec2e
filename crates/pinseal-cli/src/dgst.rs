//! Hash/digest command implementation.

use std::fs;
use std::io::{self, Read};

use pinseal_crypto::hash::digest;
use pinseal_types::HashAlgId;

pub fn run(algorithm: &str, file: &str) -> Result<(), Box<dyn std::error::Error>> {
    let data = if file == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        buf
    } else {
        fs::read(file)?
    };

    let (digest, alg_name) = hash_data(algorithm, &data)?;

    let hex = hex::encode(digest);
    if file == "-" {
        println!("{alg_name}(stdin)= {hex}");
    } else {
        println!("{alg_name}({file})= {hex}");
    }
    Ok(())
}

fn hash_data(
    algorithm: &str,
    data: &[u8],
) -> Result<(Vec<u8>, &'static str), Box<dyn std::error::Error>> {
    // Unlike the engine, a digest needs an explicit algorithm
    if algorithm.trim().is_empty() {
        return Err("hash algorithm required".into());
    }
    let alg = HashAlgId::from_name(algorithm)?;
    Ok((digest(alg, data)?, alg.canonical_name()))
}
