use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use rsa::{BigUint, RsaPublicKey};

type TestResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Returns the base64 body lines of a PEM document, without the armor
pub fn pem_body_lines(pem: &str) -> Vec<&str> {
    pem.lines()
        .filter(|line| !line.starts_with("-----"))
        .collect()
}

/// Decodes the base64 body of a PEM document
pub fn decode_pem_body(pem: &str) -> TestResult<Vec<u8>> {
    let body = pem_body_lines(pem).concat();
    Ok(BASE64.decode(body)?)
}

/// Decodes the base64 blob of an `ssh-rsa <base64>` line
pub fn decode_authorized_blob(line: &str) -> TestResult<Vec<u8>> {
    let mut parts = line.trim_end_matches('\n').split(' ');
    let algorithm = parts.next().ok_or("empty line")?;
    if algorithm != "ssh-rsa" {
        return Err(format!("unexpected algorithm {}", algorithm).into());
    }
    let blob = parts.next().ok_or("missing key blob")?;
    if parts.next().is_some() {
        return Err("unexpected trailing fields".into());
    }
    Ok(BASE64.decode(blob)?)
}

/// Splits an SSH wire blob into its length-prefixed fields
pub fn split_ssh_strings(mut blob: &[u8]) -> TestResult<Vec<Vec<u8>>> {
    let mut fields = Vec::new();
    while !blob.is_empty() {
        if blob.len() < 4 {
            return Err("truncated length prefix".into());
        }
        let (len, rest) = blob.split_at(4);
        let len = u32::from_be_bytes([len[0], len[1], len[2], len[3]]) as usize;
        if rest.len() < len {
            return Err("truncated field".into());
        }
        let (field, rest) = rest.split_at(len);
        fields.push(field.to_vec());
        blob = rest;
    }
    Ok(fields)
}

/// Parses an `ssh-rsa` authorized-key line back into an RSA public key
pub fn decode_authorized_key(line: &str) -> TestResult<RsaPublicKey> {
    let blob = decode_authorized_blob(line)?;
    let fields = split_ssh_strings(&blob)?;
    if fields.len() != 3 || fields[0] != b"ssh-rsa" {
        return Err("not an ssh-rsa key blob".into());
    }

    // Positive mpints carry at most one leading sign byte
    for mpint in &fields[1..] {
        if mpint.len() > 1 && mpint[0] == 0 && mpint[1] & 0x80 == 0 {
            return Err("mpint is not minimally encoded".into());
        }
        if mpint.first().map_or(false, |b| b & 0x80 != 0) {
            return Err("mpint is negative".into());
        }
    }

    let e = BigUint::from_bytes_be(&fields[1]);
    let n = BigUint::from_bytes_be(&fields[2]);
    Ok(RsaPublicKey::new(n, e)?)
}
