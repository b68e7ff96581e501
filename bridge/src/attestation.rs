//! Canonical attestation message construction and signer recovery.
//!
//! The off-chain attester signs a keccak256 digest of the packed swap tuple
//! using the Ethereum personal-message convention. Both sides of the bridge
//! must produce byte-identical messages, so the layout below is a
//! compatibility contract, not a style choice.
//!
//! # Byte Layout (160 bytes total)
//! - Bytes 0-31:    token_id (uint256, big-endian, left-padded)
//! - Bytes 32-63:   owner key (keccak256 of the owner address string)
//! - Bytes 64-95:   origin_chain_id (uint256, big-endian, left-padded)
//! - Bytes 96-127:  nonce (uint256, big-endian, left-padded)
//! - Bytes 128-159: dest_chain_id (uint256, big-endian, left-padded)
//!
//! The redemption key hashes only the first four fields: the destination
//! chain id is part of the signed message but not of the replay key, so a
//! swap can be redeemed at most once on any given destination.

use cosmwasm_std::Api;
use tiny_keccak::{Hasher, Keccak};

use crate::error::ContractError;

/// Prefix applied to the 32-byte digest before signing, per the Ethereum
/// personal-message convention the attester uses.
const SIGNED_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n32";

/// Expected signature length: r (32) || s (32) || v (1).
const SIGNATURE_LEN: usize = 65;

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Encode an owner account as a fixed-width 32-byte field.
///
/// Hashing the address string keeps the field width independent of the
/// account format on either chain.
pub fn encode_owner(owner: &str) -> [u8; 32] {
    keccak256(owner.as_bytes())
}

/// Build the packed 160-byte canonical swap message.
pub fn swap_message(
    token_id: u64,
    owner: &str,
    origin_chain_id: u64,
    nonce: u64,
    dest_chain_id: u64,
) -> [u8; 160] {
    let mut data = [0u8; 160];

    // uint256 fields carry a u64 in the last 8 bytes, big-endian
    data[24..32].copy_from_slice(&token_id.to_be_bytes());
    data[32..64].copy_from_slice(&encode_owner(owner));
    data[64 + 24..96].copy_from_slice(&origin_chain_id.to_be_bytes());
    data[96 + 24..128].copy_from_slice(&nonce.to_be_bytes());
    data[128 + 24..160].copy_from_slice(&dest_chain_id.to_be_bytes());

    data
}

/// Compute the canonical digest the attester signs (before prefixing).
pub fn swap_digest(
    token_id: u64,
    owner: &str,
    origin_chain_id: u64,
    nonce: u64,
    dest_chain_id: u64,
) -> [u8; 32] {
    keccak256(&swap_message(
        token_id,
        owner,
        origin_chain_id,
        nonce,
        dest_chain_id,
    ))
}

/// Apply the personal-message prefix and rehash. This is the 32-byte value
/// the signature is actually produced over.
pub fn signed_digest(digest: &[u8; 32]) -> [u8; 32] {
    let mut data = [0u8; 60];
    data[..28].copy_from_slice(SIGNED_MESSAGE_PREFIX);
    data[28..].copy_from_slice(digest);
    keccak256(&data)
}

/// Compute the replay key for a redemption.
///
/// Only (token_id, owner, origin_chain_id, nonce) participate; the
/// destination chain id is deliberately excluded.
pub fn redemption_key(token_id: u64, owner: &str, origin_chain_id: u64, nonce: u64) -> [u8; 32] {
    let mut data = [0u8; 128];

    data[24..32].copy_from_slice(&token_id.to_be_bytes());
    data[32..64].copy_from_slice(&encode_owner(owner));
    data[64 + 24..96].copy_from_slice(&origin_chain_id.to_be_bytes());
    data[96 + 24..128].copy_from_slice(&nonce.to_be_bytes());

    keccak256(&data)
}

/// Recover the signer address from a canonical digest and a 65-byte
/// r || s || v signature.
///
/// Recovery runs through the host's audited secp256k1 implementation. The
/// returned identity is the EVM-style address of the signing key: the last
/// 20 bytes of keccak256 over the uncompressed public key.
///
/// Any malformed signature (wrong length, bad recovery id, point not on
/// curve) is reported as [`ContractError::InvalidSignature`]; a signature
/// that fails to match the attester is indistinguishable from garbage to
/// callers.
pub fn recover_signer(
    api: &dyn Api,
    digest: &[u8; 32],
    signature: &[u8],
) -> Result<[u8; 20], ContractError> {
    if signature.len() != SIGNATURE_LEN {
        return Err(ContractError::InvalidSignature);
    }

    // v is 0/1 in raw form, 27/28 in the Ethereum transaction encoding
    let recovery_param = match signature[64] {
        v @ 0..=1 => v,
        v @ 27..=28 => v - 27,
        _ => return Err(ContractError::InvalidSignature),
    };

    let prehash = signed_digest(digest);
    let pubkey = api
        .secp256k1_recover_pubkey(&prehash, &signature[..64], recovery_param)
        .map_err(|_| ContractError::InvalidSignature)?;

    // 65-byte uncompressed key: 0x04 tag, then x || y
    if pubkey.len() != 65 {
        return Err(ContractError::InvalidSignature);
    }
    let hash = keccak256(&pubkey[1..]);
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    Ok(address)
}

/// Parse a 20-byte address from a hex string (with or without 0x prefix).
pub fn parse_address(input: &str) -> Result<[u8; 20], ContractError> {
    let hex_str = input.strip_prefix("0x").unwrap_or(input);
    if hex_str.len() != 40 {
        return Err(ContractError::InvalidAddress {
            reason: "expected 40 hex characters".to_string(),
        });
    }

    let bytes = hex::decode(hex_str).map_err(|_| ContractError::InvalidAddress {
        reason: "invalid hex character".to_string(),
    })?;

    let mut address = [0u8; 20];
    address.copy_from_slice(&bytes);
    Ok(address)
}

/// Format a 20-byte address as a 0x-prefixed hex string.
pub fn address_to_hex(address: &[u8; 20]) -> String {
    format!("0x{}", hex::encode(address))
}

/// Convert a 32-byte digest to a 0x-prefixed hex string (for attributes).
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}
