//! Fuzz target for ciphertext decoding and decryption
//!
//! Arbitrary strings must be rejected with an error, never a panic, and never
//! decrypt to anything.

#![no_main]

use libfuzzer_sys::fuzz_target;
use symcrypt::wire::SealedBox;
use symcrypt::{Ciphertext, Client, HexKey, Owner, new_client};

fuzz_target!(|data: (&str, &str)| {
    let (ciphertext, owner) = data;
    let ciphertext = Ciphertext::from(ciphertext);

    // Structural decoding should never panic
    let _ = SealedBox::decode(&ciphertext);

    let client = new_client(&HexKey::from("42".repeat(32))).unwrap();
    assert!(client.decrypt(&ciphertext, &Owner::from(owner)).is_err());
});
