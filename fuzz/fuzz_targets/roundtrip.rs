//! Fuzz target for encrypt/decrypt
//!
//! Whatever the key, plaintext and owner, encryption round-trips for the same
//! owner and fails for any other owner.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use symcrypt::{Client, HexKey, Owner, Plaintext, SymcryptError, new_client};

#[derive(Debug, Arbitrary)]
struct RoundtripInput {
    key: [u8; 32],
    plaintext: Vec<u8>,
    owner: String,
    other_owner: String,
}

fuzz_target!(|input: RoundtripInput| {
    let client = new_client(&HexKey::from(hex::encode(input.key))).unwrap();
    let owner = Owner::from(input.owner);
    let plaintext = Plaintext::from(input.plaintext);

    let ciphertext = client.encrypt(&plaintext, &owner).unwrap();
    assert_eq!(client.decrypt(&ciphertext, &owner).unwrap(), plaintext);

    let other = Owner::from(input.other_owner);
    if other != owner {
        assert_eq!(
            client.decrypt(&ciphertext, &other),
            Err(SymcryptError::AuthenticationFailed)
        );
    }
});
