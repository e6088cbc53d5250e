//! Property-based tests for symcrypt
//!
//! Uses proptest to verify invariants across large input spaces.

use proptest::prelude::*;
use symcrypt::wire::ciphertext_len;
use symcrypt::{Ciphertext, Client, NONCE_SIZE, Owner, Plaintext, SymcryptError};
use symcrypt_integration_tests::fixed_client;

// ============================================================================
// Encrypt/Decrypt Properties
// ============================================================================

mod client_properties {
    use super::*;

    proptest! {
        /// decrypt(encrypt(p, o), o) == p
        #[test]
        fn roundtrip(
            plaintext in prop::collection::vec(any::<u8>(), 0..1024),
            owner in any::<String>(),
        ) {
            let client = fixed_client(0x42);
            let plaintext = Plaintext::from(plaintext);
            let owner = Owner::from(owner);

            let ciphertext = client.encrypt(&plaintext, &owner).unwrap();
            prop_assert_eq!(client.decrypt(&ciphertext, &owner).unwrap(), plaintext);
        }

        /// A ciphertext only opens for the owner it was sealed for
        #[test]
        fn owner_binding(
            plaintext in ".{0,64}",
            owner1 in ".{0,32}",
            owner2 in ".{0,32}",
        ) {
            prop_assume!(owner1 != owner2);

            let client = fixed_client(0x42);
            let ciphertext = client
                .encrypt(&Plaintext::from(plaintext), &Owner::from(owner1))
                .unwrap();

            prop_assert_eq!(
                client.decrypt(&ciphertext, &Owner::from(owner2)),
                Err(SymcryptError::AuthenticationFailed)
            );
        }

        /// Output length depends only on plaintext length
        #[test]
        fn ciphertext_length(
            plaintext in prop::collection::vec(any::<u8>(), 0..2048),
            owner in ".{0,32}",
        ) {
            let client = fixed_client(0x42);
            let len = plaintext.len();
            let ciphertext = client
                .encrypt(&Plaintext::from(plaintext), &Owner::from(owner))
                .unwrap();

            prop_assert_eq!(ciphertext.len(), ciphertext_len(len));
            prop_assert!(ciphertext.as_str().bytes().all(|b| b.is_ascii_hexdigit()));
        }

        /// Identical inputs encrypt differently but decrypt identically
        #[test]
        fn non_deterministic(plaintext in ".{0,64}", owner in ".{0,32}") {
            let client = fixed_client(0x42);
            let plaintext = Plaintext::from(plaintext);
            let owner = Owner::from(owner);

            let first = client.encrypt(&plaintext, &owner).unwrap();
            let second = client.encrypt(&plaintext, &owner).unwrap();

            prop_assert_ne!(&first, &second);
            prop_assert_eq!(client.decrypt(&first, &owner).unwrap(), plaintext.clone());
            prop_assert_eq!(client.decrypt(&second, &owner).unwrap(), plaintext);
        }

        /// Clients with different keys cannot read each other's output
        #[test]
        fn key_isolation(
            key1 in any::<u8>(),
            key2 in any::<u8>(),
            plaintext in ".{0,64}",
            owner in ".{0,32}",
        ) {
            prop_assume!(key1 != key2);

            let owner = Owner::from(owner);
            let ciphertext = fixed_client(key1)
                .encrypt(&Plaintext::from(plaintext), &owner)
                .unwrap();

            prop_assert_eq!(
                fixed_client(key2).decrypt(&ciphertext, &owner),
                Err(SymcryptError::AuthenticationFailed)
            );
        }

        /// Flipping any bit of the encoded bytes is detected
        #[test]
        fn tamper_detection(
            plaintext in ".{0,64}",
            index in any::<prop::sample::Index>(),
            bit in 0u8..8,
        ) {
            let client = fixed_client(0x42);
            let owner = Owner::from("userid_000111");
            let ciphertext = client.encrypt(&Plaintext::from(plaintext), &owner).unwrap();

            let mut bytes = hex::decode(ciphertext.as_str()).unwrap();
            let i = index.index(bytes.len());
            bytes[i] ^= 1 << bit;
            let tampered = Ciphertext::from(hex::encode(bytes));

            prop_assert_eq!(
                client.decrypt(&tampered, &owner),
                Err(SymcryptError::AuthenticationFailed)
            );
        }
    }
}

// ============================================================================
// Malformed Input Properties
// ============================================================================

mod malformed_properties {
    use super::*;

    proptest! {
        /// Arbitrary strings never panic
        #[test]
        fn arbitrary_input_never_panics(input in any::<String>(), owner in ".{0,16}") {
            let client = fixed_client(0x42);
            let result = client.decrypt(&Ciphertext::from(input), &Owner::from(owner));
            prop_assert!(result.is_err());
        }

        /// Non-hex characters are an encoding error
        #[test]
        fn non_hex_rejected(input in "[0-9a-f]{0,10}[g-z][0-9a-z]{0,60}") {
            let client = fixed_client(0x42);
            prop_assert_eq!(
                client.decrypt(&Ciphertext::from(input), &Owner::from("o")),
                Err(SymcryptError::InvalidCiphertextEncoding)
            );
        }

        /// Odd-length hex is an encoding error
        #[test]
        fn odd_length_rejected(input in "[0-9a-f]([0-9a-f]{2}){0,60}") {
            let client = fixed_client(0x42);
            prop_assert_eq!(
                client.decrypt(&Ciphertext::from(input), &Owner::from("o")),
                Err(SymcryptError::InvalidCiphertextEncoding)
            );
        }

        /// Hex shorter than a nonce is malformed
        #[test]
        fn short_input_rejected(bytes in prop::collection::vec(any::<u8>(), 0..NONCE_SIZE)) {
            let client = fixed_client(0x42);
            let len = bytes.len();
            prop_assert_eq!(
                client.decrypt(&Ciphertext::from(hex::encode(bytes)), &Owner::from("o")),
                Err(SymcryptError::MalformedCiphertext { minimum: NONCE_SIZE, actual: len })
            );
        }
    }
}
