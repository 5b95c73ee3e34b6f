use picnic::{KeyPair, Parameters};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let supported: Vec<Parameters> = Parameters::supported().collect();
    if supported.is_empty() {
        eprintln!("The linked libpicnic does not support any parameter set");
        std::process::exit(1);
    }

    println!("Testing Picnic bindings ({} parameter sets)...\n", supported.len());

    let message = b"message";

    for params in supported {
        println!("== {} ==", params);

        let keypair = KeyPair::generate(params).expect("Failed to generate keypair");
        println!("✓ Generated keypair");

        let public_key_bytes = keypair
            .public_key()
            .to_bytes()
            .expect("Failed to serialize public key");
        println!("  Public Key length: {} bytes", public_key_bytes.len());
        println!("  Public Key (hex): {}", hex::encode(&public_key_bytes));

        let signature = keypair.sign(message).expect("Failed to sign message");
        println!("✓ Signed message");
        println!("  Signature length: {} bytes (max {})", signature.len(), params.max_signature_size());
        println!("  Signature prefix (hex): {}", hex::encode(&signature.as_bytes()[..32.min(signature.len())]));

        let is_valid = keypair
            .public_key()
            .verify(message, &signature)
            .expect("Verification failed");
        assert!(is_valid, "Signature verification failed!");
        println!("✓ Signature verification passed");

        let wrong_verify = keypair
            .public_key()
            .verify(b"wrong", &signature)
            .expect("Verification check failed!");
        assert!(!wrong_verify, "Should not verify wrong message!");
        println!("✓ Correctly rejected invalid message");

        let sm = picnic::sign_nist(keypair.private_key(), message).expect("Failed to sign");
        let opened = picnic::verify_nist(keypair.public_key(), &sm).expect("Malformed signed message");
        assert_eq!(opened, Some(&message[..]));
        println!("✓ NIST signed message round trip ({} bytes)\n", sm.len());
    }

    println!("✓ All tests passed!");
}
