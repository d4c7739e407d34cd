//! Two parties exchange payments atomically: publishing one adapted signature reveals the secret
//! needed to complete the other.
use adaptor_crypto::{AdaptorSignature, Ecdsa, EcdsaAdaptorSignature};
use tracing::{error, info};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    if let Err(err) = run() {
        error!(%err, "swap failed");
        std::process::exit(1);
    }
}

fn run() -> Result<(), adaptor_crypto::Error> {
    let mut rng = rand::thread_rng();
    let scheme = EcdsaAdaptorSignature::default();

    let (alice_pk, alice_sk) = scheme.generate(&mut rng);
    let (bob_pk, bob_sk) = scheme.generate(&mut rng);
    info!(
        alice = %Ecdsa::public_key_to_hex(&alice_pk),
        bob = %Ecdsa::public_key_to_hex(&bob_pk),
        "generated carrier keys"
    );

    let (statement, secret) = scheme.generate_statement(&mut rng);
    info!(%statement, "alice chose a statement");

    let to_bob = b"alice pays bob 1 coin";
    let to_alice = b"bob pays alice 2 tokens";
    let alice_pre = scheme.pre_sign(&mut rng, &alice_sk, to_bob, &statement)?;
    let bob_pre = scheme.pre_sign(&mut rng, &bob_sk, to_alice, &statement)?;
    info!(
        alice = scheme.pre_verify(&alice_pk, to_bob, &statement, &alice_pre).is_verified(),
        bob = scheme.pre_verify(&bob_pk, to_alice, &statement, &bob_pre).is_verified(),
        "exchanged pre-signatures"
    );

    let bob_sig = scheme.adapt(&bob_pk, to_alice, &bob_pre, &secret);
    info!(
        verified = scheme.verify(&bob_pk, to_alice, &bob_sig).is_verified(),
        "alice published bob's payment"
    );

    let learned = scheme.extract(&bob_pk, to_alice, &statement, &bob_pre, &bob_sig)?;
    let alice_sig = scheme.adapt(&alice_pk, to_bob, &alice_pre, &learned);
    info!(
        verified = scheme.verify(&alice_pk, to_bob, &alice_sig).is_verified(),
        "bob published alice's payment"
    );
    Ok(())
}
