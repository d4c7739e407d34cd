//! Commit to a message, re-open the commitment to a different message with the trapdoor, and
//! recover the trapdoor from the two openings.
use tracing::info;
use trapdoor_crypto::{DlCommitment, TrapdoorCommitment};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut rng = rand::thread_rng();
    let scheme = DlCommitment::default();

    let (ck, td) = scheme.generate(&mut rng);
    info!(%ck, "generated commitment key");

    let m0 = b"42";
    let (c, d0) = scheme.commit(&mut rng, &ck, m0);
    info!(%c, %d0, "committed");
    info!(verified = scheme.verify(&ck, &c, m0, &d0), "verified original opening");

    let m = b"100";
    let d = scheme.trapdoor_open(&td, &c, m0, &d0, m);
    info!(%d, "re-opened with trapdoor");
    info!(verified = scheme.verify(&ck, &c, m, &d), "verified adapted opening");

    match scheme.extract(&ck, &c, m0, &d0, m, &d) {
        Ok(extracted) => info!(
            matches = scheme.matches(&ck, &extracted),
            trapdoor = %extracted.to_hex(),
            "extracted trapdoor"
        ),
        Err(err) => info!(%err, "failed to extract trapdoor"),
    }
}
