//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `leitner_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("leitner_core version={}", leitner_core::core_version());
    println!(
        "leitner_core schema_version={}",
        leitner_core::db::migrations::latest_version()
    );
}
