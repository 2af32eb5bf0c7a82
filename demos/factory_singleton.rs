//! Factory/singleton registry example.
//!
//! Registers builders in the process-wide registry, replaces one, and
//! looks builders up by description.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=sandwich_builder=debug cargo run --example factory_singleton --all-features
//! ```

use std::sync::Arc;

use sandwich_builder::builders::{
    BbqSaucePolicy, ChickenPattyPolicy, HamPattyPolicy, MultigrainBreadPolicy,
    OreganoBreadPolicy, PolicySandwichBuilder, SweetOnionSaucePolicy,
};
use sandwich_builder::registry::{lock, share, BuilderRegistry};
use sandwich_builder::traits::SandwichBuilder;
use tracing_subscriber::EnvFilter;

type OreganoChickenBbq =
    PolicySandwichBuilder<OreganoBreadPolicy, ChickenPattyPolicy, BbqSaucePolicy>;
type MultigrainHamSweetOnion =
    PolicySandwichBuilder<MultigrainBreadPolicy, HamPattyPolicy, SweetOnionSaucePolicy>;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Builder Registry ===\n");

    let factory = BuilderRegistry::global();

    // ── 1. Register builders ────────────────────────────────────────────
    let first = share(OreganoChickenBbq::new());
    let other = share(MultigrainHamSweetOnion::new());
    let second = share(OreganoChickenBbq::new());

    for builder in [&first, &other, &second] {
        let description = lock(builder).description().to_owned();
        let replaced = factory.register(builder);
        println!("register {description:<48} replaced={replaced}");
    }

    println!("\nRegistered: {:?}", factory.descriptions());

    // ── 2. Look builders up by name ─────────────────────────────────────
    let key = "Policy::OreganoBread::ChickenPatty::BBQSauce";
    if let Some(found) = factory.lookup(key) {
        println!("\n{key}");
        println!("  latest registration wins: {}", Arc::ptr_eq(&found, &second));
        let sandwich = lock(&found).build()?;
        println!("  builds: {sandwich}");
    }

    println!("\nlookup(\"garbage\") is none: {}", factory.lookup("garbage").is_none());

    // ── 3. Build through the registry ───────────────────────────────────
    let sandwich = factory.build("Policy::MultigrainBread::HamPatty::SweetOnionSauce")?;
    println!("\nRegistry build: {sandwich}");

    // ── 4. Dropped builders are no longer reachable ─────────────────────
    drop(other);
    match factory.build("Policy::MultigrainBread::HamPatty::SweetOnionSauce") {
        Ok(s) => println!("Unexpected sandwich: {s}"),
        Err(e) => println!("After drop: {e}"),
    }
    println!("Pruned {} dropped entries", factory.prune());

    drop(first);
    Ok(())
}
