//! Builder strategies example.
//!
//! Builds the same sandwiches with the recipe-driven builder and the
//! policy-composed builder, then shows that the results are equal.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=sandwich_builder=trace cargo run --example builder --all-features
//! ```

use sandwich_builder::builders::{
    BbqSaucePolicy, ChickenPattyPolicy, CornPattyPolicy, GarlicBreadCornTeriyaki,
    GarlicBreadPolicy, HamPattyPolicy, MultigrainBreadPolicy, MultigrainChickenBbq,
    OreganoBreadPolicy, OreganoHamSweetOnion, PolicySandwichBuilder, SweetOnionSaucePolicy,
    TeriyakiSaucePolicy, VirtualSandwichBuilder,
};
use sandwich_builder::config::{BuilderConfig, CustomRecipe};
use sandwich_builder::factory::DefaultBuilderFactory;
use sandwich_builder::traits::SandwichBuilder;
use tracing_subscriber::EnvFilter;

fn run(builder: &mut dyn SandwichBuilder) -> Result<String, Box<dyn std::error::Error>> {
    builder.create_sandwich();
    let sandwich = builder.get_sandwich()?;
    println!("  {:<52} -> {sandwich}", builder.description());
    Ok(sandwich.describe())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Sandwich Builders ===\n");

    // ── 1. Recipe-driven builders ───────────────────────────────────────
    println!("Recipe-driven:");
    let mut dynamic: Vec<Box<dyn SandwichBuilder>> = vec![
        Box::new(VirtualSandwichBuilder::new(MultigrainChickenBbq)),
        Box::new(VirtualSandwichBuilder::new(OreganoHamSweetOnion)),
        Box::new(VirtualSandwichBuilder::new(GarlicBreadCornTeriyaki)),
    ];
    let mut dynamic_out = Vec::new();
    for builder in &mut dynamic {
        dynamic_out.push(run(builder.as_mut())?);
    }

    // ── 2. Policy-composed builders ─────────────────────────────────────
    println!("\nPolicy-composed:");
    let mut policy: Vec<Box<dyn SandwichBuilder>> = vec![
        Box::new(PolicySandwichBuilder::<
            MultigrainBreadPolicy,
            ChickenPattyPolicy,
            BbqSaucePolicy,
        >::new()),
        Box::new(PolicySandwichBuilder::<
            OreganoBreadPolicy,
            HamPattyPolicy,
            SweetOnionSaucePolicy,
        >::new()),
        Box::new(PolicySandwichBuilder::<
            GarlicBreadPolicy,
            CornPattyPolicy,
            TeriyakiSaucePolicy,
        >::new()),
    ];
    let mut policy_out = Vec::new();
    for builder in &mut policy {
        policy_out.push(run(builder.as_mut())?);
    }

    println!("\nStrategies agree: {}", dynamic_out == policy_out);

    // ── 3. Builders from configuration ──────────────────────────────────
    println!("\nFrom configuration:");
    let parsed: BuilderConfig = "Policy::OreganoBread::CornPatty::TeriyakiSauce".parse()?;
    let custom = BuilderConfig::from(CustomRecipe::new(
        "House Special",
        "Sourdough",
        "Turkey",
        "Honey Mustard",
    )?);
    for config in [parsed, custom] {
        let mut builder = DefaultBuilderFactory::create(&config)?;
        run(&mut builder)?;
    }

    // ── 4. Retrieval without a build ────────────────────────────────────
    let mut idle = VirtualSandwichBuilder::new(MultigrainChickenBbq);
    match idle.get_sandwich() {
        Ok(s) => println!("\nUnexpected sandwich: {s}"),
        Err(e) => println!("\nRetrieval before build: {e}"),
    }

    Ok(())
}
