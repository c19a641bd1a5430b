//! FibLab CLI — fixed demonstration of both subsystems, no flags.
//!
//! Running it:
//! 1. prints the leading terms of every sequence access pattern
//! 2. fetches the daily rates and saves them as JSON, YAML, and CSV
//! 3. runs one deliberately mismatched decorator chain to show that
//!    nesting is unconstrained even when the output is useless

use std::path::Path;

use anyhow::Result;
use fiblab_core::rates::{CbrProvider, CsvDecorator, RatePayload, RateProvider, YamlDecorator};
use fiblab_core::sequence::{fibonacci, FibIterator, IndexQuery, MemoFibonacci};
use num_bigint::BigUint;

const DEMO_TERMS: usize = 10;

fn main() -> Result<()> {
    sequence_showcase()?;
    rates_showcase()
}

fn sequence_showcase() -> Result<()> {
    println!("Fibonacci, four ways ({DEMO_TERMS} terms each):");

    let iterated: Vec<BigUint> = FibIterator::new().take(DEMO_TERMS).collect();
    println!("  iterator:  {}", render_terms(&iterated));

    let mut memo = MemoFibonacci::new();
    let indexed = (0..DEMO_TERMS as i64)
        .map(|i| memo.get(i))
        .collect::<Result<Vec<BigUint>, _>>()?;
    println!("  memoized:  {}", render_terms(&indexed));

    let generated: Vec<BigUint> = fibonacci().take(DEMO_TERMS).collect();
    println!("  generator: {}", render_terms(&generated));

    let mut queried = Vec::with_capacity(DEMO_TERMS);
    for i in 0..DEMO_TERMS as i64 {
        queried.push(IndexQuery::start().resume(i)?);
    }
    println!("  one-shot:  {}", render_terms(&queried));

    Ok(())
}

fn render_terms(terms: &[BigUint]) -> String {
    terms
        .iter()
        .map(|term| term.to_string())
        .collect::<Vec<String>>()
        .join(" ")
}

fn rates_showcase() -> Result<()> {
    println!("\nDaily rates through the decorator pipeline:");

    let json = CbrProvider::new();
    describe("json", &json)?;
    persist_stage(&json, "rates.json")?;

    let yaml = YamlDecorator::new(CbrProvider::new());
    describe("yaml", &yaml)?;
    persist_stage(&yaml, "rates")?;

    let csv = CsvDecorator::new(CbrProvider::new());
    describe("csv", &csv)?;
    persist_stage(&csv, "rates")?;

    // CSV text re-encoded as YAML: allowed, useless, must not fail.
    let mismatched = YamlDecorator::new(CsvDecorator::new(CbrProvider::new()));
    describe("yaml-over-csv", &mismatched)?;
    persist_stage(&mismatched, "rates_mismatched")?;

    Ok(())
}

fn describe(label: &str, provider: &dyn RateProvider) -> Result<()> {
    match provider.fetch()? {
        RatePayload::Dataset(dataset) => {
            let date = dataset
                .date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "unknown date".into());
            println!("  {label}: {} currencies as of {date}", dataset.valute.len());
        }
        RatePayload::Text(text) => {
            let preview: String = text.chars().take(48).collect();
            println!("  {label}: {} chars, starts {preview:?}", text.chars().count());
        }
    }
    Ok(())
}

fn persist_stage(provider: &dyn RateProvider, path: &str) -> Result<()> {
    let written = provider.persist(Path::new(path))?;
    println!("  wrote {}", written.display());
    Ok(())
}
