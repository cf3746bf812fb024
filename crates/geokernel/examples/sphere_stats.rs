//! Draw from a sampler described in JSON and print summary statistics.
//!
//! Usage
//! - `cargo run -p geokernel --example sphere_stats`
//! - `cargo run -p geokernel --example sphere_stats -- '{"shape":"disk","radius":2,"seed":1}'`
//! - `RUST_LOG` is not read; pass `-v` as the last argument for debug logs.

use geokernel::api::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let verbose = args.iter().any(|a| a == "-v");
    tracing_subscriber::fmt()
        .with_max_level(if verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let json = args
        .iter()
        .find(|a| a.as_str() != "-v")
        .cloned()
        .unwrap_or_else(|| r#"{"shape":"sphere_surface","radius":2.0,"seed":7}"#.to_string());
    let spec: SamplerSpec = serde_json::from_str(&json)?;
    let mut sampler = spec.build()?;

    let n = 20_000;
    let pts = sampler.points(n);
    let bb = Aabb::from_points(pts.iter().copied()).ok_or("no samples")?;
    let mean = pts.iter().fold(Coord::zero(), |acc, p| acc + *p) * (1.0 / n as f64);
    let mean_r = pts.iter().map(|p| p.length_3d()).sum::<f64>() / n as f64;

    tracing::info!(seed = sampler.seed(), n, "sampled");
    println!("shape   {:?}", spec.shape);
    println!("mean    {:?}", mean.to_array());
    println!("mean |p| {mean_r:.4}");
    println!("bounds  {:?} .. {:?}", bb.min.to_array(), bb.max.to_array());
    Ok(())
}
