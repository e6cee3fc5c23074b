use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, ensure};
use clap::Parser;
use env_logger::Env;
use log::info;
use voracious_radix_sort::RadixSort;

mod chunked_sort;
mod dataset;
mod doubling_merge;
mod kway_merge;
mod merge_sort;

/// Two-phase chunked merge sort benchmark: sort fixed-size chunks
/// independently, then combine them by doubling merge passes or a single
/// k-way pass.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Number of 32-bit values in the workload.
    #[arg(long, default_value_t = 2_621_440)]
    len: usize,
    /// Number of chunks sorted independently in phase 1.
    #[arg(long, default_value_t = 5)]
    chunks: usize,
    /// Seed for the generated workload.
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Read the workload from a raw little-endian i32 file instead of
    /// generating it.
    #[arg(long)]
    input: Option<PathBuf>,
    /// Timed repeats per strategy, after an equal number of warmup runs.
    #[arg(long, default_value_t = 3)]
    repeats: usize,
    /// Worker threads for phase 1 chunk sorting. 1 keeps everything on the
    /// caller's thread.
    #[arg(long, default_value_t = 1)]
    threads: usize,
}

fn benchmark(name: &str, repeats: usize, mut f: impl FnMut()) {
    // Warmup.
    for _ in 0..repeats {
        f();
    }
    let start = Instant::now();
    for _ in 0..repeats {
        f();
    }
    let duration = start.elapsed();
    println!("  {}: {}", name, human_time(repeats, duration));
}

fn human_time(repeats: usize, duration: Duration) -> String {
    let mut duration = duration.as_nanos() as f64 / repeats as f64;
    if duration < 1000.0 {
        return format!("{:.1}ns", duration);
    }
    duration /= 1000.0;
    if duration < 1000.0 {
        return format!("{:.1}us", duration);
    }
    duration /= 1000.0;
    if duration < 1000.0 {
        return format!("{:.1}ms", duration);
    }
    duration /= 1000.0;
    format!("{:.1}s", duration)
}

fn human_size(size: usize) -> String {
    if size < 1024 {
        return format!("{}B", size);
    }
    let mut size = size as f64;
    size /= 1024.0;
    if size < 1024.0 {
        return format!("{:.1}KiB", size);
    }
    size /= 1024.0;
    if size < 1024.0 {
        return format!("{:.1}MiB", size);
    }
    size /= 1024.0;
    format!("{:.1}GiB", size)
}

/// Equality against the baseline-sorted copy covers both ordering and
/// permutation preservation.
fn verify(name: &str, got: &[i32], expected: &[i32]) -> Result<()> {
    ensure!(got.is_sorted(), "{name} output is not sorted");
    ensure!(
        got == expected,
        "{name} output is not a permutation of the input"
    );
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    ensure!(args.len > 0, "workload length must be at least 1");
    ensure!(args.chunks > 0, "chunk count must be at least 1");
    ensure!(args.repeats > 0, "repeats must be at least 1");
    if args.threads > 1 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()
            .context("failed to build the phase 1 thread pool")?;
    }
    let chunk_len = args.len.div_ceil(args.chunks);

    let data = match &args.input {
        Some(path) => dataset::load(path, args.len)?,
        None => dataset::generate(args.len, args.seed),
    };
    info!(
        "workload: {} values ({}), {} chunks of up to {} values",
        args.len,
        human_size(std::mem::size_of::<i32>() * args.len),
        args.chunks,
        chunk_len
    );

    let mut expected = data.clone();
    expected.sort_unstable();

    benchmark("sort_unstable", args.repeats, || {
        let mut d = data.clone();
        d.sort_unstable();
    });
    benchmark("voracious radix", args.repeats, || {
        let mut d = data.clone();
        d.voracious_sort();
    });
    if args.threads > 1 {
        benchmark("voracious radix (mt)", args.repeats, || {
            let mut d = data.clone();
            d.voracious_mt_sort(args.threads);
        });
    }
    benchmark("chunked + doubling merge", args.repeats, || {
        let mut d = data.clone();
        chunked_sort::doubling_sort(&mut d, chunk_len, args.threads);
    });
    benchmark("chunked + k-way merge", args.repeats, || {
        let mut d = data.clone();
        chunked_sort::kway_sort(&mut d, chunk_len, args.threads);
    });

    let mut doubling = data.clone();
    chunked_sort::doubling_sort(&mut doubling, chunk_len, args.threads);
    verify("doubling merge", &doubling, &expected)?;

    let mut kway_input = data;
    let kway = chunked_sort::kway_sort(&mut kway_input, chunk_len, args.threads);
    verify("k-way merge", &kway, &expected)?;

    info!("verified: both merge strategies match the sorted baseline");
    Ok(())
}
