use std::path::PathBuf;
use std::process::exit;

use clap::AppSettings;
use log::{error, info, LevelFilter};
use structopt::StructOpt;

use regbench::bench::{self, BenchConfig};
use regbench::{Result, DEFAULT_BUCKET_COUNT, DEFAULT_SIZES};

/// Command line options of the index benchmark harness.
#[derive(StructOpt, Debug)]
#[structopt(
    name = "regbench",
    raw(global_settings = "&[AppSettings::DeriveDisplayOrder]")
)]
struct Opt {
    /// Directory with the dataset files.
    #[structopt(
        long = "data-dir",
        help = "Sets the directory holding the input_{size}.txt dataset files",
        value_name = "DIR",
        default_value = ".",
        parse(from_os_str)
    )]
    data_dir: PathBuf,
    /// Dataset sizes to measure.
    #[structopt(
        long = "sizes",
        help = "Sets the dataset sizes to measure (default: the standard ladder)",
        value_name = "N"
    )]
    sizes: Vec<usize>,
    /// Bucket count of the chained hash map.
    #[structopt(
        long = "buckets",
        help = "Sets the chained hash map bucket count",
        value_name = "N"
    )]
    buckets: Option<usize>,
}

fn main() {
    env_logger::builder().filter_level(LevelFilter::Info).init();
    let opt = Opt::from_args();
    if let Err(e) = run(opt) {
        error!("{}", e);
        exit(1);
    }
}

fn run(opt: Opt) -> Result<()> {
    info!("regbench {}", env!("CARGO_PKG_VERSION"));
    let config = BenchConfig {
        data_dir: opt.data_dir,
        sizes: if opt.sizes.is_empty() {
            DEFAULT_SIZES.to_vec()
        } else {
            opt.sizes
        },
        bucket_count: opt.buckets.unwrap_or(DEFAULT_BUCKET_COUNT),
    };
    bench::run(&config)
}
