use std::path::PathBuf;
use std::process::exit;

use clap::AppSettings;
use log::{error, info, LevelFilter};
use rand::rngs::StdRng;
use rand::SeedableRng;
use structopt::StructOpt;

use regbench::{dataset, Result, DEFAULT_SIZES};

const DEFAULT_SEED: u64 = 42;

/// Command line options of the dataset generator.
#[derive(StructOpt, Debug)]
#[structopt(
    name = "reggen",
    raw(global_settings = "&[AppSettings::DeriveDisplayOrder]")
)]
struct Opt {
    /// Directory to write the dataset files into.
    #[structopt(
        long = "data-dir",
        help = "Sets the directory the input_{size}.txt files are written to",
        value_name = "DIR",
        default_value = ".",
        parse(from_os_str)
    )]
    data_dir: PathBuf,
    /// Dataset sizes to generate.
    #[structopt(
        long = "sizes",
        help = "Sets the dataset sizes to generate (default: the standard ladder)",
        value_name = "N"
    )]
    sizes: Vec<usize>,
    /// Seed of the random generator.
    #[structopt(long = "seed", help = "Sets the random seed", value_name = "SEED")]
    seed: Option<u64>,
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
    let sizes = if opt.sizes.is_empty() {
        DEFAULT_SIZES.to_vec()
    } else {
        opt.sizes
    };
    let mut rng = StdRng::seed_from_u64(opt.seed.unwrap_or(DEFAULT_SEED));
    for &size in &sizes {
        let records = dataset::generate(&mut rng, size);
        let path = dataset::dataset_path(&opt.data_dir, size);
        dataset::write_file(&path, &records)?;
        info!("wrote {} records to {}", records.len(), path.display());
    }
    Ok(())
}
