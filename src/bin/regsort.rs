use std::fs;
use std::path::PathBuf;
use std::process::exit;

use clap::AppSettings;
use log::{error, info, LevelFilter};
use structopt::StructOpt;

use regbench::bench::timed;
use regbench::{dataset, sort, Result, DEFAULT_SIZES};

/// Command line options of the sorting benchmark.
#[derive(StructOpt, Debug)]
#[structopt(
    name = "regsort",
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
    /// Dataset sizes to sort.
    #[structopt(
        long = "sizes",
        help = "Sets the dataset sizes to sort (default: the standard ladder)",
        value_name = "N"
    )]
    sizes: Vec<usize>,
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
    for &size in &sizes {
        let path = dataset::dataset_path(&opt.data_dir, size);
        let records = dataset::load_file(&path, size)?;
        info!("loaded {} records from {}", records.len(), path.display());

        // Each algorithm gets its own copy of the unsorted records.
        let mut by_selection = records.clone();
        let (_, selection) = timed(|| sort::selection_sort(&mut by_selection));
        println!("Selection sort {}: {:.6} s", size, selection.as_secs_f64());

        let mut by_quick = records.clone();
        let (_, quick) = timed(|| sort::quick_sort(&mut by_quick));
        println!("Quick sort {}: {:.6} s", size, quick.as_secs_f64());

        let mut by_shaker = records;
        let (_, shaker) = timed(|| sort::shaker_sort(&mut by_shaker));
        println!("Shaker sort {}: {:.6} s", size, shaker.as_secs_f64());
        println!();

        let mut out = String::new();
        for record in &by_quick {
            out.push_str(&format!("{}\n", record));
        }
        fs::write(opt.data_dir.join(format!("output_{}.txt", size)), out)?;
    }
    Ok(())
}
