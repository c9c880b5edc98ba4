use std::path::Path;
use anyhow::Result;
use clap::{load_yaml, value_t, App};
use env_logger::Builder;
use log::info;
use log::LevelFilter::*;
use flowsynth::generate::{Generator, Sinks};
use flowsynth::topology::Topology;

fn main() -> Result<()> {
    let yaml = load_yaml!("args.yml");
    let ver  = env!("CARGO_PKG_VERSION");
    let args = App::from_yaml(&yaml).version(ver).get_matches();

    let dataset  = value_t!(args, "dataset",  String)?;
    let outdir   = value_t!(args, "outdir",   String)?;
    let topology = value_t!(args, "topology", String)?;

    let (module, level) = match args.occurrences_of("verbose") {
        0 => (Some(module_path!()), Info),
        1 => (Some(module_path!()), Debug),
        2 => (Some(module_path!()), Trace),
        _ => (None,                 Trace),
    };
    Builder::from_default_env().filter(module, level).init();

    info!("initializing flowsynth {}", ver);

    let topo  = Topology::load(Path::new(&topology))?;
    let sinks = Sinks::create(Path::new(&outdir), &topo)?;

    let mut generator = Generator::new(&topo, sinks)?;
    generator.run(Path::new(&dataset))?;

    info!("results written to {}", outdir);

    Ok(())
}
