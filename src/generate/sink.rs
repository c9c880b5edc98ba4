use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use anyhow::Result;
use log::debug;
use crate::error::Error;
use crate::record::{self, Direction, Record};
use crate::topology::Topology;

// One append-only output per (node, direction), opened before processing
// starts and held for the whole run. An existing output directory is never
// clobbered.
pub struct Sinks {
    files: Vec<Pair>,
}

struct Pair {
    inbound:  BufWriter<File>,
    outbound: BufWriter<File>,
}

impl Sinks {
    pub fn create(dir: &Path, topo: &Topology) -> Result<Self> {
        if dir.exists() {
            let msg = format!("output path {} already exists", dir.display());
            return Err(Error::Output(msg).into());
        }
        fs::create_dir_all(dir)?;

        let mut files = Vec::with_capacity(topo.nodes.len());
        for node in &topo.nodes {
            let inbound  = dir.join(format!("{}-inbound.tuc",  node.name));
            let outbound = dir.join(format!("{}-outbound.tuc", node.name));
            files.push(Pair {
                inbound:  BufWriter::new(File::create(inbound)?),
                outbound: BufWriter::new(File::create(outbound)?),
            });
            debug!("created result files for {}", node.name);
        }

        Ok(Self { files: files })
    }

    pub fn write(&mut self, node: usize, direction: Direction, record: &Record) -> Result<()> {
        let pair = &mut self.files[node];
        let file = match direction {
            Direction::In  => &mut pair.inbound,
            Direction::Out => &mut pair.outbound,
        };
        file.write_all(record::serialize(record).as_bytes())?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        for pair in &mut self.files {
            pair.inbound.flush()?;
            pair.outbound.flush()?;
        }
        Ok(())
    }
}
