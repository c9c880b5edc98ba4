use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use anyhow::{Context, Result};
use log::info;
use crate::anonymize::rewrite;
use crate::record::{self, Direction};
use crate::synth::{PortCounter, Synth};
use crate::topology::Topology;
use super::Sinks;

// Streams each direction's noise file once, fanning every record out
// across every node: anonymize, emit, and layer synthetic attack records
// in at the configured interval. Inbound and outbound are two independent
// passes over the same node set.
pub struct Generator<'t> {
    topo:   &'t Topology,
    synth:  Synth<'t>,
    sinks:  Sinks,
    victim: usize,
}

impl<'t> Generator<'t> {
    pub fn new(topo: &'t Topology, sinks: Sinks) -> Result<Self> {
        let (victim, addr) = topo.victim()?;
        Ok(Self {
            topo:   topo,
            synth:  Synth::new(topo, addr),
            sinks:  sinks,
            victim: victim,
        })
    }

    pub fn run(&mut self, dataset: &Path) -> Result<()> {
        info!("processing inbound");
        self.pass(&dataset.join("inbound"), Direction::In)?;
        info!("processing outbound");
        self.pass(&dataset.join("outbound"), Direction::Out)?;
        Ok(())
    }

    fn pass(&mut self, path: &Path, direction: Direction) -> Result<()> {
        let file = File::open(path).with_context(|| {
            format!("cannot open noise dataset {}", path.display())
        })?;

        let topo        = self.topo;
        let mut ports   = PortCounter::new();
        let mut counter = 0u64;

        for (n, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;

            let trigger = counter > topo.synthetic_interval;
            counter = match trigger {
                true  => 1,
                false => counter + 1,
            };

            let record = record::parse(&line).with_context(|| {
                format!("{} line {}", path.display(), n + 1)
            })?;

            for (i, node) in topo.nodes.iter().enumerate() {
                let base = rewrite(&record, direction, node)?;
                self.sinks.write(i, direction, &base)?;

                // Header lines never trigger synthesis.
                let start = match (trigger, base.start) {
                    (true, Some(start)) => start,
                    _                   => continue,
                };

                if node.amplifiers {
                    for synth in self.synth.amplifiers(&base, start, direction, node) {
                        self.sinks.write(i, direction, &synth)?;
                    }
                }

                if node.bots {
                    for synth in self.synth.bots(&base, start, direction, node, &mut ports) {
                        self.sinks.write(i, direction, &synth)?;
                    }
                }

                if i == self.victim {
                    for synth in self.synth.victim(&base, start, direction, &mut ports) {
                        self.sinks.write(i, direction, &synth)?;
                    }
                }

                if topo.probes_enabled {
                    for synth in self.synth.probes(&base, start, direction, node) {
                        self.sinks.write(i, direction, &synth)?;
                    }
                }
            }
        }

        self.sinks.flush()
    }
}
