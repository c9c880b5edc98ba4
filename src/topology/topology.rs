use std::fs;
use std::path::Path;
use anyhow::{Context, Result};
use serde::Deserialize;
use crate::error::Error;

// One vantage point in the scenario: a class B network space plus the
// attack roles it plays. At most one node declares the victim address.
#[derive(Clone, Debug, Deserialize)]
pub struct Node {
    pub network: String, // two-octet prefix such as "172.16"
    pub name:    String,
    #[serde(default)]
    pub amplifiers: bool,
    #[serde(default)]
    pub bots: bool,
    #[serde(default)]
    pub victim: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Topology {
    pub nodes: Vec<Node>,

    pub amplifiers_per_node: u32,
    pub bots_per_node:       u32,

    // Interval for inserting synthetic records among the noise; 0 means
    // the highest volume of synthetic traffic.
    pub synthetic_interval: u64,

    pub probes_enabled:      bool,
    pub probes_duration:     u64,
    pub probes_per_timestep: u32,
    pub probes_dst_port:     u16,

    pub reflect_service_port:            u16,
    pub reflect_client_port:             u16,
    pub reflect_input_packets_per_flow:  u64,
    pub reflect_input_bytes_per_flow:    u64,
    pub reflect_output_packets_per_flow: u64,
    pub reflect_output_bytes_per_flow:   u64,

    pub bot_dst_port:                u16,
    pub bot_output_packets_per_flow: u64,
    pub bot_output_bytes_per_flow:   u64,

    pub flow_duration: u64,
}

impl Topology {
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read(path).with_context(|| {
            format!("cannot read topology {}", path.display())
        })?;
        let topo = serde_json::from_slice(&data).with_context(|| {
            format!("invalid topology {}", path.display())
        })?;
        Ok(topo)
    }

    // Exactly one node declares the victim address, and that node must not
    // also source attack traffic. Checked once at startup, before any
    // output is created. Returns the victim's index and address.
    pub fn victim(&self) -> Result<(usize, &str)> {
        let mut found = None;
        for (index, node) in self.nodes.iter().enumerate() {
            let addr = match &node.victim {
                Some(addr) => addr.as_str(),
                None       => continue,
            };

            if found.is_some() {
                let msg = "multiple nodes declare a victim address".to_string();
                return Err(Error::Topology(msg).into());
            }

            if node.amplifiers || node.bots {
                let msg = format!("victim node {} must not contain attackers", node.name);
                return Err(Error::Topology(msg).into());
            }

            found = Some((index, addr));
        }

        found.ok_or_else(|| {
            Error::Topology("no node declares a victim address".to_string()).into()
        })
    }
}
