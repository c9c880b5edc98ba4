use chrono::{Duration, NaiveDateTime};
use rand::Rng;
use crate::anonymize::RESERVED;
use crate::digest::digest;
use crate::record::{Direction, Record};
use crate::topology::{Node, Topology};
use super::ports::PortCounter;

const UDP: &str = "17";
const TCP: &str = "6";

const NO_FLAGS: &str = "        ";
const SYN_ONLY: &str = " S      ";

// Builds the synthetic attack records layered over the noise. Every record
// is a fresh value built from the anonymized base record plus explicit
// field overrides; shared input state is never mutated.
pub struct Synth<'t> {
    topo:   &'t Topology,
    victim: String,
}

impl<'t> Synth<'t> {
    pub fn new(topo: &'t Topology, victim: &str) -> Self {
        Self {
            topo:   topo,
            victim: victim.to_string(),
        }
    }

    // One UDP flow per reflector: inbound is the small query leg spoofed
    // from the victim, outbound the amplified response back at it.
    pub fn amplifiers(&self, base: &Record, start: NaiveDateTime, direction: Direction, node: &Node) -> Vec<Record> {
        (0..self.topo.amplifiers_per_node).map(|amp| {
            self.amplifier(base, start, direction, node, amp)
        }).collect()
    }

    fn amplifier(&self, base: &Record, start: NaiveDateTime, direction: Direction, node: &Node, amp: u32) -> Record {
        let topo   = self.topo;
        let d      = digest(&format!("{}{}", node.network, amp));
        let amp_ip = format!("{}.{}.{}", node.network, d[0], d[1]);

        let mut synth = base.clone();
        synth.set_times(start + Duration::milliseconds(10 * (1 + amp as i64)), topo.flow_duration);
        synth.proto = UDP.to_string();
        synth.flags = NO_FLAGS.to_string();

        match direction {
            Direction::In => {
                synth.sip     = self.victim.clone();
                synth.dip     = amp_ip;
                synth.sport   = topo.reflect_client_port.to_string();
                synth.dport   = topo.reflect_service_port.to_string();
                synth.packets = jitter(topo.reflect_input_packets_per_flow).to_string();
                synth.bytes   = jitter(topo.reflect_input_bytes_per_flow).to_string();
            }
            Direction::Out => {
                synth.sip     = amp_ip;
                synth.dip     = self.victim.clone();
                synth.sport   = topo.reflect_service_port.to_string();
                synth.dport   = topo.reflect_client_port.to_string();
                synth.packets = jitter(topo.reflect_output_packets_per_flow).to_string();
                synth.bytes   = jitter(topo.reflect_output_bytes_per_flow).to_string();
            }
        }

        synth
    }

    // Dumb UDP floods hammering the victim, outbound only; the inbound side
    // (command-and-control) is not modeled.
    pub fn bots(&self, base: &Record, start: NaiveDateTime, direction: Direction, node: &Node, ports: &mut PortCounter) -> Vec<Record> {
        if direction == Direction::In {
            return Vec::new();
        }
        (0..self.topo.bots_per_node).map(|bot| {
            self.bot(base, start, node, bot, ports)
        }).collect()
    }

    fn bot(&self, base: &Record, start: NaiveDateTime, node: &Node, bot: u32, ports: &mut PortCounter) -> Record {
        let topo   = self.topo;
        let d      = digest(&format!("{}{}bot", node.network, bot));
        let bot_ip = format!("{}.{}.{}", node.network, d[0], d[1]);

        let mut synth = base.clone();
        synth.set_times(start + Duration::milliseconds(10 * (1 + bot as i64)), topo.flow_duration);
        synth.proto   = UDP.to_string();
        synth.flags   = NO_FLAGS.to_string();
        synth.sip     = bot_ip;
        synth.dip     = self.victim.clone();
        synth.sport   = ports.next(&d).to_string();
        synth.dport   = topo.bot_dst_port.to_string();
        synth.packets = jitter(topo.bot_output_packets_per_flow).to_string();
        synth.bytes   = jitter(topo.bot_output_bytes_per_flow).to_string();
        synth
    }

    // The victim's consolidated inbound view: the response leg of every
    // reflector and the flood of every bot across the whole topology. The
    // draws are independent of what each origin node emitted, so counts
    // match in distribution, not byte for byte.
    pub fn victim(&self, base: &Record, start: NaiveDateTime, direction: Direction, ports: &mut PortCounter) -> Vec<Record> {
        if direction != Direction::In {
            return Vec::new();
        }

        let mut records = Vec::new();

        for node in self.topo.nodes.iter().filter(|n| n.amplifiers) {
            for amp in 0..self.topo.amplifiers_per_node {
                records.push(self.amplifier(base, start, Direction::Out, node, amp));
            }
        }

        for node in self.topo.nodes.iter().filter(|n| n.bots) {
            for bot in 0..self.topo.bots_per_node {
                records.push(self.bot(base, start, node, bot, ports));
            }
        }

        records
    }

    // TCP SYN probes from random sources scanning this node's space, like a
    // botnet hunting for open telnet ports. Analysts notice these as many
    // flows with many unique destinations, so sources and destinations are
    // freshly random every time.
    pub fn probes(&self, base: &Record, start: NaiveDateTime, direction: Direction, node: &Node) -> Vec<Record> {
        if direction != Direction::In {
            return Vec::new();
        }

        let topo = self.topo;
        (0..topo.probes_per_timestep).map(|probe| {
            let mut synth = base.clone();
            synth.set_times(start + Duration::milliseconds(15 * (1 + probe as i64)), topo.probes_duration);
            synth.proto   = TCP.to_string();
            synth.flags   = SYN_ONLY.to_string();
            synth.sip     = random_ip(None);
            synth.dip     = random_ip(Some(&node.network));
            synth.sport   = rand::thread_rng().gen_range(49152..=65535u16).to_string();
            synth.dport   = topo.probes_dst_port.to_string();
            synth.packets = (1 + topo.probes_duration).to_string();
            synth.bytes   = (64 * (1 + topo.probes_duration)).to_string();
            synth
        }).collect()
    }
}

// Floor plus a uniform draw up to the floor again. These values need not
// agree between the origin and victim views, so the thread RNG is fine.
fn jitter(floor: u64) -> u64 {
    floor + rand::thread_rng().gen_range(0..=floor)
}

// Random address, optionally confined to a two-octet prefix. Fully random
// addresses avoid the reserved first octets.
pub fn random_ip(prefix: Option<&str>) -> String {
    let mut rng = rand::thread_rng();
    let prefix = match prefix {
        Some(p) => p.to_string(),
        None => {
            let mut octet = rng.gen_range(1..=255u8);
            while RESERVED.contains(&octet) {
                octet = rng.gen_range(1..=255);
            }
            format!("{}.{}", octet, rng.gen_range(1..=255u8))
        }
    };
    format!("{}.{}.{}", prefix, rng.gen_range(1..=255u8), rng.gen_range(1..=255u8))
}
