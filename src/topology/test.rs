use std::path::Path;
use anyhow::Result;
use super::{Node, Topology};

fn node(network: &str, name: &str, amplifiers: bool, bots: bool, victim: Option<&str>) -> Node {
    Node {
        network:    network.to_string(),
        name:       name.to_string(),
        amplifiers: amplifiers,
        bots:       bots,
        victim:     victim.map(String::from),
    }
}

fn topo(nodes: Vec<Node>) -> Topology {
    Topology {
        nodes: nodes,

        amplifiers_per_node: 1,
        bots_per_node:       2,

        synthetic_interval: 1,

        probes_enabled:      true,
        probes_duration:     5,
        probes_per_timestep: 1,
        probes_dst_port:     2323,

        reflect_service_port:            123,
        reflect_client_port:             80,
        reflect_input_packets_per_flow:  1,
        reflect_input_bytes_per_flow:    200,
        reflect_output_packets_per_flow: 300,
        reflect_output_bytes_per_flow:   200000,

        bot_dst_port:                53,
        bot_output_packets_per_flow: 20,
        bot_output_bytes_per_flow:   6000,

        flow_duration: 55,
    }
}

#[test]
fn load_example() -> Result<()> {
    let topo = Topology::load(Path::new("topologies/mixed-big.json"))?;
    assert_eq!(topo.nodes.len(), 6);

    let (victim, addr) = topo.victim()?;
    assert_eq!(topo.nodes[victim].name, "F");
    assert_eq!(addr, "172.21.99.99");
    Ok(())
}

#[test]
fn victim_found() -> Result<()> {
    let topo = topo(vec![
        node("172.16", "A", true,  true,  None),
        node("172.21", "F", false, false, Some("172.21.99.99")),
    ]);

    let (victim, addr) = topo.victim()?;
    assert_eq!(victim, 1);
    assert_eq!(addr, "172.21.99.99");
    Ok(())
}

#[test]
fn victim_validation_idempotent() {
    let topo = topo(vec![
        node("172.16", "A", true,  false, None),
        node("172.21", "F", false, false, Some("172.21.99.99")),
    ]);

    let first  = topo.victim().map(|(i, _)| i).ok();
    let second = topo.victim().map(|(i, _)| i).ok();
    assert_eq!(first, Some(1));
    assert_eq!(first, second);
}

#[test]
fn reject_victim_with_attackers() {
    let amped = topo(vec![
        node("172.21", "F", true, false, Some("172.21.99.99")),
    ]);
    assert!(amped.victim().is_err());

    let botted = topo(vec![
        node("172.21", "F", false, true, Some("172.21.99.99")),
    ]);
    assert!(botted.victim().is_err());
}

#[test]
fn reject_missing_victim() {
    let topo = topo(vec![
        node("172.16", "A", true, true, None),
    ]);
    assert!(topo.victim().is_err());
}

#[test]
fn reject_multiple_victims() {
    let topo = topo(vec![
        node("172.20", "E", false, false, Some("172.20.1.1")),
        node("172.21", "F", false, false, Some("172.21.99.99")),
    ]);
    assert!(topo.victim().is_err());
}

#[test]
fn flags_default_off() -> Result<()> {
    let node: Node = serde_json::from_str(r#"{ "network": "172.16", "name": "A" }"#)?;
    assert!(!node.amplifiers);
    assert!(!node.bots);
    assert!(node.victim.is_none());
    Ok(())
}
