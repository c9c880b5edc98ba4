use anyhow::Result;
use crate::record::{parse, Direction};
use crate::topology::Node;
use super::{rewrite, RESERVED};

const LINE: &str = "10.1.1.5|93.184.216.34|1234|80|6|3|180| S      |2024/01/01T00:00:00.000|0.010|2024/01/01T00:00:00.010|S0|";

const HEADER: &str = "sIP|dIP|sPort|dPort|pro|packets|bytes|flags|sTime|dur|eTime|sen|";

fn node(network: &str, name: &str) -> Node {
    Node {
        network:    network.to_string(),
        name:       name.to_string(),
        amplifiers: false,
        bots:       false,
        victim:     None,
    }
}

#[test]
fn internal_stable_across_directions() -> Result<()> {
    let rec = parse(LINE)?;
    let n   = node("172.16", "A");

    // inbound: destination is the internal side
    let a = rewrite(&rec, Direction::In, &n)?;
    assert!(a.dip.starts_with("172.16."));

    // the same original address on the source side, outbound
    let mut swapped = rec.clone();
    std::mem::swap(&mut swapped.sip, &mut swapped.dip);
    let b = rewrite(&swapped, Direction::Out, &n)?;
    assert_eq!(a.dip, b.sip);

    // and repeated invocation
    let c = rewrite(&rec, Direction::In, &n)?;
    assert_eq!(a.dip, c.dip);
    Ok(())
}

#[test]
fn external_differs_per_node() -> Result<()> {
    let a = node("172.16", "A");
    let b = node("172.17", "B");

    for i in 0..64u32 {
        let line = LINE.replace("93.184.216.34", &format!("203.0.{}.{}", i, i + 1));
        let rec  = parse(&line)?;
        let at_a = rewrite(&rec, Direction::Out, &a)?;
        let at_b = rewrite(&rec, Direction::Out, &b)?;
        assert_ne!(at_a.dip, at_b.dip);
    }
    Ok(())
}

#[test]
fn external_avoids_reserved() -> Result<()> {
    let n = node("172.16", "A");

    for i in 0..=255u32 {
        let line = LINE.replace("10.1.1.5", &format!("198.51.{}.7", i));
        let rec  = parse(&line)?;
        let out  = rewrite(&rec, Direction::In, &n)?;

        let first: u8 = out.sip.split('.').next().unwrap().parse()?;
        assert!(!RESERVED.contains(&first), "reserved first octet in {}", out.sip);
    }
    Ok(())
}

#[test]
fn header_unchanged() -> Result<()> {
    let rec = parse(HEADER)?;
    let out = rewrite(&rec, Direction::In, &node("172.16", "A"))?;
    assert_eq!(out, rec);
    Ok(())
}
