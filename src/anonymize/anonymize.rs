use anyhow::{anyhow, Result};
use crate::digest::digest;
use crate::record::{Direction, Record};
use crate::topology::Node;

// First octets that are reserved and never usable in generated addresses.
pub const RESERVED: [u8; 5] = [0, 10, 127, 172, 255];

// Rewrite a noise record for one node's view. The internal side lands in
// the node's own network space, keyed only by the original address so the
// same host stays stable across directions. The external side is keyed by
// the original address plus the node name, so different nodes observe
// different external peers. Header lines pass through untouched.
pub fn rewrite(record: &Record, direction: Direction, node: &Node) -> Result<Record> {
    let mut out = record.clone();
    if record.is_header() {
        return Ok(out);
    }

    let (internal, external) = match direction {
        Direction::In  => (&record.dip, &record.sip),
        Direction::Out => (&record.sip, &record.dip),
    };

    let d = digest(internal);
    let internal = format!("{}.{}.{}", node.network, d[0], d[1]);
    let external = external_addr(external, &node.name)?;

    match direction {
        Direction::In => {
            out.dip = internal;
            out.sip = external;
        }
        Direction::Out => {
            out.sip = internal;
            out.dip = external;
        }
    }

    Ok(out)
}

// Map an external address to hash(address + node name), taking the first
// four-byte window of the digest that avoids the reserved octets. Running
// out of digest is vanishingly unlikely but fatal.
fn external_addr(addr: &str, name: &str) -> Result<String> {
    let d = digest(&format!("{}{}", addr, name));
    let span = d.windows(4).find(|w| {
        w.iter().all(|octet| !RESERVED.contains(octet))
    }).ok_or_else(|| {
        anyhow!("digest exhausted remapping {}", addr)
    })?;
    Ok(format!("{}.{}.{}.{}", span[0], span[1], span[2], span[3]))
}
