use anyhow::Result;
use chrono::NaiveDateTime;
use crate::error::Error;
use super::record::{Record, HEADER_STIME, TIME_FORMAT};

pub const FIELDS: usize = 12;

const FLAGS: usize = 7; // positional bitmap, whitespace left alone
const STIME: usize = 8;

pub fn parse(line: &str) -> Result<Record> {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let mut fields: Vec<&str> = line.split('|').collect();
    if fields.last() == Some(&"") {
        fields.pop(); // rwcut lines end with a trailing delimiter
    }
    if fields.len() != FIELDS {
        let msg = format!("expected {} fields, found {}", FIELDS, fields.len());
        return Err(Error::Parse(msg).into());
    }

    let field = |n: usize| match n {
        FLAGS => fields[n].to_string(),
        _     => fields[n].trim().to_string(),
    };

    let stime = field(STIME);
    let start = match stime.as_str() {
        HEADER_STIME => None,
        _ => Some(NaiveDateTime::parse_from_str(&stime, TIME_FORMAT).map_err(|e| {
            Error::Parse(format!("bad start time '{}': {}", stime, e))
        })?),
    };

    Ok(Record {
        sip:      field(0),
        dip:      field(1),
        sport:    field(2),
        dport:    field(3),
        proto:    field(4),
        packets:  field(5),
        bytes:    field(6),
        flags:    field(FLAGS),
        stime:    stime,
        duration: field(9),
        etime:    field(10),
        sensor:   field(11),
        start:    start,
    })
}

pub fn serialize(r: &Record) -> String {
    format!("{:>39}|{:>39}|{:>5}|{:>5}|{:>3}|{:>10}|{:>10}|{}|{:>23}|{:>9}|{:>23}|{:>3}|\n",
            r.sip, r.dip, r.sport, r.dport, r.proto, r.packets,
            r.bytes, r.flags, r.stime, r.duration, r.etime, r.sensor)
}
