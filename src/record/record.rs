use chrono::{Duration, NaiveDateTime};

pub const TIME_FORMAT: &str = "%Y/%m/%dT%H:%M:%S%.3f";

// Sentinel values found in rwcut header lines.
pub const HEADER_SIP:   &str = "sIP";
pub const HEADER_STIME: &str = "sTime";

// One rwcut flow record. Fields are kept as text so that header lines and
// the whitespace-significant flags bitmap survive untouched; the parsed
// start time is carried alongside for timestamp arithmetic only and is
// never serialized itself.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub sip:      String,
    pub dip:      String,
    pub sport:    String,
    pub dport:    String,
    pub proto:    String,
    pub packets:  String,
    pub bytes:    String,
    pub flags:    String,
    pub stime:    String,
    pub duration: String,
    pub etime:    String,
    pub sensor:   String,
    pub start:    Option<NaiveDateTime>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Direction {
    In,
    Out,
}

impl Record {
    pub fn is_header(&self) -> bool {
        self.sip == HEADER_SIP
    }

    // Stamp a start time and duration, keeping eTime = sTime + duration.
    pub fn set_times(&mut self, start: NaiveDateTime, seconds: u64) {
        let end = start + Duration::seconds(seconds as i64);
        self.stime    = start.format(TIME_FORMAT).to_string();
        self.duration = format!("{:.3}", seconds as f64);
        self.etime    = end.format(TIME_FORMAT).to_string();
        self.start    = Some(start);
    }
}
