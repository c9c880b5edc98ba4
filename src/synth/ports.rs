// Source ports for flooding bots vary with both the bot's identity and the
// order of emission within one direction pass. The counter is owned by the
// orchestrator and reset per pass. The per-node and victim-side generators
// consume it in different call orders, so ports for the same logical flow
// can differ between those two views; downstream datasets already assume
// this, so the behavior is kept as is.
pub struct PortCounter {
    count: u64,
}

impl PortCounter {
    pub fn new() -> Self {
        Self { count: 0 }
    }

    pub fn next(&mut self, digest: &[u8; 16]) -> u16 {
        let sum: u64 = digest[2..=10].iter().map(|b| *b as u64).sum();
        let port = 10000 + ((self.count + sum) % 55536);
        self.count += 1;
        port as u16
    }
}
