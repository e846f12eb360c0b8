//! Hashing from many threads gives the same answers as hashing serially.

use std::thread;

use flowhash::{Algorithm, FlowTuple};

fn flows() -> Vec<FlowTuple> {
  (0u32..512)
    .map(|i| {
      FlowTuple::new(
        0x0A00_0000 | i,
        0xC0A8_0000 | (i * 7),
        (1024 + i) as u16,
        (i % 3) as u16 * 443,
        [6u8, 17, 132][(i % 3) as usize],
      )
    })
    .collect()
}

#[test]
fn threads_match_serial() {
  let flows = flows();
  let serial: Vec<(u32, u32)> = flows.iter().map(|f| (f.lookup3(42), f.murmur3(42))).collect();

  thread::scope(|s| {
    let handles: Vec<_> = (0..8)
      .map(|worker| {
        let flows = &flows;
        s.spawn(move || {
          // Each worker walks the flows in a different order and interleaves
          // the two algorithms differently.
          let mut out = vec![(0u32, 0u32); flows.len()];
          for step in 0..flows.len() {
            let i = (step * 31 + worker * 97) % flows.len();
            let flow = &flows[i];
            if (step + worker) % 2 == 0 {
              let l = Algorithm::Lookup3.hash(flow, 42);
              let m = Algorithm::Murmur3.hash(flow, 42);
              out[i] = (l, m);
            } else {
              let m = Algorithm::Murmur3.hash(flow, 42);
              let l = Algorithm::Lookup3.hash(flow, 42);
              out[i] = (l, m);
            }
          }
          out
        })
      })
      .collect();

    for handle in handles {
      assert_eq!(handle.join().unwrap(), serial);
    }
  });
}
