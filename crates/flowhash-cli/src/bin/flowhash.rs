//! Print lookup3 / MurmurHash3 hashes for a flow 5-tuple.
//!
//! Usage:
//!   cargo run -p flowhash-cli --bin flowhash
//!   cargo run -p flowhash-cli --bin flowhash -- --flow "10.0.0.1:5353 -> 10.0.0.2:53/udp" --seed 0xdeadbeef
//!   FLOWHASH_SEED=42 cargo run -p flowhash-cli --bin flowhash -- --algo murmur3 --packed

use std::{env, process::ExitCode};

use flowhash::{Algorithm, FlowTuple, PROTO_TCP};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable consulted when `--seed` is absent.
const SEED_ENV: &str = "FLOWHASH_SEED";

const DEFAULT_SEED: u32 = 0x1234_5678;

/// 192.168.1.1:12345 -> 8.8.8.8:80/tcp
const DEFAULT_FLOW: FlowTuple = FlowTuple::new(0xC0A8_0101, 0x0808_0808, 12345, 80, PROTO_TCP);

/// CLI arguments.
#[derive(Debug, Default)]
struct Args {
  /// Flow to hash; the reference flow when absent.
  flow: Option<FlowTuple>,

  /// Seed from `--seed`.
  seed: Option<u32>,

  /// Single algorithm, or every algorithm when absent.
  algo: Option<Algorithm>,

  /// Also print the packed key.
  packed: bool,

  /// `-v` count.
  verbosity: u8,

  help: bool,
  version: bool,
}

fn parse_seed(value: &str) -> Result<u32, String> {
  let value = value.trim();
  let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
    Some(hex) => u32::from_str_radix(&hex.replace('_', ""), 16),
    None => value.replace('_', "").parse(),
  };
  parsed.map_err(|_| format!("Invalid seed: {value}"))
}

/// Number of `v`s in a `-v`, `-vv`, `-vvv`, ... flag.
fn verbose_count(arg: &str) -> Option<u8> {
  let vs = arg.strip_prefix('-')?;
  if vs.is_empty() || !vs.bytes().all(|b| b == b'v') {
    return None;
  }
  Some(u8::try_from(vs.len()).unwrap_or(u8::MAX))
}

fn parse_args<I: IntoIterator<Item = String>>(argv: I) -> Result<Args, String> {
  let mut args = Args::default();
  let mut iter = argv.into_iter();

  while let Some(arg) = iter.next() {
    match arg.as_str() {
      "--" => continue,
      "--help" | "-h" => args.help = true,
      "--version" | "-V" => args.version = true,
      "--packed" | "-p" => args.packed = true,
      "--flow" | "-f" => {
        let Some(value) = iter.next() else {
          return Err("--flow requires a value".to_string());
        };
        let flow = value.parse().map_err(|e| format!("Invalid flow `{value}`: {e}"))?;
        args.flow = Some(flow);
      }
      "--seed" | "-s" => {
        let Some(value) = iter.next() else {
          return Err("--seed requires a value".to_string());
        };
        args.seed = Some(parse_seed(&value)?);
      }
      "--algo" | "-a" => {
        let Some(value) = iter.next() else {
          return Err("--algo requires a value".to_string());
        };
        args.algo = if value.eq_ignore_ascii_case("all") {
          None
        } else {
          Some(Algorithm::from_name(&value).ok_or_else(|| format!("Unknown algorithm: {value}"))?)
        };
      }
      other => {
        let Some(count) = verbose_count(other) else {
          return Err(format!("Unknown argument: {other}"));
        };
        args.verbosity = args.verbosity.saturating_add(count);
      }
    }
  }

  Ok(args)
}

/// `--seed`, then `FLOWHASH_SEED`, then the built-in default.
fn resolve_seed(cli: Option<u32>, env_value: Option<String>) -> Result<u32, String> {
  if let Some(seed) = cli {
    return Ok(seed);
  }
  match env_value {
    Some(value) => parse_seed(&value).map_err(|e| format!("{SEED_ENV}: {e}")),
    None => Ok(DEFAULT_SEED),
  }
}

fn print_help() {
  eprintln!(
    "\
flowhash {VERSION}: 32-bit lookup3 / MurmurHash3 hashes of a flow 5-tuple

USAGE:
    flowhash [OPTIONS]

OPTIONS:
    -f, --flow FLOW     Flow as \"SRC:PORT -> DST:PORT/PROTO\" (default: {DEFAULT_FLOW})
    -s, --seed SEED     Seed, decimal or 0x-hex (default: ${SEED_ENV} or 0x{DEFAULT_SEED:08X})
    -a, --algo ALGO     lookup3, murmur3 or all (default: all)
    -p, --packed        Also print the 13-byte packed key
    -v, -vv, ...        Increase log verbosity (repeatable)
    -V, --version       Print version
    -h, --help          Show this help message"
  );
}

fn hex(bytes: &[u8]) -> String {
  bytes.iter().map(|b| format!("{b:02x}")).collect::<Vec<_>>().join(" ")
}

fn main() -> ExitCode {
  let args = match parse_args(env::args().skip(1)) {
    Ok(args) => args,
    Err(e) => {
      eprintln!("error: {e}");
      eprintln!();
      print_help();
      return ExitCode::from(2);
    }
  };

  if args.help {
    print_help();
    return ExitCode::SUCCESS;
  }
  if args.version {
    println!("flowhash {VERSION}");
    return ExitCode::SUCCESS;
  }

  env_logger::Builder::new()
    .filter_level(match args.verbosity {
      0 => log::LevelFilter::Warn,
      1 => log::LevelFilter::Info,
      _ => log::LevelFilter::Debug,
    })
    .format_timestamp(None)
    .init();

  let seed = match resolve_seed(args.seed, env::var(SEED_ENV).ok()) {
    Ok(seed) => seed,
    Err(e) => {
      eprintln!("error: {e}");
      return ExitCode::from(2);
    }
  };
  let flow = args.flow.unwrap_or(DEFAULT_FLOW);

  log::info!("flow {flow}, seed 0x{seed:08X}");
  log::debug!("{flow:?}");

  if args.packed {
    println!("Packed key: {}", hex(flow.pack().as_bytes()));
  }

  let algorithms: &[Algorithm] = match &args.algo {
    Some(algo) => core::slice::from_ref(algo),
    None => &Algorithm::ALL,
  };
  for &algo in algorithms {
    println!("{algo} hash: 0x{:08X}", algo.hash(&flow, seed));
  }

  ExitCode::SUCCESS
}
