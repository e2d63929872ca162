use failure::{format_err, Error, ResultExt};
use gbheader::decode::{decode, Cartridge};
use std::env;
use std::fs;
use std::process;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[derive(Debug, PartialEq)]
struct Options {
  verbose: bool,
  // Exit non-zero when the checksum test fails.
  check: bool,
  rom_fn: String,
}

impl Options {
  fn log_level(&self) -> LevelFilter {
    if self.verbose {
      LevelFilter::DEBUG
    } else {
      LevelFilter::WARN
    }
  }
}

fn parse_args(args: &[String]) -> Result<Options, Error> {
  let mut verbose = false;
  let mut check = false;
  let mut rom_fn = None;
  for arg in args.iter().skip(1) {
    match arg.as_str() {
      "-v" => verbose = true,
      "-c" => check = true,
      flag if flag.starts_with('-') => return Err(format_err!("Unknown flag {}", flag)),
      path => {
        if rom_fn.is_some() {
          return Err(format_err!("Only one ROM file may be given"));
        }
        rom_fn = Some(path.to_string());
      }
    }
  }
  let rom_fn = rom_fn.ok_or_else(|| format_err!("Must specify ROM file"))?;
  Ok(Options {
    verbose,
    check,
    rom_fn,
  })
}

fn print_cartridge(cartridge: &Cartridge) {
  let header = &cartridge.header;
  let info = &cartridge.info;
  let rom_size = match header.rom_size_kb() {
    Some(kb) => format!("{} KB", kb),
    None => format!("{:02X}h (unknown)", header.rom_size),
  };
  println!("Cartridge Loaded:");
  println!("\t Title    : {}", header.title_str());
  println!(
    "\t Type     : {:02X}h ({})",
    header.cartridge_type, info.cartridge_type_name
  );
  println!("\t ROM Size : {}", rom_size);
  println!("\t RAM Size : {:02X}h", header.ram_size);
  println!(
    "\t LIC Code : {:02X}h ({})",
    info.licensee_code, info.licensee_name
  );
  println!("\t ROM Vers : {:02X}h", header.rom_version);
  println!(
    "\t Checksum : {:02X}h ({})",
    header.header_checksum,
    if info.checksum_valid { "PASSED" } else { "FAILED" }
  );
}

fn main() -> Result<(), Error> {
  let args: Vec<String> = env::args().collect();
  let options = parse_args(&args)?;
  tracing_subscriber::registry()
    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
    .with(Targets::new().with_target("gbheader", options.log_level()))
    .init();

  let rom = fs::read(&options.rom_fn)
    .with_context(|_| format!("Could not read ROM file {}", options.rom_fn))?;
  println!("Open: {}", options.rom_fn);
  println!("ROM size: {} bytes", rom.len());

  let cartridge = decode(&rom)?;
  print_cartridge(&cartridge);

  if options.check && !cartridge.info.checksum_valid {
    process::exit(1);
  }
  Ok(())
}
