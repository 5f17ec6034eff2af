use s8asm::msg::Msg;
use s8asm::{emit, Error};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

/// Largest image the one-byte address space can reach.
const ADDRESS_SPACE: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum Format {
    /// Raw bytes
    Bin,
    /// VHDL memory initialization package
    Vhdl,
}

impl Format {
    fn extension(&self) -> &'static str {
        match self {
            Format::Bin => "bin",
            Format::Vhdl => "vhd",
        }
    }
}

#[derive(Debug, clap::Parser)]
#[clap(version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input file
    #[clap(default_value = "main.s8")]
    input: String,

    /// Output file [default: <INPUT>.bin or <INPUT>.vhd]
    #[clap(short, long)]
    output: Option<String>,

    /// Output format
    #[clap(short, long, value_enum, default_value_t = Format::Bin)]
    format: Format,

    /// Dump assembled code
    #[clap(short, long)]
    dump: bool,

    /// Write label addresses as YAML
    #[clap(short, long)]
    symbols: Option<String>,

    /// Only print diagnostics
    #[clap(short, long)]
    quiet: bool,
}

impl Args {
    fn output(&self) -> String {
        self.output
            .clone()
            .unwrap_or_else(|| format!("{}.{}", self.input, self.format.extension()))
    }
}

fn main() {
    use clap::Parser;

    let args: Args = Args::parse();
    let log = |line: String| {
        if !args.quiet {
            println!("{line}");
        }
    };
    log(format!("Stack8 Assembler"));

    log(format!("1. Read Source"));
    log(format!("  < {}", args.input));
    let source = match std::fs::read_to_string(&args.input) {
        Ok(source) => source,
        Err(e) => exit(Error::FileOpen(args.input.clone(), e), &args.input, ""),
    };

    log(format!("2. Tokenize"));
    let tokens = match s8asm::tokenize(&source) {
        Ok(tokens) => tokens,
        Err(e) => exit(e.into(), &args.input, &source),
    };

    log(format!("3. Parse Lines & Check Labels"));
    let lines = match s8asm::parse(tokens) {
        Ok(lines) => lines,
        Err(e) => exit(e.into(), &args.input, &source),
    };

    log(format!("4. Generate Code & Backpatch Labels"));
    let image = match s8asm::generate(&lines) {
        Ok(image) => image,
        Err(e) => exit(e.into(), &args.input, &source),
    };
    log(format!("  {} bytes, {} labels", image.len(), image.labels.len()));
    if image.len() > ADDRESS_SPACE {
        Msg::Warn(format!(
            "Program is {} bytes, addresses above 0x{:02X} wrap around",
            image.len(),
            ADDRESS_SPACE - 1
        ))
        .print();
    }

    let output = args.output();
    log(format!("5. Emit Image"));
    log(format!("  > {}", output));
    let bytes = match args.format {
        Format::Bin => emit::binary(&image),
        Format::Vhdl => emit::vhdl(&image).into_bytes(),
    };
    if let Err(e) = write(&output, &bytes) {
        exit(e, &args.input, &source);
    }

    if let Some(path) = &args.symbols {
        log(format!("  > {}", path));
        let result = emit::symbols(&image)
            .map_err(Error::from)
            .and_then(|yaml| write(path, yaml.as_bytes()));
        if let Err(e) = result {
            exit(e, &args.input, &source);
        }
    }

    if args.dump {
        println!("-----------+---------------------------------------------");
        for row in emit::listing(&image) {
            println!("{}", row);
        }
        println!("-----------+---------------------------------------------");
    }
}

fn write(path: &str, bytes: &[u8]) -> Result<(), Error> {
    use std::io::Write;
    let mut file =
        std::fs::File::create(path).map_err(|e| Error::FileCreate(path.to_string(), e))?;
    file.write_all(bytes)
        .map_err(|e| Error::FileWrite(path.to_string(), e))
}

fn exit(err: Error, file: &str, source: &str) -> ! {
    err.print_diag(file, source);
    std::process::exit(err.status());
}
