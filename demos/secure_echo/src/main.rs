use std::error::Error;
use std::io::{self, Write as _};

use clap::{Parser, ValueEnum};
use embedded_io_adapters::std::FromStd;
use safeline::{is_printable_ascii, Intake, LineSource};
use textbuf::{ByteBuf, OverflowPolicy, WideBuf, Written};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    /// Refuse input longer than the buffer
    Reject,
    /// Keep as much of the input as fits
    Truncate,
}

impl From<PolicyArg> for OverflowPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Reject => OverflowPolicy::Reject,
            PolicyArg::Truncate => OverflowPolicy::Truncate,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "secure_echo")]
#[command(about = "Echo one line of text through a bounded buffer", long_about = None)]
struct Args {
    /// Text to echo; one line is read from stdin if not given
    text: Option<String>,

    /// Overflow policy for the buffer
    #[arg(short, long, value_enum, default_value_t = PolicyArg::Reject)]
    policy: PolicyArg,

    /// Buffer capacity in elements
    #[arg(short, long, default_value_t = 64)]
    capacity: usize,

    /// Reject input containing format directives
    #[arg(long, default_value_t = false)]
    require_plain: bool,

    /// Reject bytes outside printable ASCII
    #[arg(long, default_value_t = false)]
    printable_only: bool,

    /// Copy through a wide-character buffer
    #[arg(long, default_value_t = false)]
    wide: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Err: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let line = match &args.text {
        Some(text) => text.clone().into_bytes(),
        None => read_stdin_line()?,
    };

    if args.wide {
        echo_wide(args, &line)
    } else {
        echo_bytes(args, &line)
    }
}

fn read_stdin_line() -> Result<Vec<u8>, Box<dyn Error>> {
    print!("Enter a text: ");
    io::stdout().flush()?;

    let stdin = io::stdin();
    let mut reader = FromStd::new(stdin.lock());
    let mut scratch = vec![0u8; 4096];
    let mut source = LineSource::new(&mut reader, &mut scratch)?;

    match source.next_line()? {
        Some(line) => Ok(line.to_vec()),
        None => Err("no input".into()),
    }
}

fn echo_bytes(args: &Args, line: &[u8]) -> Result<(), Box<dyn Error>> {
    let intake = Intake::new()
        .printable_only(args.printable_only)
        .require_plain(args.require_plain);
    let mut buf = ByteBuf::new_with_policy(args.capacity, args.policy.into())?;

    let outcome = intake.deliver(line, &mut buf)?;
    report_truncation(outcome);

    println!("Text: {}", String::from_utf8_lossy(buf.as_text()));
    Ok(())
}

fn echo_wide(args: &Args, line: &[u8]) -> Result<(), Box<dyn Error>> {
    if args.printable_only && !is_printable_ascii(line) {
        return Err("input contains non-printable bytes".into());
    }

    let text = String::from_utf8_lossy(line);
    if args.require_plain {
        fmtguard::ensure_plain(&text)?;
    }

    let units: Vec<char> = text.chars().collect();
    let mut buf = WideBuf::new_with_policy(args.capacity, args.policy.into())?;

    let outcome = buf.write(&units)?;
    report_truncation(outcome);

    println!("Text: {}", buf.as_text().iter().collect::<String>());
    Ok(())
}

fn report_truncation(outcome: Written) {
    if let Written::Truncated { copied } = outcome {
        eprintln!("Input cut to {copied} elements");
    }
}
