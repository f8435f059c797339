//! Simple command that prints one or '-n count' ObjectId strings, or decodes given ones with
//! '-d id...'

use std::{env, io, io::Write, process::ExitCode};

use objectid::ObjectId;

enum Command {
    Generate(usize),
    Decode(Vec<String>),
}

fn main() -> io::Result<ExitCode> {
    let command = {
        let mut args = env::args();
        let program = args.next();
        match parse_args(args) {
            Ok(command) => command,
            Err(message) => {
                eprintln!("Error: {}", message);
                eprintln!(
                    "Usage: {0} [-n count]\n       {0} -d id...",
                    program.as_deref().unwrap_or("objectid")
                );
                return Ok(ExitCode::FAILURE);
            }
        }
    };

    let mut buf = io::BufWriter::new(io::stdout());
    match command {
        Command::Generate(count) => {
            for _ in 0..count {
                writeln!(buf, "{}", objectid::object_id())?;
            }
        }
        Command::Decode(ids) => {
            for text in ids {
                match ObjectId::parse(&text) {
                    Ok(e) => writeln!(
                        buf,
                        "{} timestamp={} machine={:06x} pid={:04x} increment={:06x}",
                        e,
                        e.timestamp(),
                        e.machine(),
                        e.pid(),
                        e.increment()
                    )?,
                    Err(err) => {
                        buf.flush()?;
                        eprintln!("Error: {}", err);
                        return Ok(ExitCode::FAILURE);
                    }
                }
            }
        }
    }

    buf.flush()?;
    Ok(ExitCode::SUCCESS)
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Command, String> {
    match args.next().as_deref() {
        None => Ok(Command::Generate(1)),
        Some("-n") => {
            let Some(n_arg) = args.next() else {
                return Err("argument to option 'n' missing".to_owned());
            };
            let Ok(count) = n_arg.parse() else {
                return Err(format!("invalid argument to option 'n': '{}'", n_arg));
            };
            match args.next() {
                None => Ok(Command::Generate(count)),
                Some(extra) => Err(format!("unrecognized argument '{}'", extra)),
            }
        }
        Some("-d") => {
            let ids: Vec<String> = args.collect();
            if ids.is_empty() {
                return Err("argument to option 'd' missing".to_owned());
            }
            Ok(Command::Decode(ids))
        }
        Some(other) => Err(format!("unrecognized argument '{}'", other)),
    }
}
