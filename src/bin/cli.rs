//! rtt-sign CLI tool
//!
//! Generates Ed25519 keypairs, signs files and verifies signatures.
//! Keys and signatures are standard base64 on the command line.

use clap::{Parser, Subcommand};
use rtt_sign::{SignatureTool, ToolResult};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// rtt-sign: Ed25519 signing for files
#[derive(Parser)]
#[command(name = "rtt-sign")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log operation details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new keypair
    Gen,

    /// Sign a file with a private key
    Sign {
        /// Private key (base64)
        private_key: String,

        /// File to sign
        file: PathBuf,
    },

    /// Verify a file's signature against a public key
    Verify {
        /// Public key (base64, optionally prefixed with "ed25519:")
        public_key: String,

        /// File that was signed
        file: PathBuf,

        /// Signature (base64)
        signature: String,
    },

    /// Print the public key for a private key
    Pub {
        /// Private key (base64)
        private_key: String,
    },
}

/// Exit code for success and a matching verification
const EXIT_OK: u8 = 0;

/// Exit code for a well-formed verification that did not match
const EXIT_FAIL: u8 = 1;

/// Exit code for malformed input, unreadable files and usage errors
const EXIT_ERROR: u8 = 2;

/// What a command prints and how the process exits
struct Report {
    stdout: Vec<String>,
    stderr: Option<String>,
    code: u8,
}

impl Report {
    fn ok(stdout: Vec<String>) -> Self {
        Report {
            stdout,
            stderr: None,
            code: EXIT_OK,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let report = execute(cli.command);
    for line in &report.stdout {
        println!("{}", line);
    }
    if let Some(message) = &report.stderr {
        eprintln!("{}", message);
    }
    ExitCode::from(report.code)
}

fn init_logging(verbose: bool) {
    let default = if verbose { "rtt_sign=debug" } else { "rtt_sign=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // stdout carries keys and signatures only
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn execute(command: Commands) -> Report {
    run(command).unwrap_or_else(|e| Report {
        stdout: Vec::new(),
        stderr: Some(format!("error: {}", e)),
        code: EXIT_ERROR,
    })
}

fn run(command: Commands) -> ToolResult<Report> {
    let report = match command {
        Commands::Gen => {
            let pair = SignatureTool::generate()?;
            Report::ok(vec![
                format!("priv:{}", pair.secret_key().to_base64()),
                format!("pub:{}", pair.public_key().to_base64()),
            ])
        }
        Commands::Sign { private_key, file } => {
            let signature = SignatureTool::sign_file(&private_key, &file)?;
            Report::ok(vec![signature.to_base64()])
        }
        Commands::Verify {
            public_key,
            file,
            signature,
        } => {
            let verdict = SignatureTool::verify_file(&public_key, &file, &signature)?;
            Report {
                stdout: vec![verdict.to_string()],
                stderr: None,
                code: if verdict.is_ok() { EXIT_OK } else { EXIT_FAIL },
            }
        }
        Commands::Pub { private_key } => {
            let public_key = SignatureTool::public_key_of(&private_key)?;
            Report::ok(vec![format!("pub:{}", public_key.to_base64())])
        }
    };

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use rtt_sign::{PublicKey, SecretKey};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("rtt-sign").chain(args.iter().copied()))
    }

    fn command(args: &[&str]) -> Commands {
        parse(args).unwrap().command
    }

    fn gen_keys() -> (String, String) {
        let report = execute(Commands::Gen);
        let privkey = report.stdout[0].strip_prefix("priv:").unwrap().to_string();
        let pubkey = report.stdout[1].strip_prefix("pub:").unwrap().to_string();
        (privkey, pubkey)
    }

    fn file_with(contents: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file.flush().unwrap();
        file
    }

    fn path_of(file: &NamedTempFile) -> String {
        file.path().to_str().unwrap().to_string()
    }

    #[test]
    fn test_gen_prints_priv_then_pub() {
        let report = execute(command(&["gen"]));

        assert_eq!(report.code, EXIT_OK);
        assert!(report.stderr.is_none());
        assert_eq!(report.stdout.len(), 2);
        assert!(report.stdout[0].starts_with("priv:"));
        assert!(report.stdout[1].starts_with("pub:"));

        let (privkey, pubkey) = gen_keys();
        let secret = SecretKey::from_base64(&privkey).unwrap();
        assert_eq!(secret.public_key(), PublicKey::from_base64(&pubkey).unwrap());
    }

    #[test]
    fn test_sign_then_verify_exit_codes() {
        let (privkey, pubkey) = gen_keys();
        let (_, other_pub) = gen_keys();
        let mut file = file_with(b"hello world");
        let path = path_of(&file);

        let report = execute(command(&["sign", &privkey, &path]));
        assert_eq!(report.code, EXIT_OK);
        assert_eq!(report.stdout.len(), 1);
        let signature = report.stdout[0].clone();

        let report = execute(command(&["verify", &pubkey, &path, &signature]));
        assert_eq!(report.stdout, vec!["OK".to_string()]);
        assert_eq!(report.code, EXIT_OK);

        let report = execute(command(&["verify", &other_pub, &path, &signature]));
        assert_eq!(report.stdout, vec!["FAIL".to_string()]);
        assert_eq!(report.code, EXIT_FAIL);

        file.write_all(b"!").unwrap();
        file.flush().unwrap();
        let report = execute(command(&["verify", &pubkey, &path, &signature]));
        assert_eq!(report.stdout, vec!["FAIL".to_string()]);
        assert_eq!(report.code, EXIT_FAIL);
    }

    #[test]
    fn test_malformed_input_exits_with_error() {
        let (privkey, pubkey) = gen_keys();
        let file = file_with(b"data");
        let path = path_of(&file);

        let report = execute(command(&["verify", &pubkey, &path, "not-a-signature!"]));
        assert_eq!(report.code, EXIT_ERROR);
        assert!(report.stdout.is_empty());
        assert!(report.stderr.unwrap().starts_with("error: "));

        let report = execute(command(&["sign", "AAAA", &path]));
        assert_eq!(report.code, EXIT_ERROR);
        assert!(report.stdout.is_empty());

        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.bin");
        let report = execute(command(&["sign", &privkey, missing.to_str().unwrap()]));
        assert_eq!(report.code, EXIT_ERROR);
    }

    #[test]
    fn test_pub_matches_gen() {
        let (privkey, pubkey) = gen_keys();
        let report = execute(command(&["pub", &privkey]));

        assert_eq!(report.code, EXIT_OK);
        assert_eq!(report.stdout, vec![format!("pub:{}", pubkey)]);
    }

    #[test]
    fn test_wrong_argument_count_is_usage_error() {
        let err = parse(&["sign", "AAAA"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), i32::from(EXIT_ERROR));

        let err = parse(&["verify", "a", "b", "c", "d"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
        assert_eq!(err.exit_code(), i32::from(EXIT_ERROR));

        let err = parse(&["gen", "extra"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);

        let err = parse(&[]).err().unwrap();
        assert_eq!(err.exit_code(), i32::from(EXIT_ERROR));
    }
}
