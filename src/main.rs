use clap::{Parser, Subcommand};
use helixcrypt::cli::{run_demo, run_entropy, run_keyspace, run_timing, DemoOptions};
use helixcrypt::hybrid::ChaosParams;
use std::process::ExitCode;

/// Version info from build.rs
const VERSION: &str = env!("HELIXCRYPT_VERSION");
const BUILD: &str = env!("HELIXCRYPT_BUILD");
const PROFILE: &str = env!("HELIXCRYPT_PROFILE");
const GIT_HASH: &str = env!("HELIXCRYPT_GIT_HASH");

/// Combined version string (compile-time concatenation not possible, so we build at runtime)
fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "helixcrypt")]
#[command(author, about = "Hybrid AES + nucleotide encoding + chaotic permutation demo", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Round-trip a plaintext and display the permutation tables
    #[command(alias = "d")]
    Demo {
        /// Plaintext to encrypt
        plaintext: String,

        /// Pinned growth rate for the left half
        #[arg(long)]
        r_left: Option<f64>,

        /// Pinned trajectory seed for the left half
        #[arg(long)]
        x0_left: Option<f64>,

        /// Pinned growth rate for the right half
        #[arg(long)]
        r_right: Option<f64>,

        /// Pinned trajectory seed for the right half
        #[arg(long)]
        x0_right: Option<f64>,

        /// Also attempt decryption with perturbed parameters
        #[arg(long)]
        wrong: bool,
    },

    /// Shannon entropy of plaintext vs. ciphertext bytes
    #[command(alias = "e")]
    Entropy {
        /// Plaintext to analyze
        plaintext: String,
    },

    /// Average encrypt/decrypt latency over N iterations
    #[command(alias = "t")]
    Timing {
        /// Plaintext to time
        plaintext: String,

        /// Number of iterations
        #[arg(long, default_value = "10")]
        iterations: usize,
    },

    /// Brute-force keyspace exhaustion estimate
    #[command(alias = "k")]
    Keyspace {
        /// Attack rate mantissa (e.g. 2.5 for 2.5 x 10^9)
        #[arg(long, default_value = "1.0")]
        mantissa: f64,

        /// Attack rate exponent of 10 (e.g. 9 for 10^9)
        #[arg(long, default_value = "9")]
        exponent: i32,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle --version flag
    if cli.version {
        println!("helixcrypt {}", get_version());
        return ExitCode::SUCCESS;
    }

    // Require a command if not showing version
    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // Show help when no command provided
            use clap::CommandFactory;
            Cli::command().print_help().unwrap();
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Demo {
            plaintext,
            r_left,
            x0_left,
            r_right,
            x0_right,
            wrong,
        } => {
            let chaos_override = match (r_left, x0_left, r_right, x0_right) {
                (Some(rl), Some(xl), Some(rr), Some(xr)) => Some((
                    ChaosParams { r: rl, x0: xl },
                    ChaosParams { r: rr, x0: xr },
                )),
                (None, None, None, None) => None,
                _ => {
                    eprintln!("Error: pinning chaos parameters requires all four of --r-left, --x0-left, --r-right, --x0-right");
                    return ExitCode::FAILURE;
                }
            };
            let options = DemoOptions {
                chaos_override,
                show_wrong: wrong,
            };
            run_demo(&plaintext, &options)
        }

        Commands::Entropy { plaintext } => run_entropy(&plaintext),

        Commands::Timing {
            plaintext,
            iterations,
        } => run_timing(&plaintext, iterations),

        Commands::Keyspace { mantissa, exponent } => Ok(run_keyspace(mantissa, exponent)),
    };

    match result {
        Ok(report) => {
            print!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
