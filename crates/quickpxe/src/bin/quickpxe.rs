use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use quickpxe::bundle::UsbBundle;
use quickpxe::workflow::{render_selections, translate, Override, Translation};
use quickpxe::QuickPxeResult;
use quickpxe_dialect::{identify_or_err, Dialect};
use quickpxe_script::{
    baseline_document, bootstrap_script, dispatch, generate, setup_instructions, ScriptOptions,
    ScriptOptionsBuilder, Target, DEFAULT_TOOLS_ROOT, DEFAULT_TOOLS_URL,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Translate BIOS boot settings between vendor tools and build WinPE deployment scripts
#[derive(Parser)]
#[clap(version)]
struct Opts {
    /// Log debug output (overridden by RUST_LOG)
    #[clap(short, long, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    subcmd: SubCommand,
}

#[derive(Parser)]
enum SubCommand {
    Detect(Detect),
    #[clap(name = "parse")]
    Parse(ParseFile),
    Convert(Convert),
    Script(Script),
    Baseline(Baseline),
    Bootstrap(Bootstrap),
    Readme(Readme),
    Dispatch(Dispatch),
    Bundle(Bundle),
}

/// Identify the vendor of a configuration export
#[derive(Parser)]
struct Detect {
    file: PathBuf,
}

/// List the settings found in a configuration export
#[derive(Parser)]
struct ParseFile {
    file: PathBuf,

    /// Skip detection and parse as this dialect (dell, hp, lenovo)
    #[clap(long)]
    dialect: Option<Dialect>,
}

/// Apply canonical settings to an export, or render them on their own
#[derive(Parser)]
struct Convert {
    /// Vendor export to start from. Without it only the --set selections are rendered
    file: Option<PathBuf>,

    #[clap(long, required_unless_present = "file")]
    dialect: Option<Dialect>,

    /// Canonical setting, e.g. --set PxeBoot=Enabled. May be repeated
    #[clap(long = "set", value_parser = Override::parse)]
    overrides: Vec<Override>,

    /// Write here instead of stdout
    #[clap(short, long)]
    output: Option<PathBuf>,
}

#[derive(Parser)]
struct ScriptArgs {
    /// Pause at the end instead of rebooting
    #[clap(long)]
    no_reboot: bool,

    #[clap(long, env = "QUICKPXE_TOOLS_ROOT", default_value = DEFAULT_TOOLS_ROOT)]
    tools_root: String,

    #[clap(long, default_value_t = 5)]
    reboot_delay: u32,
}

impl ScriptArgs {
    fn options(&self) -> QuickPxeResult<ScriptOptions> {
        Ok(ScriptOptionsBuilder::default()
            .include_reboot(!self.no_reboot)
            .tools_root(self.tools_root.as_str())
            .reboot_delay_secs(self.reboot_delay)
            .build()?)
    }
}

/// Generate startnet.cmd for a vendor, or "auto" to detect the manufacturer at boot
#[derive(Parser)]
struct Script {
    #[clap(long, default_value = "auto")]
    target: Target,

    #[clap(flatten)]
    args: ScriptArgs,

    #[clap(short, long)]
    output: Option<PathBuf>,
}

/// Print the baseline document for a vendor
#[derive(Parser)]
struct Baseline {
    dialect: Dialect,
}

/// Generate the stock startnet.cmd that downloads the current scripts at boot
#[derive(Parser)]
struct Bootstrap {
    #[clap(long, default_value = DEFAULT_TOOLS_URL)]
    tools_url: String,

    #[clap(flatten)]
    args: ScriptArgs,

    #[clap(short, long)]
    output: Option<PathBuf>,
}

/// Print the USB setup instructions for a vendor
#[derive(Parser)]
struct Readme {
    dialect: Dialect,
}

/// Resolve a manufacturer string, as reported by the firmware, to a vendor
#[derive(Parser)]
struct Dispatch {
    manufacturer: String,
}

/// Translate an export and write the USB stick layout for it
#[derive(Parser)]
struct Bundle {
    file: PathBuf,

    #[clap(long)]
    dialect: Option<Dialect>,

    #[clap(long = "set", value_parser = Override::parse)]
    overrides: Vec<Override>,

    #[clap(flatten)]
    args: ScriptArgs,

    /// Directory to write into
    #[clap(long)]
    out: PathBuf,
}

fn read(file: &Path) -> QuickPxeResult<(String, String)> {
    let content =
        fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))?;
    let filename = file
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok((filename, content))
}

fn emit(text: &str, output: Option<&Path>) -> QuickPxeResult<()> {
    match output {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "wrote output");
        }
        None => print!("{text}"),
    }
    Ok(())
}

fn report(translation: &Translation) {
    for warning in &translation.warnings {
        eprintln!("warning: {warning}");
    }
}

fn main() -> QuickPxeResult<()> {
    let opts = Opts::parse();

    let default_level = if opts.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match opts.subcmd {
        SubCommand::Detect(detect) => {
            let (filename, content) = read(&detect.file)?;
            println!("{}", identify_or_err(&filename, &content)?);
        }
        SubCommand::Parse(parse) => {
            let (filename, content) = read(&parse.file)?;
            let dialect = match parse.dialect {
                Some(dialect) => dialect,
                None => identify_or_err(&filename, &content)?,
            };

            let parsed = dialect.parse(&content);
            for (key, value) in parsed.config.entries() {
                println!("{key}={value}");
            }
            if parsed.skipped_lines > 0 {
                eprintln!("{} line(s) skipped", parsed.skipped_lines);
            }
        }
        SubCommand::Convert(convert) => {
            let translation = match (&convert.file, convert.dialect) {
                (Some(file), dialect) => {
                    let (filename, content) = read(file)?;
                    translate(&filename, &content, dialect, &convert.overrides)?
                }
                (None, Some(dialect)) => render_selections(dialect, &convert.overrides)?,
                (None, None) => anyhow::bail!("either a file or --dialect is required"),
            };
            report(&translation);
            emit(&translation.document, convert.output.as_deref())?;
        }
        SubCommand::Script(script) => {
            let options = script.args.options()?;
            emit(&generate(script.target, &options), script.output.as_deref())?;
        }
        SubCommand::Baseline(baseline) => {
            let rendered = baseline_document(baseline.dialect);
            for warning in &rendered.warnings {
                eprintln!("warning: {warning}");
            }
            print!("{}", rendered.text);
        }
        SubCommand::Bootstrap(bootstrap) => {
            let options = bootstrap.args.options()?;
            emit(
                &bootstrap_script(&bootstrap.tools_url, &options),
                bootstrap.output.as_deref(),
            )?;
        }
        SubCommand::Readme(readme) => print!("{}", setup_instructions(readme.dialect)),
        SubCommand::Dispatch(d) => match dispatch(&d.manufacturer) {
            Some(dialect) => println!("{dialect}"),
            None => anyhow::bail!("unknown manufacturer: {}", d.manufacturer),
        },
        SubCommand::Bundle(bundle) => {
            let (filename, content) = read(&bundle.file)?;
            let translation = translate(&filename, &content, bundle.dialect, &bundle.overrides)?;
            report(&translation);

            let usb = UsbBundle::new(
                translation.dialect,
                &translation.document,
                &bundle.args.options()?,
            );
            for warning in &usb.warnings {
                eprintln!("warning: {warning}");
            }
            for path in usb.write_to(&bundle.out)? {
                println!("{}", path.display());
            }
        }
    }

    Ok(())
}
