use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "trianim", version, about)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the animation template and print a timing summary (default).
    Generate(GenerateArgs),
    /// Print the computed schedule as JSON without writing anything.
    Schedule(ConfigArgs),
}

#[derive(Args, Debug, Default)]
struct GenerateArgs {
    /// Output template path.
    #[arg(long, default_value = trianim::DEFAULT_OUTPUT_PATH)]
    out: PathBuf,

    /// Suppress the console summary.
    #[arg(long)]
    quiet: bool,

    #[command(flatten)]
    settings: ConfigArgs,
}

#[derive(Args, Debug, Default)]
struct ConfigArgs {
    /// JSON config file; omitted fields keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of nested levels.
    #[arg(long)]
    count: Option<u32>,

    /// Horizontal placement of the root group.
    #[arg(long, allow_negative_numbers = true)]
    x: Option<f64>,

    /// Vertical placement of the root group.
    #[arg(long, allow_negative_numbers = true)]
    y: Option<f64>,

    /// Uniform scale of the root group.
    #[arg(long, allow_negative_numbers = true)]
    overall_scale: Option<f64>,

    /// Seconds before the first build-in step.
    #[arg(long, allow_negative_numbers = true)]
    base_delay: Option<f64>,

    /// Seconds per step.
    #[arg(long, allow_negative_numbers = true)]
    base_duration: Option<f64>,

    /// Per-level scale multiplier.
    #[arg(long, allow_negative_numbers = true)]
    scale_factor: Option<f64>,

    /// Per-level rotation in degrees.
    #[arg(long, allow_negative_numbers = true)]
    rotation_increment: Option<f64>,

    /// Template name used in the `define` block.
    #[arg(long)]
    template_name: Option<String>,

    /// Id of the referenced shape.
    #[arg(long)]
    shape_href: Option<String>,

    /// Id of the loop clock.
    #[arg(long)]
    clock_id: Option<String>,
}

impl ConfigArgs {
    fn resolve(&self) -> anyhow::Result<trianim::AnimationConfig> {
        let mut cfg = match &self.config {
            Some(path) => trianim::AnimationConfig::from_json_path(path)?,
            None => trianim::AnimationConfig::default(),
        };

        if let Some(v) = self.count {
            cfg.count = v;
        }
        if let Some(v) = self.x {
            cfg.placement.x = v;
        }
        if let Some(v) = self.y {
            cfg.placement.y = v;
        }
        if let Some(v) = self.overall_scale {
            cfg.overall_scale = v;
        }
        if let Some(v) = self.base_delay {
            cfg.base_delay = v;
        }
        if let Some(v) = self.base_duration {
            cfg.base_duration = v;
        }
        if let Some(v) = self.scale_factor {
            cfg.scale_factor = v;
        }
        if let Some(v) = self.rotation_increment {
            cfg.rotation_increment = v;
        }
        if let Some(v) = &self.template_name {
            cfg.template_name = v.clone();
        }
        if let Some(v) = &self.shape_href {
            cfg.shape_href = v.clone();
        }
        if let Some(v) = &self.clock_id {
            cfg.clock_id = v.clone();
        }

        cfg.validate()?;
        Ok(cfg)
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Some(Command::Generate(args)) => cmd_generate(args),
        Some(Command::Schedule(args)) => cmd_schedule(args),
        None => cmd_generate(GenerateArgs {
            out: PathBuf::from(trianim::DEFAULT_OUTPUT_PATH),
            ..GenerateArgs::default()
        }),
    }
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let cfg = args.settings.resolve()?;
    let summary = trianim::generate_to_file(&cfg, &args.out)?;
    if !args.quiet {
        println!("{summary}");
    }
    Ok(())
}

fn cmd_schedule(args: ConfigArgs) -> anyhow::Result<()> {
    let cfg = args.resolve()?;
    let schedule = trianim::compute_schedule(&cfg)?;
    let report = serde_json::json!({
        "config": cfg,
        "total_duration": schedule.total_duration(),
        "phases": schedule.phases(),
        "timeline": schedule.timeline(),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
