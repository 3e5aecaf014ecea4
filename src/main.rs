use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use color_engine::{Rgb, Slot};
use tinct::commands::{self, MixOp, MixTarget, ShadeArg, StrategyArg};
use tinct::report::OutputFormat;

#[derive(Parser)]
#[command(name = "tinct")]
#[command(about = "Color mixing, dominant-color extraction and palette suggestion toolbox")]
struct Cli {
    /// Output encoding
    #[arg(long, value_enum, default_value = "text", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Blend two colors with the pairwise mixer
    Mix {
        /// First mixer color (#RRGGBB)
        color1: Rgb,

        /// Second mixer color (#RRGGBB)
        color2: Rgb,

        /// Slot that supplies the left-hand operand and receives the result
        #[arg(short, long, value_enum, default_value = "color1")]
        select: MixTarget,

        /// Blend operations to apply in order (repeatable)
        #[arg(short, long = "op", value_enum, default_value = "add")]
        op: Vec<MixOp>,
    },

    /// Suggest companion colors from the main color by hue rotation
    Suggest {
        /// How many slots are enabled (1-5)
        #[arg(short, long, default_value_t = 5)]
        count: usize,

        /// Main color (slot "first", the base of all suggestions)
        #[arg(long)]
        first: Option<Rgb>,

        /// Current color of slot "second"
        #[arg(long)]
        second: Option<Rgb>,

        /// Current color of slot "third"
        #[arg(long)]
        third: Option<Rgb>,

        /// Current color of slot "fourth"
        #[arg(long)]
        fourth: Option<Rgb>,

        /// Current color of slot "fifth"
        #[arg(long)]
        fifth: Option<Rgb>,
    },

    /// Build a monochromatic layer palette from one base color
    Layer {
        /// Base color seeded into every slot
        base: Rgb,

        /// Gradient direction
        #[arg(short, long, value_enum, default_value = "deep")]
        shade: ShadeArg,
    },

    /// Extract the dominant color of an image file
    Extract {
        /// Image file to analyze
        path: PathBuf,

        /// Extraction strategy
        #[arg(short, long, value_enum, default_value = "mode")]
        strategy: StrategyArg,

        /// Cluster count for the cluster strategy
        #[arg(long, default_value_t = 1)]
        clusters: usize,
    },

    /// Validate a hex color and show both of its renderings
    Convert {
        /// Color in #RRGGBB form
        input: String,
    },

    /// Generate random colors
    Random {
        /// How many colors to generate
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },

    /// Show the complementary color of one or more base colors
    Complement {
        /// Base colors (#RRGGBB)
        #[arg(required = true)]
        base: Vec<Rgb>,
    },

    /// Show analogous colors at 30-degree hue offsets
    Analogous {
        /// Base color (#RRGGBB)
        base: Rgb,

        /// How many analogous colors to derive
        #[arg(short = 'n', long, default_value_t = 3)]
        count: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tinct=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let format = cli.format;
    let output = match cli.command {
        Commands::Mix {
            color1,
            color2,
            select,
            op,
        } => commands::mix(color1, color2, select.into(), &op, format)?,
        Commands::Suggest {
            count,
            first,
            second,
            third,
            fourth,
            fifth,
        } => {
            let provided = [first, second, third, fourth, fifth];
            let colors: Vec<(Slot, Rgb)> = Slot::ALL
                .into_iter()
                .zip(provided)
                .filter_map(|(slot, color)| color.map(|c| (slot, c)))
                .collect();
            commands::suggest(count, &colors, format)?
        }
        Commands::Layer { base, shade } => commands::layer(base, shade.into(), format)?,
        Commands::Extract {
            path,
            strategy,
            clusters,
        } => commands::extract(&path, strategy.resolve(clusters), format)?,
        Commands::Convert { input } => commands::convert(&input, format)?,
        Commands::Random { count } => commands::random(count, format)?,
        Commands::Complement { base } => commands::complement(&base, format)?,
        Commands::Analogous { base, count } => commands::analogous(base, count, format)?,
    };

    println!("{output}");
    Ok(())
}
