//! CLI implementation.
mod card;
mod config;
mod output;

pub use crate::cli::card::{CardFile, Pan};
pub use crate::cli::config::Config;
pub use crate::cli::output::OutputMap;

use crate::error::{Error, Result};
use crate::logs::ConsoleLayer;
use crate::pipeline::{OutputFormat, Pipeline};
use crate::template::{self, Category, Template};
use crate::texture::{Generate, Generator, TextureCache, TextureKind};

use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Level;

/// Render baseball trading card images from built-in templates
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file. Defaults to ./cardforge.toml, then the user config folder
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print more details, repeat for even more
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only print warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the front and back of a card file
    Render(RenderArgs),
    /// Generate procedural textures
    Texture(TextureArgs),
    /// List the available templates
    Templates(TemplatesArgs),
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Card file in TOML format
    pub card: PathBuf,

    /// Template id, overriding the one in the card file
    #[arg(short, long)]
    pub template: Option<String>,

    /// Output folder
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output scale relative to the 400x560 card
    #[arg(long)]
    pub scale: Option<f64>,

    /// Output image format
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Also write small JPEG previews
    #[arg(long)]
    pub thumbnails: bool,
}

#[derive(Debug, Args)]
pub struct TextureArgs {
    /// Texture name, such as woodgrain or brushedmetal
    #[arg(required_unless_present = "all", conflicts_with = "all")]
    pub name: Option<String>,

    /// Generate every texture into the output folder
    #[arg(long)]
    pub all: bool,

    /// Width in pixels
    #[arg(short = 'W', long)]
    pub width: Option<u32>,

    /// Height in pixels
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output PNG file, or folder with --all
    #[arg(short, long)]
    pub output: PathBuf,
}

#[derive(Debug, Args)]
pub struct TemplatesArgs {
    /// Only list templates of this category
    #[arg(long)]
    pub category: Option<Category>,
}

macro_rules! error {
    ($res:expr) => {
        $res.unwrap_or_else(|e| panic!("{e}"))
    };
}

impl Cli {
    pub fn run() {
        std::panic::set_hook(Box::new(|panic_info| {
            if let Some(s) = panic_info.payload().downcast_ref::<String>() {
                eprintln!("{s}");
            } else {
                eprintln!("{panic_info}");
            }
        }));

        let cli = Self::parse();
        let (folder, config) = error!(Config::find(cli.config.as_deref()));
        ConsoleLayer::new(cli.log_level(&config)).install();

        match &cli.command {
            Command::Render(args) => error!(args.run(&folder, &config)),
            Command::Texture(args) => error!(args.run(&config)),
            Command::Templates(args) => args.run(),
        }
    }

    fn log_level(&self, config: &Config) -> Level {
        if self.quiet {
            return Level::WARN;
        }
        match self.verbose {
            0 => config.log.level.0,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

impl RenderArgs {
    fn run(&self, folder: &Path, config: &Config) -> Result<()> {
        let file = CardFile::open(&self.card)?;
        let template = self.select_template(&file);

        let mut export = config.render.export();
        if let Some(scale) = self.scale {
            export.scale = scale;
        }
        if let Some(format) = self.format {
            export.format = format;
        }
        let thumbnail = self.thumbnails.then(|| config.render.thumbnail());

        let mut out_map = OutputMap::new(config.render.pattern.clone());
        out_map.set_prefix(self.output.clone());
        if !out_map.prefix.as_os_str().is_empty() {
            fs::create_dir_all(&out_map.prefix).map_err(|e| Error::write_image(&out_map.prefix, e))?;
        }

        let textures = TextureCache::with_generator(Generator {
            seed: config.textures.seed,
        });
        let mut pipeline = Pipeline::with_textures(config.assets_folder(folder), textures)?;
        pipeline.set_pan(file.pan());
        let started = pipeline.prepare(template, &file.card);
        tracing::debug!(images = started, "waiting for images");
        pipeline.wait();

        let written = pipeline.export_card(
            template,
            &file.card,
            file.featured.as_slice(),
            &export,
            thumbnail.as_ref(),
            |face, thumb, format| out_map.path(template, &file.card, face, thumb, format),
        )?;
        tracing::info!("rendered {} images with template `{}`", written.len(), template.id);
        Ok(())
    }

    fn select_template(&self, file: &CardFile) -> &'static Template {
        let id = self.template.as_deref().or(file.template.as_deref());
        match id {
            Some(id) => {
                if template::find_template(id).is_none() {
                    tracing::warn!("unknown template `{id}`, using the default");
                }
                template::get_template_by_id(id)
            }
            None => template::default_template(),
        }
    }
}

impl TextureArgs {
    fn run(&self, config: &Config) -> Result<()> {
        let generator = Generator {
            seed: self.seed.or(config.textures.seed),
        };
        let width = self.width.unwrap_or(config.textures.size);
        let height = self.height.unwrap_or(config.textures.size);

        if self.all {
            fs::create_dir_all(&self.output).map_err(|e| Error::write_image(&self.output, e))?;
            for kind in TextureKind::ALL {
                let path = self.output.join(kind.name()).with_extension("png");
                generator.generate(kind, width, height)?.write_png(&path)?;
                tracing::info!("wrote {}", path.display());
            }
            return Ok(());
        }

        let name = self.name.as_deref().unwrap_or_default();
        let kind = name.parse::<TextureKind>()?;
        generator.generate(kind, width, height)?.write_png(&self.output)?;
        tracing::info!("wrote {}", self.output.display());
        Ok(())
    }
}

impl TemplatesArgs {
    fn run(&self) {
        let templates = match self.category {
            Some(category) => template::get_templates_by_category(category),
            None => template::catalog().iter().collect(),
        };
        for t in templates {
            let kind = if t.is_layered() { "layered" } else { "fixed" };
            println!("{:<20} {:<28} {:<12} {kind}", t.id, t.name, t.category.label());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_render_command() {
        let cli = Cli::parse_from([
            "cardforge", "render", "ruth.toml", "-t", "neon", "--format", "jpg", "--thumbnails", "-v",
        ]);
        let Command::Render(args) = &cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.template.as_deref(), Some("neon"));
        assert_eq!(args.format, Some(OutputFormat::Jpeg));
        assert!(args.thumbnails);
        assert_eq!(cli.log_level(&Config::default()), Level::DEBUG);
    }

    #[test]
    fn texture_needs_name_or_all() {
        assert!(Cli::try_parse_from(["cardforge", "texture", "-o", "out.png"]).is_err());
        assert!(Cli::try_parse_from(["cardforge", "texture", "--all", "-o", "out"]).is_ok());
        assert!(Cli::try_parse_from(["cardforge", "texture", "marble", "-W", "64", "-o", "m.png"]).is_ok());
    }

    #[test]
    fn quiet_wins_over_config() {
        let cli = Cli::parse_from(["cardforge", "-q", "templates"]);
        assert_eq!(cli.log_level(&Config::default()), Level::WARN);
    }
}
