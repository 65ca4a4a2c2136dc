//! localelib: resolve Minecraft localization keys and compose client-translated
//! chat payloads from the command line.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use localelib::commands::{self, ComposeTarget, ResourceQuery, Session};
use localelib::core::host::{ConsoleDispatcher, MessageDispatcher};
use localelib::core::state::{default_settings_path, load_settings, LocaleSettings};
use localelib::{Material, MaterialKind, DEFAULT_LOG_FILTER};

#[derive(Parser)]
#[command(name = "localelib")]
#[command(version)]
#[command(about = "Version-aware Minecraft localization keys and translated chat components")]
struct Cli {
    /// Settings file (defaults to the platform config directory)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Server version, e.g. 1.12.2-R0.1-SNAPSHOT
    #[arg(short = 'v', long, global = true)]
    server_version: Option<String>,

    /// Client jar to read language files from
    #[arg(long, global = true)]
    jar: Option<PathBuf>,

    /// Standalone .json or .lang language file
    #[arg(long, global = true)]
    lang: Option<PathBuf>,

    /// Locale code inside the jar
    #[arg(long, global = true)]
    locale: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the detected era and capability flags
    Profile,

    /// Resolve the key for a material
    Material {
        #[command(flatten)]
        item: ItemArgs,
    },

    /// Resolve the key for an entity type
    Entity {
        #[arg(value_name = "TYPE")]
        entity_type: String,

        /// Profession, ocelot/rabbit type, or tropical fish pattern/index
        extra: Option<String>,
    },

    /// Resolve enchantment and level keys (`name[:level]`)
    Enchant {
        #[arg(required = true)]
        enchantments: Vec<String>,
    },

    /// Compose a chat payload from a template
    Compose {
        /// Template with <item>, <enchantment>, <level> or <mob>
        template: String,

        #[command(subcommand)]
        target: ComposeCommand,

        /// Print a tellraw command for this player instead of the payload
        #[arg(long, global = true)]
        player: Option<String>,
    },

    /// Look up the display string for a key in the reference language
    Lookup { key: String },

    /// Inspect resources inside the client jar
    Resources {
        #[command(subcommand)]
        query: ResourceCommand,
    },
}

#[derive(Args)]
struct ItemArgs {
    #[arg(value_name = "MATERIAL")]
    name: String,

    #[arg(short, long, value_enum, default_value = "item")]
    kind: KindArg,

    /// Legacy durability/data value; negative ignores it
    #[arg(short, long, default_value = "-1", allow_hyphen_values = true)]
    durability: i16,

    /// Base potion type carried in the item meta
    #[arg(short, long)]
    potion: Option<String>,
}

#[derive(Subcommand)]
enum ComposeCommand {
    Item {
        #[command(flatten)]
        item: ItemArgs,

        /// Enchantments as `name[:level]`
        #[arg(short, long)]
        enchant: Vec<String>,

        /// Treat enchantments as stored in an enchanted book
        #[arg(long)]
        stored: bool,
    },
    Entity {
        #[arg(value_name = "TYPE")]
        entity_type: String,
        extra: Option<String>,
    },
    Enchant {
        #[arg(required = true)]
        enchantments: Vec<String>,
    },
}

#[derive(Subcommand)]
enum ResourceCommand {
    /// Direct children of a folder
    List {
        #[arg(default_value = "")]
        folder: String,
    },
    /// Entries under a base folder matching a regex
    Find { base: String, pattern: String },
    /// Indented tree of a folder
    Tree {
        #[arg(default_value = "")]
        folder: String,
        #[arg(short, long, default_value = "2")]
        depth: usize,
    },
    /// Locale codes with a language file
    Locales,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    Item,
    Block,
    Ageable,
}

impl From<KindArg> for MaterialKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Item => MaterialKind::Item,
            KindArg::Block => MaterialKind::Block,
            KindArg::Ageable => MaterialKind::AgeableBlock,
        }
    }
}

fn settings_for(cli: &Cli) -> Result<LocaleSettings> {
    let path = cli.settings.clone().unwrap_or_else(default_settings_path);
    let mut settings =
        load_settings(&path).with_context(|| format!("reading settings {}", path.display()))?;
    if let Some(version) = &cli.server_version {
        settings.server_version = Some(version.clone());
    }
    if let Some(jar) = &cli.jar {
        settings.client_jar = Some(jar.clone());
    }
    if let Some(lang) = &cli.lang {
        settings.lang_file = Some(lang.clone());
    }
    if let Some(locale) = &cli.locale {
        settings.locale = locale.clone();
    }
    Ok(settings)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = settings_for(&cli)?;
    localelib::init_tracing(settings.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER));

    let output = run(&settings, &cli.command)?;

    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}

/// `resources` only reads the jar; every other command opens a [`Session`].
fn run(settings: &LocaleSettings, command: &Commands) -> Result<String> {
    let open = || Session::open(settings.clone());
    let output = match command {
        Commands::Resources { query } => resources(settings, query)?,
        Commands::Profile => commands::profile(&open()?)?,
        Commands::Material { item } => commands::material(
            &open()?,
            &item.name,
            item.kind.into(),
            item.durability,
            item.potion.as_deref(),
        )?,
        Commands::Entity { entity_type, extra } => {
            commands::entity(&open()?, entity_type, extra.as_deref())?
        }
        Commands::Enchant { enchantments } => commands::enchant(&open()?, enchantments)?,
        Commands::Compose {
            template,
            target,
            player,
        } => {
            let payload = compose(&open()?, template, target)?;
            match player {
                Some(player) => {
                    let dispatcher = ConsoleDispatcher::new(Vec::new());
                    dispatcher.dispatch(player, &payload)?;
                    String::from_utf8(dispatcher.into_inner())?
                }
                None => payload,
            }
        }
        Commands::Lookup { key } => commands::lookup(&open()?, key)?,
    };
    Ok(output)
}

fn resources(settings: &LocaleSettings, query: &ResourceCommand) -> Result<String> {
    let jar = commands::resource_jar(settings)?;
    let query = match query {
        ResourceCommand::List { folder } => ResourceQuery::Children(folder),
        ResourceCommand::Find { base, pattern } => ResourceQuery::Find { base, pattern },
        ResourceCommand::Tree { folder, depth } => ResourceQuery::Tree {
            folder,
            depth: *depth,
        },
        ResourceCommand::Locales => ResourceQuery::Locales,
    };
    Ok(commands::resources(&jar, query)?)
}

fn compose(session: &Session, template: &str, target: &ComposeCommand) -> Result<String> {
    let target = match target {
        ComposeCommand::Item {
            item,
            enchant,
            stored,
        } => ComposeTarget::Item {
            material: Material::new(&item.name, item.kind.into()),
            durability: item.durability,
            potion: item.potion.as_deref(),
            enchantments: commands::parse_enchantments(enchant)?,
            stored: *stored,
        },
        ComposeCommand::Entity { entity_type, extra } => ComposeTarget::Entity {
            entity_type,
            extra: extra.as_deref(),
        },
        ComposeCommand::Enchant { enchantments } => {
            ComposeTarget::Enchantments(commands::parse_enchantments(enchantments)?)
        }
    };
    Ok(commands::compose(session, template, target)?)
}
