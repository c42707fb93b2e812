use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cutlass::config::{self, AppConfig, setup};
use cutlass::constants::env_vars;
use cutlass::error::{ErrorReporter, UserAlert};
use cutlass::options::{OPTION_CATALOG, find_option};
use cutlass::store::{MemorySettingsStore, SettingsStore, TomlSettingsStore};
use cutlass::theme::validation::{ConfigKeyValidator, SchemeNameValidator};
use cutlass::theme::{DirectoryResources, HeadlessHost, INTERFACE_THEMES};
use cutlass::{AppError, Configuration, Lookup, Validator, logger, translations};
use engine::{ConfigValue, InMemoryEngine};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};

/// Inspect and change Cutlass preferences.
#[derive(Debug, Parser)]
#[command(name = "cutlass", version, about, after_help = env_help())]
struct Cli {
    /// Application config file (default: discovered cutlass.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Settings file to operate on (overrides settings_file)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the current theme, colors, fonts and engine options.
    Show,
    /// Select an interface theme by index (0 Native, 1 Dark, 2 Light).
    Theme { index: i64 },
    /// Select a color theme ("default" resets to the engine's own scheme).
    Colors { name: String },
    /// Read an engine option.
    Get { key: String },
    /// Set an engine option; catalog options are persisted.
    Set { key: String, value: String },
    /// Read a cached color.
    Color { name: String },
    /// Forget every setting and start from defaults.
    Reset,
    /// Persist the default value of every catalog option.
    ResetAsm,
    /// List installed translations.
    Translations,
}

fn env_help() -> String {
    format!(
        "Environment overrides:\n  {}\n  {}\n  {}\n  {}\n  {}",
        env_vars::CUTLASS_CONFIG,
        env_vars::CUTLASS_SETTINGS_FILE,
        env_vars::CUTLASS_RESOURCES_DIR,
        env_vars::CUTLASS_LOGGING_LEVEL,
        env_vars::CUTLASS_LOGGING_FILE
    )
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let app_config = config::load_config(cli.config.as_deref()).into_result()?;
    logger::setup_logger(app_config.logging()).context("Failed to initialize logger")?;
    if let Err(e) = setup::initialize_config_dir() {
        log::warn!("{e}");
    }

    let (tx, alerts) = mpsc::channel();
    let mut configuration = build_configuration(&cli, &app_config, ErrorReporter::new(tx));
    print_alerts(&alerts);

    configuration.subscribe(|event| log::debug!("Configuration event: {event}"));
    if configuration.is_first_execution() {
        log::info!("First execution on this machine");
    }
    configuration.load_initial();

    run(cli.command, &mut configuration, &app_config)?;
    print_alerts(&alerts);
    Ok(())
}

fn build_configuration(
    cli: &Cli,
    app_config: &AppConfig,
    reporter: ErrorReporter,
) -> Configuration {
    let settings_path = cli.settings.clone().or_else(|| app_config.settings_file());
    let store: Box<dyn SettingsStore> = match settings_path {
        Some(path) => Box::new(TomlSettingsStore::open(path)),
        None => {
            log::warn!("No settings location available, settings will not be saved");
            Box::new(MemorySettingsStore::read_only())
        }
    };

    let mut engine = InMemoryEngine::new();
    if let Some(dir) = app_config.schemes_dir() {
        if let Err(e) = engine.load_custom_schemes(&dir) {
            log::warn!("Failed to load custom color schemes: {e}");
        }
    }

    Configuration::new(
        store,
        Box::new(engine),
        Box::new(HeadlessHost::default()),
        Box::new(DirectoryResources::new(app_config.resources_dir())),
        reporter,
    )
}

fn run(
    command: Command,
    configuration: &mut Configuration,
    app_config: &AppConfig,
) -> Result<()> {
    match command {
        Command::Show => show(configuration),
        Command::Theme { index } => {
            let theme = configuration.set_interface_theme(index);
            if theme.is_fallback() {
                println!("Index {index} is out of range, using {}", theme.value());
            } else {
                println!("Interface theme: {}", theme.value());
            }
        }
        Command::Colors { name } => {
            SchemeNameValidator.validate(&name).map_err(AppError::from)?;
            configuration.set_color_theme(&name);
            let current = configuration.get_current_theme().into_inner();
            configuration.set_last_theme_of(current, &name);
            println!("Color theme: {}", configuration.color_theme());
        }
        Command::Get { key } => {
            ConfigKeyValidator.validate(&key).map_err(AppError::from)?;
            match configuration.get_config_var(&key) {
                Some(value) => println!("{key} = {value}"),
                None => println!("{key} is not a persisted option"),
            }
        }
        Command::Set { key, value } => {
            ConfigKeyValidator.validate(&key).map_err(AppError::from)?;
            let value = parse_value(&key, &value);
            configuration.set_config(&key, value.clone());
            println!("{key} = {value}");
        }
        Command::Color { name } => match configuration.get_color(&name) {
            Lookup::Found(color) => println!("{name} = {color}"),
            Lookup::Fallback(color) => println!("{name} = {color} (fallback)"),
        },
        Command::Reset => {
            configuration.reset_all();
            println!("All settings reset");
        }
        Command::ResetAsm => {
            configuration.reset_to_default_asm_options();
            println!("{} options reset to defaults", OPTION_CATALOG.len());
        }
        Command::Translations => {
            let extra: Vec<PathBuf> = app_config
                .translations_dir()
                .map(|dir| vec![dir.to_path_buf()])
                .unwrap_or_default();
            let dirs = translations::translation_directories(&extra);
            for language in translations::available_translations(&dirs) {
                println!("{language}");
            }
        }
    }
    Ok(())
}

fn show(configuration: &mut Configuration) {
    let current = configuration.get_current_theme().into_inner();
    println!("Settings:        {}", configuration.store().location());
    println!("Interface theme: {current}");
    for (index, theme) in INTERFACE_THEMES.iter().enumerate() {
        println!(
            "  [{index}] {theme} (last color theme: {})",
            configuration.last_theme_of(theme)
        );
    }
    println!("Color theme:     {}", configuration.color_theme());
    println!("Dark window:     {}", configuration.window_color_is_dark());
    println!("Logo:            {}", configuration.logo_file());
    println!("Font:            {}", configuration.font());
    println!("Locale:          {}", configuration.locale());
    println!("Projects:        {}", configuration.dir_projects());
    println!("Recent folder:   {}", configuration.recent_folder());
    println!("Auto update:     {}", configuration.auto_update_enabled());
    println!("Options:");
    for entry in OPTION_CATALOG.iter() {
        let value = configuration
            .get_config_var(entry.key)
            .unwrap_or_else(|| entry.default.clone());
        let marker = if value == entry.default { "" } else { " *" };
        println!("  {} = {value}{marker}", entry.key);
    }
}

/// Interpret a command-line value, using the catalog type when the key is known.
fn parse_value(key: &str, raw: &str) -> ConfigValue {
    let guessed = if let Ok(b) = raw.parse::<bool>() {
        ConfigValue::Bool(b)
    } else if let Ok(i) = raw.parse::<i64>() {
        ConfigValue::Int(i)
    } else {
        ConfigValue::from(raw)
    };
    match find_option(key) {
        Some(entry) => guessed.coerce(entry.kind()),
        None => guessed,
    }
}

fn print_alerts(alerts: &Receiver<UserAlert>) {
    for alert in alerts.try_iter() {
        eprintln!("{}: {}", alert.title, alert.message);
    }
}
