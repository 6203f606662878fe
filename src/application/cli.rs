use std::io;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;
use dialoguer::Select;
use strum::VariantNames;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use yansi::Paint;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::GeneratorName;
use crate::domain::models::HistoryEntry;
use crate::domain::services::actions::help_text;
use crate::domain::services::HistoryStore;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
    std::process::exit(0);
}

fn format_entry(entry: &HistoryEntry) -> String {
    let mut res = format!(
        "- (ID: {}) {}, {}",
        entry.id,
        entry.timestamp,
        entry.request.summary(),
    );

    if let Some(specification) = entry.result.first() {
        let mut line = specification.title.to_string();
        if line.len() >= 70 {
            line = format!("{}...", &line[..67]);
        }
        res = format!("{res}, {line}");
    }

    return res;
}

async fn print_history_list() -> Result<()> {
    let entries = HistoryStore::default()
        .load_all()
        .await
        .iter()
        .map(|entry| {
            return format_entry(entry);
        })
        .collect::<Vec<String>>();

    if entries.is_empty() {
        println!("There is no saved history yet. Generate your first specifications!");
    } else {
        println!("{}", entries.join("\n"));
    }

    return Ok(());
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if !config_file_path.parent().unwrap().exists() {
        fs::create_dir_all(config_file_path.parent().unwrap()).await?;
    }

    let mut file = fs::File::create(config_file_path.clone()).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    let config_path_display = config_file_path.as_os_str().to_str().unwrap();
    println!("Created default config file at {config_path_display}");
    return Ok(());
}

async fn load_config_from_history(history_id: &str) -> Result<()> {
    let entries = HistoryStore::default().load_all().await;
    if !entries.iter().any(|entry| return entry.id == history_id) {
        bail!(format!("No history entry with ID {history_id}"));
    }

    Config::set(ConfigKey::HistoryID, history_id);

    return Ok(());
}

async fn load_config_from_history_interactive() -> Result<()> {
    let entries = HistoryStore::default().load_all().await;

    if entries.is_empty() {
        println!("There is no saved history yet. Generate your first specifications!");
        return Ok(());
    }

    let entry_options = entries
        .iter()
        .map(|entry| {
            return format_entry(entry);
        })
        .collect::<Vec<String>>();

    let idx = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Which history entry would you like to open?")
        .default(0)
        .items(&entry_options)
        .interact_opt()?
        .unwrap();

    Config::set(ConfigKey::HistoryID, &entries[idx].id);

    return Ok(());
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn subcommand_debug() -> Command {
    let mut cmd = Command::new("debug");
    cmd = cmd.about("Debug helpers for Specforge")
        .hide(true)
        .subcommand(
            Command::new("log-path").about("Output path to debug log file generated when running Specforge with environment variable RUST_LOG=specforge")
        )
        .subcommand(
            Command::new("enum-config").about("List all config keys as strings.")
        );

    return cmd;
}

fn arg_generator() -> Arg {
    return Arg::new(ConfigKey::Generator.to_string())
        .short('g')
        .long(ConfigKey::Generator.to_string())
        .env("SPECFORGE_GENERATOR")
        .num_args(1)
        .help(format!(
            "The generation service used to produce specifications. [default: {}]",
            Config::default(ConfigKey::Generator)
        ))
        .value_parser(PossibleValuesParser::new(GeneratorName::VARIANTS));
}

fn arg_model() -> Arg {
    return Arg::new(ConfigKey::Model.to_string())
        .short('m')
        .long(ConfigKey::Model.to_string())
        .env("SPECFORGE_MODEL")
        .num_args(1)
        .help(format!(
            "The model used to generate specifications. [default: {}]",
            Config::default(ConfigKey::Model)
        ));
}

fn subcommand_generate() -> Command {
    return Command::new("generate")
        .about("Start a new specification briefing.")
        .arg(arg_generator())
        .arg(arg_model());
}

fn subcommand_history() -> Command {
    return Command::new("history")
        .about("Manage previously generated specifications.")
        .arg_required_else_help(true)
        .subcommand(Command::new("dir").about("Print the history cache directory path."))
        .subcommand(
            Command::new("list").about("List all saved entries with their ids and briefings."),
        )
        .subcommand(
            Command::new("open")
                .about("Open a saved entry by ID. Omit passing any ID to load an interactive selection.")
                .arg(
                    clap::Arg::new(ConfigKey::HistoryID.to_string())
                        .short('i')
                        .long("id")
                        .help("History entry ID")
                        .required(false),
                ),
        )
        .subcommand(Command::new("clear").about("Delete all saved entries."));
}

pub fn build() -> Command {
    let hotkeys_text = help_text()
        .split('\n')
        .map(|line| {
            if line.starts_with('-') {
                return format!("  {line}");
            }
            if line.starts_with("HOTKEYS:") {
                return Paint::new(line.to_string()).underline().bold().to_string();
            }
            return line.to_string();
        })
        .collect::<Vec<String>>()
        .join("\n");

    let about = format!(
        "{}\n\nVersion: {}\nCommit: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_GIT_DESCRIBE")
    );

    return Command::new("specforge")
        .about(about)
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(hotkeys_text)
        .arg_required_else_help(false)
        .subcommand(subcommand_generate())
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .subcommand(subcommand_debug())
        .subcommand(Command::new("manpages").about("Generates manpages and outputs to stdout."))
        .subcommand(subcommand_history())
        .arg(arg_generator())
        .arg(arg_model())
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("SPECFORGE_CONFIG_FILE")
                .num_args(1)
                .help(format!(
                    "Path to configuration file [default: {}]",
                    Config::default(ConfigKey::ConfigFile)
                ))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::GeminiURL.to_string())
                .long(ConfigKey::GeminiURL.to_string())
                .env("SPECFORGE_GEMINI_URL")
                .num_args(1)
                .help(format!(
                    "Gemini API URL. Can be swapped to a compatible proxy. [default: {}]",
                    Config::default(ConfigKey::GeminiURL)
                ))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::GeminiToken.to_string())
                .long(ConfigKey::GeminiToken.to_string())
                .env("SPECFORGE_GEMINI_TOKEN")
                .num_args(1)
                .help("Gemini API key used to authenticate generation requests.")
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::RequestTimeout.to_string())
                .long(ConfigKey::RequestTimeout.to_string())
                .env("SPECFORGE_REQUEST_TIMEOUT")
                .num_args(1)
                .help(format!(
                    "Time to wait in milliseconds before a generation request times out. [default: {}]",
                    Config::default(ConfigKey::RequestTimeout)
                ))
                .global(true),
        );
}

pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("debug", debug_matches)) => {
            match debug_matches.subcommand() {
                Some(("log-path", _)) => {
                    let log_path = dirs::cache_dir().unwrap().join("specforge/debug.log");
                    println!("{}", log_path.to_str().unwrap());
                }
                Some(("enum-config", _)) => {
                    let res = ConfigKey::VARIANTS.join("\n");
                    println!("{}", res);
                }
                _ => {
                    subcommand_debug().print_long_help()?;
                }
            }

            return Ok(false);
        }
        Some(("generate", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
        }
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
        }
        Some(("config", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("create", _)) => {
                create_config_file().await?;
                return Ok(false);
            }
            Some(("default", _)) => {
                println!("{}", Config::serialize_default(build()));
                return Ok(false);
            }
            Some(("path", _)) => {
                println!("{}", Config::default(ConfigKey::ConfigFile));
                return Ok(false);
            }
            _ => {
                subcommand_config().print_long_help()?;
                return Ok(false);
            }
        },
        Some(("manpages", _)) => {
            clap_mangen::Man::new(build()).render(&mut io::stdout())?;
            return Ok(false);
        }
        Some(("history", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("dir", _)) => {
                let dir = HistoryStore::default()
                    .cache_dir
                    .to_string_lossy()
                    .to_string();
                println!("{dir}");
                return Ok(false);
            }
            Some(("list", _)) => {
                print_history_list().await?;
                return Ok(false);
            }
            Some(("open", open_matches)) => {
                Config::load(build(), vec![&matches, open_matches]).await?;
                if let Some(history_id) =
                    open_matches.get_one::<String>(&ConfigKey::HistoryID.to_string())
                {
                    load_config_from_history(history_id).await?;
                } else {
                    load_config_from_history_interactive().await?;
                }
            }
            Some(("clear", _)) => {
                let confirmed = Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt("Clear all saved history?")
                    .default(false)
                    .interact_opt()?
                    .unwrap_or(false);

                if confirmed {
                    HistoryStore::default().clear().await?;
                    println!("Cleared history");
                }
                return Ok(false);
            }
            _ => {
                subcommand_history().print_long_help()?;
                return Ok(false);
            }
        },
        _ => {
            Config::load(build(), vec![&matches]).await?;
        }
    }

    return Ok(true);
}
