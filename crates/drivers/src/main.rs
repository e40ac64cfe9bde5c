#[cfg(not(target_arch = "wasm32"))]
mod logging;

use std::path::Path;
use std::process::ExitCode;

use calc_study_adapters::{
    present_preset_row, present_search_view, present_snapshot, present_viewer,
    EmbeddedCatalogSource, HeadlessHost, JsonFileCatalogSource,
};
use calc_study_application::{
    ApplicationService, CatalogSource, DetachCommand, DetachOutcome, SearchCommand,
    SelectEntryCommand, SelectPresetCommand, SetPathMaskCommand, StartSessionCommand,
    ToggleFullscreenCommand,
};
use calc_study_domain::{EntryId, PresetKey};
use calc_study_drivers::config::AppConfig;
use calc_study_drivers::BUNDLED_CATALOG;

fn main() -> ExitCode {
    #[cfg(not(target_arch = "wasm32"))]
    logging::init_logging();

    let args: Vec<String> = std::env::args().collect();
    let invocation = match parse_invocation(&args) {
        Ok(invocation) => invocation,
        Err(error) => return report(error),
    };

    let config = match load_config(invocation.config_path.as_deref()) {
        Ok(config) => config,
        Err(error) => return report(error),
    };

    match run_command(invocation.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => report(error),
    }
}

fn report(error: CommandError) -> ExitCode {
    match error {
        CommandError::Usage(msg) => {
            eprintln!("{msg}");
            print_usage();
            ExitCode::from(2)
        }
        CommandError::Runtime(msg) => {
            eprintln!("{msg}");
            ExitCode::from(1)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    List,
    Search { query: String },
    Presets,
    Cloak { preset: String, mask: bool },
    View { entry_id: u64, fullscreen: bool },
    Press { key: String },
    Detach { block_popups: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Invocation {
    config_path: Option<String>,
    command: Command,
}

#[derive(Debug, Clone)]
enum CommandError {
    Usage(String),
    Runtime(String),
}

fn parse_invocation(args: &[String]) -> Result<Invocation, CommandError> {
    let mut rest = args.get(1..).unwrap_or_default();
    let mut config_path = None;
    if rest.first().map(String::as_str) == Some("--config") {
        let path = rest
            .get(1)
            .ok_or_else(|| CommandError::Usage("missing config path".to_string()))?;
        config_path = Some(path.clone());
        rest = &rest[2..];
    }
    Ok(Invocation {
        config_path,
        command: parse_command(rest)?,
    })
}

fn parse_command(args: &[String]) -> Result<Command, CommandError> {
    let Some(name) = args.first() else {
        return Ok(Command::List);
    };
    let flags = &args[1..];
    let has_flag = |flag: &str| flags.iter().any(|arg| arg == flag);

    match name.as_str() {
        "list" => Ok(Command::List),
        "search" => Ok(Command::Search {
            query: flags.join(" "),
        }),
        "presets" => Ok(Command::Presets),
        "cloak" => {
            let preset = flags
                .first()
                .filter(|arg| !arg.starts_with("--"))
                .ok_or_else(|| CommandError::Usage("missing preset key".to_string()))?;
            Ok(Command::Cloak {
                preset: preset.clone(),
                mask: has_flag("--mask"),
            })
        }
        "view" => {
            let raw = flags
                .first()
                .ok_or_else(|| CommandError::Usage("missing entry id".to_string()))?;
            let entry_id = raw
                .parse::<u64>()
                .map_err(|_| CommandError::Usage(format!("invalid entry id: {raw}")))?;
            Ok(Command::View {
                entry_id,
                fullscreen: has_flag("--fullscreen"),
            })
        }
        "press" => {
            let key = flags
                .first()
                .ok_or_else(|| CommandError::Usage("missing key".to_string()))?;
            Ok(Command::Press { key: key.clone() })
        }
        "detach" => Ok(Command::Detach {
            block_popups: has_flag("--block-popups"),
        }),
        other => Err(CommandError::Usage(format!("unknown command: {other}"))),
    }
}

fn load_config(path: Option<&str>) -> Result<AppConfig, CommandError> {
    match path {
        Some(path) => AppConfig::load(Path::new(path))
            .map_err(|error| CommandError::Runtime(error.to_string())),
        None => Ok(AppConfig::default()),
    }
}

fn build_application_service(
    config: &AppConfig,
    host: &HeadlessHost,
) -> Result<ApplicationService, CommandError> {
    let source: Box<dyn CatalogSource> = match &config.catalog_path {
        Some(path) => Box::new(JsonFileCatalogSource::new(path)),
        None => Box::new(EmbeddedCatalogSource::new(BUNDLED_CATALOG)),
    };
    let catalog = source
        .load_catalog()
        .map_err(|error| CommandError::Runtime(format!("catalog failed: {error}")))?;

    let mut service = ApplicationService::new(host.ports(), config.cloak_settings());
    service.load_catalog(catalog);
    service
        .start_session(StartSessionCommand)
        .map_err(|error| CommandError::Runtime(format!("startup failed: {error}")))?;
    Ok(service)
}

fn run_command(command: Command, config: &AppConfig) -> Result<(), CommandError> {
    tracing::debug!(?command, "running command");
    let host = HeadlessHost::default();
    let mut service = build_application_service(config, &host)?;
    let runtime = |error: calc_study_application::ApplicationError| {
        CommandError::Runtime(error.to_string())
    };

    match command {
        Command::List => {
            print_lines(present_search_view(&service.results()));
        }
        Command::Search { query } => {
            let view = service.search(SearchCommand { query });
            print_lines(present_search_view(&view));
        }
        Command::Presets => {
            let active = service.appearance().active_preset;
            for key in PresetKey::ALL {
                println!("{}", present_preset_row(&key.preset(), active));
            }
        }
        Command::Cloak { preset, mask } => {
            if PresetKey::parse(&preset).is_none() {
                tracing::warn!(preset = %preset, "unknown preset, appearance unchanged");
            }
            service
                .select_preset(SelectPresetCommand { key: preset })
                .map_err(runtime)?;
            service
                .set_path_mask(SetPathMaskCommand { masked: mask })
                .map_err(runtime)?;
            print_lines(present_snapshot(&host.snapshot()));
        }
        Command::View {
            entry_id,
            fullscreen,
        } => {
            service
                .select_entry(SelectEntryCommand {
                    entry_id: EntryId::new(entry_id),
                })
                .map_err(runtime)?;
            if fullscreen {
                service
                    .toggle_fullscreen(ToggleFullscreenCommand)
                    .map_err(runtime)?;
            }
            println!("{}", present_viewer(service.viewer_state()));
            print_lines(present_snapshot(&host.snapshot()));
        }
        Command::Press { key } => {
            host.press_key(&key);
            print_lines(present_snapshot(&host.snapshot()));
        }
        Command::Detach { block_popups } => {
            if block_popups {
                host.block_popups();
            }
            match service.detach(DetachCommand).map_err(runtime)? {
                DetachOutcome::Detached => println!("detached"),
                DetachOutcome::Blocked => println!("popup blocked"),
            }
            print_lines(present_snapshot(&host.snapshot()));
        }
    }
    Ok(())
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{line}");
    }
}

fn print_usage() {
    println!("usage:");
    println!("  calc-study [--config <file>] list");
    println!("  calc-study [--config <file>] search <query>");
    println!("  calc-study [--config <file>] presets");
    println!("  calc-study [--config <file>] cloak <preset> [--mask]");
    println!("  calc-study [--config <file>] view <entry_id> [--fullscreen]");
    println!("  calc-study [--config <file>] press <key>");
    println!("  calc-study [--config <file>] detach [--block-popups]");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(parts: &[&str]) -> Vec<String> {
        std::iter::once("calc-study")
            .chain(parts.iter().copied())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn no_arguments_lists_catalog() {
        let invocation = parse_invocation(&args(&[])).expect("parse");
        assert_eq!(invocation.command, Command::List);
        assert_eq!(invocation.config_path, None);
    }

    #[test]
    fn config_flag_precedes_command() {
        let invocation =
            parse_invocation(&args(&["--config", "cs.json", "cloak", "canvas", "--mask"]))
                .expect("parse");
        assert_eq!(invocation.config_path.as_deref(), Some("cs.json"));
        assert_eq!(
            invocation.command,
            Command::Cloak {
                preset: "canvas".to_string(),
                mask: true,
            }
        );
    }

    #[test]
    fn search_joins_remaining_words() {
        let invocation = parse_invocation(&args(&["search", "algebra", "basics"])).expect("parse");
        assert_eq!(
            invocation.command,
            Command::Search {
                query: "algebra basics".to_string(),
            }
        );
    }

    #[test]
    fn view_rejects_invalid_id() {
        let result = parse_invocation(&args(&["view", "abc"]));
        assert!(matches!(result, Err(CommandError::Usage(_))));
    }

    #[test]
    fn unknown_command_is_usage_error() {
        let result = parse_invocation(&args(&["launch"]));
        assert!(matches!(result, Err(CommandError::Usage(_))));
    }

    #[test]
    fn run_commands_against_bundled_catalog() {
        let config = AppConfig::default();
        for command in [
            Command::List,
            Command::Search {
                query: "zzz".to_string(),
            },
            Command::Presets,
            Command::Cloak {
                preset: "bogus".to_string(),
                mask: false,
            },
            Command::View {
                entry_id: 1,
                fullscreen: true,
            },
            Command::Press {
                key: "`".to_string(),
            },
            Command::Detach { block_popups: true },
        ] {
            assert!(run_command(command, &config).is_ok());
        }
    }

    #[test]
    fn viewing_missing_entry_is_runtime_error() {
        let result = run_command(
            Command::View {
                entry_id: 999,
                fullscreen: false,
            },
            &AppConfig::default(),
        );
        assert!(matches!(result, Err(CommandError::Runtime(_))));
    }
}
