use std::path::PathBuf;

use anyhow::bail;
use anyhow::Result;
use clap::Arg;
use clap::ArgAction;
use clap::ArgMatches;
use clap::Command;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Route;

/// vPIC vehicle types that can back the make list.
pub const VEHICLE_TYPES: [&str; 5] = ["car", "truck", "motorcycle", "bus", "trailer"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Ui { route: Route },
    StaticPaths { pretty: bool, output: Option<PathBuf> },
    PrintDefaultConfig,
}

fn arg_api_url() -> Arg {
    return Arg::new(ConfigKey::ApiUrl.to_string())
        .long(ConfigKey::ApiUrl.to_string())
        .env("CARFINDER_API_URL")
        .num_args(1)
        .global(true)
        .help(format!(
            "Base URL of the vPIC vehicles API [default: {}]",
            Config::default(ConfigKey::ApiUrl)
        ));
}

fn arg_vehicle_type() -> Arg {
    return Arg::new(ConfigKey::VehicleType.to_string())
        .long(ConfigKey::VehicleType.to_string())
        .env("CARFINDER_VEHICLE_TYPE")
        .num_args(1)
        .global(true)
        .value_parser(VEHICLE_TYPES)
        .help(format!(
            "Vehicle type whose makes are offered for selection [default: {}]",
            Config::default(ConfigKey::VehicleType)
        ));
}

fn arg_config_file() -> Arg {
    return Arg::new(ConfigKey::ConfigFile.to_string())
        .short('c')
        .long(ConfigKey::ConfigFile.to_string())
        .env("CARFINDER_CONFIG_FILE")
        .num_args(1)
        .global(true)
        .help(format!(
            "Path to configuration file [default: {}]",
            Config::default(ConfigKey::ConfigFile)
        ));
}

fn arg_log_file() -> Arg {
    return Arg::new(ConfigKey::LogFile.to_string())
        .long(ConfigKey::LogFile.to_string())
        .env("CARFINDER_LOG_FILE")
        .num_args(1)
        .global(true)
        .help(format!(
            "File the terminal UI writes its logs to [default: {}]",
            Config::default(ConfigKey::LogFile)
        ));
}

fn subcommand_static_paths() -> Command {
    return Command::new("static-paths")
        .about("Prints every /result/{makeId}/{year} route as a JSON array of path params.")
        .arg(
            Arg::new("pretty")
                .long("pretty")
                .action(ArgAction::SetTrue)
                .help("Pretty-print the JSON output"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .num_args(1)
                .help("Write the JSON to a file instead of stdout"),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new("default").about("Prints the default config.toml."));
}

pub fn build() -> Command {
    return Command::new("carfinder")
        .about("Pick a vehicle make and model year, then browse the matching models from the NHTSA vPIC API.")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("route")
                .short('r')
                .long("route")
                .num_args(1)
                .help("Open at a route instead of the selection screen, e.g. /result/474/2020"),
        )
        .arg(arg_api_url())
        .arg(arg_vehicle_type())
        .arg(arg_config_file())
        .arg(arg_log_file())
        .subcommand(subcommand_static_paths())
        .subcommand(subcommand_config());
}

/// Loads configuration for the matched command and decides what to run.
pub async fn from_matches(cmd: Command, matches: &ArgMatches) -> Result<Invocation> {
    match matches.subcommand() {
        Some(("static-paths", sub_matches)) => {
            Config::load(cmd, vec![matches, sub_matches]).await?;
            return Ok(Invocation::StaticPaths {
                pretty: sub_matches.get_flag("pretty"),
                output: sub_matches.get_one::<String>("output").map(PathBuf::from),
            });
        }
        Some(("config", sub_matches)) => match sub_matches.subcommand_name() {
            Some("default") => return Ok(Invocation::PrintDefaultConfig),
            Some(name) => bail!("Unknown config subcommand '{name}'"),
            None => bail!("A config subcommand is required"),
        },
        Some((name, _)) => bail!("Unknown subcommand '{name}'"),
        None => {
            Config::load(cmd, vec![matches]).await?;
            let route = match matches.get_one::<String>("route") {
                Some(path) => Route::parse(path)?,
                None => Route::Selection,
            };
            return Ok(Invocation::Ui { route });
        }
    }
}

pub async fn parse() -> Result<Invocation> {
    let cmd = build();
    let matches = cmd.clone().get_matches();
    return from_matches(cmd, &matches).await;
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    async fn invocation(args: Vec<&str>) -> Result<Invocation> {
        let cmd = build();
        let matches = cmd.clone().try_get_matches_from(args)?;
        return from_matches(cmd, &matches).await;
    }

    #[tokio::test]
    #[serial]
    async fn test_defaults_to_ui_at_selection() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let config_file = dir.path().join("none.toml");
        let res = invocation(vec!["carfinder", "-c", config_file.to_str().unwrap()]).await?;

        assert_eq!(res, Invocation::Ui { route: Route::Selection });
        return Ok(());
    }

    #[tokio::test]
    #[serial]
    async fn test_ui_deep_link() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let config_file = dir.path().join("none.toml");
        let res = invocation(vec![
            "carfinder",
            "-c",
            config_file.to_str().unwrap(),
            "--route",
            "/result/474/2020",
        ])
        .await?;

        assert_eq!(
            res,
            Invocation::Ui {
                route: Route::results("474", "2020")
            }
        );
        return Ok(());
    }

    #[tokio::test]
    #[serial]
    async fn test_rejects_unknown_route() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let config_file = dir.path().join("none.toml");
        let res = invocation(vec![
            "carfinder",
            "-c",
            config_file.to_str().unwrap(),
            "--route",
            "/makes",
        ])
        .await;

        assert!(res.is_err());
        return Ok(());
    }

    #[tokio::test]
    #[serial]
    async fn test_static_paths_with_global_flags() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let config_file = dir.path().join("none.toml");
        let res = invocation(vec![
            "carfinder",
            "static-paths",
            "--pretty",
            "-o",
            "paths.json",
            "-c",
            config_file.to_str().unwrap(),
            "--api-url",
            "http://localhost:8089/api/vehicles",
        ])
        .await?;

        assert_eq!(
            res,
            Invocation::StaticPaths {
                pretty: true,
                output: Some(PathBuf::from("paths.json")),
            }
        );
        assert_eq!(
            Config::get(ConfigKey::ApiUrl),
            "http://localhost:8089/api/vehicles"
        );
        return Ok(());
    }

    #[tokio::test]
    async fn test_config_default() -> Result<()> {
        let res = invocation(vec!["carfinder", "config", "default"]).await?;
        assert_eq!(res, Invocation::PrintDefaultConfig);
        return Ok(());
    }

    #[test]
    fn test_rejects_unknown_vehicle_type_flag() {
        let res = build().try_get_matches_from(vec!["carfinder", "--vehicle-type", "boat"]);
        assert!(res.is_err());
    }
}
