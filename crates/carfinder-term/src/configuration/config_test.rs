use anyhow::Result;
use serial_test::serial;

use super::*;
use crate::application::cli;

async fn load_with(args: Vec<&str>) -> Result<()> {
    let cmd = cli::build();
    let matches = cmd.clone().try_get_matches_from(args)?;
    return Config::load(cmd, vec![&matches]).await;
}

#[tokio::test]
#[serial]
async fn it_loads_defaults_without_config_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let missing = dir.path().join("missing.toml");

    load_with(vec!["carfinder", "--config-file", missing.to_str().unwrap()]).await?;

    assert_eq!(
        Config::get(ConfigKey::ApiUrl),
        "https://vpic.nhtsa.dot.gov/api/vehicles"
    );
    assert_eq!(Config::get(ConfigKey::VehicleType), "car");
    assert_eq!(Config::get(ConfigKey::ConfigFile), missing.to_str().unwrap());
    assert!(Config::get(ConfigKey::LogFile).ends_with("carfinder.log"));
    return Ok(());
}

#[tokio::test]
#[serial]
async fn it_reads_config_file_and_lets_flags_win() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let config_path = dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        "api-url = \"http://localhost:8089/api/vehicles\"\nvehicle-type = \"truck\"\n",
    )?;
    let config_file = config_path.to_str().unwrap();

    load_with(vec!["carfinder", "--config-file", config_file]).await?;
    assert_eq!(Config::get(ConfigKey::ApiUrl), "http://localhost:8089/api/vehicles");
    assert_eq!(Config::get(ConfigKey::VehicleType), "truck");

    load_with(vec![
        "carfinder",
        "--config-file",
        config_file,
        "--vehicle-type",
        "motorcycle",
    ])
    .await?;
    assert_eq!(Config::get(ConfigKey::VehicleType), "motorcycle");
    return Ok(());
}

#[tokio::test]
#[serial]
async fn it_rejects_invalid_config_values() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let config_path = dir.path().join("config.toml");
    std::fs::write(&config_path, "vehicle-type = \"spaceship\"\n")?;

    let res = load_with(vec!["carfinder", "--config-file", config_path.to_str().unwrap()]).await;

    let err = res.unwrap_err().to_string();
    assert!(err.contains("invalid value for key 'vehicle-type': spaceship"));
    assert!(err.contains("car, truck"));
    return Ok(());
}

#[test]
fn it_serializes_default_config() {
    let toml_str = Config::serialize_default(cli::build());

    assert!(toml_str.contains("api-url = \"https://vpic.nhtsa.dot.gov/api/vehicles\""));
    assert!(toml_str.contains("vehicle-type = \"car\""));
    assert!(toml_str.contains("[possible values: car, truck, motorcycle, bus, trailer]"));
    assert!(toml_str.contains("log-file = "));
    assert!(!toml_str.contains("config-file"));
}
