use std::path::PathBuf;

use anyhow::Result;
use carfinder_term::application::cli;
use carfinder_term::application::cli::Invocation;
use carfinder_term::application::logging;
use carfinder_term::application::ui::current_year;
use carfinder_term::application::ui::destruct_terminal_for_panic;
use carfinder_term::application::ui::start_ui;
use carfinder_term::configuration::Config;
use carfinder_term::configuration::ConfigKey;
use carfinder_term::domain::models::Action;
use carfinder_term::domain::models::Event;
use carfinder_term::domain::models::Route;
use carfinder_term::domain::services::ActionsService;
use carfinder_term::domain::services::catalog::enumerate_static_paths;
use carfinder_term::domain::services::AppStateProps;
use carfinder_term::infrastructure::clients::VehicleDataClientManager;
use tokio::sync::mpsc;
use tokio::task;

async fn run_ui(route: Route) -> Result<()> {
    let _guard = logging::init_file(&Config::get(ConfigKey::LogFile))?;
    tracing::info!(
        route = %route,
        api_url = %Config::get(ConfigKey::ApiUrl),
        "starting carfinder"
    );

    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let (event_tx, event_rx) = mpsc::unbounded_channel::<Event>();

    let mut background_futures = task::JoinSet::new();
    let client = VehicleDataClientManager::get();
    background_futures
        .spawn(async move { ActionsService::start(client, event_tx, &mut action_rx).await });

    let app_state_props = AppStateProps {
        vehicle_type: Config::get(ConfigKey::VehicleType),
        initial_route: route,
        current_year: current_year(),
    };
    let ui_future = start_ui(app_state_props, action_tx, event_rx);

    let result = tokio::select!(
        res = background_futures.join_next() => match res {
            Some(Ok(res)) => res,
            Some(Err(err)) => Err(err.into()),
            None => Ok(()),
        },
        res = ui_future => res,
    );

    if result.is_err() {
        destruct_terminal_for_panic();
    }

    return result;
}

async fn run_static_paths(pretty: bool, output: Option<PathBuf>) -> Result<()> {
    logging::init_stderr()?;

    let client = VehicleDataClientManager::get();
    let paths = enumerate_static_paths(
        &*client,
        &Config::get(ConfigKey::VehicleType),
        current_year(),
    )
    .await?;

    let json = if pretty {
        serde_json::to_string_pretty(&paths)?
    } else {
        serde_json::to_string(&paths)?
    };

    match output {
        Some(path) => {
            tokio::fs::write(&path, format!("{json}\n")).await?;
            tracing::info!(path = %path.display(), count = paths.len(), "wrote static paths");
        }
        None => println!("{json}"),
    }

    return Ok(());
}

#[tokio::main]
async fn main() -> Result<()> {
    std::panic::set_hook(Box::new(|panic_info| {
        destruct_terminal_for_panic();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    match cli::parse().await? {
        Invocation::Ui { route } => run_ui(route).await?,
        Invocation::StaticPaths { pretty, output } => run_static_paths(pretty, output).await?,
        Invocation::PrintDefaultConfig => println!("{}", Config::serialize_default(cli::build())),
    }

    return Ok(());
}
