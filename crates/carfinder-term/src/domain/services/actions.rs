use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::catalog::fetch_makes;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::ModelsRequest;
use crate::domain::models::VehicleDataClient;
use crate::domain::models::VehicleDataClientBox;

async fn fetch_models(
    client: &dyn VehicleDataClient,
    request: ModelsRequest,
    event_tx: &mpsc::UnboundedSender<Event>,
) -> Result<()> {
    let outcome = client.get_models(&request.make_id, &request.year).await;
    if let Ok(models) = &outcome {
        tracing::debug!(
            make_id = %request.make_id,
            year = %request.year,
            count = models.len(),
            "fetched vehicle models"
        );
    }

    event_tx.send(Event::ModelsLoaded {
        generation: request.generation,
        outcome,
    })?;

    Ok(())
}

pub struct ActionsService {}

impl ActionsService {
    /// Runs fetches off the UI loop until the action channel closes. At most
    /// one models fetch is in flight; a newer one aborts the older.
    pub async fn start(
        client: VehicleDataClientBox,
        event_tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        let client_arc = Arc::new(client);

        #[allow(unused_assignments)]
        let mut models_worker: JoinHandle<Result<()>> = tokio::spawn(async { Ok(()) });

        while let Some(action) = rx.recv().await {
            let worker_event_tx = event_tx.clone();
            let client_worker = client_arc.clone();
            match action {
                Action::FetchMakes(vehicle_type) => {
                    tokio::spawn(async move {
                        let result = fetch_makes(&**client_worker, &vehicle_type).await;
                        worker_event_tx.send(Event::MakesLoaded(result))?;
                        Ok::<(), anyhow::Error>(())
                    });
                }
                Action::FetchModels(request) => {
                    models_worker.abort();
                    models_worker = tokio::spawn(async move {
                        fetch_models(&**client_worker, request, &worker_event_tx).await
                    });
                }
                Action::CancelModels => {
                    models_worker.abort();
                }
            }
        }

        models_worker.abort();
        tracing::debug!("action channel closed, stopping actions service");

        Ok(())
    }
}
