use std::net::SocketAddr;

use tracing::{error, info};

use board_server::board::{BoardConfig, DepartureBoard, DirectionTable, StationConfig};
use board_server::timetable::{
    FileTimetableSource, TimetableClient, TimetableConfig, TimetableSource,
};
use board_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let source = match timetable_source_from_env() {
        Ok(source) => source,
        Err(message) => {
            eprintln!("Error: {message}");
            std::process::exit(1);
        }
    };

    let station = StationConfig::default();
    let config = BoardConfig::default();

    // Load every direction up front. A failed direction is not fatal: its
    // error message is shown on the board in place of a table.
    let loads = futures::future::join_all(
        station
            .directions
            .iter()
            .map(|direction| source.load_table(&direction.table)),
    )
    .await;

    let mut tables = Vec::with_capacity(station.directions.len());
    for (direction, loaded) in station.directions.iter().cloned().zip(loads) {
        match loaded {
            Ok(table) => {
                info!(direction = %direction.key, rows = table.len(), "loaded timetable");
                tables.push(DirectionTable {
                    direction,
                    table: Ok(table),
                });
            }
            Err(e) => {
                error!(direction = %direction.key, error = %e, "failed to load timetable");
                tables.push(DirectionTable {
                    direction,
                    table: Err(e.to_string()),
                });
            }
        }
    }

    // The board owns the refresh and carousel tasks; it must outlive the
    // server, since dropping it cancels them.
    let board = DepartureBoard::start(tables, &config);

    let state = AppState::new(board.snapshot(), board.phase(), station, config);

    let static_dir =
        std::env::var("STATIC_DIR").unwrap_or_else(|_| "board-server/static".to_string());
    let app = create_router(state, &static_dir);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    info!("Departure board listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}

/// Pick the timetable source from the environment.
///
/// `TIMETABLE_DIR` selects the directory source and takes precedence;
/// otherwise `TIMETABLE_BASE_URL` selects the HTTP source.
fn timetable_source_from_env() -> Result<TimetableSource, String> {
    if let Ok(dir) = std::env::var("TIMETABLE_DIR") {
        return Ok(TimetableSource::Files(FileTimetableSource::new(dir)));
    }

    if let Ok(base_url) = std::env::var("TIMETABLE_BASE_URL") {
        let client = TimetableClient::new(TimetableConfig::new(base_url))
            .map_err(|e| format!("failed to create timetable client: {e}"))?;
        return Ok(TimetableSource::Http(client));
    }

    Err("no timetable source configured; set TIMETABLE_DIR or TIMETABLE_BASE_URL".to_string())
}
