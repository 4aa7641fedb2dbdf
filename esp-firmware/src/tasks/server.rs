// Server Task - Funk-Transport für Text-Kommandos (HTTP + WebSocket)
//
// Ein Client schickt Kommandos als rohe Text-Frames über den
// WebSocket-Endpoint /ws (z.B. "red", "s,45", "c,255,0,255"). Die Frames
// gehen unverändert durch den Kommando-Parser; das Wire-Format IST das
// Kommando-Vokabular, kein JSON und kein Binär-Framing.
use core::future::pending;
use defmt::info;
use embassy_futures::select::{Either, select};
use embassy_net::Stack;
use embassy_time::Duration;
use picoserve::{io::embedded_io_async, response::IntoResponse, response::ws, routing::get};

use crate::config::{
    HTTP_BUFFER_SIZE, TCP_RX_BUFFER_SIZE, TCP_TX_BUFFER_SIZE, WEBSOCKET_BUFFER_SIZE,
};
use crate::web::INDEX_HTML;
use crate::{Command, CommandSender, EchoChannel, EchoSubscriber, parse_command};

/// Response-Enum für den WebSocket-Endpoint
/// Ermöglicht Rückgabe von entweder WebSocket-Upgrade oder HTTP-Fehler
enum WebSocketResponse {
    Upgrade(
        ws::UpgradedWebSocket<ws::UnspecifiedProtocol, ws::CallbackNotUsingState<WebSocketHandler>>,
    ),
    ServiceUnavailable,
}

impl IntoResponse for WebSocketResponse {
    async fn write_to<
        R: embedded_io_async::Read,
        W: picoserve::response::ResponseWriter<Error = R::Error>,
    >(
        self,
        connection: picoserve::response::Connection<'_, R>,
        response_writer: W,
    ) -> Result<picoserve::ResponseSent, W::Error> {
        match self {
            WebSocketResponse::Upgrade(ws) => ws.write_to(connection, response_writer).await,
            WebSocketResponse::ServiceUnavailable => {
                picoserve::response::Response::new(
                    picoserve::response::StatusCode::new(503),
                    "Service Unavailable: zu viele WebSocket-Verbindungen",
                )
                .with_header("Retry-After", "5")
                .write_to(connection, response_writer)
                .await
            }
        }
    }
}

/// Server Task - läuft parallel zu anderen Tasks
///
/// - Serviert die Kontroll-Seite auf GET /
/// - WebSocket-Endpoint auf /ws nimmt Text-Kommandos entgegen
/// - Reicht Konsolen-Echo an verbundene Clients weiter
///
/// Der Server lauscht dauerhaft weiter, auch nachdem ein Client die
/// Verbindung trennt - das Gerät bleibt ansprechbar (Connection-Lifecycle
/// wie beim Neustart des Advertisings nach einem Disconnect).
///
/// **Task Pool:** Diese Task wird 4x gespawnt für concurrent connections.
///
/// # Parameter
/// - `task_id`: Eindeutige ID für diese Server-Instanz (0..3)
/// - `stack`: embassy-net Stack für Netzwerk-Zugriff
/// - `echo_channel`: PubSub Channel für Konsolen-Echo (Handler erstellt Subscriber)
/// - `command_sender`: Channel Sender für dekodierte Kommandos
#[embassy_executor::task(pool_size = 4)]
pub async fn server_task(
    task_id: usize,
    stack: &'static Stack<'static>,
    echo_channel: &'static EchoChannel,
    command_sender: CommandSender,
) {
    info!("Server: Task {} startet auf Port 80...", task_id);

    let app = picoserve::Router::new().route("/", get(serve_html)).route(
        "/ws",
        get(
            |upgrade: picoserve::response::WebSocketUpgrade| async move {
                // Pro Connection ein Echo-Subscriber; sind alle Slots belegt,
                // antworten wir mit HTTP 503 statt zu panicen
                match echo_channel.subscriber() {
                    Ok(echo_subscriber) => {
                        info!("Server: WebSocket-Upgrade");
                        let handler = WebSocketHandler {
                            command_sender,
                            echo_subscriber,
                        };
                        WebSocketResponse::Upgrade(upgrade.on_upgrade(handler))
                    }
                    Err(_) => {
                        info!("Server: Keine Subscriber-Slots frei, sende HTTP 503");
                        WebSocketResponse::ServiceUnavailable
                    }
                }
            },
        ),
    );

    let config = picoserve::Config::new(picoserve::Timeouts {
        start_read_request: Some(Duration::from_secs(5)),
        read_request: Some(Duration::from_secs(1)),
        write: Some(Duration::from_secs(1)),
        persistent_start_read_request: Some(Duration::from_secs(5)),
    })
    .keep_connection_alive();

    let mut http_buffer = [0u8; HTTP_BUFFER_SIZE];
    let mut rx_buffer = [0u8; TCP_RX_BUFFER_SIZE];
    let mut tx_buffer = [0u8; TCP_TX_BUFFER_SIZE];

    let server = picoserve::Server::new(&app, &config, &mut http_buffer);

    let _ = server
        .listen_and_serve(task_id, *stack, 80, &mut rx_buffer, &mut tx_buffer)
        .await;

    info!("Server: Task {} beendet", task_id);
}

/// Serviert die HTML-Kontroll-Seite
async fn serve_html() -> impl IntoResponse {
    picoserve::response::Response::new(picoserve::response::StatusCode::OK, INDEX_HTML)
        .with_header("Content-Type", "text/html; charset=utf-8")
}

/// WebSocket-Handler State
struct WebSocketHandler {
    command_sender: CommandSender,
    echo_subscriber: EchoSubscriber,
}

impl ws::WebSocketCallback for WebSocketHandler {
    async fn run<R: embedded_io_async::Read, W: embedded_io_async::Write<Error = R::Error>>(
        mut self,
        mut rx: ws::SocketRx<R>,
        mut tx: ws::SocketTx<W>,
    ) -> Result<(), W::Error> {
        info!("Server: WebSocket-Verbindung aufgebaut");

        let mut buffer = [0u8; WEBSOCKET_BUFFER_SIZE];

        let close_reason = loop {
            // Gleichzeitig auf zwei Events lauschen:
            // 1. Text-Frames vom Client (Kommandos)
            // 2. Konsolen-Echo vom PubSubChannel
            match select(
                rx.next_message(&mut buffer, pending()),
                self.echo_subscriber.next_message_pure(),
            )
            .await
            {
                Either::First(ws_result) => {
                    let ws_result = ws_result?.ignore_never_b();

                    match ws_result {
                        Ok(ws::Message::Text(data)) => {
                            self.handle_command_text(data).await;
                        }
                        Ok(ws::Message::Binary(data)) => {
                            info!("Server: Binär-Frame ({} Bytes) ignoriert", data.len());
                        }
                        Ok(ws::Message::Ping(data)) => {
                            tx.send_pong(data).await?;
                        }
                        Ok(ws::Message::Pong(_)) => {}
                        Ok(ws::Message::Close(_reason)) => {
                            info!("Server: WebSocket-Close empfangen");
                            break None;
                        }
                        Err(error) => {
                            info!("Server: WebSocket-Fehler");
                            break Some((error.code(), "WebSocket Error"));
                        }
                    }
                }
                // Konsolen-Echo: rohe Zeile an den Client weiterreichen
                Either::Second(line) => {
                    tx.send_text(line.as_str()).await?;
                }
            }
        };

        info!("Server: WebSocket-Verbindung geschlossen");
        tx.close(close_reason).await
    }
}

impl WebSocketHandler {
    /// Dekodiert einen Text-Frame und reicht das Kommando an den Render-Loop
    ///
    /// Der Parser ist total: nicht erkannter Text wird geloggt und
    /// verworfen, der Strip-Zustand bleibt unangetastet.
    async fn handle_command_text(&mut self, text: &str) {
        let command = parse_command(text);
        match command {
            Command::NoOp => {
                info!("Server: Leeres/unvollständiges Kommando verworfen");
            }
            Command::Unrecognized => {
                info!("Server: Unbekanntes Kommando: '{}'", text);
            }
            _ => {
                info!("Server: Kommando {}", command);
                self.command_sender.send(command).await;
            }
        }
    }
}
