// WiFi Task - Verbindet mit WLAN und managed die Verbindung
use defmt::{Debug2Format, error, info, warn};
use embassy_net::{Runner, Stack};
use embassy_time::{Duration, Timer};
use esp_radio::wifi::{ClientConfig, ModeConfig, WifiController, WifiDevice, WifiEvent};

use crate::config::{WIFI_PASSWORD, WIFI_SSID};

/// Wartezeit nach einem Verbindungsfehler in Sekunden
const WIFI_RETRY_DELAY_SECS: u64 = 5;

/// WiFi Connection Task
///
/// Hält die Station-Verbindung am Leben: konfigurieren, verbinden,
/// auf Disconnect warten, erneut verbinden. Ein Client-Disconnect auf
/// Transport-Ebene ändert den Strip-Zustand nicht - der Render-Loop
/// läuft unabhängig weiter.
#[embassy_executor::task]
pub async fn connection_task(mut controller: WifiController<'static>) {
    info!("WiFi: Connection task gestartet");

    loop {
        if matches!(controller.is_started(), Ok(false)) {
            let client_config = ModeConfig::Client(
                ClientConfig::default()
                    .with_ssid(WIFI_SSID.into())
                    .with_password(WIFI_PASSWORD.into()),
            );

            if let Err(e) = controller.set_config(&client_config) {
                error!("WiFi: Konfiguration fehlgeschlagen: {}", Debug2Format(&e));
                Timer::after(Duration::from_secs(WIFI_RETRY_DELAY_SECS)).await;
                continue;
            }

            if let Err(e) = controller.start_async().await {
                error!("WiFi: Start fehlgeschlagen: {}", Debug2Format(&e));
                Timer::after(Duration::from_secs(WIFI_RETRY_DELAY_SECS)).await;
                continue;
            }

            info!("WiFi: Gestartet");
        }

        info!("WiFi: Verbinde mit '{}'...", WIFI_SSID);
        if let Err(e) = controller.connect_async().await {
            error!("WiFi: Verbindung fehlgeschlagen: {}", Debug2Format(&e));
            Timer::after(Duration::from_secs(WIFI_RETRY_DELAY_SECS)).await;
            continue;
        }
        info!("WiFi: Verbunden");

        // Blockiert bis die Verbindung abreißt, danach neuer Versuch
        controller.wait_for_event(WifiEvent::StaDisconnected).await;
        warn!("WiFi: Verbindung getrennt, verbinde neu...");
        Timer::after(Duration::from_secs(2)).await;
    }
}

/// Network Task
///
/// Prozessiert Netzwerk-Pakete und managed den TCP/IP Stack.
#[embassy_executor::task]
pub async fn net_task(mut runner: Runner<'static, WifiDevice<'static>>) -> ! {
    runner.run().await
}

/// DHCP Monitor Task
///
/// Wartet auf Link-Up und die IP-Adresse vom DHCP-Server und loggt
/// dann die Netzwerk-Konfiguration.
#[embassy_executor::task]
pub async fn dhcp_task(stack: &'static Stack<'static>) {
    while !stack.is_link_up() {
        Timer::after(Duration::from_millis(500)).await;
    }

    info!("WiFi: Link up, warte auf IP-Adresse...");

    loop {
        if let Some(config) = stack.config_v4() {
            info!("WiFi: IP-Adresse erhalten");
            info!("  IP:      {}", Debug2Format(&config.address.address()));
            info!("  Gateway: {}", Debug2Format(&config.gateway));
            break;
        }
        Timer::after(Duration::from_millis(500)).await;
    }
}
