// mDNS Responder Task - macht den Strip im Netz auffindbar
//
// Advertised den Hostnamen "led.local" via Multicast DNS (RFC 6762),
// damit Clients das Gerät ohne bekannte IP-Adresse finden - das
// Gegenstück zum Advertising eines Funk-Peripherals. Läuft dauerhaft,
// auch über Client-Disconnects hinweg.
//
// - Transport: UDP Multicast auf 224.0.0.251:5353
// - Unterstützt: A-Records (IPv4 Hostname-Auflösung)
// - Library: edge-mdns (no_std) + edge-nal-embassy (embassy-net Adapter)

use defmt::{Debug2Format, error, info, warn};
use embassy_net::Stack;
use embassy_time::{Duration, Timer};

use core::net::{Ipv4Addr, SocketAddr};
use core::sync::atomic::{AtomicU32, Ordering};

use edge_mdns::{HostAnswersMdnsHandler, buf::VecBufAccess, domain::base::Ttl, host::Host, io};
use edge_nal::{MulticastV4, UdpBind, UdpSplit};
use edge_nal_embassy::{Udp, UdpBuffers};
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::signal::Signal;

use crate::config::{
    MDNS_HOSTNAME, MDNS_MULTICAST_ADDR, MDNS_PACKET_BUFFER_SIZE, MDNS_PORT,
    MDNS_RECONNECT_DELAY_SECS, MDNS_TTL_SECS, MDNS_UDP_BUFFER_SIZE,
};

/// Atomischer Counter als Pseudo-RNG für mDNS Transaction IDs
///
/// Für mDNS reicht Eindeutigkeit, kryptographische Qualität ist
/// nicht gefordert.
static RNG_COUNTER: AtomicU32 = AtomicU32::new(0);

fn mdns_rng(buf: &mut [u8]) {
    let mut counter = RNG_COUNTER.fetch_add(1, Ordering::Relaxed);
    for chunk in buf.chunks_mut(4) {
        let bytes = counter.to_le_bytes();
        let len = chunk.len().min(4);
        chunk[..len].copy_from_slice(&bytes[..len]);
        counter = counter.wrapping_add(1);
    }
}

/// mDNS Responder Task
///
/// Wartet auf Netzwerk und beantwortet dann mDNS-Queries mit dem
/// A-Record `<MDNS_HOSTNAME>.local` → eigene IPv4-Adresse. Bei Fehlern:
/// Reconnect nach MDNS_RECONNECT_DELAY_SECS.
#[embassy_executor::task]
pub async fn mdns_responder_task(stack: &'static Stack<'static>) {
    info!("mDNS: Task gestartet, warte auf Netzwerk...");
    wait_for_network(stack).await;
    info!("mDNS: Netzwerk bereit");

    loop {
        match run_mdns_responder(stack).await {
            Ok(_) => warn!("mDNS: Responder normal beendet"),
            Err(e) => error!("mDNS: Fehler: {}", Debug2Format(&e)),
        }
        info!("mDNS: Neustart in {}s...", MDNS_RECONNECT_DELAY_SECS);
        Timer::after(Duration::from_secs(MDNS_RECONNECT_DELAY_SECS)).await;
    }
}

/// Wartet bis Link up ist und DHCP eine IPv4-Konfiguration geliefert hat
async fn wait_for_network(stack: &'static Stack<'static>) {
    loop {
        if stack.is_link_up() && stack.config_v4().is_some() {
            break;
        }
        Timer::after(Duration::from_millis(500)).await;
    }
}

/// Führt den mDNS Responder Loop aus
///
/// Bindet einen UDP-Socket auf 0.0.0.0:MDNS_PORT, joined die
/// Multicast-Gruppe und beantwortet Queries bis ein Fehler auftritt.
async fn run_mdns_responder(stack: &'static Stack<'static>) -> Result<(), MdnsError> {
    let our_ip = stack.config_v4().unwrap().address.address();
    info!("mDNS: Nutze IP {}", Debug2Format(&our_ip));

    // UDP Adapter (edge-nal-embassy → embassy-net)
    // StaticCell wird nur einmal initialisiert; init_with() gibt nach
    // einem Reconnect die vorhandene Referenz zurück statt zu panicen
    static UDP_BUFFERS: static_cell::StaticCell<
        UdpBuffers<1, MDNS_UDP_BUFFER_SIZE, MDNS_UDP_BUFFER_SIZE>,
    > = static_cell::StaticCell::new();
    let udp_buffers = UDP_BUFFERS.init_with(UdpBuffers::new);
    let udp_stack = Udp::new(*stack, udp_buffers);

    let mut socket = udp_stack
        .bind(SocketAddr::new(Ipv4Addr::UNSPECIFIED.into(), MDNS_PORT))
        .await
        .map_err(|_| MdnsError::SocketBindFailed)?;

    socket
        .join_v4(Ipv4Addr::from(MDNS_MULTICAST_ADDR), Ipv4Addr::UNSPECIFIED)
        .await
        .map_err(|_| MdnsError::MulticastJoinFailed)?;

    let (recv, send) = socket.split();

    let host = Host {
        hostname: MDNS_HOSTNAME,
        ipv4: our_ip.into(),
        ipv6: [0u8; 16].into(), // IPv6 nicht unterstützt (kein proto-ipv6 in smoltcp)
        ttl: Ttl::from_secs(MDNS_TTL_SECS),
    };

    // Packet-Buffers (stack-allocated, 1500 Bytes = Standard MTU)
    let recv_buf = VecBufAccess::<NoopRawMutex, MDNS_PACKET_BUFFER_SIZE>::new();
    let send_buf = VecBufAccess::<NoopRawMutex, MDNS_PACKET_BUFFER_SIZE>::new();

    // Signal für Broadcast-Notifications (nicht verwendet, aber von API benötigt)
    let signal = Signal::<NoopRawMutex, ()>::new();

    let mdns = io::Mdns::new(
        Some(our_ip),
        None, // kein IPv6
        recv,
        send,
        recv_buf,
        send_buf,
        mdns_rng,
        &signal,
    );

    info!("mDNS: Responder läuft, advertise '{}.local'", MDNS_HOSTNAME);

    // Blocking: läuft bis ein Fehler auftritt
    mdns.run(HostAnswersMdnsHandler::new(&host))
        .await
        .map_err(|_| MdnsError::ResponderFailed)?;

    Ok(())
}

/// mDNS Fehler-Typen
#[derive(Debug)]
enum MdnsError {
    SocketBindFailed,
    MulticastJoinFailed,
    ResponderFailed,
}

impl defmt::Format for MdnsError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            MdnsError::SocketBindFailed => defmt::write!(fmt, "Socket bind failed"),
            MdnsError::MulticastJoinFailed => defmt::write!(fmt, "Multicast join failed"),
            MdnsError::ResponderFailed => defmt::write!(fmt, "Responder failed"),
        }
    }
}
