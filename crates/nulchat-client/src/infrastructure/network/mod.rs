//! Network infrastructure for the client application.
//!
//! Resolves the server address, opens the connection, and adapts the
//! connected socket to the [`Transport`] trait from `nulchat-core`.
//!
//! Architecture:
//! - [`resolve_server_addr`] turns `host:port` into one IPv6 socket address.
//!   IPv6 results win; an IPv4 result is used in its IPv4-mapped IPv6 form.
//! - [`connect_to_server`] creates an IPv6 stream socket and connects it.
//!   Socket creation and connection are separate steps because they fail in
//!   different error categories.
//! - [`TcpConnection`] owns the connected stream.  Dropping it closes the
//!   socket; close errors are ignored.
//!
//! # Raw socket calls
//!
//! `std::net::TcpStream::connect` creates and connects in one call and cannot
//! pass `MSG_MORE`, so this module goes through `libc` for `socket`,
//! `connect`, and (on Linux/Android) `send`.  Once connected, the descriptor
//! is handed to a `TcpStream` for ownership and `peer_addr`.

use std::io;
use std::mem;
use std::net::{SocketAddr, SocketAddrV6, TcpStream, ToSocketAddrs};
use std::os::fd::{AsRawFd, FromRawFd, OwnedFd};

use nulchat_core::Transport;
use tracing::{debug, info};

use crate::domain::Verbosity;
use crate::error::ClientError;

#[cfg(any(target_os = "linux", target_os = "android"))]
const SOCKET_FLAGS: libc::c_int = libc::SOCK_CLOEXEC;
#[cfg(not(any(target_os = "linux", target_os = "android")))]
const SOCKET_FLAGS: libc::c_int = 0;

// ── Address resolution ────────────────────────────────────────────────────────

/// Picks the address to connect to from resolver output.
///
/// The first IPv6 address wins.  Without one, the first IPv4 address is
/// returned in IPv4-mapped form (`::ffff:a.b.c.d`).
pub fn select_address(addrs: impl IntoIterator<Item = SocketAddr>) -> Option<SocketAddrV6> {
    let mut mapped = None;
    for addr in addrs {
        match addr {
            SocketAddr::V6(v6) => return Some(v6),
            SocketAddr::V4(v4) if mapped.is_none() => {
                mapped = Some(SocketAddrV6::new(v4.ip().to_ipv6_mapped(), v4.port(), 0, 0));
            }
            SocketAddr::V4(_) => {}
        }
    }
    mapped
}

/// Resolves `host:port` to a single IPv6 socket address.
///
/// The port is always numeric; no service-name lookup takes place.  There is
/// no retry and no caching.
///
/// # Errors
///
/// - [`ClientError::Resolve`] if the resolver fails.
/// - [`ClientError::NoAddress`] if it returns nothing usable.
pub fn resolve_server_addr(host: &str, port: u16) -> Result<SocketAddrV6, ClientError> {
    let addrs = (host, port)
        .to_socket_addrs()
        .map_err(|source| ClientError::Resolve {
            host: host.to_string(),
            port,
            source,
        })?;

    let addr = select_address(addrs).ok_or_else(|| ClientError::NoAddress {
        host: host.to_string(),
        port,
    })?;
    debug!(%addr, "resolved server address");
    Ok(addr)
}

// ── Connection ────────────────────────────────────────────────────────────────

/// A connected stream to the chat server.
///
/// The socket is closed when this value is dropped.
#[derive(Debug)]
pub struct TcpConnection {
    stream: TcpStream,
}

impl TcpConnection {
    /// Address of the connected server.
    ///
    /// # Errors
    ///
    /// Returns the OS error if the peer address cannot be read.
    pub fn peer_addr(&self) -> io::Result<SocketAddr> {
        self.stream.peer_addr()
    }
}

/// Opens a stream connection to `addr`.
///
/// When `verbosity` is at least 1, the connected peer address is read back and
/// logged.
///
/// # Errors
///
/// - [`ClientError::SocketCreate`] if the socket cannot be created.
/// - [`ClientError::Connect`] if the connection fails; the socket is closed
///   before returning.
/// - [`ClientError::PeerAddress`] if the peer address cannot be read back.
pub fn connect_to_server(addr: SocketAddrV6, verbosity: Verbosity) -> Result<TcpConnection, ClientError> {
    let socket = new_stream_socket().map_err(ClientError::SocketCreate)?;

    // On failure `socket` is dropped here, which closes it.
    connect_socket(&socket, &addr).map_err(|source| ClientError::Connect { addr, source })?;

    let connection = TcpConnection {
        stream: TcpStream::from(socket),
    };
    if verbosity.is_verbose() {
        let peer = connection.peer_addr().map_err(ClientError::PeerAddress)?;
        info!("Connected to host {} on port {}", peer.ip(), peer.port());
    }
    Ok(connection)
}

fn new_stream_socket() -> io::Result<OwnedFd> {
    // SAFETY: plain syscall with constant arguments; the result is checked
    // before it is used as a descriptor.
    let fd = unsafe { libc::socket(libc::AF_INET6, libc::SOCK_STREAM | SOCKET_FLAGS, 0) };
    if fd == -1 {
        return Err(io::Error::last_os_error());
    }
    // SAFETY: `fd` was just returned by `socket` and is owned by nobody else.
    Ok(unsafe { OwnedFd::from_raw_fd(fd) })
}

fn connect_socket(socket: &OwnedFd, addr: &SocketAddrV6) -> io::Result<()> {
    let raw = to_sockaddr_in6(addr);
    // SAFETY: `raw` is a fully initialised sockaddr_in6 and the length passed
    // is its size.
    let r = unsafe {
        libc::connect(
            socket.as_raw_fd(),
            (&raw as *const libc::sockaddr_in6).cast::<libc::sockaddr>(),
            mem::size_of::<libc::sockaddr_in6>() as libc::socklen_t,
        )
    };
    if r == -1 {
        Err(io::Error::last_os_error())
    } else {
        Ok(())
    }
}

fn to_sockaddr_in6(addr: &SocketAddrV6) -> libc::sockaddr_in6 {
    // SAFETY: sockaddr_in6 is a plain C struct for which all-zero is valid.
    let mut raw: libc::sockaddr_in6 = unsafe { mem::zeroed() };
    raw.sin6_family = libc::AF_INET6 as libc::sa_family_t;
    raw.sin6_port = addr.port().to_be();
    raw.sin6_flowinfo = addr.flowinfo();
    raw.sin6_addr = libc::in6_addr {
        s6_addr: addr.ip().octets(),
    };
    raw.sin6_scope_id = addr.scope_id();
    #[cfg(any(
        target_os = "macos",
        target_os = "ios",
        target_os = "freebsd",
        target_os = "openbsd",
        target_os = "netbsd",
        target_os = "dragonfly"
    ))]
    {
        raw.sin6_len = mem::size_of::<libc::sockaddr_in6>() as u8;
    }
    raw
}

// ── Transport ─────────────────────────────────────────────────────────────────

impl Transport for TcpConnection {
    fn send(&mut self, buf: &[u8], more: bool) -> io::Result<usize> {
        send_with_hint(&self.stream, buf, more)
    }
}

#[cfg(any(target_os = "linux", target_os = "android"))]
fn send_with_hint(stream: &TcpStream, buf: &[u8], more: bool) -> io::Result<usize> {
    let flags = libc::MSG_NOSIGNAL | if more { libc::MSG_MORE } else { 0 };
    // SAFETY: pointer and length describe a live slice, and the descriptor
    // stays open for as long as `stream` is borrowed.
    let n = unsafe { libc::send(stream.as_raw_fd(), buf.as_ptr().cast(), buf.len(), flags) };
    if n < 0 {
        Err(io::Error::last_os_error())
    } else {
        Ok(n as usize)
    }
}

#[cfg(not(any(target_os = "linux", target_os = "android")))]
fn send_with_hint(mut stream: &TcpStream, buf: &[u8], _more: bool) -> io::Result<usize> {
    use std::io::Write;
    stream.write(buf)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::io::Read;
    use std::net::{Ipv4Addr, Ipv6Addr, SocketAddrV4, TcpListener};

    use nulchat_core::{send_frame, Frame, Tag};

    use super::*;
    use crate::domain::ExitStatus;

    fn v4(a: [u8; 4], port: u16) -> SocketAddr {
        SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::from(a), port))
    }

    fn v6(ip: Ipv6Addr, port: u16) -> SocketAddr {
        SocketAddr::V6(SocketAddrV6::new(ip, port, 0, 0))
    }

    #[test]
    fn test_select_address_prefers_ipv6() {
        // Arrange: IPv4 first, IPv6 second
        let addrs = [v4([127, 0, 0, 1], 7390), v6(Ipv6Addr::LOCALHOST, 7390)];

        // Act
        let chosen = select_address(addrs).unwrap();

        // Assert
        assert_eq!(*chosen.ip(), Ipv6Addr::LOCALHOST);
        assert_eq!(chosen.port(), 7390);
    }

    #[test]
    fn test_select_address_maps_ipv4_when_no_ipv6() {
        let chosen = select_address([v4([127, 0, 0, 1], 7390)]).unwrap();

        assert_eq!(chosen.ip().to_ipv4_mapped(), Some(Ipv4Addr::LOCALHOST));
        assert_eq!(chosen.to_string(), "[::ffff:127.0.0.1]:7390");
    }

    #[test]
    fn test_select_address_keeps_first_ipv4() {
        let chosen = select_address([v4([10, 0, 0, 1], 1), v4([10, 0, 0, 2], 1)]).unwrap();
        assert_eq!(chosen.ip().to_ipv4_mapped(), Some(Ipv4Addr::new(10, 0, 0, 1)));
    }

    #[test]
    fn test_select_address_empty_is_none() {
        assert!(select_address(Vec::new()).is_none());
    }

    #[test]
    fn test_resolve_ipv4_literal_is_mapped() {
        let addr = resolve_server_addr("127.0.0.1", 7390).unwrap();
        assert_eq!(addr.ip().to_ipv4_mapped(), Some(Ipv4Addr::LOCALHOST));
        assert_eq!(addr.port(), 7390);
    }

    #[test]
    fn test_resolve_ipv6_literal_is_kept() {
        let addr = resolve_server_addr("::1", 9).unwrap();
        assert_eq!(*addr.ip(), Ipv6Addr::LOCALHOST);
    }

    #[test]
    fn test_resolve_failure_is_rare() {
        // A NUL in the host name fails inside the resolver call without any
        // network lookup.
        let err = resolve_server_addr("bad\0host", 7390).unwrap_err();

        assert!(matches!(err, ClientError::Resolve { .. }));
        assert_eq!(err.exit_status(), ExitStatus::Rare);
        assert!(err.to_string().starts_with("can't determine server address ("));
    }

    #[test]
    fn test_sockaddr_conversion_uses_network_byte_order() {
        let addr = SocketAddrV6::new(Ipv6Addr::LOCALHOST, 7390, 0, 0);

        let raw = to_sockaddr_in6(&addr);

        assert_eq!(raw.sin6_family, libc::AF_INET6 as libc::sa_family_t);
        assert_eq!(u16::from_be(raw.sin6_port), 7390);
        assert_eq!(raw.sin6_addr.s6_addr, Ipv6Addr::LOCALHOST.octets());
    }

    #[test]
    fn test_connect_and_send_frame_over_loopback() {
        // Arrange: a listener on IPv4 loopback, reached through the mapped address
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let addr = resolve_server_addr("127.0.0.1", port).unwrap();

        // Act
        let mut conn = connect_to_server(addr, Verbosity(1)).unwrap();
        send_frame(&mut conn, &Frame::new(Tag::Name, "Alice")).unwrap();
        let peer_port = conn.peer_addr().unwrap().port();
        drop(conn);

        // Assert: the server sees exactly one frame, then EOF
        let (mut server_side, _) = listener.accept().unwrap();
        let mut received = Vec::new();
        server_side.read_to_end(&mut received).unwrap();
        assert_eq!(received, b"NAlice\0");
        assert_eq!(peer_port, port);
    }

    #[test]
    fn test_connect_refused_is_common() {
        // Arrange: grab a free port, then close the listener
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let addr = resolve_server_addr("127.0.0.1", port).unwrap();

        // Act
        let err = connect_to_server(addr, Verbosity::default()).unwrap_err();

        // Assert
        assert!(matches!(err, ClientError::Connect { .. }));
        assert_eq!(err.exit_status(), ExitStatus::Common);
    }
}
