//! Room-code allocation for presenting mode.

use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, info};

/// Room code handed out for a presenting session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomCode(String);

impl RoomCode {
    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RoomCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Allocates room codes for presenting sessions.
///
/// There is no allocation backend yet; the service waits for the
/// configured delay and then hands out the demo room. The boundary
/// exists so the UI already treats room acquisition as asynchronous
/// and discardable: a caller that goes away before the delay elapses
/// simply drops the result.
#[derive(Debug, Clone)]
pub struct RoomService {
    request_delay: Duration,
}

impl RoomService {
    /// Code handed out while room allocation is a placeholder.
    pub const DEMO_ROOM: &'static str = "DEMO";

    const DEFAULT_REQUEST_DELAY: Duration = Duration::from_secs(1);

    /// Creates a service with the default one-second request delay.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            request_delay: Self::DEFAULT_REQUEST_DELAY,
        }
    }

    /// Creates a service with a specific request delay.
    #[must_use]
    pub const fn with_delay(request_delay: Duration) -> Self {
        Self { request_delay }
    }

    /// Requests a room code, resolving after the configured delay.
    pub async fn request_room(&self) -> RoomCode {
        debug!(delay = ?self.request_delay, "Requesting room code");
        sleep(self.request_delay).await;
        info!(room = Self::DEMO_ROOM, "Room code allocated");
        RoomCode(Self::DEMO_ROOM.to_string())
    }
}

impl Default for RoomService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_room_hands_out_demo_code() {
        let service = RoomService::with_delay(Duration::ZERO);
        let room = tokio_test::block_on(service.request_room());

        assert_eq!(room.as_str(), "DEMO");
        assert_eq!(room.to_string(), "DEMO");
    }

    #[test]
    fn test_default_delay_is_one_second() {
        let service = RoomService::new();
        assert_eq!(service.request_delay, Duration::from_secs(1));
    }
}
