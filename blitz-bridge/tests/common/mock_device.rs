use std::io;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use serde_json::Value;
use tokio::net::TcpListener;

use blitz_bridge::bridge::Timing;
use blitz_bridge::error::BridgeError;
use blitz_bridge::pattern::Pattern;
use blitz_bridge::services::{Connector, PatternSink};

pub const NO_DELAY: Timing = Timing {
    poll_interval: Duration::from_millis(10),
    startup_delay: Duration::ZERO,
    settle_delay: Duration::ZERO,
};

/// Records every pattern instead of talking to hardware.
#[derive(Clone, Default)]
pub struct MockDevice {
    pub written: Arc<Mutex<Vec<String>>>,
    pub fail_open: Arc<AtomicBool>,
    pub fail_write: Arc<AtomicBool>,
    pub opens: Arc<AtomicUsize>,
}

impl MockDevice {
    pub fn written(&self) -> Vec<String> {
        self.written.lock().unwrap().clone()
    }

    /// Number of times the bridge tried to open the device.
    pub fn opens(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }

    pub fn set_fail_open(&self, fail: bool) {
        self.fail_open.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_write(&self, fail: bool) {
        self.fail_write.store(fail, Ordering::SeqCst);
    }
}

struct MockSink(MockDevice);

impl PatternSink for MockSink {
    fn write_pattern(&mut self, pattern: &Pattern) -> Result<(), BridgeError> {
        if self.0.fail_write.load(Ordering::SeqCst) {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "device unplugged").into());
        }

        self.0.written.lock().unwrap().push(pattern.to_string());
        Ok(())
    }
}

impl Connector for MockDevice {
    fn target(&self) -> String {
        "mock device".to_string()
    }

    fn open(&self) -> Result<Box<dyn PatternSink>, BridgeError> {
        self.opens.fetch_add(1, Ordering::SeqCst);

        if self.fail_open.load(Ordering::SeqCst) {
            return Err(BridgeError::NoPortFound);
        }

        Ok(Box::new(MockSink(self.clone())))
    }
}

/// Serves `payload` on `/api/status` and a failing `/api/broken`.
pub async fn serve_status(payload: Value) -> SocketAddr {
    let app = Router::new()
        .route("/api/status", get(move || async move { Json(payload) }))
        .route("/api/broken", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}
