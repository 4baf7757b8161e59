mod domain;

use crate::GloboDnsClient;
use wiremock::MockServer;

fn client_for(server: &MockServer) -> GloboDnsClient {
    GloboDnsClient::new(&server.uri()).expect("client")
}

async fn request_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .map(|requests| requests.len())
        .unwrap_or_default()
}
