use farm_stack_basic::config::{ConfigService, Profile, ServerConfig};
use farm_stack_basic::lifecycle::Application;
use farm_stack_basic::modules::AppModule;
use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

async fn raw_request(addr: SocketAddr, request: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(request.as_bytes()).await.unwrap();
    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.unwrap();
    String::from_utf8(response).unwrap()
}

#[tokio::test]
async fn serves_over_tcp_and_shuts_down_gracefully() {
    let config = ServerConfig::for_profile(Profile::Prod, &ConfigService::new()).unwrap();
    let app = Application::builder()
        .config(config)
        .build::<AppModule>()
        .unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let server = tokio::spawn(app.run(listener, async move {
        let _ = shutdown_rx.await;
    }));

    let response = raw_request(
        addr,
        "GET / HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
    )
    .await;
    assert!(response.starts_with("HTTP/1.1 200 OK"), "{response}");
    assert!(response.ends_with(r#"{"message":"Hello World"}"#), "{response}");

    let body = r#"{"name":"Ada"}"#;
    let response = raw_request(
        addr,
        &format!(
            "POST /users HTTP/1.1\r\nHost: localhost\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        ),
    )
    .await;
    assert!(response.starts_with("HTTP/1.1 201 Created"), "{response}");
    assert!(
        response.ends_with(r#"{"message":"Ada is created successfully"}"#),
        "{response}"
    );

    shutdown_tx.send(()).unwrap();
    server.await.unwrap().unwrap();
}
