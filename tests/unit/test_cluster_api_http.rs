use kube_access::models::{ApiError, ClusterConfig};
use kube_access::services::ClusterApi;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

// ============================================================================
// ClusterApi HTTP状态码映射测试
//
// 用本地TCP监听器模拟集群API,每个监听器只应答一次请求。
// 覆盖 get_version_info 与 namespace_exists 的状态码语义,无外部网络依赖。
// ============================================================================

/// 启动一次性HTTP应答器,返回可访问的主机地址
async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        if let Ok((mut stream, _)) = listener.accept().await {
            // 读取请求头后即可应答,路径与方法不影响测试
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf).await;

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        }
    });

    format!("http://{}", addr)
}

fn api_for(host: String) -> ClusterApi {
    ClusterApi::new(ClusterConfig::new(host)).unwrap()
}

// ============================================================================
// get_version_info 测试
// ============================================================================

#[tokio::test]
async fn test_get_version_info_200返回版本信息() {
    let host = serve_once(
        "200 OK",
        r#"{"gitVersion": "v1.9.2-gke.0", "platform": "linux/amd64"}"#,
    )
    .await;
    let api = api_for(host);
    let client = api.new_client().unwrap();

    let info = api.get_version_info(&client).await.unwrap();
    assert_eq!(info.git_version, "v1.9.2-gke.0");
    assert_eq!(info.platform, "linux/amd64");
}

#[tokio::test]
async fn test_get_version_info_非200状态码报错() {
    let host = serve_once("500 Internal Server Error", "internal error").await;
    let api = api_for(host);
    let client = api.new_client().unwrap();

    let err = api.get_version_info(&client).await.unwrap_err();
    match err {
        ApiError::HttpStatusError { status, .. } => assert_eq!(status, 500),
        other => panic!("预期 HttpStatusError, 实际: {:?}", other),
    }
}

#[tokio::test]
async fn test_get_version_info_200但响应体非json报解析错误() {
    // 200响应不代表可用: 响应体不是JSON时没有可回退的版本
    let host = serve_once("200 OK", "not json at all").await;
    let api = api_for(host);
    let client = api.new_client().unwrap();

    let err = api.get_version_info(&client).await.unwrap_err();
    assert!(matches!(err, ApiError::JsonParseFailed(_)));
}

// ============================================================================
// namespace_exists 测试
// ============================================================================

#[tokio::test]
async fn test_namespace_exists_200表示存在() {
    let host = serve_once("200 OK", r#"{"kind": "Namespace"}"#).await;
    let api = api_for(host);
    let client = api.new_client().unwrap();

    assert!(api.namespace_exists(&client, "default").await.unwrap());
}

#[tokio::test]
async fn test_namespace_exists_404表示不存在() {
    let host = serve_once("404 Not Found", r#"{"kind": "Status"}"#).await;
    let api = api_for(host);
    let client = api.new_client().unwrap();

    assert!(!api.namespace_exists(&client, "missing").await.unwrap());
}

#[tokio::test]
async fn test_namespace_exists_其他状态码报错而非不存在() {
    // 认证失败不能被解释为"命名空间不存在"
    let host = serve_once("401 Unauthorized", "unauthorized").await;
    let api = api_for(host);
    let client = api.new_client().unwrap();

    let err = api
        .namespace_exists(&client, "default")
        .await
        .unwrap_err();
    match err {
        ApiError::HttpStatusError { status, .. } => assert_eq!(status, 401),
        other => panic!("预期 HttpStatusError, 实际: {:?}", other),
    }
}
