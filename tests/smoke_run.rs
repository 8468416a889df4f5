//! Full single-user walk against a mock javatheque server.

use javatheque_load::config::TargetConfig;
use javatheque_load::domain::TestCredentials;
use javatheque_load::session::{LoginOutcome, LogoutOutcome, RegisterOutcome};
use javatheque_load::smoke;
use javatheque_load::tasks::{TaskKind, TaskOutcome};
use javatheque_load::transport::HttpTransport;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LIBRARY_PAGE: &str = r#"
<table>
  <tr><td>Avatar</td><td><form action="film/show"><input type="hidden" name="id" value="19995"/></form></td></tr>
  <tr><td>Matrix</td><td><form action="film/show"><input type="hidden" name="id" value="603"/></form></td></tr>
</table>
"#;

async fn mount_application(server: &MockServer, email: &str) {
    // Unknown account on the first attempt, known afterwards.
    Mock::given(method("POST"))
        .and(path("/javatheque/login"))
        .respond_with(ResponseTemplate::new(404))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path("/javatheque/login"))
        .and(body_string_contains(email))
        .respond_with(ResponseTemplate::new(200))
        .with_priority(2)
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path("/javatheque/register"))
        .and(body_string_contains(email))
        .and(body_string_contains("firstname=Test-5a5a5a5a"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/javatheque/logout"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/javatheque/library"))
        .respond_with(ResponseTemplate::new(200).set_body_string(LIBRARY_PAGE))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/javatheque/film/search"))
        .respond_with(ResponseTemplate::new(200))
        .mount(server)
        .await;
    for endpoint in ["/javatheque/film/add", "/javatheque/film/update"] {
        Mock::given(method("POST"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(200))
            .mount(server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path("/javatheque/film/show"))
        .respond_with(ResponseTemplate::new(200))
        .mount(server)
        .await;
}

fn transport(server: &MockServer) -> HttpTransport {
    HttpTransport::new(&TargetConfig {
        host: format!("{}/javatheque", server.uri()),
        ..TargetConfig::default()
    })
    .unwrap()
}

#[tokio::test]
async fn test_register_then_relogin_with_same_credentials() {
    let server = MockServer::start().await;
    mount_application(&server, "testuser-5a5a5a5a%40test.com").await;

    let report = smoke::run(transport(&server), TestCredentials::for_id("5a5a5a5a"))
        .await
        .unwrap();

    assert_eq!(
        report.first_login,
        LoginOutcome::Registration(RegisterOutcome::Registered)
    );
    assert_eq!(report.relogin, Some(LoginOutcome::LoggedIn));
    assert_eq!(report.logout, LogoutOutcome::LoggedOut);
    assert!(report
        .tasks
        .iter()
        .all(|(_, outcome)| *outcome == TaskOutcome::Passed));
    assert_eq!(report.tasks.len(), 5);
    assert_eq!(report.tasks[2].0, TaskKind::ViewLibrary);
    assert!(report.passed());

    assert_eq!(report.stats.total_failures(), 1, "{}", report.stats);
    assert_eq!(report.stats.get("/login").unwrap().success, 1);
    assert_eq!(report.stats.get("/register").unwrap().success, 1);
}

#[tokio::test]
async fn test_rejected_registration_fails_the_walk() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/register"))
        .respond_with(ResponseTemplate::new(400).set_body_string("email already used"))
        .expect(1)
        .mount(&server)
        .await;

    let transport = HttpTransport::new(&TargetConfig {
        host: server.uri(),
        ..TargetConfig::default()
    })
    .unwrap();
    let report = smoke::run(transport, TestCredentials::for_id("40040040"))
        .await
        .unwrap();

    assert_eq!(
        report.first_login,
        LoginOutcome::Registration(RegisterOutcome::InvalidData)
    );
    assert_eq!(report.relogin, None);
    assert!(report
        .tasks
        .iter()
        .all(|(_, outcome)| *outcome == TaskOutcome::Skipped));
    assert_eq!(report.logout, LogoutOutcome::NotLoggedIn);
    assert!(!report.passed());
    assert_eq!(
        report.stats.get("/register").unwrap().failure_messages,
        ["Invalid registration data"]
    );
}
