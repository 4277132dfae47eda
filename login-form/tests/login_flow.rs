//! In-process coverage for the full login flow.

use actix_session::storage::CookieSessionStore;
use actix_session::SessionMiddleware;
use actix_web::cookie::{Cookie, Key};
use actix_web::http::{header, StatusCode};
use actix_web::{test, App};

use login_form::http::{show_home, show_login_form, submit_login_form};
use web_common::Trace;

fn app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let session = SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".into())
        .cookie_secure(false)
        .build();

    App::new()
        .wrap(Trace)
        .service(
            actix_web::web::scope("")
                .wrap(session)
                .service(show_login_form)
                .service(submit_login_form)
                .service(show_home),
        )
}

fn form_request(login: &str, password: &str) -> actix_web::test::TestRequest {
    test::TestRequest::post()
        .uri("/login")
        .set_form([("login", login), ("password", password)])
}

#[actix_web::test]
async fn get_login_renders_form() {
    let app = test::init_service(app()).await;

    let res = test::call_service(&app, test::TestRequest::get().uri("/login").to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = String::from_utf8(test::read_body(res).await.to_vec()).expect("utf-8 body");
    assert!(body.contains("name=\"login\""));
    assert!(!body.contains("invalid login or password!"));
}

#[actix_web::test]
async fn wrong_credentials_re_render_form_with_error() {
    let app = test::init_service(app()).await;

    let res = test::call_service(&app, form_request("admin", "wrong").to_request()).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body = String::from_utf8(test::read_body(res).await.to_vec()).expect("utf-8 body");
    assert!(body.contains("invalid login or password!"));
}

#[actix_web::test]
async fn blank_login_is_a_bad_request() {
    let app = test::init_service(app()).await;

    let res = test::call_service(&app, form_request("   ", "123").to_request()).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = String::from_utf8(test::read_body(res).await.to_vec()).expect("utf-8 body");
    assert!(body.contains("invalid login or password!"));
}

#[actix_web::test]
async fn successful_login_redirects_home_with_session() {
    let app = test::init_service(app()).await;

    let res = test::call_service(&app, form_request("admin", "123").to_request()).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        res.headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok()),
        Some("/home")
    );
    let cookie: Cookie<'_> = res
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("session cookie set")
        .into_owned();

    let home = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/home")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(home.status(), StatusCode::OK);
    let body = String::from_utf8(test::read_body(home).await.to_vec()).expect("utf-8 body");
    assert!(body.contains("Welcome, admin!"));
}

#[actix_web::test]
async fn home_without_session_greets_anonymously() {
    let app = test::init_service(app()).await;

    let res = test::call_service(&app, test::TestRequest::get().uri("/home").to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = String::from_utf8(test::read_body(res).await.to_vec()).expect("utf-8 body");
    assert!(body.contains("Welcome!"));
}
