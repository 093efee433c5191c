use serde_json::json;

use crate::common::{TestApp, routes};

mod signup {
    use super::*;

    #[tokio::test]
    async fn new_user_can_sign_up_with_valid_details() {
        let app = TestApp::spawn().await;

        let res = app
            .post_without_token(
                routes::SIGNUP,
                &json!({"name": "Alice", "email": "alice@example.com", "password": "securepass"}),
            )
            .await;

        assert_eq!(res.status, 201);
        assert!(res.body["id"].is_number());
        assert_eq!(res.body["name"], "Alice");
        assert_eq!(res.body["email"], "alice@example.com");
        assert!(
            res.body.get("password").is_none(),
            "password hash must not leak: {}",
            res.text
        );
    }

    #[tokio::test]
    async fn cannot_sign_up_with_an_already_registered_email() {
        let app = TestApp::spawn().await;
        let body = json!({"name": "Alice", "email": "alice@example.com", "password": "securepass"});

        let first = app.post_without_token(routes::SIGNUP, &body).await;
        assert_eq!(first.status, 201, "First signup failed: {}", first.text);

        let res = app.post_without_token(routes::SIGNUP, &body).await;

        assert_eq!(res.status, 409);
        assert_eq!(res.body["code"], "EMAIL_TAKEN");
    }

    #[tokio::test]
    async fn email_uniqueness_ignores_case() {
        let app = TestApp::spawn().await;

        let first = app
            .post_without_token(
                routes::SIGNUP,
                &json!({"name": "Alice", "email": "Alice@Example.com", "password": "securepass"}),
            )
            .await;
        assert_eq!(first.status, 201);

        let res = app
            .post_without_token(
                routes::SIGNUP,
                &json!({"name": "Impostor", "email": "alice@example.com", "password": "securepass"}),
            )
            .await;

        assert_eq!(res.status, 409);
        assert_eq!(res.body["code"], "EMAIL_TAKEN");
    }

    #[tokio::test]
    async fn cannot_sign_up_with_a_password_that_is_too_short() {
        let app = TestApp::spawn().await;

        let res = app
            .post_without_token(
                routes::SIGNUP,
                &json!({"name": "Alice", "email": "alice@example.com", "password": "short"}),
            )
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn cannot_sign_up_with_an_implausible_email() {
        let app = TestApp::spawn().await;

        for email in ["not-an-email", "@example.com", "alice@", "alice@nodot"] {
            let res = app
                .post_without_token(
                    routes::SIGNUP,
                    &json!({"name": "Alice", "email": email, "password": "securepass"}),
                )
                .await;

            assert_eq!(res.status, 400, "email {:?} should be rejected", email);
            assert_eq!(res.body["code"], "VALIDATION_ERROR");
        }
    }

    #[tokio::test]
    async fn cannot_sign_up_with_an_empty_name() {
        let app = TestApp::spawn().await;

        let res = app
            .post_without_token(
                routes::SIGNUP,
                &json!({"name": "   ", "email": "alice@example.com", "password": "securepass"}),
            )
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }
}

mod login {
    use super::*;

    #[tokio::test]
    async fn login_returns_a_token_and_the_user_profile() {
        let app = TestApp::spawn().await;
        app.post_without_token(
            routes::SIGNUP,
            &json!({"name": "Alice", "email": "alice@example.com", "password": "securepass"}),
        )
        .await;

        let res = app
            .post_without_token(
                routes::LOGIN,
                &json!({"email": "alice@example.com", "password": "securepass"}),
            )
            .await;

        assert_eq!(res.status, 200);
        assert!(res.body["token"].is_string());
        assert_eq!(res.body["user"]["email"], "alice@example.com");
        assert_eq!(res.body["user"]["name"], "Alice");
    }

    #[tokio::test]
    async fn login_accepts_any_email_casing() {
        let app = TestApp::spawn().await;
        app.post_without_token(
            routes::SIGNUP,
            &json!({"name": "Alice", "email": "alice@example.com", "password": "securepass"}),
        )
        .await;

        let res = app
            .post_without_token(
                routes::LOGIN,
                &json!({"email": "ALICE@example.com", "password": "securepass"}),
            )
            .await;

        assert_eq!(res.status, 200, "Login failed: {}", res.text);
    }

    #[tokio::test]
    async fn cannot_log_in_with_the_wrong_password() {
        let app = TestApp::spawn().await;
        app.post_without_token(
            routes::SIGNUP,
            &json!({"name": "Alice", "email": "alice@example.com", "password": "securepass"}),
        )
        .await;

        let res = app
            .post_without_token(
                routes::LOGIN,
                &json!({"email": "alice@example.com", "password": "wrong-password"}),
            )
            .await;

        assert_eq!(res.status, 401);
        assert_eq!(res.body["code"], "INVALID_CREDENTIALS");
    }

    #[tokio::test]
    async fn unknown_email_gets_the_same_error_as_a_wrong_password() {
        let app = TestApp::spawn().await;

        let res = app
            .post_without_token(
                routes::LOGIN,
                &json!({"email": "nobody@example.com", "password": "securepass"}),
            )
            .await;

        assert_eq!(res.status, 401);
        assert_eq!(res.body["code"], "INVALID_CREDENTIALS");
    }
}

mod me {
    use super::*;

    #[tokio::test]
    async fn me_returns_the_current_user() {
        let app = TestApp::spawn().await;
        let (token, user_id) = app
            .create_authenticated_user("Alice", "alice@example.com")
            .await;

        let res = app.get_with_token(routes::ME, &token).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.id(), user_id);
        assert_eq!(res.body["email"], "alice@example.com");
    }

    #[tokio::test]
    async fn me_without_a_token_is_rejected() {
        let app = TestApp::spawn().await;

        let res = app.get_without_token(routes::ME).await;

        assert_eq!(res.status, 401);
        assert_eq!(res.body["code"], "TOKEN_MISSING");
    }

    #[tokio::test]
    async fn me_with_a_garbage_token_is_rejected() {
        let app = TestApp::spawn().await;

        let res = app.get_with_token(routes::ME, "not-a-jwt").await;

        assert_eq!(res.status, 401);
        assert_eq!(res.body["code"], "TOKEN_INVALID");
    }

    #[tokio::test]
    async fn tampered_tokens_are_rejected() {
        let app = TestApp::spawn().await;
        let (token, _) = app
            .create_authenticated_user("Alice", "alice@example.com")
            .await;

        // Flip the last signature character.
        let mut forged = token;
        let tail = if forged.ends_with('x') { 'y' } else { 'x' };
        forged.pop();
        forged.push(tail);

        let res = app.get_with_token(routes::ME, &forged).await;

        assert_eq!(res.status, 401);
        assert_eq!(res.body["code"], "TOKEN_INVALID");
    }
}
