//! Defines the endpoint for the record entry form.

use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
// Must use axum_extra's Form since that parses an empty string as None.
use axum_extra::extract::{Form, PrivateCookieJar};

use crate::{
    AppState, Error,
    alert::{Alert, set_notice},
    endpoints,
    record::{RecordForm, insert_record},
};

/// A route handler for the entry form, always redirects back to the landing page.
///
/// A valid form is stored and a success notice is set. An invalid form stores
/// nothing and sets an error notice naming the offending fields. Storage
/// failures are returned as errors and render the internal server error page.
pub async fn submit_record_endpoint(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
    Form(form): Form<RecordForm>,
) -> Result<Response, Error> {
    let record = match form.validate() {
        Ok(record) => record,
        Err(error) => {
            tracing::info!("Rejected record submission: {error}");

            let jar = set_notice(jar, &validation_alert(&error))?;

            return Ok((jar, Redirect::to(endpoints::ROOT)).into_response());
        }
    };

    let record = {
        let connection = state
            .db_connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)?;

        insert_record(record, &connection)
            .inspect_err(|error| tracing::error!("could not create record: {error}"))?
    };

    tracing::info!("Saved transportation record {}", record.id);

    let jar = set_notice(
        jar,
        &Alert::Success {
            message: "Transportation record saved.".to_owned(),
            details: "".to_owned(),
        },
    )?;

    Ok((jar, Redirect::to(endpoints::ROOT)).into_response())
}

fn validation_alert(error: &Error) -> Alert {
    match error {
        Error::MissingFields(fields) => Alert::Error {
            message: "Please fill in all required fields.".to_owned(),
            details: format!("Missing: {}", fields.join(", ")),
        },
        Error::InvalidNumber(fields) => Alert::Error {
            message: "Distance and cost must be numbers.".to_owned(),
            details: format!("Not a number: {}", fields.join(", ")),
        },
        other => Alert::Error {
            message: "Could not save the record.".to_owned(),
            details: other.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        Router,
        http::{StatusCode, header::LOCATION},
        routing::{get, post},
    };
    use axum_test::TestServer;
    use rusqlite::Connection;

    use crate::{
        AppState, endpoints,
        record::{
            RecordForm, count_records, get_index_page, list_all_records, submit_record_endpoint,
        },
    };

    fn get_test_state() -> AppState {
        let connection =
            Connection::open_in_memory().expect("Could not open in-memory SQLite database");

        AppState::new(connection, "42").expect("Could not create app state")
    }

    fn get_test_server(state: AppState) -> TestServer {
        let app = Router::new()
            .route(endpoints::ROOT, get(get_index_page))
            .route(endpoints::SUBMIT, post(submit_record_endpoint))
            .with_state(state);

        TestServer::try_new(app).expect("Could not create test server.")
    }

    fn alice_form() -> RecordForm {
        RecordForm {
            user_name: Some("Alice".to_owned()),
            travel_date: Some("2024-01-05".to_owned()),
            mode: Some("bus".to_owned()),
            origin: Some("A".to_owned()),
            destination: Some("B".to_owned()),
            distance_km: Some("12.5".to_owned()),
            cost: Some("3.00".to_owned()),
            notes: None,
        }
    }

    fn count(state: &AppState) -> u32 {
        count_records(&state.db_connection.lock().unwrap()).unwrap()
    }

    #[tokio::test]
    async fn valid_submission_stores_record() {
        let state = get_test_state();
        let server = get_test_server(state.clone());

        let response = server.post(endpoints::SUBMIT).form(&alice_form()).await;

        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header(LOCATION), endpoints::ROOT);

        let records = list_all_records(&state.db_connection.lock().unwrap()).unwrap();
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.user_name, "Alice");
        assert_eq!(record.travel_date, "2024-01-05");
        assert_eq!(record.mode, "bus");
        assert_eq!(record.origin, "A");
        assert_eq!(record.destination, "B");
        assert_eq!(record.distance_km, 12.5);
        assert_eq!(record.cost, 3.0);
        assert_eq!(record.notes, "");
    }

    #[tokio::test]
    async fn success_notice_is_shown_once() {
        let state = get_test_state();
        let server = get_test_server(state);

        let response = server.post(endpoints::SUBMIT).form(&alice_form()).await;
        let notice_cookie = response.cookie("notice");

        let page = server
            .get(endpoints::ROOT)
            .add_cookie(notice_cookie)
            .await
            .text();

        assert!(
            page.contains("Transportation record saved."),
            "notice missing from page"
        );

        let page = server.get(endpoints::ROOT).await.text();

        assert!(!page.contains("Transportation record saved."));
    }

    #[tokio::test]
    async fn missing_field_stores_nothing() {
        let state = get_test_state();
        let server = get_test_server(state.clone());
        let form = RecordForm {
            origin: None,
            ..alice_form()
        };

        let response = server.post(endpoints::SUBMIT).form(&form).await;

        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header(LOCATION), endpoints::ROOT);
        assert_eq!(count(&state), 0);

        let page = server
            .get(endpoints::ROOT)
            .add_cookie(response.cookie("notice"))
            .await
            .text();
        assert!(page.contains("Please fill in all required fields."));
        assert!(page.contains("Missing: origin"));
    }

    #[tokio::test]
    async fn blank_fields_store_nothing() {
        let state = get_test_state();
        let server = get_test_server(state.clone());

        let response = server
            .post(endpoints::SUBMIT)
            .form(&[
                ("user_name", "   "),
                ("travel_date", ""),
                ("mode", "bus"),
                ("origin", "A"),
                ("destination", "B"),
                ("distance_km", "1"),
                ("cost", "1"),
            ])
            .await;

        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(count(&state), 0);
    }

    #[tokio::test]
    async fn empty_body_stores_nothing() {
        let state = get_test_state();
        let server = get_test_server(state.clone());

        let response = server
            .post(endpoints::SUBMIT)
            .content_type("application/x-www-form-urlencoded")
            .await;

        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(count(&state), 0);
    }

    #[tokio::test]
    async fn non_numeric_cost_stores_nothing() {
        let state = get_test_state();
        let server = get_test_server(state.clone());
        let form = RecordForm {
            cost: Some("abc".to_owned()),
            ..alice_form()
        };

        let response = server.post(endpoints::SUBMIT).form(&form).await;

        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(count(&state), 0);

        let page = server
            .get(endpoints::ROOT)
            .add_cookie(response.cookie("notice"))
            .await
            .text();
        assert!(page.contains("Not a number: cost"));
    }

    #[tokio::test]
    async fn submitted_record_is_listed_first() {
        let state = get_test_state();
        let server = get_test_server(state.clone());
        let earlier = RecordForm {
            user_name: Some("Bob".to_owned()),
            ..alice_form()
        };
        server.post(endpoints::SUBMIT).form(&earlier).await;

        server.post(endpoints::SUBMIT).form(&alice_form()).await;

        let records = list_all_records(&state.db_connection.lock().unwrap()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].user_name, "Alice");
        assert_eq!(records[1].user_name, "Bob");
    }
}
