mod common;

use common::{TestApp, employee_body, order_body};
use http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn test_created_order_carries_employee() {
    let app = TestApp::new().await;
    let employee_id = app.create_employee(employee_body()).await;
    let order_id = app.create_order(order_body(employee_id)).await;

    let (status, body) = app.get(&format!("/orders?id={order_id}")).await;
    assert_eq!(status, StatusCode::OK);

    let order = &body[0];
    assert_eq!(order["id"], order_id);
    assert_eq!(order["startTime"], "2024-03-04T07:30:00Z");
    assert_eq!(order["endTime"], "2024-03-04T11:15:00Z");
    assert_eq!(order["price"], 1499.5);
    assert_eq!(order["startCity"], "Olomouc");
    assert_eq!(order["destination"], "Ostrava");
    assert_eq!(order["employeeId"], employee_id);
    assert_eq!(order["employee"]["id"], employee_id);
    assert_eq!(order["employee"]["lastName"], "Svoboda");
}

#[tokio::test]
async fn test_create_for_unknown_employee_is_rejected() {
    let app = TestApp::new().await;

    let (status, error) = app.post("/orders", order_body(77)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], 2);
    assert_eq!(error["message"], "Could not find employee with id: 77.");

    let (status, _) = app.get("/orders").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_with_missing_field_is_rejected() {
    let app = TestApp::new().await;
    let employee_id = app.create_employee(employee_body()).await;

    for field in ["startTime", "endTime", "price", "employeeId", "startCity", "destination"] {
        let mut body = order_body(employee_id);
        body.as_object_mut().unwrap().remove(field);

        let (status, error) = app.post("/orders", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "missing {field}");
        assert_eq!(error["message"], "All fields have to be filled in!");
    }

    let (status, _) = app.get("/orders").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_to_unknown_employee_changes_nothing() {
    let app = TestApp::new().await;
    let employee_id = app.create_employee(employee_body()).await;
    let order_id = app.create_order(order_body(employee_id)).await;

    let (status, error) = app
        .put(
            &format!("/orders?id={order_id}"),
            json!({ "employeeId": 500, "destination": "Zlin" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["message"], "Could not find employee with id: 500.");

    let (_, body) = app.get(&format!("/orders?id={order_id}")).await;
    assert_eq!(body[0]["employeeId"], employee_id);
    assert_eq!(body[0]["destination"], "Ostrava");
}

#[tokio::test]
async fn test_update_reassigns_employee() {
    let app = TestApp::new().await;
    let first = app.create_employee(employee_body()).await;
    let mut other = employee_body();
    other["firstName"] = json!("Lucie");
    let second = app.create_employee(other).await;
    let order_id = app.create_order(order_body(first)).await;

    let (status, _) = app
        .put(
            &format!("/orders?id={order_id}"),
            json!({ "employeeId": second, "price": 800.25 }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = app.get(&format!("/orders?id={order_id}")).await;
    assert_eq!(body[0]["employeeId"], second);
    assert_eq!(body[0]["employee"]["firstName"], "Lucie");
    assert_eq!(body[0]["price"], 800.25);
    assert_eq!(body[0]["startCity"], "Olomouc");

    let (status, _) = app.delete(&format!("/employees?id={first}")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_update_unknown_order_is_not_found() {
    let app = TestApp::new().await;

    let (status, error) = app.put("/orders?id=3", json!({ "destination": "Zlin" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], 4001);
    assert_eq!(error["message"], "Could not find order with id: 3.");

    let (status, error) = app.put("/orders", json!({ "destination": "Zlin" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["message"], "Order id has to be provided.");
}

#[tokio::test]
async fn test_delete_errors() {
    let app = TestApp::new().await;

    let (status, error) = app.delete("/orders").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["message"], "Order id has to be provided.");

    let (status, error) = app.delete("/orders?id=12").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["message"], "Order with id 12 could not be found.");
}

#[tokio::test]
async fn test_list_semantics() {
    let app = TestApp::new().await;

    let (status, _) = app.get("/orders").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let employee_id = app.create_employee(employee_body()).await;
    let first = app.create_order(order_body(employee_id)).await;
    let second = app.create_order(order_body(employee_id)).await;

    let (status, body) = app.get("/orders").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (_, body) = app.get(&format!("/orders?id={first}")).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["id"], first);

    let (status, _) = app.get(&format!("/orders?id={}", second + 10)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_order_body() {
    let app = TestApp::new().await;

    let (status, error) = app.send_raw(Method::POST, "/orders", "null").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], 6);

    let (status, error) = app
        .send_raw(Method::POST, "/orders", r#"{"price": "not a number"}"#)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], 6);
}

#[tokio::test]
async fn test_round_trip() {
    let app = TestApp::new().await;

    let employee_id = app.create_employee(employee_body()).await;
    let (_, body) = app.get(&format!("/employees?id={employee_id}")).await;
    assert_eq!(body[0]["carRegistrationNumber"], "2BC 4410");

    let (status, _) = app
        .put(
            &format!("/employees?id={employee_id}"),
            json!({ "carRegistrationNumber": "9ZZ 0001" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let (_, body) = app.get(&format!("/employees?id={employee_id}")).await;
    assert_eq!(body[0]["carRegistrationNumber"], "9ZZ 0001");

    let order_id = app.create_order(order_body(employee_id)).await;
    let (status, _) = app.delete(&format!("/employees?id={employee_id}")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.delete(&format!("/orders?id={order_id}")).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app.delete(&format!("/employees?id={employee_id}")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.get(&format!("/employees?id={employee_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_price_digits_survive_storage() {
    let app = TestApp::new().await;
    let employee_id = app.create_employee(employee_body()).await;

    let raw = format!(
        r#"{{"startTime":"2024-03-04T07:30:00Z","endTime":"2024-03-04T11:15:00Z","price":12345678901234567.89,"employeeId":{employee_id},"startCity":"Olomouc","destination":"Ostrava"}}"#
    );
    let (status, _) = app.send_raw(Method::POST, "/orders", &raw).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = app.get("/orders").await;
    assert_eq!(body[0]["price"].to_string(), "12345678901234567.89");

    let order_id = body[0]["id"].as_i64().unwrap();
    let (status, _) = app
        .send_raw(
            Method::PUT,
            &format!("/orders?id={order_id}"),
            r#"{"price":0.10}"#,
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = app.get(&format!("/orders?id={order_id}")).await;
    assert_eq!(body[0]["price"].to_string(), "0.10");
}
