use anyhow::Result;
use mockito::Matcher;

use super::*;

#[tokio::test]
async fn it_gets_makes_in_server_order() -> Result<()> {
    let body = serde_json::json!({
        "Count": 3,
        "Message": "Response returned successfully",
        "SearchCriteria": "Vehicle Type: car",
        "Results": [
            {"MakeId": 474, "MakeName": "HONDA", "VehicleTypeId": 2, "VehicleTypeName": "Passenger Car"},
            {"MakeId": 441, "MakeName": "TESLA", "VehicleTypeId": 2, "VehicleTypeName": "Passenger Car"},
            {"MakeId": 448, "MakeName": "TOYOTA", "VehicleTypeId": 2, "VehicleTypeName": "Passenger Car"}
        ]
    });

    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/GetMakesForVehicleType/car")
        .match_query(Matcher::UrlEncoded("format".into(), "json".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let client = VpicClient::new(&server.url());
    let makes = client.get_makes("car").await?;
    mock.assert_async().await;

    assert_eq!(
        makes,
        vec![
            Make::new("474", "HONDA"),
            Make::new("441", "TESLA"),
            Make::new("448", "TOYOTA"),
        ]
    );
    return Ok(());
}

#[tokio::test]
async fn it_gets_models_for_make_and_year() -> Result<()> {
    let body = serde_json::json!({
        "Count": 2,
        "Message": "Response returned successfully",
        "Results": [
            {"Make_ID": 100, "Make_Name": "HONDA", "Model_ID": 1, "Model_Name": "Civic"},
            {"Make_ID": 100, "Make_Name": "HONDA", "Model_ID": "2", "Model_Name": "Accord"}
        ]
    });

    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/GetModelsForMakeIdYear/makeId/100/modelyear/2020")
        .match_query(Matcher::UrlEncoded("format".into(), "json".into()))
        .with_status(200)
        .with_body(body.to_string())
        .create_async()
        .await;

    let client = VpicClient::new(&format!("{}/", server.url()));
    let models = client.get_models("100", "2020").await?;
    mock.assert_async().await;

    assert_eq!(
        models,
        vec![
            VehicleModel::new("1", "Civic"),
            VehicleModel::new("2", "Accord"),
        ]
    );
    return Ok(());
}

#[tokio::test]
async fn it_reads_missing_results_as_empty() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/GetModelsForMakeIdYear/makeId/100/modelyear/2015")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"Count":0,"Message":"No data"}"#)
        .create_async()
        .await;

    let client = VpicClient::new(&server.url());
    assert!(client.get_models("100", "2015").await?.is_empty());
    return Ok(());
}

#[tokio::test]
async fn it_reads_null_makes_as_empty() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/GetMakesForVehicleType/trailer")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"Count":0,"Message":"No data","SearchCriteria":null,"Results":null}"#)
        .create_async()
        .await;

    let client = VpicClient::new(&server.url());
    assert!(client.get_makes("trailer").await?.is_empty());
    return Ok(());
}

#[tokio::test]
async fn it_fails_on_error_status() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/GetMakesForVehicleType/car")
        .match_query(Matcher::Any)
        .with_status(503)
        .create_async()
        .await;

    let client = VpicClient::new(&server.url());
    let err = client.get_makes("car").await.unwrap_err();

    assert!(matches!(err, VpicError::Status { status: 503, .. }));
}

#[tokio::test]
async fn it_fails_on_unexpected_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/GetModelsForMakeIdYear/makeId/100/modelyear/2020")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let client = VpicClient::new(&server.url());
    let err = client.get_models("100", "2020").await.unwrap_err();

    assert!(matches!(err, VpicError::Decode { .. }));
}

#[tokio::test]
async fn it_fails_when_unreachable() {
    // Port 9 (discard) is not listening on loopback in test environments.
    let client = VpicClient::new("http://127.0.0.1:9/api/vehicles");
    let err = client.get_makes("car").await.unwrap_err();

    assert!(matches!(err, VpicError::Request { .. }));
}

#[test]
fn it_defaults_to_production_endpoint() {
    assert_eq!(
        VpicClient::default().url(),
        "https://vpic.nhtsa.dot.gov/api/vehicles"
    );
}
