use anyhow::Result;

use super::*;

#[test]
fn it_parses_root_as_selection() -> Result<()> {
    assert_eq!(Route::parse("/")?, Route::Selection);
    assert_eq!(Route::parse("")?, Route::Selection);
    return Ok(());
}

#[test]
fn it_parses_result_route() -> Result<()> {
    let route = Route::parse("/result/474/2020")?;
    assert_eq!(route, Route::results("474", "2020"));
    assert_eq!(route.path(), "/result/474/2020");
    return Ok(());
}

#[test]
fn it_leaves_missing_params_unresolved() -> Result<()> {
    let route = Route::parse("/result/474")?;
    let Route::Results(params) = route.clone() else {
        panic!("expected a results route");
    };

    assert_eq!(params.make_id.as_deref(), Some("474"));
    assert_eq!(params.year, None);
    assert_eq!(params.resolved(), None);
    assert_eq!(route.path(), "/result/474");
    return Ok(());
}

#[test]
fn it_treats_empty_params_as_unresolved() {
    let params = RouteParams {
        make_id: Some("".to_string()),
        year: Some("2020".to_string()),
    };
    assert_eq!(params.resolved(), None);
    assert_eq!(RouteParams::new("1", "2020").resolved(), Some(("1", "2020")));
}

#[test]
fn it_rejects_unknown_routes() {
    assert_eq!(
        Route::parse("/makes"),
        Err(RouteError::Unknown("/makes".to_string()))
    );
    assert!(Route::parse("/result/1/2020/extra").is_err());
}

#[test]
fn it_rejects_unsafe_segments() {
    assert_eq!(
        Route::parse("/result/1?x=2/2020"),
        Err(RouteError::UnsafeSegment("1?x=2".to_string()))
    );
    assert!(!is_path_safe("a b"));
    assert!(!is_path_safe(""));
    assert!(is_path_safe("474"));
}

#[test]
fn it_serializes_path_params_in_camel_case() -> Result<()> {
    let params = PathParams {
        make_id: "474".to_string(),
        year: "2020".to_string(),
    };

    assert_eq!(
        serde_json::to_string(&params)?,
        r#"{"makeId":"474","year":"2020"}"#
    );
    assert_eq!(params.route(), Route::results("474", "2020"));
    return Ok(());
}

#[test]
fn it_keeps_params_positional_when_a_segment_is_empty() -> Result<()> {
    let route = Route::parse("/result//2020")?;
    let Route::Results(params) = route.clone() else {
        panic!("expected a results route");
    };

    assert_eq!(params.make_id.as_deref(), Some(""));
    assert_eq!(params.year.as_deref(), Some("2020"));
    assert_eq!(params.resolved(), None);
    assert_eq!(route.path(), "/result//2020");
    return Ok(());
}

#[test]
fn it_ignores_one_trailing_slash() -> Result<()> {
    assert_eq!(Route::parse("/result/474/2020/")?, Route::results("474", "2020"));
    assert_eq!(Route::parse("result/474")?.path(), "/result/474");
    return Ok(());
}
